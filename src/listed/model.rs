use serde::Serialize;

/// Static listing attributes for one security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingInfo {
    /// Security code, as reported by the provider.
    pub code: String,
    /// Company name (Japanese).
    pub company_name: String,
    /// Company name (English), when the provider reports one.
    pub company_name_english: Option<String>,
    /// Market segment code.
    pub market_code: Option<String>,
}
