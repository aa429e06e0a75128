use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

#[derive(Deserialize)]
pub(crate) struct InfoEnvelope {
    pub(crate) info: Option<Vec<InfoNode>>,
}

#[derive(Deserialize)]
pub(crate) struct InfoNode {
    #[serde(rename = "Code")]
    pub(crate) code: Option<String>,
    #[serde(rename = "CompanyName")]
    pub(crate) company_name: Option<String>,
    #[serde(rename = "CompanyNameEnglish")]
    pub(crate) company_name_english: Option<String>,
    #[serde(rename = "MarketCode")]
    pub(crate) market_code: Option<String>,
}
