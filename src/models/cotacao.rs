use serde::{Deserialize, Serialize};

/// One USD-BRL exchange-rate snapshot as returned by awesomeapi.
///
/// Every field is kept as text exactly as the upstream emits it, including
/// the numeric ones. Nothing downstream does arithmetic on a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Wire envelope of `GET /json/last/USD-BRL`.
#[derive(Debug, Clone, Deserialize)]
pub struct AwesomeApiResponse {
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

/// Response contract of `GET /cotacao`: the bid value only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    pub bid: String,
}
