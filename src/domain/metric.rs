use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The numeric dataset fields a series can be drawn from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Metric {
    #[default]
    #[strum(serialize = "Price (USD)")]
    PriceUsd,
    #[strum(serialize = "Market Cap")]
    MarketCap,
    #[strum(serialize = "24h Volume")]
    Vol24h,
}

impl Metric {
    /// Field key in the raw dataset file.
    pub fn json_key(&self) -> &'static str {
        match self {
            Metric::PriceUsd => "price_usd",
            Metric::MarketCap => "market_cap",
            Metric::Vol24h => "24h_vol",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::PriceUsd => "Price (USD)",
            Metric::MarketCap => "Market Capitalization (USD)",
            Metric::Vol24h => "24 Hour Trading Volume (USD)",
        }
    }
}
