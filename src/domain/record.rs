use chrono::NaiveDate;

use crate::domain::Metric;

/// One raw dataset entry for a coin.
///
/// The numeric fields are optional: the source file mixes numbers, numeric
/// strings and nulls, and a value that fails coercion is simply absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinRecord {
    pub date: NaiveDate,
    pub vol_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub price_usd: Option<f64>,
}

impl CoinRecord {
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::PriceUsd => self.price_usd,
            Metric::MarketCap => self.market_cap,
            Metric::Vol24h => self.vol_24h,
        }
    }
}

/// Per-draw record: the selected metric's value at a date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricPoint {
    pub date: NaiveDate,
    pub value: f64,
}
