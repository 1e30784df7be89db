use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{CoinRecord, Metric, MetricPoint};
use crate::models::MetricSeries;

/// All coins' records, parsed once at startup and immutable afterwards.
///
/// Keys are coin identifiers; each value is date-ascending (the loader
/// sorts on the way in, bisection and line drawing both depend on it).
#[derive(Debug, Clone, Default)]
pub struct CoinDataset {
    coins: BTreeMap<String, Vec<CoinRecord>>,
}

impl CoinDataset {
    pub fn new(coins: BTreeMap<String, Vec<CoinRecord>>) -> Self {
        Self { coins }
    }

    /// Coin identifiers in sorted order (BTreeMap keys are already ordered).
    pub fn coin_names(&self) -> impl Iterator<Item = &str> {
        self.coins.keys().map(String::as_str)
    }

    pub fn contains_coin(&self, coin: &str) -> bool {
        self.coins.contains_key(coin)
    }

    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }

    pub fn record_count(&self) -> usize {
        self.coins.values().map(Vec::len).sum()
    }

    pub fn records(&self, coin: &str) -> Option<&[CoinRecord]> {
        self.coins.get(coin).map(Vec::as_slice)
    }

    /// Full date span across every coin, for the side panel summary.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut span: Option<(NaiveDate, NaiveDate)> = None;
        for records in self.coins.values() {
            let (Some(first), Some(last)) = (records.first(), records.last()) else {
                continue;
            };
            span = Some(match span {
                Some((lo, hi)) => (lo.min(first.date), hi.max(last.date)),
                None => (first.date, last.date),
            });
        }
        span
    }

    /// Derive the drawable series for one coin/metric selection.
    ///
    /// Records lacking the selected metric are filtered out. Zeros count as
    /// lacking: the early rows of several coins carry placeholder "0"
    /// volumes, and a line that dives to zero for them is noise, not data.
    pub fn metric_series(&self, coin: &str, metric: Metric) -> MetricSeries {
        let points: Vec<MetricPoint> = self
            .coins
            .get(coin)
            .map(|records| {
                records
                    .iter()
                    .filter_map(|r| {
                        r.metric(metric)
                            .filter(|v| v.is_finite() && *v != 0.0)
                            .map(|value| MetricPoint {
                                date: r.date,
                                value,
                            })
                    })
                    .collect()
            })
            .unwrap_or_default();

        MetricSeries::new(coin.to_string(), metric, points)
    }
}
