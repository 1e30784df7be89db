mod metric;
mod record;

pub use metric::Metric;
pub use record::{CoinRecord, MetricPoint};
