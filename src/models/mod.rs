mod dataset;
mod series;

pub use dataset::CoinDataset;
pub use series::MetricSeries;
