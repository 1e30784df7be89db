//! Dataset and chart-update configuration

pub struct DatasetConfig {
    /// Default dataset location, overridable with --data
    pub default_path: &'static str,
    /// Date format of the raw records (day/month/year, no zero padding)
    pub date_format: &'static str,
    /// Padding factor applied to the y-domain as min / factor and max * factor
    pub domain_padding: f64,
    /// Duration of the axis + line transition in seconds
    pub transition_secs: f64,
}

pub const DATASET: DatasetConfig = DatasetConfig {
    default_path: "data/coins.json",
    date_format: "%d/%m/%Y",

    // 0.5% breathing room so the line never touches the plot edge
    domain_padding: 1.005,

    transition_secs: 0.5,
};
