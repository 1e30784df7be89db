/// All user-facing strings in one place.
pub struct UiText {
    // --- Loading / error screens ---
    pub loading_title: &'static str,
    pub loading_hint: &'static str,
    pub failed_title: &'static str,
    pub failed_hint: &'static str,

    // --- Control panel ---
    pub panel_heading: &'static str,
    pub coin_label: &'static str,
    pub metric_label: &'static str,
    pub summary_heading: &'static str,
    pub label_coins: &'static str,
    pub label_records: &'static str,
    pub label_points: &'static str,
    pub label_span: &'static str,

    // --- Chart ---
    pub x_axis_label: &'static str,
    pub empty_series_msg: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    loading_title: "CoinStats",
    loading_hint: "Loading coin statistics...",
    failed_title: "Could not load the dataset",
    failed_hint: "Check the --data path and the file contents, then restart.",

    panel_heading: "CoinStats",
    coin_label: "Coin",
    metric_label: "Metric",
    summary_heading: "Dataset",
    label_coins: "Coins",
    label_records: "Records",
    label_points: "Points in view",
    label_span: "Span",

    x_axis_label: "Time",
    empty_series_msg: "No data for this coin/metric",
};
