use eframe::egui::{Context, Visuals};
use itertools::Itertools;

use crate::ui::ui_config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Axis tick shorthand: thousands collapse to `12k`, everything below
/// keeps plain decimals so sub-dollar prices stay readable.
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1000.0 {
        format!("{}k", (value / 1000.0).trunc() as i64)
    } else if abs >= 1.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Value readout for the hover label and summary rows.
pub fn format_metric_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else if abs >= 1000.0 {
        format!("${:.1}k", value / 1e3)
    } else if abs >= 1.0 {
        format!("${:.2}", value)
    } else {
        format!("${:.6}", value)
    }
}

/// Dropdown label for a raw coin key, e.g. `bitcoin_cash` -> `Bitcoin Cash`.
pub fn display_coin_name(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_keys_become_display_names() {
        assert_eq!(display_coin_name("bitcoin"), "Bitcoin");
        assert_eq!(display_coin_name("bitcoin_cash"), "Bitcoin Cash");
        assert_eq!(display_coin_name(""), "");
    }

    #[test]
    fn axis_values_use_thousands_shorthand() {
        assert_eq!(format_axis_value(12_500.0), "12k");
        assert_eq!(format_axis_value(1000.0), "1k");
        assert_eq!(format_axis_value(420.0), "420");
        assert_eq!(format_axis_value(0.0042), "0.0042");
    }

    #[test]
    fn metric_values_scale_their_units() {
        assert_eq!(format_metric_value(2_340_000_000.0), "$2.34B");
        assert_eq!(format_metric_value(21_560_000.0), "$21.56M");
        assert_eq!(format_metric_value(98_000.0), "$98.0k");
        assert_eq!(format_metric_value(113.9), "$113.90");
        assert_eq!(format_metric_value(0.004), "$0.004000");
    }
}
