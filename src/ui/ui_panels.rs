use eframe::egui::{ComboBox, Grid, RichText, Ui};
use strum::IntoEnumIterator;

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Metric;
use crate::models::{CoinDataset, MetricSeries};
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::display_coin_name;
use crate::utils::TimeUtils;

fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(text).strong().color(UI_CONFIG.colors.heading));
    ui.separator();
}

/// The two selection controls. Returns true when either changed this frame;
/// that is the chart's control-change event.
pub fn render_controls(
    ui: &mut Ui,
    dataset: &CoinDataset,
    selected_coin: &mut String,
    selected_metric: &mut Metric,
) -> bool {
    let mut changed = false;

    section_heading(ui, UI_TEXT.panel_heading);

    Grid::new("selection_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(UI_TEXT.coin_label);
            ComboBox::from_id_salt("coin_select")
                .selected_text(display_coin_name(selected_coin))
                .show_ui(ui, |ui| {
                    for coin in dataset.coin_names() {
                        if ui
                            .selectable_value(
                                selected_coin,
                                coin.to_string(),
                                display_coin_name(coin),
                            )
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
            ui.end_row();

            ui.label(UI_TEXT.metric_label);
            ComboBox::from_id_salt("metric_select")
                .selected_text(selected_metric.to_string())
                .show_ui(ui, |ui| {
                    for metric in Metric::iter() {
                        if ui
                            .selectable_value(selected_metric, metric, metric.to_string())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
            ui.end_row();
        });

    changed
}

/// Read-only dataset summary under the controls.
pub fn render_summary(ui: &mut Ui, dataset: &CoinDataset, series: &MetricSeries) {
    section_heading(ui, UI_TEXT.summary_heading);

    Grid::new("summary_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label(UI_TEXT.label_coins);
            ui.label(
                RichText::new(dataset.coin_count().to_string())
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.end_row();

            ui.label(UI_TEXT.label_records);
            ui.label(
                RichText::new(dataset.record_count().to_string())
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.end_row();

            ui.label(UI_TEXT.label_points);
            ui.label(
                RichText::new(series.len().to_string()).color(PLOT_CONFIG.color_text_neutral),
            );
            ui.end_row();

            // Span of the drawn series; whole-dataset span when nothing is in view
            if let Some((from, to)) = series.date_extent().or_else(|| dataset.date_span()) {
                ui.label(UI_TEXT.label_span);
                ui.label(
                    RichText::new(format!(
                        "{} - {}",
                        TimeUtils::format_date(from),
                        TimeUtils::format_date(to)
                    ))
                    .color(PLOT_CONFIG.color_text_neutral),
                );
                ui.end_row();
            }
        });

    if series.is_empty() {
        ui.add_space(6.0);
        ui.label(RichText::new(UI_TEXT.empty_series_msg).color(PLOT_CONFIG.color_warning));
    }
}
