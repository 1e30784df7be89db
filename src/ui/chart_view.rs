use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{
    Axis, AxisHints, HPlacement, Line, MarkerShape, Plot, PlotPoint, PlotPoints, PlotUi, Points,
    Text, VPlacement,
};

use crate::config::DATASET;
use crate::config::plot::PLOT_CONFIG;
use crate::models::MetricSeries;
use crate::ui::transition::{ChartFrame, ChartTransition};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{format_axis_value, format_metric_value};
use crate::utils::TimeUtils;

/// The line chart: owns the currently bound series and the in-flight
/// transition between selections.
pub struct ChartView {
    series: MetricSeries,
    transition: ChartTransition,
}

impl ChartView {
    pub fn new(series: MetricSeries) -> Self {
        Self {
            transition: ChartTransition::settled(ChartFrame::from_series(&series)),
            series,
        }
    }

    pub fn series(&self) -> &MetricSeries {
        &self.series
    }

    /// Point the chart at a new coin/metric selection.
    ///
    /// Axes and line animate from wherever they currently are to the new
    /// domains/shape. A re-selection of the same series is a no-op.
    pub fn retarget(&mut self, series: MetricSeries, now: f64) {
        if series == self.series {
            return;
        }
        let frame = ChartFrame::from_series(&series);
        self.transition = self
            .transition
            .retarget(frame, now, DATASET.transition_secs);
        self.series = series;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let now = ui.input(|i| i.time);
        let frame = self.transition.frame_at(now);
        if !self.transition.is_finished(now) {
            ui.ctx().request_repaint();
        }

        let x_axis = AxisHints::new(Axis::X)
            .label(UI_TEXT.x_axis_label)
            .formatter(|mark, _range| TimeUtils::format_tick_date(TimeUtils::x_to_date(mark.value)))
            .placement(VPlacement::Bottom);

        let y_axis = AxisHints::new_y()
            .label(self.series.metric.axis_label())
            .formatter(|mark, _range| format_axis_value(mark.value))
            .placement(HPlacement::Left);

        Plot::new("coin_chart")
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .label_formatter(|_, _| String::new())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(frame.x_domain.0..=frame.x_domain.1);
                plot_ui.set_plot_bounds_y(frame.y_domain.0..=frame.y_domain.1);

                if frame.line.len() >= 2 {
                    plot_ui.line(
                        Line::new("metric", PlotPoints::new(frame.line.clone()))
                            .color(PLOT_CONFIG.line_color)
                            .width(PLOT_CONFIG.line_width),
                    );
                }

                if self.series.is_empty() {
                    render_empty_notice(plot_ui, &frame);
                } else {
                    render_hover(plot_ui, &self.series, &frame);
                }
            });
    }
}

fn render_empty_notice(plot_ui: &mut PlotUi, frame: &ChartFrame) {
    let center = PlotPoint::new(
        (frame.x_domain.0 + frame.x_domain.1) / 2.0,
        (frame.y_domain.0 + frame.y_domain.1) / 2.0,
    );
    plot_ui.text(Text::new(
        "empty_notice",
        center,
        RichText::new(UI_TEXT.empty_series_msg)
            .size(14.0)
            .color(PLOT_CONFIG.color_text_subdued),
    ));
}

/// Crosshair + focus marker + value label for the record nearest to the
/// pointer, visible only while the pointer is over the plot.
fn render_hover(plot_ui: &mut PlotUi, series: &MetricSeries, frame: &ChartFrame) {
    if !plot_ui.response().hovered() {
        return;
    }
    let Some(pointer) = plot_ui.pointer_coordinate() else {
        return;
    };

    let target = TimeUtils::x_to_date(pointer.x);
    let Some(point) = series.nearest_point(target) else {
        return;
    };
    let px = TimeUtils::date_to_x(point.date);
    let py = point.value;

    let (x0, _) = frame.x_domain;
    let (y0, _) = frame.y_domain;

    // Guide lines from the focus point down to the x-axis and left to the y-axis
    plot_ui.line(
        Line::new("x_guide", PlotPoints::new(vec![[px, y0], [px, py]]))
            .color(PLOT_CONFIG.crosshair_color)
            .width(PLOT_CONFIG.crosshair_width),
    );
    plot_ui.line(
        Line::new("y_guide", PlotPoints::new(vec![[x0, py], [px, py]]))
            .color(PLOT_CONFIG.crosshair_color)
            .width(PLOT_CONFIG.crosshair_width),
    );

    plot_ui.points(
        Points::new("focus", PlotPoints::new(vec![[px, py]]))
            .radius(PLOT_CONFIG.focus_radius)
            .shape(MarkerShape::Circle)
            .filled(true)
            .color(PLOT_CONFIG.focus_color),
    );

    let label = format!(
        "{}  {}",
        TimeUtils::format_date(point.date),
        format_metric_value(py)
    );
    plot_ui.text(
        Text::new(
            "focus_label",
            PlotPoint::new(px, py),
            RichText::new(label)
                .size(PLOT_CONFIG.focus_label_size)
                .color(PLOT_CONFIG.color_text_primary),
        )
        .anchor(Align2::LEFT_BOTTOM),
    );
}
