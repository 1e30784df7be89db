//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Width of the metric line
    pub line_width: f32,
    pub line_color: Color32,

    // --- HOVER / FOCUS ---
    pub focus_radius: f32,
    pub focus_color: Color32,
    /// Guide lines from the focus point to the axes
    pub crosshair_color: Color32,
    pub crosshair_width: f32,
    pub focus_label_size: f32,

    // --- SEMANTIC COLORS ---
    pub color_warning: Color32,
    pub color_loss: Color32,

    pub color_text_primary: Color32, // Main values
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32, // Explanations/Context
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // LINE
    // Matches the classic grey/3px chart line
    line_width: 3.0,
    line_color: Color32::from_gray(160),

    // FOCUS MARKER
    focus_radius: 5.0,
    focus_color: Color32::from_rgb(255, 215, 0), // Gold
    crosshair_color: Color32::from_gray(110),
    crosshair_width: 1.0,
    focus_label_size: 13.0,

    // SEMANTICS
    color_warning: Color32::from_rgb(255, 215, 0),
    color_loss: Color32::from_rgb(255, 80, 80),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
