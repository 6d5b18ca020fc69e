//! UI color and text configuration

use eframe::egui::Color32;

pub struct UiColors {
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub label: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    // Net-position bar colors, matching the classic COT chart palette
    pub large_spec_bar: Color32,
    pub commercials_bar: Color32,
    pub alert_timestamp: Color32,
}

pub struct UiConfig {
    pub colors: UiColors,
}

pub const UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::from_rgb(255, 200, 0),
        subsection_heading: Color32::from_rgb(160, 200, 255),
        label: Color32::from_rgb(200, 200, 200),
        central_panel: Color32::from_rgb(20, 20, 24),
        side_panel: Color32::from_rgb(28, 28, 34),
        large_spec_bar: Color32::from_rgba_premultiplied(37, 0, 200, 219),
        commercials_bar: Color32::from_rgba_premultiplied(200, 0, 0, 178),
        alert_timestamp: Color32::from_rgb(140, 140, 140),
    },
};
