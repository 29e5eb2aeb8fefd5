//! deskcalc theme — dark calculator chrome.
//!
//! Near-black window, darker display well, gray keys, orange equals key.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Fixed palette for the calculator chrome.
pub struct CalcColors;

impl CalcColors {
    pub const WINDOW: Color32 = Color32::from_rgb(51, 51, 51);
    pub const OUTLINE: Color32 = Color32::from_rgb(64, 64, 64);
    pub const DISPLAY_BG: Color32 = Color32::from_rgb(30, 30, 30);
    pub const NUMBER_KEY: Color32 = Color32::from_rgb(75, 75, 75);
    pub const OPERATOR_KEY: Color32 = Color32::from_rgb(102, 102, 102);
    pub const EQUALS_KEY: Color32 = Color32::from_rgb(255, 149, 0);
    pub const TEXT: Color32 = Color32::WHITE;
}

/// Theme configuration for the calculator window.
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 20.0,
            font_size_small: 11.0,
            window_padding: 16.0,
            item_spacing: 8.0,
        }
    }
}

impl CalcTheme {
    /// Apply the calculator theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = CalcColors::WINDOW;
        visuals.panel_fill = CalcColors::WINDOW;
        visuals.faint_bg_color = CalcColors::NUMBER_KEY;
        visuals.extreme_bg_color = CalcColors::DISPLAY_BG;

        visuals.window_rounding = Rounding::same(6.0);
        visuals.menu_rounding = Rounding::same(4.0);
        visuals.window_stroke = Stroke::new(1.0, CalcColors::OUTLINE);

        visuals.override_text_color = Some(CalcColors::TEXT);

        let chrome = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::WINDOW;
            ws.weak_bg_fill = CalcColors::WINDOW;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::OUTLINE);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::TEXT);
            ws.rounding = Rounding::same(4.0);
        };
        chrome(&mut visuals.widgets.noninteractive);
        chrome(&mut visuals.widgets.inactive);
        chrome(&mut visuals.widgets.hovered);
        chrome(&mut visuals.widgets.active);
        chrome(&mut visuals.widgets.open);

        // menu items and small chrome buttons light up on interaction
        visuals.widgets.hovered.bg_fill = CalcColors::NUMBER_KEY;
        visuals.widgets.hovered.weak_bg_fill = CalcColors::NUMBER_KEY;
        visuals.widgets.active.bg_fill = CalcColors::OPERATOR_KEY;
        visuals.widgets.active.weak_bg_fill = CalcColors::OPERATOR_KEY;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper.
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::WINDOW)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
