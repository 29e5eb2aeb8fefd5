//! Calculator key widget.

use egui::{Align2, Color32, FontId, Response, Rounding, Sense, Ui, Vec2, Widget};

use crate::theme::CalcColors;

/// A rounded calculator key with a role-dependent fill color.
/// Brightens on hover, brightens further and nudges its glyph on press.
pub struct CalcKey<'a> {
    label: &'a str,
    fill: Color32,
    size: Vec2,
}

impl<'a> CalcKey<'a> {
    pub fn new(label: &'a str, fill: Color32, size: Vec2) -> Self {
        Self { label, fill, size }
    }
}

impl Widget for CalcKey<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let pressed = response.is_pointer_button_down_on();
            let fill = if pressed {
                lighten(self.fill, 0.30)
            } else if response.hovered() {
                lighten(self.fill, 0.15)
            } else {
                self.fill
            };

            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(8.0), fill);

            // pressed keys shift their glyph like key travel
            let center = if pressed {
                rect.center() + egui::vec2(1.0, 1.0)
            } else {
                rect.center()
            };

            let font = FontId::proportional(24.0);
            painter.text(
                center + egui::vec2(1.0, 1.0),
                Align2::CENTER_CENTER,
                self.label,
                font.clone(),
                Color32::from_black_alpha(60),
            );
            painter.text(center, Align2::CENTER_CENTER, self.label, font, CalcColors::TEXT);
        }

        response
    }
}

/// Blend a color toward white by `amount` (0.0 = unchanged, 1.0 = white).
fn lighten(color: Color32, amount: f32) -> Color32 {
    let blend = |c: u8| c + ((255 - c) as f32 * amount) as u8;
    Color32::from_rgb(blend(color.r()), blend(color.g()), blend(color.b()))
}
