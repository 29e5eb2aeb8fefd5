//! deskcalc — a desktop calculator.
//!
//! A numeric display over a 5×4 key grid, driven by the sequential
//! evaluator in `deskcalc-core`.

mod app;
mod fade;
mod theme;
mod widgets;

use app::DeskCalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([350.0, 500.0])
            .with_resizable(false)
            .with_title("Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "deskcalc",
        options,
        Box::new(|cc| {
            theme::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(DeskCalcApp::new(cc))
        }),
    )
}
