//! deskcalc application.

use egui::{Context, Key};

use deskcalc_core::{Evaluator, Operator};

use crate::fade::DisplayFade;
use crate::theme::{menu_bar, CalcColors};
use crate::widgets::CalcKey;

/// Display well height.
const DISPLAY_HEIGHT: f32 = 64.0;

/// Key grid cell height.
const KEY_HEIGHT: f32 = 56.0;

pub struct DeskCalcApp {
    eval: Evaluator,
    fade: DisplayFade,
    show_about: bool,
}

impl DeskCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            eval: Evaluator::new(),
            fade: DisplayFade::new(),
            show_about: false,
        }
    }

    // Every input path funnels through these so the display pulse fires
    // exactly once per accepted key event.

    fn digit(&mut self, d: char) {
        self.eval.on_digit(d);
        self.fade.trigger();
    }

    fn operator(&mut self, op: Operator) {
        self.eval.on_operator(op);
        self.fade.trigger();
    }

    fn clear(&mut self) {
        self.eval.on_clear();
        self.fade.trigger();
    }

    fn negate(&mut self) {
        self.eval.on_negate();
        self.fade.trigger();
    }

    fn backspace(&mut self) {
        self.eval.on_backspace();
        self.fade.trigger();
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // shifted number keys are operator bindings, not digits
            if !i.modifiers.shift {
                for digit in '0'..='9' {
                    if i.key_pressed(digit_to_key(digit)) {
                        self.digit(digit);
                    }
                }
            }
            if i.key_pressed(Key::Period) {
                self.digit('.');
            }

            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                self.operator(Operator::Add);
            }
            if i.key_pressed(Key::Minus) {
                self.operator(Operator::Sub);
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                self.operator(Operator::Mul);
            }
            if i.key_pressed(Key::Slash) {
                self.operator(Operator::Div);
            }
            if i.modifiers.shift && i.key_pressed(Key::Num5) {
                self.operator(Operator::Mod);
            }

            // plain = only; shift+= is the Add binding above
            if i.key_pressed(Key::Enter)
                || (!i.modifiers.shift && i.key_pressed(Key::Equals))
            {
                self.operator(Operator::Equals);
            }

            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                self.clear();
            }
            if i.key_pressed(Key::Backspace) {
                self.backspace();
            }
        });
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let text_color = CalcColors::TEXT.gamma_multiply(self.fade.alpha());
        egui::Frame::none()
            .fill(CalcColors::DISPLAY_BG)
            .stroke(egui::Stroke::new(1.0, CalcColors::OUTLINE))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::symmetric(10.0, 10.0))
            .show(ui, |ui| {
                ui.set_min_height(DISPLAY_HEIGHT);
                ui.set_max_height(DISPLAY_HEIGHT);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.eval.current_display_text())
                            .font(egui::FontId::proportional(40.0))
                            .color(text_color),
                    );
                });
            });
    }

    fn render_keys(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;
        let size = egui::vec2((ui.available_width() - 3.0 * gap) / 4.0, KEY_HEIGHT);
        let num = CalcColors::NUMBER_KEY;
        let op = CalcColors::OPERATOR_KEY;
        let eq = CalcColors::EQUALS_KEY;

        // Row 1: C, ±, %, ÷
        ui.horizontal(|ui| {
            if ui.add(CalcKey::new("C", op, size)).clicked() { self.clear(); }
            if ui.add(CalcKey::new("±", op, size)).clicked() { self.negate(); }
            if ui.add(CalcKey::new("%", op, size)).clicked() { self.operator(Operator::Mod); }
            if ui.add(CalcKey::new("÷", op, size)).clicked() { self.operator(Operator::Div); }
        });

        // Row 2: 7, 8, 9, ×
        ui.horizontal(|ui| {
            if ui.add(CalcKey::new("7", num, size)).clicked() { self.digit('7'); }
            if ui.add(CalcKey::new("8", num, size)).clicked() { self.digit('8'); }
            if ui.add(CalcKey::new("9", num, size)).clicked() { self.digit('9'); }
            if ui.add(CalcKey::new("×", op, size)).clicked() { self.operator(Operator::Mul); }
        });

        // Row 3: 4, 5, 6, -
        ui.horizontal(|ui| {
            if ui.add(CalcKey::new("4", num, size)).clicked() { self.digit('4'); }
            if ui.add(CalcKey::new("5", num, size)).clicked() { self.digit('5'); }
            if ui.add(CalcKey::new("6", num, size)).clicked() { self.digit('6'); }
            if ui.add(CalcKey::new("-", op, size)).clicked() { self.operator(Operator::Sub); }
        });

        // Row 4: 1, 2, 3, +
        ui.horizontal(|ui| {
            if ui.add(CalcKey::new("1", num, size)).clicked() { self.digit('1'); }
            if ui.add(CalcKey::new("2", num, size)).clicked() { self.digit('2'); }
            if ui.add(CalcKey::new("3", num, size)).clicked() { self.digit('3'); }
            if ui.add(CalcKey::new("+", op, size)).clicked() { self.operator(Operator::Add); }
        });

        // Row 5: 0, ., ←, =
        ui.horizontal(|ui| {
            if ui.add(CalcKey::new("0", num, size)).clicked() { self.digit('0'); }
            if ui.add(CalcKey::new(".", num, size)).clicked() { self.digit('.'); }
            if ui.add(CalcKey::new("←", op, size)).clicked() { self.backspace(); }
            if ui.add(CalcKey::new("=", eq, size)).clicked() { self.operator(Operator::Equals); }
        });
    }
}

impl eframe::App for DeskCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt);
        self.fade.tick(dt);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(CalcColors::WINDOW)
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keys(ui);
            });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("calculator");
                        ui.label("version 0.1.0");
                        ui.add_space(4.0);
                        ui.label("keys: 0-9 . + - * / % Enter Esc");
                        ui.add_space(8.0);
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.fade.schedule_repaint(ctx);
    }
}

fn digit_to_key(digit: char) -> Key {
    match digit {
        '0' => Key::Num0,
        '1' => Key::Num1,
        '2' => Key::Num2,
        '3' => Key::Num3,
        '4' => Key::Num4,
        '5' => Key::Num5,
        '6' => Key::Num6,
        '7' => Key::Num7,
        '8' => Key::Num8,
        '9' => Key::Num9,
        _ => Key::Num0,
    }
}
