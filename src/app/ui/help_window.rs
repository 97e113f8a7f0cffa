use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        let mut open = self.open;

        let available = ctx.available_rect().size();
        let window_width = available.x.min(440.0);
        let window_height = available.y.min(400.0);

        egui::Window::new("Help")
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .fixed_size([window_width, window_height])
            .resizable(false)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                self.ui_content(ui);
            });

        self.open = open;
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("How it works");
            ui.add_space(5.0);

            ui.label("1. Pick the workplace pain point you want to address");
            ui.label("2. Pick your role in the conversation");
            ui.label("3. Pick how you will deliver the message");
            ui.label("4. Optionally add brief context, then generate");
            ui.add_space(5.0);
            ui.label(
                "Each generation produces three phrasing suggestions. Use the \
                 Copy Script button to take one into your mail client or chat.",
            );

            ui.add_space(15.0);

            ui.heading("Credits");
            ui.add_space(5.0);

            ui.label("Every session starts with 2 free credits; each generation costs one.");
            ui.label(
                "When you run out, the Buy Credits screen lists the available packs. \
                 Payment links are sent by mail after you pick one.",
            );

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Version:").strong());
                ui.label(format!(
                    "{} ({})",
                    env!("CARGO_PKG_VERSION"),
                    env!("GIT_COMMIT")
                ));
            });

            ui.add_space(10.0);
        });
    }
}
