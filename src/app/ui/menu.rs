use eframe::egui;
use egui::{Color32, RichText};

use super::app::ThemeChoice;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    BuyCredits,
    ShowHelp,
    Quit,
}

pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    credit_balance: u32,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Zero Conflict", |ui| {
        if ui.button("Buy Credits").clicked() {
            menu_action = MenuAction::BuyCredits;
        }
        if ui.button("Help").clicked() {
            menu_action = MenuAction::ShowHelp;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    if original_theme != *theme {
        menu_action = MenuAction::ThemeChanged;
    }

    // Credit balance indicator - positioned on far right
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let color = if credit_balance == 0 {
            Color32::from_rgb(220, 50, 50)
        } else {
            Color32::from_rgb(255, 205, 88)
        };
        ui.label(
            RichText::new(format!("Credits left: {}", credit_balance))
                .color(color)
                .strong(),
        );
    });

    menu_action
}
