use eframe::egui;
use egui::{Color32, RichText};
use tracing::info;

use super::help_window::HelpWindow;
use super::menu::{self, MenuAction};
use super::purchase_window::{PurchaseAction, PurchaseWindow};
use crate::app::catalog::{Mode, PainPoint, Role};
use crate::app::contact;
use crate::app::credits::{self, CreditGate, GenerateAttempt};
use crate::app::notifications::{Notification, NotificationManager};
use crate::app::scripts::Selection;
use crate::app::session::FileStore;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Main application coordinator.
///
/// Owns the form selection, the generated script list, and the credit gate.
/// The gate is passed by reference to the parts that consume it (the
/// generation handler and the purchase overlay); only the theme preference
/// is persisted through eframe storage, never the credit balance.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ZeroConflictApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub selection: Selection,
    #[serde(skip)]
    pub scripts: Vec<String>,
    #[serde(skip)]
    credit_gate: CreditGate<FileStore>,
    #[serde(skip)]
    pub purchase_window: PurchaseWindow,
    #[serde(skip)]
    pub help_window: HelpWindow,
    #[serde(skip)]
    pub notification_manager: NotificationManager,
}

impl Default for ZeroConflictApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            selection: Selection::default(),
            scripts: Vec::new(),
            credit_gate: CreditGate::load(FileStore::session_default()),
            purchase_window: PurchaseWindow::new(),
            help_window: HelpWindow::new(),
            notification_manager: NotificationManager::new(),
        }
    }
}

impl ZeroConflictApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Apply the saved theme
        app.apply_theme(&cc.egui_ctx);

        app
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }
    }

    pub fn credit_balance(&self) -> u32 {
        self.credit_gate.balance()
    }

    /// Apply a manually reconciled purchase (`--grant-credits N`).
    pub fn grant_credits(&mut self, credits: u32) {
        self.credit_gate.grant(credits);
        self.notification_manager
            .add_notification(Notification::new_info(
                "credits_granted".to_string(),
                "Credits added".to_string(),
                format!("{} credits were added to this session.", credits),
            ));
    }

    /// Handle a click on the generate button.
    fn attempt_generate(&mut self) {
        match credits::attempt_generate(&mut self.credit_gate, &self.selection) {
            GenerateAttempt::Generated(scripts) => {
                info!(
                    "Generated scripts, balance is now {}",
                    self.credit_gate.balance()
                );
                self.scripts = scripts.to_vec();
            }
            GenerateAttempt::IncompleteForm => {
                self.notification_manager
                    .add_notification(Notification::new_warning(
                        "incomplete_form".to_string(),
                        "Incomplete form".to_string(),
                        "Please complete all dropdowns.".to_string(),
                    ));
            }
            GenerateAttempt::OutOfCredits => {
                info!("Generation refused: no credits left, showing purchase overlay");
            }
        }
    }

    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let action = menu::build_menu(ui, ctx, &mut self.theme, self.credit_gate.balance());
                match action {
                    MenuAction::BuyCredits => self.credit_gate.open_overlay(),
                    MenuAction::ShowHelp => self.help_window.open = true,
                    MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                    MenuAction::ThemeChanged | MenuAction::None => {}
                }
            });
        });
    }

    fn render_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Powered by");
                ui.hyperlink_to("kryptonpath.com", contact::SITE_URL);
                ui.separator();
                ui.label("Contact:");
                ui.hyperlink_to(contact::SUPPORT_EMAIL, contact::support_mailto());
            });
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("Zero Conflict");
                    ui.label("AI Dialogue Engine for Workplace Communication");
                });

                ui.add_space(12.0);

                self.render_form(ui);

                ui.add_space(12.0);

                if ui
                    .add_sized(
                        [ui.available_width(), 36.0],
                        egui::Button::new(RichText::new("Generate Zero-Conflict Script").strong()),
                    )
                    .clicked()
                {
                    self.attempt_generate();
                }

                ui.add_space(5.0);
                self.render_credit_status(ui);

                self.render_scripts(ui);

                ui.add_space(16.0);
            });
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.label("1. Select the corporate pain point:");
        egui::ComboBox::from_id_salt("pain_point")
            .width(ui.available_width())
            .selected_text(
                self.selection
                    .pain_point
                    .map(|p| p.label())
                    .unwrap_or("Choose a common workplace challenge"),
            )
            .show_ui(ui, |ui| {
                for pain_point in PainPoint::ALL {
                    ui.selectable_value(
                        &mut self.selection.pain_point,
                        Some(pain_point),
                        pain_point.label(),
                    );
                }
            });

        ui.add_space(8.0);

        ui.label("2. What is your role in this conversation?");
        egui::ComboBox::from_id_salt("role")
            .width(ui.available_width())
            .selected_text(
                self.selection
                    .role
                    .map(|r| r.label())
                    .unwrap_or("Identify your role and audience"),
            )
            .show_ui(ui, |ui| {
                for role in Role::ALL {
                    ui.selectable_value(&mut self.selection.role, Some(role), role.label());
                }
            });

        ui.add_space(8.0);

        ui.label("3. What is the communication mode?");
        egui::ComboBox::from_id_salt("mode")
            .width(ui.available_width())
            .selected_text(
                self.selection
                    .mode
                    .map(|m| m.label())
                    .unwrap_or("How will you deliver the message?"),
            )
            .show_ui(ui, |ui| {
                for mode in Mode::ALL {
                    ui.selectable_value(&mut self.selection.mode, Some(mode), mode.label());
                }
            });

        ui.add_space(8.0);

        ui.label("4. Provide brief context:");
        ui.add(
            egui::TextEdit::multiline(&mut self.selection.context)
                .desired_width(ui.available_width())
                .desired_rows(3)
                .hint_text(
                    "Optional. E.g. My manager frequently interrupts me during project updates...",
                ),
        );
    }

    fn render_credit_status(&self, ui: &mut egui::Ui) {
        let balance = self.credit_gate.balance();
        let suffix = if balance == 0 {
            " (Buy more to continue)"
        } else if balance <= 2 {
            " (You are using free credits!)"
        } else {
            ""
        };
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Credits left: {}{}", balance, suffix))
                    .color(Color32::from_rgb(255, 205, 88)),
            );
        });
    }

    fn render_scripts(&mut self, ui: &mut egui::Ui) {
        if self.scripts.is_empty() {
            return;
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Script Options");

        let mut copied = None;
        for (index, script) in self.scripts.iter().enumerate() {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(script);
                ui.add_space(4.0);
                if ui.button("Copy Script").clicked() {
                    ui.ctx().copy_text(script.clone());
                    copied = Some(index);
                }
            });
        }

        if let Some(index) = copied {
            info!("Script {} copied to clipboard", index + 1);
            self.notification_manager
                .add_notification(Notification::new_success(
                    "script_copied".to_string(),
                    "Copied".to_string(),
                    format!("Script {} copied to clipboard.", index + 1),
                ));
        }
    }

    fn handle_purchase_overlay(&mut self, ctx: &egui::Context) {
        if !self.credit_gate.overlay_open() {
            return;
        }

        match self.purchase_window.show(ctx) {
            PurchaseAction::PackChosen(pack) => {
                // Balance stays untouched: the top-up is reconciled out of
                // band once payment completes.
                self.notification_manager
                    .add_notification(Notification::new_info(
                        "payment_link_requested".to_string(),
                        "Payment link requested".to_string(),
                        format!(
                            "Check your mail client for the {} pack request.",
                            pack.label()
                        ),
                    ));
            }
            PurchaseAction::Cancel => self.credit_gate.close_overlay(),
            PurchaseAction::None => {}
        }
    }
}

impl eframe::App for ZeroConflictApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_menu_bar(ctx);
        self.render_footer(ctx);
        self.render_central_panel(ctx);

        self.handle_purchase_overlay(ctx);
        self.help_window.show(ctx);

        // Keep repainting while toasts are visible so they expire on time
        if self.notification_manager.render_toasts(ctx) {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }
    }
}
