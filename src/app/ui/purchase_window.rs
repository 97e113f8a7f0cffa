use eframe::egui;
use egui::{Color32, Context, RichText, Ui};
use tracing::info;

use crate::app::catalog::CreditPack;
use crate::app::contact;

/// What the user did in the overlay this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseAction {
    None,
    /// A pack was chosen; the pre-filled payment request mail was opened.
    /// The credit balance is NOT changed here - reconciliation is manual.
    PackChosen(CreditPack),
    Cancel,
}

/// Blocking "buy credits" overlay.
///
/// Visibility is owned by the credit gate (`overlay_open`), so this type is
/// stateless: it renders the pack list over a dimmed backdrop and reports
/// what was clicked.
#[derive(Default)]
pub struct PurchaseWindow;

impl PurchaseWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context) -> PurchaseAction {
        let mut action = PurchaseAction::None;

        // Dim everything behind the overlay so the form reads as blocked
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("purchase_backdrop"),
        ))
        .rect_filled(screen_rect, 0.0, Color32::from_black_alpha(160));

        egui::Window::new("Buy More Credits")
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Foreground)
            .default_width(340.0)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                if let Some(pack) = self.ui_content(ui) {
                    action = PurchaseAction::PackChosen(pack);
                }

                ui.add_space(10.0);

                if ui
                    .add_sized([ui.available_width(), 28.0], egui::Button::new("Cancel"))
                    .clicked()
                {
                    action = PurchaseAction::Cancel;
                }
            });

        action
    }

    fn ui_content(&self, ui: &mut Ui) -> Option<CreditPack> {
        let mut chosen = None;

        ui.add_space(5.0);

        for pack in CreditPack::ALL {
            ui.horizontal(|ui| {
                ui.label(RichText::new(pack.label()).strong());
                ui.label(format!("\u{20b9}{}", pack.price_inr()));
                if ui.button("Buy").clicked() {
                    info!("Payment link requested for pack {}", pack.id());
                    ui.ctx()
                        .open_url(egui::OpenUrl::new_tab(contact::payment_request_mailto(
                            pack,
                        )));
                    chosen = Some(pack);
                }
            });
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        ui.label("After you select, a payment link will be sent by kryptonpath.com.");
        ui.horizontal(|ui| {
            ui.label("For help:");
            ui.hyperlink_to(contact::SUPPORT_EMAIL, contact::support_mailto());
        });

        ui.add_space(8.0);
        if ui
            .add_sized(
                [ui.available_width(), 32.0],
                egui::Button::new(RichText::new("DM on Instagram").strong()),
            )
            .clicked()
        {
            ui.ctx()
                .open_url(egui::OpenUrl::new_tab(contact::INSTAGRAM_URL));
        }

        chosen
    }
}
