//! Notification system for user feedback.
//!
//! Notices are transient: the incomplete-form warning, the clipboard copy
//! confirmation, and credit-grant info all surface here as dismissible
//! toasts with per-type color, icon, and expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub expires_at: Option<Instant>,
    pub dismissible: bool,
}

impl Notification {
    pub fn new_warning(id: String, title: String, message: String) -> Self {
        Self {
            id,
            title,
            message,
            notification_type: NotificationType::Warning,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(10)),
            dismissible: true,
        }
    }

    pub fn new_info(id: String, title: String, message: String) -> Self {
        Self {
            id,
            title,
            message,
            notification_type: NotificationType::Info,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(10)),
            dismissible: true,
        }
    }

    pub fn new_success(id: String, title: String, message: String) -> Self {
        Self {
            id,
            title,
            message,
            notification_type: NotificationType::Success,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(5)),
            dismissible: true,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Instant::now() > expires_at
        } else {
            false
        }
    }

    pub fn get_color(&self) -> Color32 {
        match self.notification_type {
            NotificationType::Warning => Color32::from_rgb(255, 150, 0),
            NotificationType::Info => Color32::from_rgb(70, 130, 200),
            NotificationType::Success => Color32::from_rgb(40, 180, 40),
        }
    }

    pub fn get_icon(&self) -> &'static str {
        match self.notification_type {
            NotificationType::Warning => "⚠",
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
        }
    }
}

#[derive(Default)]
pub struct NotificationManager {
    notifications: HashMap<String, Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: HashMap::new(),
        }
    }

    /// Add or replace a notification. Re-posting the same id refreshes the
    /// timestamp, so a repeated warning surfaces again instead of silently
    /// aging out.
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications
            .insert(notification.id.clone(), notification);
    }

    pub fn dismiss_notification(&mut self, id: &str) {
        self.notifications.remove(id);
    }

    pub fn clear_expired(&mut self) {
        self.notifications
            .retain(|_, notification| !notification.is_expired());
    }

    pub fn get_active_notifications(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.notifications.values().collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn has_warnings(&self) -> bool {
        self.notifications
            .values()
            .any(|n| matches!(n.notification_type, NotificationType::Warning))
    }

    /// Render active notifications as a toast stack anchored to the top of
    /// the screen. Returns whether anything was drawn so the caller can
    /// request a repaint while toasts are aging out.
    pub fn render_toasts(&mut self, ctx: &egui::Context) -> bool {
        self.clear_expired();

        if self.notifications.is_empty() {
            return false;
        }

        let mut dismissed: Vec<String> = Vec::new();

        egui::Area::new(egui::Id::new("notification_toasts"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 36.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in self.get_active_notifications() {
                    egui::Frame::window(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(notification.get_color(), notification.get_icon());
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&notification.title)
                                        .color(notification.get_color())
                                        .strong(),
                                );
                                ui.label(&notification.message);
                            });
                            if notification.dismissible && ui.button("✕").clicked() {
                                dismissed.push(notification.id.clone());
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        for id in dismissed {
            self.dismiss_notification(&id);
        }

        true
    }
}
