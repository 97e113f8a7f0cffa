//! Desktop user interface implementation for Zero Conflict.
//!
//! This module provides the egui-based single-screen interface: the guided
//! form with its three dropdowns and context field, the generated script
//! list with per-script clipboard export, the blocking purchase overlay,
//! and a small help window.
//!
//! # UI Architecture
//!
//! - [`app::ZeroConflictApp`] - Main application coordinator and state
//!   manager; owns the form selection, the credit gate, and all windows
//! - [`menu`] - Top menu bar (app actions, theme selector, help)
//! - [`purchase_window::PurchaseWindow`] - Modal "buy credits" overlay
//! - [`help_window::HelpWindow`] - User documentation and guidance
//!
//! Windows follow the same pattern throughout: a struct with an `open`
//! flag and a `show(ctx, ...)` method called every frame from
//! `ZeroConflictApp::update`.
//!
//! # Theme Support
//!
//! Latte, Frappe, Macchiato, and Mocha color schemes via Catppuccin; the
//! chosen theme is persisted across restarts through eframe's storage.

pub mod app;
pub mod help_window;
pub mod menu;
pub mod purchase_window;

pub use app::ZeroConflictApp;
pub use help_window::HelpWindow;
pub use purchase_window::PurchaseWindow;
