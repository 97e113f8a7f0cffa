//! Zero Conflict - Workplace Communication Script Generator
//!
//! Zero Conflict is a single-screen desktop application that helps people
//! prepare difficult workplace conversations. The user picks a workplace
//! pain point, their role in the conversation, and a communication mode,
//! optionally adds free-text context, and receives three ready-to-use
//! phrasing suggestions. Repeated use is gated by a session-scoped credit
//! counter with a manual "buy more credits" contact flow.
//!
//! # Core Features
//!
//! - **Guided Form**: Three closed dropdowns plus an optional context field
//! - **Script Generation**: Three deterministic, templated phrasings per run
//! - **Credit Gate**: Session-scoped counter, decremented per generation
//! - **Purchase Overlay**: Fixed credit packs with a pre-filled contact mail
//! - **Clipboard Export**: One-click copy for each generated script
//!
//! # Architecture Overview
//!
//! The application follows a layered architecture with clear separation of
//! concerns:
//!
//! - **UI Layer** ([`app::ui`]): egui-based desktop interface
//! - **Business Logic** ([`app`]): option catalogs, script generation, and
//!   the credit gate state machine
//! - **Persistence**: a session-scoped key-value store behind
//!   [`app::session::SessionStore`]
//!
//! ## Key Architectural Patterns
//!
//! - **Closed Catalogs**: every fixed option list is an enum with a single
//!   source of truth ([`app::catalog`])
//! - **Explicit Gate State**: the credit balance lives in
//!   [`app::credits::CreditGate`], owned by the top-level controller and
//!   passed to the consuming UI parts, never ambient
//! - **Pure Generation**: [`app::scripts::generate_scripts`] is a pure
//!   function of the current selection
//!
//! # Getting Started
//!
//! The main application entry point is [`ZeroConflictApp`], which owns the
//! form state, the credit gate, and the purchase overlay.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::ZeroConflictApp;
