//! Credit Gate Unit Tests
//!
//! Tests for the credit gate state machine: initialization from the session
//! store, spend/persist behavior, overlay transitions, the manual grant
//! path, and the `--grant-credits` argument parser.
//!
//! # Test Coverage
//!
//! - **Initialization**: fresh session default, stored value reuse,
//!   malformed value fallback
//! - **Spending**: decrement-and-persist per success, refusal at zero
//! - **Overlay**: opens on exhausted attempts, closes on explicit cancel
//! - **Persistence**: read-after-write across simulated reloads
//! - **Reconciliation**: grant path and CLI argument parsing

use zeroconflict::app::credits::{
    parse_grant_credits_arg, AttemptOutcome, CreditGate, CREDITS_KEY, DEFAULT_CREDITS,
};
use zeroconflict::app::session::{MemoryStore, SessionStore};

// ============================================================================
// Initialization Tests
// ============================================================================

#[test]
fn test_fresh_session_starts_with_default_balance() {
    let gate = CreditGate::load(MemoryStore::new());
    assert_eq!(gate.balance(), DEFAULT_CREDITS);
    assert_eq!(DEFAULT_CREDITS, 2);
    assert!(gate.has_credits());
}

#[test]
fn test_fresh_session_persists_default_immediately() {
    let store = MemoryStore::new();
    let _gate = CreditGate::load(store.clone());
    assert_eq!(store.get(CREDITS_KEY), Some("2".to_string()));
}

#[test]
fn test_stored_balance_is_reused() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "7");
    let gate = CreditGate::load(store);
    assert_eq!(gate.balance(), 7);
}

#[test]
fn test_non_numeric_stored_value_is_treated_as_absent() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "not-a-number");
    let gate = CreditGate::load(store.clone());
    assert_eq!(gate.balance(), DEFAULT_CREDITS);
    // The fallback is persisted so the next load agrees
    assert_eq!(store.get(CREDITS_KEY), Some("2".to_string()));
}

#[test]
fn test_negative_stored_value_is_treated_as_absent() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "-3");
    let gate = CreditGate::load(store);
    assert_eq!(gate.balance(), DEFAULT_CREDITS);
}

// ============================================================================
// Spending Tests
// ============================================================================

#[test]
fn test_spend_decrements_by_exactly_one() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "5");
    let mut gate = CreditGate::load(store);

    assert_eq!(gate.try_spend(), AttemptOutcome::Spent);
    assert_eq!(gate.balance(), 4);
}

#[test]
fn test_n_spends_from_balance_b_end_at_b_minus_n() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "5");
    let mut gate = CreditGate::load(store);

    for expected in (2..=4).rev() {
        assert_eq!(gate.try_spend(), AttemptOutcome::Spent);
        assert_eq!(gate.balance(), expected);
        // Overlay never shows while credits remained before the attempt
        assert!(!gate.overlay_open());
    }
}

#[test]
fn test_every_spend_persists_before_returning() {
    let store = MemoryStore::new();
    let mut gate = CreditGate::load(store.clone());

    gate.try_spend();
    assert_eq!(store.get(CREDITS_KEY), Some("1".to_string()));
    gate.try_spend();
    assert_eq!(store.get(CREDITS_KEY), Some("0".to_string()));
}

#[test]
fn test_exhausted_spend_changes_nothing_but_the_overlay() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "0");
    let mut gate = CreditGate::load(store.clone());
    assert!(!gate.overlay_open());

    assert_eq!(gate.try_spend(), AttemptOutcome::Exhausted);
    assert_eq!(gate.balance(), 0);
    assert!(!gate.has_credits());
    assert!(gate.overlay_open());
    assert_eq!(store.get(CREDITS_KEY), Some("0".to_string()));
}

// ============================================================================
// Overlay Transition Tests
// ============================================================================

#[test]
fn test_cancel_closes_overlay_independent_of_balance() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "0");
    let mut gate = CreditGate::load(store);

    gate.try_spend();
    assert!(gate.overlay_open());

    gate.close_overlay();
    assert!(!gate.overlay_open());
    assert_eq!(gate.balance(), 0);
}

#[test]
fn test_overlay_can_be_opened_without_spending() {
    let mut gate = CreditGate::load(MemoryStore::new());
    gate.open_overlay();
    assert!(gate.overlay_open());
    assert_eq!(gate.balance(), DEFAULT_CREDITS);
}

// ============================================================================
// Reload Persistence Tests
// ============================================================================

#[test]
fn test_balance_survives_simulated_reload() {
    let store = MemoryStore::new();

    let mut gate = CreditGate::load(store.clone());
    gate.try_spend();
    assert_eq!(gate.balance(), 1);
    drop(gate);

    // Same session store, fresh gate: the last written value comes back
    let reloaded = CreditGate::load(store);
    assert_eq!(reloaded.balance(), 1);
}

#[test]
fn test_overlay_state_is_not_persisted() {
    let store = MemoryStore::new();

    let mut gate = CreditGate::load(store.clone());
    gate.open_overlay();
    drop(gate);

    let reloaded = CreditGate::load(store);
    assert!(!reloaded.overlay_open());
}

// ============================================================================
// Manual Reconciliation Tests
// ============================================================================

#[test]
fn test_grant_adds_and_persists() {
    let store = MemoryStore::new();
    let mut gate = CreditGate::load(store.clone());

    gate.grant(10);
    assert_eq!(gate.balance(), DEFAULT_CREDITS + 10);
    assert_eq!(store.get(CREDITS_KEY), Some("12".to_string()));
}

#[test]
fn test_grant_reopens_a_spendable_gate_after_exhaustion() {
    let mut store = MemoryStore::new();
    store.set(CREDITS_KEY, "0");
    let mut gate = CreditGate::load(store);

    assert_eq!(gate.try_spend(), AttemptOutcome::Exhausted);
    gate.grant(1);
    assert_eq!(gate.try_spend(), AttemptOutcome::Spent);
    assert_eq!(gate.balance(), 0);
}

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_grant_arg_absent() {
    let parsed = parse_grant_credits_arg(&args(&["zeroconflict"])).unwrap();
    assert_eq!(parsed, None);
}

#[test]
fn test_grant_arg_separate_value() {
    let parsed = parse_grant_credits_arg(&args(&["zeroconflict", "--grant-credits", "50"])).unwrap();
    assert_eq!(parsed, Some(50));
}

#[test]
fn test_grant_arg_equals_value() {
    let parsed = parse_grant_credits_arg(&args(&["zeroconflict", "--grant-credits=10"])).unwrap();
    assert_eq!(parsed, Some(10));
}

#[test]
fn test_grant_arg_missing_value_is_an_error() {
    assert!(parse_grant_credits_arg(&args(&["zeroconflict", "--grant-credits"])).is_err());
}

#[test]
fn test_grant_arg_invalid_value_is_an_error() {
    assert!(parse_grant_credits_arg(&args(&["zeroconflict", "--grant-credits", "lots"])).is_err());
}
