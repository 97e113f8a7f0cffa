//! Selection state and the templated script generator.
//!
//! Generation is a pure function of the current [`Selection`]: the same
//! inputs always produce the same three scripts, in the same order. There is
//! no randomness and no hidden state, so the UI can regenerate freely
//! without the displayed text drifting.

use serde::{Deserialize, Serialize};

use super::catalog::{Mode, PainPoint, Role};

/// Number of scripts produced per generation event.
pub const SCRIPT_COUNT: usize = 3;

/// Per-template sample text substituted when the user left the context
/// field empty. Substitution happens at generation time only; the stored
/// selection keeps its empty context.
pub const CONTEXT_PLACEHOLDERS: [&str; SCRIPT_COUNT] = [
    "Describe your situation briefly here.",
    "Give short context.",
    "Explain what happened clearly.",
];

/// The four form inputs. The three dropdowns are `None` until the user
/// picks a value; the free-text context is unconstrained and optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub pain_point: Option<PainPoint>,
    pub role: Option<Role>,
    pub mode: Option<Mode>,
    pub context: String,
}

impl Selection {
    /// A generation attempt may only proceed once all three dropdowns are
    /// set. The context field never blocks generation.
    pub fn is_complete(&self) -> bool {
        self.pain_point.is_some() && self.role.is_some() && self.mode.is_some()
    }
}

/// Produce the three phrasing suggestions for a completed selection.
///
/// Returns `None` when the selection is incomplete. Output order is fixed:
/// the direct approach, the polite approach, and the solution-focused
/// approach.
pub fn generate_scripts(selection: &Selection) -> Option<[String; SCRIPT_COUNT]> {
    let (pain_point, role, mode) = match (selection.pain_point, selection.role, selection.mode) {
        (Some(pain_point), Some(role), Some(mode)) => (pain_point, role, mode),
        _ => return None,
    };

    let sample = |slot: usize| -> &str {
        if selection.context.is_empty() {
            CONTEXT_PLACEHOLDERS[slot]
        } else {
            &selection.context
        }
    };

    Some([
        format!(
            "In a professional, respectful way, address \"{}\" with your {} via {}. Use this sample: \"{}\"",
            pain_point,
            role,
            mode,
            sample(0)
        ),
        format!(
            "Politely bring up \"{}\" in a {} conversation with your {}. For instance: \"{}\"",
            pain_point,
            mode,
            role,
            sample(1)
        ),
        format!(
            "Express your thoughts on \"{}\" to your {} through {}, focusing on solutions. Ex: \"{}\"",
            pain_point,
            role,
            mode,
            sample(2)
        ),
    ])
}
