//! Closed option catalogs for the script form.
//!
//! Every fixed list the application offers — workplace pain points,
//! conversation roles, communication modes, and purchasable credit packs —
//! lives here as a closed enum. Each enum is the single source of truth for
//! its variant list (`ALL`) and display label, so form validation and script
//! generation can never drift out of sync with the UI.

use serde::{Deserialize, Serialize};

/// The workplace issue category the user wants to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PainPoint {
    UnfairWorkload,
    InterruptedDuringMeetings,
    PromotionDenied,
    UnclearResponsibilities,
    LackOfRecognition,
}

impl PainPoint {
    pub const ALL: [PainPoint; 5] = [
        PainPoint::UnfairWorkload,
        PainPoint::InterruptedDuringMeetings,
        PainPoint::PromotionDenied,
        PainPoint::UnclearResponsibilities,
        PainPoint::LackOfRecognition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PainPoint::UnfairWorkload => "Unfair workload",
            PainPoint::InterruptedDuringMeetings => "Interrupted during meetings",
            PainPoint::PromotionDenied => "Promotion denied",
            PainPoint::UnclearResponsibilities => "Unclear responsibilities",
            PainPoint::LackOfRecognition => "Lack of recognition",
        }
    }
}

impl std::fmt::Display for PainPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The counterpart the user will be talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Colleague,
    DirectReport,
    Hr,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Manager,
        Role::Colleague,
        Role::DirectReport,
        Role::Hr,
        Role::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Colleague => "Colleague",
            Role::DirectReport => "Direct Report",
            Role::Hr => "HR",
            Role::Other => "Other",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the message will be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Written,
    Verbal,
    Email,
    TeamsZoom,
    PhoneCall,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Written,
        Mode::Verbal,
        Mode::Email,
        Mode::TeamsZoom,
        Mode::PhoneCall,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Written => "Written",
            Mode::Verbal => "Verbal",
            Mode::Email => "Email",
            Mode::TeamsZoom => "Teams/Zoom",
            Mode::PhoneCall => "Phone call",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Purchasable credit pack. Prices are fixed in INR.
///
/// Buying a pack does not change the balance by itself; it only opens the
/// contact channel carrying the pack id (see [`crate::app::contact`]). The
/// balance increase happens out of band via `--grant-credits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditPack {
    Ten,
    Fifty,
    Hundred,
}

impl CreditPack {
    pub const ALL: [CreditPack; 3] = [CreditPack::Ten, CreditPack::Fifty, CreditPack::Hundred];

    pub fn credits(&self) -> u32 {
        match self {
            CreditPack::Ten => 10,
            CreditPack::Fifty => 50,
            CreditPack::Hundred => 100,
        }
    }

    pub fn price_inr(&self) -> u32 {
        match self {
            CreditPack::Ten => 199,
            CreditPack::Fifty => 399,
            CreditPack::Hundred => 799,
        }
    }

    /// Stable pack identifier carried in the contact message, e.g. `10-199`.
    pub fn id(&self) -> &'static str {
        match self {
            CreditPack::Ten => "10-199",
            CreditPack::Fifty => "50-399",
            CreditPack::Hundred => "100-799",
        }
    }

    pub fn label(&self) -> String {
        format!("{} Credits", self.credits())
    }
}

impl std::fmt::Display for CreditPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: \u{20b9}{}", self.label(), self.price_inr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_ids_encode_credits_and_price() {
        for pack in CreditPack::ALL {
            assert_eq!(
                pack.id(),
                format!("{}-{}", pack.credits(), pack.price_inr())
            );
        }
    }

    #[test]
    fn labels_are_unique_within_each_catalog() {
        let pains: std::collections::HashSet<_> =
            PainPoint::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(pains.len(), PainPoint::ALL.len());

        let roles: std::collections::HashSet<_> = Role::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(roles.len(), Role::ALL.len());

        let modes: std::collections::HashSet<_> = Mode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(modes.len(), Mode::ALL.len());
    }
}
