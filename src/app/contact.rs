//! Outbound contact link construction.
//!
//! There is no payment backend. Buying a pack only opens a pre-addressed
//! mail to the services desk naming the chosen pack; the actual top-up is
//! reconciled manually (see `--grant-credits`). Links are fire-and-forget:
//! nothing is read back from the opened context.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::catalog::CreditPack;

pub const SUPPORT_EMAIL: &str = "services@kryptonpath.com";
pub const SITE_URL: &str = "https://kryptonpath.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/kryptonpath";

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Mail link requesting a payment link for the chosen pack, e.g.
/// `mailto:services@kryptonpath.com?subject=...&body=...%2010-199%20...`.
pub fn payment_request_mailto(pack: CreditPack) -> String {
    let subject = "ZeroConflict Payment Link Request";
    let body = format!("I want to buy the {} pack.", pack.id());
    format!(
        "mailto:{}?subject={}&body={}",
        SUPPORT_EMAIL,
        encode(subject),
        encode(&body)
    )
}

/// Plain support mail link used by the overlay help text and the footer.
pub fn support_mailto() -> String {
    format!("mailto:{}", SUPPORT_EMAIL)
}
