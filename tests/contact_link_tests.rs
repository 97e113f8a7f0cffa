//! Contact Link Construction Tests
//!
//! Tests for the outbound mail links opened by the purchase overlay and the
//! footer: addressing, percent-encoding, and pack identification.

use zeroconflict::app::catalog::CreditPack;
use zeroconflict::app::contact::{
    payment_request_mailto, support_mailto, INSTAGRAM_URL, SITE_URL, SUPPORT_EMAIL,
};

#[test]
fn test_payment_request_is_addressed_to_the_services_desk() {
    for pack in CreditPack::ALL {
        let link = payment_request_mailto(pack);
        assert!(
            link.starts_with("mailto:services@kryptonpath.com?subject="),
            "unexpected link: {}",
            link
        );
    }
}

#[test]
fn test_payment_request_subject_is_fixed_and_encoded() {
    let link = payment_request_mailto(CreditPack::Ten);
    assert!(link.contains("subject=ZeroConflict%20Payment%20Link%20Request"));
}

#[test]
fn test_payment_request_body_names_the_chosen_pack() {
    // NON_ALPHANUMERIC encoding: space -> %20, '-' -> %2D, '.' -> %2E
    let cases = [
        (CreditPack::Ten, "10%2D199"),
        (CreditPack::Fifty, "50%2D399"),
        (CreditPack::Hundred, "100%2D799"),
    ];
    for (pack, encoded_id) in cases {
        let link = payment_request_mailto(pack);
        assert!(
            link.contains(&format!(
                "body=I%20want%20to%20buy%20the%20{}%20pack%2E",
                encoded_id
            )),
            "pack id not in body: {}",
            link
        );
    }
}

#[test]
fn test_payment_request_carries_no_raw_spaces() {
    for pack in CreditPack::ALL {
        assert!(!payment_request_mailto(pack).contains(' '));
    }
}

#[test]
fn test_support_mailto_is_plain() {
    assert_eq!(support_mailto(), format!("mailto:{}", SUPPORT_EMAIL));
}

#[test]
fn test_site_and_instagram_links_are_https() {
    assert!(SITE_URL.starts_with("https://"));
    assert!(INSTAGRAM_URL.starts_with("https://"));
}
