use crate::{RankTier, UNRANKED};

use googletest::prelude::*;

#[test]
fn given_label_when_from_label_then_label_kept() {
    let tier = RankTier::from_label(Some("Diamond 2"));

    assert_that!(tier.as_str(), eq("Diamond 2"));
    assert_that!(tier.is_unranked(), eq(false));
}

#[test]
fn given_missing_label_when_from_label_then_unranked() {
    assert_that!(RankTier::from_label(None).as_str(), eq(UNRANKED));
}

#[test]
fn given_blank_label_when_from_label_then_unranked() {
    assert_that!(RankTier::from_label(Some("   ")).as_str(), eq(UNRANKED));
}

#[test]
fn given_default_tier_then_unranked() {
    assert_that!(RankTier::default().is_unranked(), eq(true));
}

#[test]
fn given_tier_when_displayed_then_plain_label() {
    let tier = RankTier::from_label(Some("Gold 1"));

    assert_that!(tier.to_string(), eq("Gold 1"));
}
