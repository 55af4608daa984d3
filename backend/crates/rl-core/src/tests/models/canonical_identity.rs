use crate::{CanonicalIdentity, strip_tag_separator};

use googletest::prelude::*;

#[test]
fn given_tag_with_leading_separator_when_stripped_then_separator_removed() {
    assert_that!(strip_tag_separator("#NA1"), eq("NA1"));
}

#[test]
fn given_bare_tag_when_stripped_then_unchanged() {
    assert_that!(strip_tag_separator("NA1"), eq("NA1"));
}

#[test]
fn given_separator_inside_tag_when_stripped_then_only_leading_removed() {
    assert_that!(strip_tag_separator("#N#A"), eq("N#A"));
}

#[test]
fn given_canonical_identity_when_bare_tag_then_tag_is_not_mutated() {
    let identity = CanonicalIdentity::new("Jett", "#NA1");

    assert_that!(identity.bare_tag(), eq("NA1"));
    assert_that!(identity.tag, eq("#NA1"));
}
