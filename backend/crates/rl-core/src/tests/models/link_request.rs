use crate::{CoreError, LinkRequest};

use googletest::prelude::*;

#[test]
fn given_complete_request_when_validated_then_ok() {
    let request = LinkRequest::new("alice", "Jett", "NA1");

    assert_that!(request.validate(), ok(anything()));
}

#[test]
fn given_missing_display_name_when_validated_then_validation_error_on_display_name() {
    let request = LinkRequest::new("alice", "  ", "NA1");

    let result = request.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "displayName"
    ));
}

#[test]
fn given_missing_tag_when_validated_then_validation_error_on_tag() {
    let request = LinkRequest::new("alice", "Jett", "");

    let result = request.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "tag"
    ));
}

#[test]
fn given_separator_only_tag_when_validated_then_validation_error() {
    let request = LinkRequest::new("alice", "Jett", "#");

    assert_that!(request.validate(), err(anything()));
}

#[test]
fn given_missing_username_when_validated_then_validation_error_on_username() {
    let request = LinkRequest::new("", "Jett", "NA1");

    let result = request.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "username"
    ));
}
