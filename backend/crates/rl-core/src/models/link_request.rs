use crate::{CoreError, Result as CoreResult, strip_tag_separator};

/// Input to the account linker. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub username: String,
    pub claimed_display_name: String,
    pub claimed_tag: String,
}

impl LinkRequest {
    pub fn new(
        username: impl Into<String>,
        claimed_display_name: impl Into<String>,
        claimed_tag: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            claimed_display_name: claimed_display_name.into(),
            claimed_tag: claimed_tag.into(),
        }
    }

    /// Reject blank fields before any upstream call is made.
    ///
    /// A tag consisting only of the separator counts as blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.claimed_display_name.trim().is_empty() {
            return Err(CoreError::validation(
                "displayName",
                "Display name or tag is missing",
            ));
        }

        if strip_tag_separator(self.claimed_tag.trim()).is_empty() {
            return Err(CoreError::validation("tag", "Display name or tag is missing"));
        }

        if self.username.trim().is_empty() {
            return Err(CoreError::validation("username", "Username is missing"));
        }

        Ok(())
    }
}
