//! Canonical game identity as reported by the identity authority.

/// Separator players type between name and tag ("Jett#NA1").
/// It is display formatting only and never part of the tag itself.
pub const TAG_SEPARATOR: char = '#';

/// Strip a single leading tag separator, if present.
pub fn strip_tag_separator(tag: &str) -> &str {
    tag.strip_prefix(TAG_SEPARATOR).unwrap_or(tag)
}

/// The authoritative (display name, tag) pair.
///
/// Values are trusted exactly as the upstream returned them; casing and
/// formatting are never re-normalized locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalIdentity {
    pub display_name: String,
    pub tag: String,
}

impl CanonicalIdentity {
    pub fn new(display_name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            tag: tag.into(),
        }
    }

    /// Tag without any leading separator, as path-based APIs expect it
    pub fn bare_tag(&self) -> &str {
        strip_tag_separator(&self.tag)
    }
}
