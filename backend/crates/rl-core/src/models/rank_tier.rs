use std::fmt;

/// Sentinel label for "no competitive rank known"
pub const UNRANKED: &str = "Unranked";

/// Current competitive tier label, e.g. "Diamond 2".
///
/// Never empty: anything blank collapses to [`UNRANKED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankTier(String);

impl RankTier {
    pub fn unranked() -> Self {
        Self(UNRANKED.to_string())
    }

    /// Build a tier from an upstream label, falling back to the sentinel
    /// when the label is missing or blank.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some(l) if !l.is_empty() => Self(l.to_string()),
            _ => Self::unranked(),
        }
    }

    pub fn is_unranked(&self) -> bool {
        self.0 == UNRANKED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RankTier {
    fn default() -> Self {
        Self::unranked()
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
