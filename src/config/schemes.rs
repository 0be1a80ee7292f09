//! Naming scheme definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Available naming schemes for renamed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingScheme {
    /// `{original}_{prefix}_{description}.ext` (default).
    #[default]
    OriginalPrefixDesc,
    /// `{prefix}_{description}.ext`.
    PrefixDesc,
    /// `{description}.ext`.
    DescOnly,
}

impl NamingScheme {
    /// Whether the scheme embeds the prefix into the new filename.
    pub fn uses_prefix(&self) -> bool {
        matches!(
            self,
            NamingScheme::OriginalPrefixDesc | NamingScheme::PrefixDesc
        )
    }

    /// Whether files produced under this scheme can be recognized as
    /// processed on a later run. `DescOnly` leaves no marker at all.
    pub fn supports_skip_detection(&self) -> bool {
        !matches!(self, NamingScheme::DescOnly)
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingScheme::OriginalPrefixDesc => write!(f, "original_prefix_desc"),
            NamingScheme::PrefixDesc => write!(f, "prefix_desc"),
            NamingScheme::DescOnly => write!(f, "desc_only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_config_values() {
        assert_eq!(
            NamingScheme::OriginalPrefixDesc.to_string(),
            "original_prefix_desc"
        );
        assert_eq!(NamingScheme::PrefixDesc.to_string(), "prefix_desc");
        assert_eq!(NamingScheme::DescOnly.to_string(), "desc_only");
    }

    #[test]
    fn test_skip_detection_support() {
        assert!(NamingScheme::OriginalPrefixDesc.supports_skip_detection());
        assert!(NamingScheme::PrefixDesc.supports_skip_detection());
        assert!(!NamingScheme::DescOnly.supports_skip_detection());
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        assert!(serde_json::from_str::<NamingScheme>(r#""prefix_only""#).is_err());
        assert_eq!(
            serde_json::from_str::<NamingScheme>(r#""desc_only""#).unwrap(),
            NamingScheme::DescOnly
        );
    }
}
