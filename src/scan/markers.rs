//! Processed-marker detection.
//!
//! The only durable memory this tool has is the shape of the filenames it
//! produces. A file renamed under a prefix-using scheme carries the prefix
//! as a marker, and a later run can recognize and skip it.

use crate::config::NamingScheme;

/// Check whether a filename indicates it was already renamed by a prior run.
///
/// Pure predicate, case-sensitive, operating on the stem (filename without
/// its final extension). An empty prefix always yields `false`: without a
/// prefix there is nothing to match against.
///
/// For `OriginalPrefixDesc` the marker `_{prefix}_` is matched anywhere in
/// the stem, so an original filename that coincidentally contains that
/// substring is treated as processed.
pub fn has_processed_marker(filename: &str, prefix: &str, scheme: NamingScheme) -> bool {
    if prefix.is_empty() {
        return false;
    }

    // A leading dot is a hidden file, not an extension separator
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };

    match scheme {
        NamingScheme::OriginalPrefixDesc => stem.contains(&format!("_{}_", prefix)),
        NamingScheme::PrefixDesc => stem.starts_with(&format!("{}_", prefix)),
        // No reliable marker exists for description-only names.
        NamingScheme::DescOnly => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_prefix_desc_marker() {
        assert!(has_processed_marker(
            "photo_IMGSCAN_cat.jpg",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
        assert!(!has_processed_marker(
            "photo.jpg",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
    }

    #[test]
    fn test_original_scheme_matches_anywhere_in_stem() {
        // Marker in the middle of the stem counts, even if it came from
        // the original filename rather than a previous run.
        assert!(has_processed_marker(
            "vacation_IMGSCAN_beach_sunset.png",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
    }

    #[test]
    fn test_original_scheme_requires_surrounding_underscores() {
        assert!(!has_processed_marker(
            "IMGSCAN_cat.jpg",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
        assert!(!has_processed_marker(
            "photoIMGSCANcat.jpg",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
    }

    #[test]
    fn test_prefix_desc_marker() {
        assert!(has_processed_marker(
            "IMGSCAN_cat.jpg",
            "IMGSCAN",
            NamingScheme::PrefixDesc
        ));
        assert!(!has_processed_marker(
            "photo_IMGSCAN_cat.jpg",
            "IMGSCAN",
            NamingScheme::PrefixDesc
        ));
    }

    #[test]
    fn test_empty_prefix_never_matches() {
        for scheme in [
            NamingScheme::OriginalPrefixDesc,
            NamingScheme::PrefixDesc,
            NamingScheme::DescOnly,
        ] {
            assert!(!has_processed_marker("photo__cat.jpg", "", scheme));
            assert!(!has_processed_marker("_cat.jpg", "", scheme));
        }
    }

    #[test]
    fn test_desc_only_never_matches() {
        assert!(!has_processed_marker(
            "IMGSCAN_cat.jpg",
            "IMGSCAN",
            NamingScheme::DescOnly
        ));
        assert!(!has_processed_marker(
            "photo_IMGSCAN_cat.jpg",
            "IMGSCAN",
            NamingScheme::DescOnly
        ));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!has_processed_marker(
            "photo_imgscan_cat.jpg",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
    }

    #[test]
    fn test_leading_dot_is_not_an_extension_separator() {
        // The whole name is the stem when its only dot is the first char
        assert!(has_processed_marker(
            "._IMGSCAN_cat",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
        assert!(!has_processed_marker(
            ".hidden",
            "hidden",
            NamingScheme::PrefixDesc
        ));
    }

    #[test]
    fn test_extension_is_stripped_before_matching() {
        // The marker must appear in the stem, not in the extension.
        assert!(!has_processed_marker(
            "photo._IMGSCAN_jpg",
            "IMGSCAN",
            NamingScheme::OriginalPrefixDesc
        ));
    }
}
