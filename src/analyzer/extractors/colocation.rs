//! Companion files (styles, tests, types) living next to primary files

use crate::types::{CoLocation, DirectoryHistogram, FileCategory};

/// Stems that mark a directory entry point
const INDEX_STEMS: &[&str] = &["index", "mod", "__init__", "main"];

/// Co-location flags for one directory's direct files.
///
/// A companion kind counts only when at least one non-companion file is
/// present in the same directory.
pub fn co_location(histogram: &DirectoryHistogram) -> CoLocation {
    let has_primary = histogram
        .counts
        .iter()
        .any(|(category, count)| !category.is_companion() && *count > 0);
    if !has_primary {
        return CoLocation::default();
    }

    CoLocation {
        styles: histogram.count(FileCategory::Style) > 0,
        tests: histogram.count(FileCategory::Test) > 0,
        types: histogram.count(FileCategory::Type) > 0,
    }
}

/// Whether any of the stems is an entry-point name
pub fn has_index_file<'a>(stems: impl IntoIterator<Item = &'a str>) -> bool {
    stems.into_iter().any(|stem| INDEX_STEMS.contains(&stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(categories: &[FileCategory]) -> DirectoryHistogram {
        let mut h = DirectoryHistogram::new("dir");
        for category in categories {
            h.record(*category);
        }
        h
    }

    #[test]
    fn test_companions_next_to_component() {
        let h = histogram(&[FileCategory::Component, FileCategory::Test, FileCategory::Style]);
        let c = co_location(&h);
        assert!(c.tests);
        assert!(c.styles);
        assert!(!c.types);
        assert!(c.any());
    }

    #[test]
    fn test_companions_alone_do_not_count() {
        let h = histogram(&[FileCategory::Test, FileCategory::Test, FileCategory::Type]);
        assert_eq!(co_location(&h), CoLocation::default());
        assert_eq!(co_location(&histogram(&[])), CoLocation::default());
    }

    #[test]
    fn test_index_detection() {
        assert!(has_index_file(["Button", "index"]));
        assert!(has_index_file(["__init__"]));
        assert!(!has_index_file(["Button", "Button"]));
    }
}
