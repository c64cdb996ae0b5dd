//! Stage 2: basename casing. Confidence is capped at `medium`.

use super::fast_path::is_hook_name;
use super::parts::PathParts;
use crate::types::{Casing, FileCategory, casing_of};

/// Guess from the stem's casing; only source files are considered
pub fn classify_by_naming(parts: &PathParts) -> Option<(FileCategory, Casing)> {
    if !parts.is_source() {
        return None;
    }

    let casing = casing_of(parts.stem);
    let category = match casing {
        Casing::Pascal if parts.is_jsx() => FileCategory::Component,
        Casing::Pascal => FileCategory::Type,
        Casing::Camel if is_hook_name(parts.stem) => FileCategory::Hook,
        Casing::Camel | Casing::Lower | Casing::Snake => FileCategory::Utility,
        Casing::Kebab if parts.is_jsx() => FileCategory::Component,
        Casing::Kebab => FileCategory::Utility,
        Casing::Unknown => return None,
    };
    Some((category, casing))
}

/// Casings whose mapping leaves real doubt about the role
pub fn is_ambiguous(parts: &PathParts, casing: Casing) -> bool {
    match casing {
        Casing::Lower => true,
        Casing::Pascal => !parts.is_jsx(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naming(path: &str) -> Option<FileCategory> {
        classify_by_naming(&PathParts::parse(path)).map(|(c, _)| c)
    }

    #[test]
    fn test_casing_rules() {
        assert_eq!(naming("src/Widget.ts"), Some(FileCategory::Type));
        assert_eq!(naming("src/format.ts"), Some(FileCategory::Utility));
        assert_eq!(naming("src/formatDate.ts"), Some(FileCategory::Utility));
        assert_eq!(naming("src/date-picker.vue"), Some(FileCategory::Component));
        assert_eq!(naming("src/date-picker.ts"), Some(FileCategory::Utility));
        assert_eq!(naming("app/data_loader.py"), Some(FileCategory::Utility));
    }

    #[test]
    fn test_non_source_and_unknown() {
        assert_eq!(naming("docs/Guide.md"), None);
        assert_eq!(naming("src/README.ts"), None);
        assert_eq!(naming("src/404.ts"), None);
    }

    #[test]
    fn test_ambiguity() {
        let index = PathParts::parse("components/Button/index.ts");
        assert!(is_ambiguous(&index, Casing::Lower));
        let widget = PathParts::parse("src/Widget.tsx");
        assert!(!is_ambiguous(&widget, Casing::Pascal));
    }
}
