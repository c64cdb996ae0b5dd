//! Shared path and naming helpers.
//!
//! ## Path Helpers
//!
//! All paths inside the pipeline are `/`-separated and root-relative:
//! - `parent_dir`, `file_name`, `segments`, `path_depth`
//! - `file_stem`, `file_extension`
//!
//! ## Casing
//!
//! `casing_of` is the single casing detector shared by the file classifier
//! and the naming extractors.

use std::fmt::Display;

use super::directory::NamingPattern;

// =============================================================================
// Path Helpers
// =============================================================================

/// Root directory key
pub const ROOT_DIR: &str = "";

/// Normalize separators: `\` becomes `/`, `.` and empty segments are dropped.
///
/// `..` segments are kept; resolving them is the inventory's job.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Parent directory of a root-relative path (`""` for root-level entries)
#[inline]
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => ROOT_DIR,
    }
}

/// Last segment of a path
#[inline]
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Non-empty path segments
#[inline]
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Count of non-empty path segments
#[inline]
pub fn path_depth(path: &str) -> usize {
    segments(path).count()
}

/// Every proper ancestor of a path, nearest first (root excluded)
pub fn ancestors(path: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut current = parent_dir(path);
    while !current.is_empty() {
        out.push(current);
        current = parent_dir(current);
    }
    out
}

/// Whether `path` equals `prefix` or lies beneath it on a segment boundary
#[inline]
pub fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    prefix.is_empty()
        || path == prefix
        || (path.starts_with(prefix) && path.as_bytes().get(prefix.len()) == Some(&b'/'))
}

/// Basename up to the first dot, ignoring leading dots
#[inline]
pub fn file_stem(name: &str) -> &str {
    let trimmed = name.trim_start_matches('.');
    match trimmed.find('.') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    }
}

/// Lowercase extension after the last dot, empty when absent
#[inline]
pub fn file_extension(name: &str) -> String {
    let trimmed = name.trim_start_matches('.');
    match trimmed.rfind('.') {
        Some(idx) => trimmed[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

// =============================================================================
// Casing
// =============================================================================

/// Casing of a single identifier-like name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    Pascal,
    Camel,
    Kebab,
    Snake,
    /// Single all-lowercase word; fits several conventions
    Lower,
    Unknown,
}

impl Casing {
    /// The naming pattern this casing counts toward, if unambiguous
    pub fn naming_pattern(self) -> Option<NamingPattern> {
        match self {
            Self::Pascal => Some(NamingPattern::PascalCase),
            Self::Camel => Some(NamingPattern::CamelCase),
            Self::Kebab => Some(NamingPattern::KebabCase),
            Self::Snake => Some(NamingPattern::SnakeCase),
            Self::Lower | Self::Unknown => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pascal => "PascalCase",
            Self::Camel => "camelCase",
            Self::Kebab => "kebab-case",
            Self::Snake => "snake_case",
            Self::Lower => "lowercase",
            Self::Unknown => "unknown",
        }
    }
}

fn is_lower_word(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

/// Detect the casing of a name. Leading underscores are ignored.
pub fn casing_of(name: &str) -> Casing {
    let name = name.trim_start_matches('_');
    let Some(first) = name.chars().next() else {
        return Casing::Unknown;
    };
    if !first.is_ascii_alphabetic() {
        return Casing::Unknown;
    }

    let has_dash = name.contains('-');
    let has_underscore = name.contains('_');

    if has_dash && !has_underscore {
        return if name.split('-').all(is_lower_word) {
            Casing::Kebab
        } else {
            Casing::Unknown
        };
    }
    if has_underscore && !has_dash {
        return if name.split('_').all(is_lower_word) {
            Casing::Snake
        } else {
            Casing::Unknown
        };
    }
    if has_dash || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Casing::Unknown;
    }

    let has_lower = name.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
    match (first.is_ascii_uppercase(), has_lower, has_upper) {
        (true, true, _) => Casing::Pascal,
        (false, _, true) => Casing::Camel,
        (false, _, false) => Casing::Lower,
        (true, false, _) => Casing::Unknown,
    }
}

/// Split a name into lowercase word tokens on separators and camel humps
pub fn name_tokens(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

// =============================================================================
// Label Formatting
// =============================================================================

/// Join label fragments, spacing CJK text from a following ASCII word.
///
/// `join_label("支付相关", "API 服务")` yields `"支付相关 API 服务"`.
pub fn join_label(head: &str, tail: &str) -> String {
    let needs_space = matches!(
        (head.chars().last(), tail.chars().next()),
        (Some(h), Some(t)) if !h.is_ascii() && t.is_ascii_alphanumeric()
    );
    if needs_space {
        format!("{} {}", head, tail)
    } else {
        format!("{}{}", head, tail)
    }
}

// =============================================================================
// Logging Helpers
// =============================================================================

/// Filter an iterator of Results, logging errors at debug level before discarding.
///
/// Use this instead of `.filter_map(|r| r.ok())` when you want visibility into
/// what errors are being discarded.
pub fn log_filter_error<T, E: Display>(result: Result<T, E>, context: &str) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!("{}: {}", context, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./src//pages/"), "src/pages");
        assert_eq!(normalize_path("src\\utils\\a.ts"), "src/utils/a.ts");
        assert_eq!(normalize_path("/abs/x.ts"), "abs/x.ts");
        assert_eq!(normalize_path("a/../b.ts"), "a/../b.ts");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_parent_and_name() {
        assert_eq!(parent_dir("src/pages/Home/page.tsx"), "src/pages/Home");
        assert_eq!(parent_dir("README.md"), "");
        assert_eq!(file_name("src/pages/Home/page.tsx"), "page.tsx");
        assert_eq!(file_name("README.md"), "README.md");
    }

    #[test]
    fn test_depth_and_ancestors() {
        assert_eq!(path_depth("src/pages/Home"), 3);
        assert_eq!(path_depth(""), 0);
        assert_eq!(ancestors("a/b/c.ts"), vec!["a/b", "a"]);
        assert!(ancestors("c.ts").is_empty());
    }

    #[test]
    fn test_is_under() {
        assert!(is_under("src/features/auth", "src/features"));
        assert!(is_under("src/features", "src/features/"));
        assert!(!is_under("src/features-old", "src/features"));
        assert!(is_under("anything", ""));
    }

    #[test]
    fn test_stem_and_extension() {
        assert_eq!(file_stem("Button.test.tsx"), "Button");
        assert_eq!(file_stem(".eslintrc.js"), "eslintrc");
        assert_eq!(file_stem("Makefile"), "Makefile");
        assert_eq!(file_extension("index.D.TS"), "ts");
        assert_eq!(file_extension(".gitignore"), "");
        assert_eq!(file_extension("Dockerfile"), "");
    }

    #[test]
    fn test_casing_of() {
        assert_eq!(casing_of("UserProfile"), Casing::Pascal);
        assert_eq!(casing_of("useAuth"), Casing::Camel);
        assert_eq!(casing_of("user-profile"), Casing::Kebab);
        assert_eq!(casing_of("user_profile"), Casing::Snake);
        assert_eq!(casing_of("index"), Casing::Lower);
        assert_eq!(casing_of("README"), Casing::Unknown);
        assert_eq!(casing_of("MAX_SIZE"), Casing::Unknown);
        assert_eq!(casing_of("_app"), Casing::Lower);
        assert_eq!(casing_of("404"), Casing::Unknown);
        assert_eq!(casing_of(""), Casing::Unknown);
    }

    #[test]
    fn test_name_tokens() {
        assert_eq!(name_tokens("insuranceClaims"), vec!["insurance", "claims"]);
        assert_eq!(name_tokens("loan-apply_v2"), vec!["loan", "apply", "v2"]);
        assert_eq!(name_tokens("PaymentAPI"), vec!["payment", "api"]);
    }

    #[test]
    fn test_join_label_spacing() {
        assert_eq!(join_label("支付相关", "API 服务"), "支付相关 API 服务");
        assert_eq!(join_label("保险相关", "组件"), "保险相关组件");
        assert_eq!(join_label("", "组件"), "组件");
    }
}
