//! Stage 1: fast-path rules on name, extension and ancestor directories.
//!
//! Rules are evaluated in registry order and the first match wins with
//! `high` confidence. Name-based markers come before ancestor-based ones
//! inside each rule, but a rule earlier in the registry always beats a
//! later one.

use super::parts::{CONFIG_EXTENSIONS, PathParts, STYLE_EXTENSIONS};
use crate::types::{Casing, FileCategory, casing_of};

/// A single fast-path rule
pub struct FastRule {
    pub name: &'static str,
    pub category: FileCategory,
    pub matches: fn(&PathParts) -> bool,
}

/// Ordered rule registry
pub const FAST_RULES: &[FastRule] = &[
    FastRule {
        name: "test-marker",
        category: FileCategory::Test,
        matches: is_test,
    },
    FastRule {
        name: "style-extension",
        category: FileCategory::Style,
        matches: is_style,
    },
    FastRule {
        name: "config-file",
        category: FileCategory::Config,
        matches: is_config,
    },
    FastRule {
        name: "type-declaration",
        category: FileCategory::Type,
        matches: is_type,
    },
    FastRule {
        name: "enum-file",
        category: FileCategory::Enum,
        matches: is_enum,
    },
    FastRule {
        name: "constant-file",
        category: FileCategory::Constant,
        matches: is_constant,
    },
    FastRule {
        name: "hook-file",
        category: FileCategory::Hook,
        matches: is_hook,
    },
    FastRule {
        name: "layout-file",
        category: FileCategory::Layout,
        matches: is_layout,
    },
    FastRule {
        name: "page-filename",
        category: FileCategory::Page,
        matches: is_page_filename,
    },
    FastRule {
        name: "page-ancestor",
        category: FileCategory::Page,
        matches: is_under_pages,
    },
    FastRule {
        name: "route-file",
        category: FileCategory::Route,
        matches: is_route,
    },
    FastRule {
        name: "middleware-file",
        category: FileCategory::Middleware,
        matches: is_middleware,
    },
    FastRule {
        name: "controller-file",
        category: FileCategory::Controller,
        matches: is_controller,
    },
    FastRule {
        name: "repository-file",
        category: FileCategory::Repository,
        matches: is_repository,
    },
    FastRule {
        name: "model-file",
        category: FileCategory::Model,
        matches: is_model,
    },
    FastRule {
        name: "service-file",
        category: FileCategory::Service,
        matches: is_service,
    },
    FastRule {
        name: "component-file",
        category: FileCategory::Component,
        matches: is_component,
    },
    FastRule {
        name: "utility-file",
        category: FileCategory::Utility,
        matches: is_utility,
    },
];

/// Build and package manifests that count as configuration
const MANIFEST_FILES: &[&str] = &[
    "package.json",
    "composer.json",
    "go.mod",
    "go.sum",
    "pom.xml",
    "build.gradle",
    "gemfile",
    "requirements.txt",
    "dockerfile",
    "makefile",
    "procfile",
];

const PAGE_DIRS: &[&str] = &["pages", "views", "screens"];
const COMPONENT_DIRS: &[&str] = &["components", "component", "widgets", "ui"];

/// First matching rule, if any
pub fn first_match(parts: &PathParts) -> Option<&'static FastRule> {
    FAST_RULES.iter().find(|rule| (rule.matches)(parts))
}

/// `use` followed by an uppercase letter, camelCase overall
pub fn is_hook_name(stem: &str) -> bool {
    stem.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
        && casing_of(stem) == Casing::Camel
}

fn is_test(p: &PathParts) -> bool {
    p.has_marker(&["test", "spec", "e2e"])
        || p.stem_is(&["test", "tests"])
        || p.lower_stem.starts_with("test_")
        || p.stem_ends_with(&["_test", "_spec"])
        || (p.stem.len() > 4 && ["Test", "Tests", "Spec"].iter().any(|s| p.stem.ends_with(s)))
        || p.has_ancestor(&["__tests__", "tests", "test", "spec", "specs", "e2e"])
}

fn is_style(p: &PathParts) -> bool {
    p.has_extension(STYLE_EXTENSIONS) || p.has_marker(&["styles", "style", "styled"])
}

fn is_config(p: &PathParts) -> bool {
    p.is_dotfile()
        || p.lower_name.contains("config.")
        || p.has_extension(CONFIG_EXTENSIONS)
        || MANIFEST_FILES.contains(&p.lower_name.as_str())
        || p.lower_name.starts_with("dockerfile")
        || p.source_under(&["config", "configs"])
}

fn is_type(p: &PathParts) -> bool {
    p.lower_name.ends_with(".d.ts")
        || p.has_marker(&["types", "type", "interface", "interfaces", "dto"])
        || p.stem_is(&["types", "typings", "interfaces"])
        || (p.is_script() && p.has_ancestor(&["types", "typings", "interfaces", "@types"]))
}

fn is_enum(p: &PathParts) -> bool {
    p.has_marker(&["enum", "enums"]) || p.stem_is(&["enums"]) || p.source_under(&["enums"])
}

fn is_constant(p: &PathParts) -> bool {
    p.has_marker(&["constants", "constant", "const"])
        || p.stem_is(&["constants", "consts", "const"])
        || p.source_under(&["constants", "consts"])
}

fn is_hook(p: &PathParts) -> bool {
    p.is_script() && (is_hook_name(p.stem) || p.has_ancestor(&["hooks", "composables"]))
}

fn is_layout(p: &PathParts) -> bool {
    p.stem_is(&["layout"])
        || (p.stem.len() > "Layout".len() && p.stem.ends_with("Layout"))
        || p.source_under(&["layouts"])
}

fn is_page_filename(p: &PathParts) -> bool {
    p.is_jsx() && p.stem_is(&["page"])
}

fn is_under_pages(p: &PathParts) -> bool {
    if !p.is_jsx() {
        return false;
    }
    match (
        p.nearest_ancestor(PAGE_DIRS),
        p.nearest_ancestor(COMPONENT_DIRS),
    ) {
        (Some(page), Some(component)) => page > component,
        (Some(_), None) => true,
        _ => false,
    }
}

fn is_route(p: &PathParts) -> bool {
    p.has_marker(&["routes", "route", "router"])
        || p.stem_is(&["routes", "router", "routing"])
        || p.source_under(&["routes", "router", "routers"])
}

fn is_middleware(p: &PathParts) -> bool {
    p.lower_stem.contains("middleware") || p.source_under(&["middleware", "middlewares"])
}

fn is_controller(p: &PathParts) -> bool {
    p.stem_ends_with(&["controller"])
        || p.has_marker(&["controller"])
        || p.source_under(&["controllers", "controller"])
}

fn is_repository(p: &PathParts) -> bool {
    p.stem_ends_with(&["repository", "repo"])
        || p.has_marker(&["repository", "repo"])
        || p.source_under(&["repositories", "repository", "repos", "dao"])
}

fn is_model(p: &PathParts) -> bool {
    p.has_marker(&["model", "entity", "schema"])
        || p.stem_ends_with(&["model"])
        || p.source_under(&["models", "model", "entities", "schemas"])
}

fn is_service(p: &PathParts) -> bool {
    p.has_marker(&["service", "api"])
        || p.stem_ends_with(&["service", "client"])
        || p.stem_is(&["api"])
        || p.source_under(&["services", "service", "api", "apis"])
}

fn is_component(p: &PathParts) -> bool {
    p.is_jsx()
}

fn is_utility(p: &PathParts) -> bool {
    p.stem_is(&["util", "utils", "helper", "helpers", "utility", "utilities"])
        || p.stem_ends_with(&["utils", "helpers"])
        || p.has_marker(&["util", "utils", "helper"])
        || p.source_under(&["utils", "util", "helpers", "helper"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(path: &str) -> Option<(&'static str, FileCategory)> {
        let parts = PathParts::parse(path);
        first_match(&parts).map(|r| (r.name, r.category))
    }

    #[test]
    fn test_registry_has_eighteen_rules() {
        assert_eq!(FAST_RULES.len(), 18);
    }

    #[test]
    fn test_test_markers() {
        for path in [
            "components/Button/Button.test.tsx",
            "src/api/user.spec.ts",
            "pkg/server/handler_test.go",
            "tests/conftest.py",
            "app/test_views.py",
            "src/main/java/UserServiceTest.java",
            "src/__tests__/App.tsx",
        ] {
            assert_eq!(rule_for(path).map(|r| r.1), Some(FileCategory::Test), "{}", path);
        }
        assert_ne!(rule_for("src/Contest.tsx").map(|r| r.1), Some(FileCategory::Test));
    }

    #[test]
    fn test_style_and_config() {
        assert_eq!(rule_for("src/App.module.css").unwrap().0, "style-extension");
        assert_eq!(rule_for("src/Button.styles.ts").unwrap().1, FileCategory::Style);
        assert_eq!(rule_for(".eslintrc.js").unwrap().1, FileCategory::Config);
        assert_eq!(rule_for("vite.config.ts").unwrap().1, FileCategory::Config);
        assert_eq!(rule_for("tsconfig.json").unwrap().1, FileCategory::Config);
        assert_eq!(rule_for("docker-compose.yml").unwrap().1, FileCategory::Config);
        assert_eq!(rule_for("service-a/Dockerfile").unwrap().1, FileCategory::Config);
        assert_eq!(rule_for("package.json").unwrap().1, FileCategory::Config);
    }

    #[test]
    fn test_type_enum_constant() {
        assert_eq!(rule_for("src/env.d.ts").unwrap().1, FileCategory::Type);
        assert_eq!(rule_for("src/user.types.ts").unwrap().1, FileCategory::Type);
        assert_eq!(rule_for("src/types/user.ts").unwrap().1, FileCategory::Type);
        assert_eq!(rule_for("src/status.enum.ts").unwrap().1, FileCategory::Enum);
        assert_eq!(rule_for("src/enums/Role.ts").unwrap().1, FileCategory::Enum);
        assert_eq!(rule_for("src/constants.ts").unwrap().1, FileCategory::Constant);
        assert_eq!(rule_for("src/constants/api.ts").unwrap().1, FileCategory::Constant);
    }

    #[test]
    fn test_hooks() {
        assert_eq!(rule_for("src/useAuth.ts").unwrap().1, FileCategory::Hook);
        assert_eq!(rule_for("src/hooks/auth.ts").unwrap().1, FileCategory::Hook);
        assert_ne!(rule_for("src/useless.ts").map(|r| r.1), Some(FileCategory::Hook));
        assert!(is_hook_name("useWindowSize"));
        assert!(!is_hook_name("user"));
        assert!(!is_hook_name("use"));
    }

    #[test]
    fn test_pages_and_components() {
        assert_eq!(rule_for("src/pages/Home/page.tsx").unwrap().0, "page-filename");
        assert_eq!(rule_for("app/dashboard/page.tsx").unwrap().0, "page-filename");
        assert_eq!(rule_for("src/views/About.vue").unwrap().0, "page-ancestor");
        assert_eq!(
            rule_for("src/pages/Home/components/Header.tsx").unwrap().1,
            FileCategory::Component
        );
        assert_eq!(
            rule_for("src/pages/Home/ui/Header.tsx").unwrap().1,
            FileCategory::Component
        );
        assert_eq!(rule_for("src/ui/pages/Home.tsx").unwrap().0, "page-ancestor");
        assert_eq!(
            rule_for("src/components/Button/Button.tsx").unwrap().1,
            FileCategory::Component
        );
        assert_eq!(rule_for("src/layouts/Main.tsx").unwrap().1, FileCategory::Layout);
        assert_eq!(rule_for("src/AdminLayout.tsx").unwrap().1, FileCategory::Layout);
    }

    #[test]
    fn test_backend_roles() {
        assert_eq!(rule_for("src/routes/users.ts").unwrap().1, FileCategory::Route);
        assert_eq!(rule_for("src/authMiddleware.ts").unwrap().1, FileCategory::Middleware);
        assert_eq!(rule_for("src/UserController.ts").unwrap().1, FileCategory::Controller);
        assert_eq!(rule_for("src/user.repository.ts").unwrap().1, FileCategory::Repository);
        assert_eq!(rule_for("app/models/user.py").unwrap().1, FileCategory::Model);
        assert_eq!(rule_for("src/user.service.ts").unwrap().1, FileCategory::Service);
        assert_eq!(rule_for("services/payment/client.ts").unwrap().1, FileCategory::Service);
    }

    #[test]
    fn test_utility_and_miss() {
        assert_eq!(rule_for("misc/util.py").unwrap().1, FileCategory::Utility);
        assert_eq!(rule_for("src/utils/format.ts").unwrap().1, FileCategory::Utility);
        assert_eq!(rule_for("src/stringHelpers.ts").unwrap().1, FileCategory::Utility);
        assert!(rule_for("components/Button/index.ts").is_none());
        assert!(rule_for("docs/guide.md").is_none());
    }
}
