//! Third-party dependency families
//!
//! A family is recognised from a directory name in three ways: a strong
//! alias always matches, a package name always matches, and a weak alias
//! matches only when the host reported one of the family's packages as a
//! project dependency.

use std::collections::BTreeSet;

use crate::types::FileCategory;

pub struct DependencyFamily {
    pub key: &'static str,
    pub label: &'static str,
    pub category: FileCategory,
    pub strong_aliases: &'static [&'static str],
    pub weak_aliases: &'static [&'static str],
    pub packages: &'static [&'static str],
}

pub const DEPENDENCY_FAMILIES: &[DependencyFamily] = &[
    DependencyFamily {
        key: "i18n",
        label: "国际化",
        category: FileCategory::Constant,
        strong_aliases: &["i18n", "locales", "locale", "lang", "langs", "translations", "intl", "l10n"],
        weak_aliases: &[],
        packages: &["i18next", "react-i18next", "vue-i18n", "react-intl", "next-intl"],
    },
    DependencyFamily {
        key: "state-management",
        label: "状态管理",
        category: FileCategory::Service,
        strong_aliases: &["redux", "zustand", "mobx", "pinia", "vuex", "recoil", "jotai"],
        weak_aliases: &["store", "stores", "slices", "reducers", "atoms", "state"],
        packages: &[
            "redux",
            "@reduxjs/toolkit",
            "react-redux",
            "zustand",
            "mobx",
            "pinia",
            "vuex",
            "recoil",
            "jotai",
        ],
    },
    DependencyFamily {
        key: "ui-kit",
        label: "UI 组件库",
        category: FileCategory::Component,
        strong_aliases: &["antd", "mui", "chakra", "shadcn", "vant", "element-ui", "element-plus"],
        weak_aliases: &["ui"],
        packages: &[
            "antd",
            "@mui/material",
            "@chakra-ui/react",
            "element-plus",
            "element-ui",
            "vant",
        ],
    },
    DependencyFamily {
        key: "auth",
        label: "认证鉴权",
        category: FileCategory::Service,
        strong_aliases: &["auth", "authentication", "oauth", "sso", "passport"],
        weak_aliases: &["session", "sessions", "permission", "permissions"],
        packages: &["next-auth", "passport", "@auth0/auth0-react", "jsonwebtoken", "oidc-client"],
    },
    DependencyFamily {
        key: "routing",
        label: "路由",
        category: FileCategory::Route,
        strong_aliases: &[],
        weak_aliases: &["router", "routes", "routing"],
        packages: &["react-router", "react-router-dom", "vue-router", "@tanstack/react-router"],
    },
    DependencyFamily {
        key: "forms",
        label: "表单",
        category: FileCategory::Component,
        strong_aliases: &["formik"],
        weak_aliases: &["forms", "form", "validators", "validation"],
        packages: &["react-hook-form", "formik", "yup", "zod", "vee-validate"],
    },
    DependencyFamily {
        key: "data-fetching",
        label: "数据请求",
        category: FileCategory::Service,
        strong_aliases: &["graphql", "apollo", "trpc", "swr"],
        weak_aliases: &["queries", "query", "requests", "request", "http"],
        packages: &[
            "@tanstack/react-query",
            "react-query",
            "swr",
            "@apollo/client",
            "axios",
            "graphql",
            "@trpc/client",
        ],
    },
    DependencyFamily {
        key: "utility",
        label: "工具库",
        category: FileCategory::Utility,
        strong_aliases: &["lodash"],
        weak_aliases: &[],
        packages: &["lodash", "lodash-es", "ramda", "date-fns", "dayjs", "moment"],
    },
    DependencyFamily {
        key: "testing",
        label: "测试工具",
        category: FileCategory::Test,
        strong_aliases: &["__mocks__", "mocks", "cypress", "playwright", "e2e"],
        weak_aliases: &["fixtures", "mock"],
        packages: &[
            "jest",
            "vitest",
            "cypress",
            "@playwright/test",
            "@testing-library/react",
            "msw",
        ],
    },
    DependencyFamily {
        key: "lint",
        label: "代码规范",
        category: FileCategory::Config,
        strong_aliases: &["eslint", "prettier", "stylelint", "husky", ".husky", "commitlint"],
        weak_aliases: &["lint"],
        packages: &[
            "eslint",
            "prettier",
            "stylelint",
            "husky",
            "lint-staged",
            "@commitlint/cli",
        ],
    },
    DependencyFamily {
        key: "styling",
        label: "样式方案",
        category: FileCategory::Style,
        strong_aliases: &["tailwind", "emotion", "styled-components"],
        weak_aliases: &["styled"],
        packages: &["tailwindcss", "styled-components", "@emotion/react", "sass", "less"],
    },
    DependencyFamily {
        key: "charts",
        label: "图表可视化",
        category: FileCategory::Component,
        strong_aliases: &["echarts", "d3", "highcharts"],
        weak_aliases: &["charts", "chart"],
        packages: &["echarts", "d3", "chart.js", "recharts", "highcharts", "@antv/g2"],
    },
];

/// Project dependencies as reported by the host, lowercased
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    packages: BTreeSet<String>,
}

impl DependencySet {
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            packages: packages
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Whether any of the family's packages is a project dependency
    pub fn activates(&self, family: &DependencyFamily) -> bool {
        family.packages.iter().any(|p| self.packages.contains(*p))
    }
}

impl DependencyFamily {
    /// Whether a directory name identifies this family
    pub fn matches_name(&self, name: &str, deps: &DependencySet) -> bool {
        let lower = name.to_lowercase();
        let name = lower.as_str();
        self.strong_aliases.contains(&name)
            || self.packages.contains(&name)
            || (self.weak_aliases.contains(&name) && deps.activates(self))
    }
}

/// First family, in table order, identified by a directory name
pub fn family_for_name(name: &str, deps: &DependencySet) -> Option<&'static DependencyFamily> {
    if name.is_empty() {
        return None;
    }
    DEPENDENCY_FAMILIES
        .iter()
        .find(|family| family.matches_name(name, deps))
}
