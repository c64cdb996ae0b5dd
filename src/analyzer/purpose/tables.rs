//! Fixed lookup tables for the purpose cascade

use crate::types::FileCategory;
use crate::types::utils::name_tokens;

/// A structural directory keyword group
pub struct StructuralKeyword {
    pub names: &'static [&'static str],
    pub purpose: &'static str,
    pub category: FileCategory,
}

pub const STRUCTURAL_KEYWORDS: &[StructuralKeyword] = &[
    StructuralKeyword {
        names: &["components", "component", "widgets"],
        purpose: "组件",
        category: FileCategory::Component,
    },
    StructuralKeyword {
        names: &["pages", "views", "screens"],
        purpose: "页面",
        category: FileCategory::Page,
    },
    StructuralKeyword {
        names: &["utils", "util", "helpers", "helper"],
        purpose: "工具函数",
        category: FileCategory::Utility,
    },
    StructuralKeyword {
        names: &["services", "service", "api", "apis"],
        purpose: "API 服务",
        category: FileCategory::Service,
    },
    StructuralKeyword {
        names: &["hooks", "composables"],
        purpose: "自定义 Hooks",
        category: FileCategory::Hook,
    },
    StructuralKeyword {
        names: &["styles", "style", "css", "scss", "theme", "themes"],
        purpose: "样式",
        category: FileCategory::Style,
    },
    StructuralKeyword {
        names: &["store", "stores", "state"],
        purpose: "状态管理",
        category: FileCategory::Service,
    },
    StructuralKeyword {
        names: &["types", "typings", "interfaces", "@types"],
        purpose: "类型定义",
        category: FileCategory::Type,
    },
    StructuralKeyword {
        names: &["models", "model", "entities"],
        purpose: "数据模型",
        category: FileCategory::Model,
    },
    StructuralKeyword {
        names: &["constants", "consts"],
        purpose: "常量",
        category: FileCategory::Constant,
    },
    StructuralKeyword {
        names: &["enums"],
        purpose: "枚举",
        category: FileCategory::Enum,
    },
    StructuralKeyword {
        names: &["config", "configs", "settings"],
        purpose: "配置",
        category: FileCategory::Config,
    },
    StructuralKeyword {
        names: &["layouts", "layout"],
        purpose: "布局",
        category: FileCategory::Layout,
    },
    StructuralKeyword {
        names: &["middleware", "middlewares"],
        purpose: "中间件",
        category: FileCategory::Middleware,
    },
    StructuralKeyword {
        names: &["routes", "router", "routers", "routing"],
        purpose: "路由",
        category: FileCategory::Route,
    },
    StructuralKeyword {
        names: &["controllers", "controller", "handlers"],
        purpose: "控制器",
        category: FileCategory::Controller,
    },
    StructuralKeyword {
        names: &["repositories", "repository", "repos", "dao"],
        purpose: "数据访问",
        category: FileCategory::Repository,
    },
    StructuralKeyword {
        names: &["tests", "test", "__tests__", "spec", "specs"],
        purpose: "测试",
        category: FileCategory::Test,
    },
    StructuralKeyword {
        names: &["lib", "libs", "shared", "common"],
        purpose: "公共库",
        category: FileCategory::Utility,
    },
    StructuralKeyword {
        names: &["assets", "static", "public", "images", "img", "icons", "fonts"],
        purpose: "静态资源",
        category: FileCategory::Other,
    },
    StructuralKeyword {
        names: &["docs", "doc"],
        purpose: "文档",
        category: FileCategory::Other,
    },
    StructuralKeyword {
        names: &["scripts", "bin"],
        purpose: "脚本",
        category: FileCategory::Other,
    },
];

/// Structural keyword group matching a directory name exactly
pub fn structural_keyword(name: &str) -> Option<&'static StructuralKeyword> {
    let lower = name.to_lowercase();
    STRUCTURAL_KEYWORDS
        .iter()
        .find(|k| k.names.contains(&lower.as_str()))
}

/// Purpose label for a dominant file category; `other` has none
pub fn category_purpose(category: FileCategory) -> Option<&'static str> {
    let purpose = match category {
        FileCategory::Page => "页面",
        FileCategory::Component => "组件",
        FileCategory::Hook => "自定义 Hooks",
        FileCategory::Utility => "工具函数",
        FileCategory::Service => "API 服务",
        FileCategory::Type => "类型定义",
        FileCategory::Enum => "枚举",
        FileCategory::Constant => "常量",
        FileCategory::Config => "配置",
        FileCategory::Test => "测试",
        FileCategory::Style => "样式",
        FileCategory::Layout => "布局",
        FileCategory::Middleware => "中间件",
        FileCategory::Model => "数据模型",
        FileCategory::Repository => "数据访问",
        FileCategory::Controller => "控制器",
        FileCategory::Route => "路由",
        FileCategory::Other => return None,
    };
    Some(purpose)
}

/// Business-domain keyword and its qualifier
pub struct BusinessTerm {
    pub keyword: &'static str,
    pub qualifier: &'static str,
}

/// Longer keywords precede their prefixes
pub const BUSINESS_TERMS: &[BusinessTerm] = &[
    BusinessTerm { keyword: "insurance", qualifier: "保险" },
    BusinessTerm { keyword: "policy", qualifier: "保单" },
    BusinessTerm { keyword: "claim", qualifier: "理赔" },
    BusinessTerm { keyword: "payment", qualifier: "支付" },
    BusinessTerm { keyword: "pay", qualifier: "支付" },
    BusinessTerm { keyword: "loan", qualifier: "贷款" },
    BusinessTerm { keyword: "credit", qualifier: "信贷" },
    BusinessTerm { keyword: "report", qualifier: "报表" },
    BusinessTerm { keyword: "order", qualifier: "订单" },
    BusinessTerm { keyword: "user", qualifier: "用户" },
    BusinessTerm { keyword: "account", qualifier: "账户" },
    BusinessTerm { keyword: "customer", qualifier: "客户" },
    BusinessTerm { keyword: "member", qualifier: "会员" },
    BusinessTerm { keyword: "product", qualifier: "商品" },
    BusinessTerm { keyword: "cart", qualifier: "购物车" },
    BusinessTerm { keyword: "checkout", qualifier: "结算" },
    BusinessTerm { keyword: "invoice", qualifier: "发票" },
    BusinessTerm { keyword: "billing", qualifier: "账单" },
    BusinessTerm { keyword: "coupon", qualifier: "优惠券" },
    BusinessTerm { keyword: "promotion", qualifier: "营销" },
    BusinessTerm { keyword: "marketing", qualifier: "营销" },
    BusinessTerm { keyword: "inventory", qualifier: "库存" },
    BusinessTerm { keyword: "shipping", qualifier: "物流" },
    BusinessTerm { keyword: "logistics", qualifier: "物流" },
    BusinessTerm { keyword: "message", qualifier: "消息" },
    BusinessTerm { keyword: "notification", qualifier: "通知" },
    BusinessTerm { keyword: "chat", qualifier: "聊天" },
    BusinessTerm { keyword: "search", qualifier: "搜索" },
    BusinessTerm { keyword: "dashboard", qualifier: "仪表盘" },
    BusinessTerm { keyword: "admin", qualifier: "管理后台" },
    BusinessTerm { keyword: "finance", qualifier: "财务" },
    BusinessTerm { keyword: "wallet", qualifier: "钱包" },
    BusinessTerm { keyword: "trade", qualifier: "交易" },
    BusinessTerm { keyword: "transaction", qualifier: "交易" },
    BusinessTerm { keyword: "risk", qualifier: "风控" },
    BusinessTerm { keyword: "contract", qualifier: "合同" },
    BusinessTerm { keyword: "profile", qualifier: "个人中心" },
];

/// Singular or plural token match
fn token_matches(token: &str, keyword: &str) -> bool {
    if token == keyword {
        return true;
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return keyword.strip_suffix('y') == Some(stem);
    }
    token.strip_suffix('s') == Some(keyword) || token.strip_suffix("es") == Some(keyword)
}

/// First business term whose keyword matches a token of the name
pub fn business_term(name: &str) -> Option<&'static BusinessTerm> {
    let tokens = name_tokens(name);
    BUSINESS_TERMS
        .iter()
        .find(|term| tokens.iter().any(|t| token_matches(t, term.keyword)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_keyword_lookup() {
        assert_eq!(structural_keyword("components").unwrap().purpose, "组件");
        assert_eq!(structural_keyword("Services").unwrap().purpose, "API 服务");
        assert!(structural_keyword("payment").is_none());
        assert!(structural_keyword("").is_none());
    }

    #[test]
    fn test_every_category_but_other_has_purpose() {
        for category in FileCategory::ALL {
            assert_eq!(
                category_purpose(category).is_some(),
                category != FileCategory::Other
            );
        }
    }

    #[test]
    fn test_business_terms() {
        assert_eq!(business_term("payment").unwrap().qualifier, "支付");
        assert_eq!(business_term("insurance").unwrap().qualifier, "保险");
        assert_eq!(business_term("loanApply").unwrap().qualifier, "贷款");
        assert_eq!(business_term("policies").unwrap().qualifier, "保单");
        assert_eq!(business_term("orders").unwrap().qualifier, "订单");
        assert!(business_term("border").is_none());
        assert!(business_term("misc").is_none());
    }

    #[test]
    fn test_business_term_table_size() {
        assert!(BUSINESS_TERMS.len() >= 30);
    }
}
