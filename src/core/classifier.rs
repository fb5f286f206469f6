//! 意图分类模块
//!
//! 对查询文本做确定性的关键词匹配，不依赖任何统计模型。
//!
//! 设计原则：
//! - 归一化只做 trim + 小写，标点、多余空格原样保留
//! - 谓词按固定优先级依次检查，首个命中即返回
//! - 任何输入（包括空串）都有确定的分类结果

use crate::core::models::Intent;

/// 对原始查询文本分类
///
/// 优先级从高到低：新注册 > 注销/除名 > 资本阈值 > 未识别。
/// 同时命中多个谓词时只取优先级最高的一个。
pub fn classify(raw_query: &str) -> Intent {
    let query = raw_query.trim().to_lowercase();

    if query.contains("new incorporation")
        || (query.contains("new") && query.contains("incorporation"))
    {
        Intent::NewIncorporation
    } else if query.contains("struck off")
        || query.contains("deregister")
        || query.contains("strike off")
    {
        Intent::StruckOff
    } else if query.contains("capital") && (query.contains("above") || query.contains("greater")) {
        Intent::CapitalAbove
    } else {
        Intent::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_incorporation_phrase() {
        assert_eq!(
            classify("Show new incorporations in Maharashtra"),
            Intent::NewIncorporation
        );
    }

    #[test]
    fn test_new_and_incorporation_apart_any_order() {
        // "new" 和 "incorporation" 作为独立子串出现即可，顺序无关
        assert_eq!(
            classify("incorporation data, anything new?"),
            Intent::NewIncorporation
        );
        assert_eq!(
            classify("any NEW details about incorporation counts"),
            Intent::NewIncorporation
        );
    }

    #[test]
    fn test_struck_off_variants() {
        assert_eq!(classify("How many companies were struck off?"), Intent::StruckOff);
        assert_eq!(classify("deregistered companies please"), Intent::StruckOff);
        assert_eq!(classify("strike off list"), Intent::StruckOff);
    }

    #[test]
    fn test_capital_needs_both_keywords() {
        assert_eq!(
            classify("companies with capital above 10 lakh"),
            Intent::CapitalAbove
        );
        assert_eq!(classify("capital greater than 500000"), Intent::CapitalAbove);
        // 只有 "capital" 没有比较词时不命中
        assert_eq!(classify("show me capital data"), Intent::Unknown);
    }

    #[test]
    fn test_priority_new_incorporation_wins() {
        // 同时包含新注册和除名关键词时，优先级高的谓词生效
        assert_eq!(
            classify("new incorporation vs struck off numbers"),
            Intent::NewIncorporation
        );
    }

    #[test]
    fn test_unknown_inputs() {
        assert_eq!(classify("what is the weather"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
        assert_eq!(classify("   "), Intent::Unknown);
    }
}
