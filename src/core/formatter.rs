//! 响应格式化模块
//!
//! 把结构化查询结果渲染成可直接展示的文本，每个结果变体一个固定模板。
//! 行列表最多展示 5 条，但报告的总数永远是真实总数。

use crate::core::models::QueryResult;

/// 行列表展示条数上限
pub const MAX_DISPLAY_ROWS: usize = 5;

/// 渲染查询结果
///
/// 输出为带轻量强调标记（粗体、反引号）的纯文本，
/// 任何变体都不会产生空字符串。
pub fn format_response(result: &QueryResult) -> String {
    match result {
        QueryResult::IncorporationsInState { state, matches } => {
            if matches.is_empty() {
                return format!("❌ No new incorporations found in {}.", state);
            }

            let mut out = format!(
                "✅ Found {} new incorporations in {}:\n\n",
                matches.len(),
                state
            );
            for entry in matches.iter().take(MAX_DISPLAY_ROWS) {
                out.push_str(&format!(
                    "- **{}** (`{}`)\n",
                    entry.company_name, entry.cin
                ));
            }
            out
        }

        QueryResult::IncorporationTotal { count } => {
            format!("📊 Total new incorporations: **{}**", count)
        }

        QueryResult::StruckOffTotal { count } => {
            format!("🗑️ Companies struck off/deregistered: **{}**", count)
        }

        QueryResult::CompaniesAboveCapital { threshold, matches } => {
            if matches.is_empty() {
                return format!(
                    "❌ No companies found with capital > ₹{}.",
                    group_thousands(*threshold)
                );
            }

            let mut out = format!(
                "💰 Found {} companies with capital > ₹{}:\n\n",
                matches.len(),
                group_thousands(*threshold)
            );
            for entry in matches.iter().take(MAX_DISPLAY_ROWS) {
                out.push_str(&format!(
                    "- **{}** (₹{})\n",
                    entry.company_name,
                    group_thousands(entry.authorized_capital as u64)
                ));
            }
            out
        }

        QueryResult::Help => "🤖 Try these examples:\n\n\
             - *Show new incorporations in Maharashtra*\n\
             - *How many companies were struck off?*\n\
             - *List companies with capital above 10 lakh*"
            .to_string(),
    }
}

/// 千位分隔格式化（1000000 → "1,000,000"）
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CapitalEntry, CompanyBrief};

    fn briefs(n: usize) -> Vec<CompanyBrief> {
        (0..n)
            .map(|i| CompanyBrief {
                cin: format!("CIN{:03}", i),
                company_name: format!("Company {}", i),
            })
            .collect()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_state_list_caps_at_five_but_reports_true_total() {
        let result = QueryResult::IncorporationsInState {
            state: "Maharashtra".to_string(),
            matches: briefs(8),
        };
        let text = format_response(&result);

        assert!(text.contains("Found 8 new incorporations in Maharashtra"));
        // 只展示 5 条
        assert_eq!(text.matches("- **").count(), 5);
    }

    #[test]
    fn test_empty_state_list_has_distinct_message() {
        let result = QueryResult::IncorporationsInState {
            state: "Gujarat".to_string(),
            matches: vec![],
        };
        let text = format_response(&result);

        assert_eq!(text, "❌ No new incorporations found in Gujarat.");
    }

    #[test]
    fn test_capital_list_formats_amounts() {
        let result = QueryResult::CompaniesAboveCapital {
            threshold: 1_000_000,
            matches: vec![CapitalEntry {
                company_name: "Rich Pvt Ltd".to_string(),
                authorized_capital: 2_500_000.0,
            }],
        };
        let text = format_response(&result);

        assert!(text.contains("capital > ₹1,000,000"));
        assert!(text.contains("- **Rich Pvt Ltd** (₹2,500,000)"));
    }

    #[test]
    fn test_empty_capital_list_has_distinct_message() {
        let result = QueryResult::CompaniesAboveCapital {
            threshold: 500_000,
            matches: vec![],
        };

        assert_eq!(
            format_response(&result),
            "❌ No companies found with capital > ₹500,000."
        );
    }

    #[test]
    fn test_counts_and_help_are_never_empty() {
        assert!(format_response(&QueryResult::IncorporationTotal { count: 0 })
            .contains("**0**"));
        assert!(format_response(&QueryResult::StruckOffTotal { count: 12 })
            .contains("**12**"));
        assert!(format_response(&QueryResult::Help).contains("Try these examples"));
    }
}
