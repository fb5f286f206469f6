//! 查询解析模块
//!
//! 根据意图和查询文本中提取的参数过滤数据仓库，产出结构化结果。
//! 所有查询都是对内存表的线性扫描，解析过程不会失败：
//! 数字解析异常一律回退到默认阈值，不向调用方抛错。

use crate::core::models::{
    CapitalEntry, CompanyBrief, DataStore, Intent, QueryResult,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// 新注册事件的变更类型值
pub const CHANGE_TYPE_INCORPORATION: &str = "New Incorporation";
/// 注销/除名事件的变更类型值
pub const CHANGE_TYPE_STRUCK_OFF: &str = "Deregistered/Struck Off";

/// 未能从查询中提取出数字时的默认资本阈值（10 lakh）
const DEFAULT_CAPITAL_THRESHOLD: u64 = 1_000_000;
/// 1 lakh = 10 万卢比
const LAKH: u64 = 100_000;

/// 邦关键词映射表
///
/// 必须是有序列表而不是哈希表：按声明顺序迭代、首个命中生效，
/// 迭代顺序是行为契约的一部分（如 "tamil" 先于 "nadu" 检查）。
const STATE_KEYWORDS: &[(&str, &str)] = &[
    ("maharashtra", "Maharashtra"),
    ("gujarat", "Gujarat"),
    ("delhi", "Delhi"),
    ("tamil", "Tamil Nadu"),
    ("nadu", "Tamil Nadu"),
    ("karnataka", "Karnataka"),
];

/// `<数字> lakh` 形式的阈值缩写
static LAKH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*lakh").expect("lakh 正则应当合法"));
/// 连续 5 位以上的数字
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{5,}").expect("数字正则应当合法"));

/// 解析查询
///
/// `raw_query` 会在内部重新归一化（trim + 小写），用于参数提取。
pub fn resolve(intent: Intent, raw_query: &str, store: &DataStore) -> QueryResult {
    let query = raw_query.trim().to_lowercase();

    match intent {
        Intent::NewIncorporation => resolve_incorporations(&query, store),
        Intent::StruckOff => QueryResult::StruckOffTotal {
            count: store
                .changes
                .iter()
                .filter(|c| c.change_type == CHANGE_TYPE_STRUCK_OFF)
                .count(),
        },
        Intent::CapitalAbove => resolve_capital(&query, store),
        Intent::Unknown => QueryResult::Help,
    }
}

/// 新注册查询：有邦过滤时关联主表，否则直接数事件
fn resolve_incorporations(query: &str, store: &DataStore) -> QueryResult {
    // 保留重复 CIN：无邦过滤时的计数是对事件集合本身，不与主表去重
    let new_cins: Vec<&str> = store
        .changes
        .iter()
        .filter(|c| c.change_type == CHANGE_TYPE_INCORPORATION)
        .map(|c| c.cin.as_str())
        .collect();

    match extract_state(query) {
        Some(state) => {
            let matches: Vec<CompanyBrief> = store
                .master
                .iter()
                .filter(|r| {
                    new_cins.contains(&r.cin.as_str())
                        && r.state.as_deref() == Some(state)
                })
                .map(|r| CompanyBrief {
                    cin: r.cin.clone(),
                    company_name: r.company_name.clone(),
                })
                .collect();

            QueryResult::IncorporationsInState {
                state: state.to_string(),
                matches,
            }
        }
        None => QueryResult::IncorporationTotal {
            count: new_cins.len(),
        },
    }
}

/// 资本阈值查询：授权资本严格大于阈值
fn resolve_capital(query: &str, store: &DataStore) -> QueryResult {
    let threshold = extract_threshold(query);

    let matches: Vec<CapitalEntry> = store
        .master
        .iter()
        .filter(|r| {
            r.authorized_capital
                .map_or(false, |cap| cap > threshold as f64)
        })
        .map(|r| CapitalEntry {
            company_name: r.company_name.clone(),
            authorized_capital: r.authorized_capital.unwrap_or(0.0),
        })
        .collect();

    QueryResult::CompaniesAboveCapital { threshold, matches }
}

/// 从归一化查询中提取邦过滤条件
///
/// 按 STATE_KEYWORDS 的声明顺序扫描，取首个作为子串出现的关键词。
pub fn extract_state(query: &str) -> Option<&'static str> {
    STATE_KEYWORDS
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, state)| *state)
}

/// 从归一化查询中提取资本阈值
///
/// 优先匹配 `<数字> lakh` 缩写，其次是 5 位以上的裸数字，
/// 都取文本中的第一处匹配。任何解析失败（含溢出）回退默认值。
pub fn extract_threshold(query: &str) -> u64 {
    if let Some(caps) = LAKH_PATTERN.captures(query) {
        return caps[1]
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_mul(LAKH))
            .unwrap_or(DEFAULT_CAPITAL_THRESHOLD);
    }

    if let Some(m) = NUMBER_PATTERN.find(query) {
        return m
            .as_str()
            .parse::<u64>()
            .unwrap_or(DEFAULT_CAPITAL_THRESHOLD);
    }

    DEFAULT_CAPITAL_THRESHOLD
}
