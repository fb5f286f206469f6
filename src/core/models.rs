//! 核心数据模型定义
//!
//! 数据集在启动时一次性加载，之后全部只读。
//! CIN 作为不透明字符串处理，比较时区分大小写、保留空白。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 公司主记录
///
/// State / Company Status 等字段在源数据中可能缺失，
/// 缺失值不匹配任何等值过滤条件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// 公司识别号（唯一、不透明字符串）
    #[serde(rename = "CIN")]
    pub cin: String,
    /// 公司名称
    #[serde(rename = "Company Name")]
    pub company_name: String,
    /// 注册邦
    #[serde(rename = "State")]
    pub state: Option<String>,
    /// 公司状态（active / struck-off 等）
    #[serde(rename = "Company Status")]
    pub company_status: Option<String>,
    /// 授权资本（卢比）
    #[serde(rename = "Authorized Capital")]
    pub authorized_capital: Option<f64>,
    /// 实缴资本（卢比）
    #[serde(rename = "Paid Up Capital")]
    pub paid_up_capital: Option<f64>,
    /// 主营业务
    #[serde(rename = "Principal Business Activity")]
    pub principal_business_activity: Option<String>,
}

/// 变更事件
///
/// CIN 是未强制校验的外键：事件可以引用主表中不存在的公司，
/// 关联查询时悬空引用静默产生零行。同一 CIN 可出现多条事件。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// 公司识别号
    #[serde(rename = "CIN")]
    pub cin: String,
    /// 变更类型（"New Incorporation"、"Deregistered/Struck Off" 等）
    #[serde(rename = "Change_Type")]
    pub change_type: String,
    /// 变更日期
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

/// 补充数据表
///
/// 模式对核心不透明，仅用于展示，问答逻辑不查询它。
#[derive(Debug, Clone, Default)]
pub struct EnrichedTable {
    /// 列名
    pub columns: Vec<String>,
    /// 行数据（与列名一一对应）
    pub rows: Vec<Vec<String>>,
}

/// 每日摘要条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// 日期
    pub date: String,
    /// 摘要文本
    pub summary: String,
}

/// 数据仓库
///
/// 进程启动时构造一次，按引用传入每次问答调用，核心从不修改它。
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    /// 公司主记录
    pub master: Vec<CompanyRecord>,
    /// 变更事件
    pub changes: Vec<ChangeEvent>,
    /// 补充数据
    pub enriched: EnrichedTable,
    /// 每日摘要（按时间顺序）
    pub summaries: Vec<DailySummary>,
}

impl DataStore {
    /// 获取最新的每日摘要（序列中的最后一条）
    pub fn latest_summary(&self) -> Option<&DailySummary> {
        self.summaries.last()
    }

    /// 主表中出现的所有邦（去重、排序，用于过滤下拉框）
    pub fn states(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .master
            .iter()
            .filter_map(|r| r.state.clone())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    /// 主表中出现的所有公司状态（去重、排序）
    pub fn statuses(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .master
            .iter()
            .filter_map(|r| r.company_status.clone())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

/// 查询意图
///
/// 封闭集合，由分类器按固定优先级从查询文本中判定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// 新注册公司查询
    NewIncorporation,
    /// 注销/除名查询
    StruckOff,
    /// 资本阈值查询
    CapitalAbove,
    /// 无法识别
    Unknown,
}

/// 公司简要条目（CIN + 名称投影）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyBrief {
    pub cin: String,
    pub company_name: String,
}

/// 资本条目（名称 + 授权资本投影）
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalEntry {
    pub company_name: String,
    pub authorized_capital: f64,
}

/// 查询结果
///
/// 每个（意图，结果类型）组合对应一个变体，格式化器按变体选模板。
/// 行列表变体携带完整结果集，展示截断由格式化器负责。
#[derive(Debug, Clone)]
pub enum QueryResult {
    /// 指定邦内的新注册公司列表（可能为空）
    IncorporationsInState {
        state: String,
        matches: Vec<CompanyBrief>,
    },
    /// 新注册事件总数（未指定邦时）
    IncorporationTotal { count: usize },
    /// 注销/除名事件总数
    StruckOffTotal { count: usize },
    /// 授权资本高于阈值的公司列表（可能为空）
    CompaniesAboveCapital {
        threshold: u64,
        matches: Vec<CapitalEntry>,
    },
    /// 无法识别意图时的帮助提示
    Help,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据目录（四个数据集文件所在位置）
    pub data_dir: Option<PathBuf>,
    /// 主表文件名
    pub master_file: String,
    /// 变更事件文件名
    pub changes_file: String,
    /// 补充数据文件名
    pub enriched_file: String,
    /// 每日摘要文件名
    pub summary_file: String,
    /// 主表展示行数上限
    pub dashboard_rows: usize,
    /// 补充数据展示行数上限
    pub enriched_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            master_file: "master_day3.csv".to_string(),
            changes_file: "all_changes.csv".to_string(),
            enriched_file: "enriched_data.csv".to_string(),
            summary_file: "daily_summary.json".to_string(),
            dashboard_rows: 20,
            enriched_rows: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(state: Option<&str>) -> CompanyRecord {
        CompanyRecord {
            cin: "U00000MH2024PTC000001".to_string(),
            company_name: "Test Pvt Ltd".to_string(),
            state: state.map(|s| s.to_string()),
            company_status: None,
            authorized_capital: None,
            paid_up_capital: None,
            principal_business_activity: None,
        }
    }

    #[test]
    fn test_latest_summary_is_last_entry() {
        let store = DataStore {
            summaries: vec![
                DailySummary {
                    date: "2025-08-01".to_string(),
                    summary: "第一天".to_string(),
                },
                DailySummary {
                    date: "2025-08-02".to_string(),
                    summary: "第二天".to_string(),
                },
            ],
            ..Default::default()
        };

        assert_eq!(store.latest_summary().unwrap().summary, "第二天");
    }

    #[test]
    fn test_states_dedup_and_skip_missing() {
        let mut store = DataStore::default();
        for state in [Some("Gujarat"), Some("Delhi"), None, Some("Gujarat")] {
            store.master.push(record(state));
        }

        assert_eq!(store.states(), vec!["Delhi", "Gujarat"]);
    }
}
