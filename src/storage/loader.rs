//! 数据集加载模块
//!
//! 负责在启动时从数据目录读取三张CSV表和一个摘要JSON，
//! 组装成只读的 DataStore。此模块只做IO和反序列化，不做任何查询逻辑。
//! CIN 字段经由字符串类型直接保留原文，不做数值转换。

use crate::core::models::{
    ChangeEvent, CompanyRecord, DailySummary, DataStore, EnrichedTable,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 数据集级别的加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("数据集文件不存在: {0}")]
    MissingFile(PathBuf),
    #[error("摘要文件缺少 summaries 字段")]
    MalformedSummary,
}

/// daily_summary.json 的顶层结构
#[derive(Debug, Deserialize)]
struct SummaryFile {
    summaries: Vec<DailySummary>,
}

/// 数据集加载器
pub struct DataLoader {
    /// 数据目录
    data_dir: PathBuf,
    /// 主表文件名
    master_file: String,
    /// 变更事件文件名
    changes_file: String,
    /// 补充数据文件名
    enriched_file: String,
    /// 摘要文件名
    summary_file: String,
}

impl DataLoader {
    /// 创建加载器，文件名使用默认约定
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            master_file: "master_day3.csv".to_string(),
            changes_file: "all_changes.csv".to_string(),
            enriched_file: "enriched_data.csv".to_string(),
            summary_file: "daily_summary.json".to_string(),
        }
    }

    /// 覆盖默认文件名
    pub fn with_files(
        mut self,
        master: &str,
        changes: &str,
        enriched: &str,
        summary: &str,
    ) -> Self {
        self.master_file = master.to_string();
        self.changes_file = changes.to_string();
        self.enriched_file = enriched.to_string();
        self.summary_file = summary.to_string();
        self
    }

    /// 加载全部数据集
    pub fn load(&self) -> Result<DataStore> {
        let master = self
            .load_master()
            .with_context(|| format!("加载主表失败: {}", self.master_file))?;
        let changes = self
            .load_changes()
            .with_context(|| format!("加载变更事件失败: {}", self.changes_file))?;
        let enriched = self
            .load_enriched()
            .with_context(|| format!("加载补充数据失败: {}", self.enriched_file))?;
        let summaries = self
            .load_summaries()
            .with_context(|| format!("加载每日摘要失败: {}", self.summary_file))?;

        tracing::info!(
            "数据加载完成: 主表 {} 条, 变更事件 {} 条, 补充数据 {} 条, 摘要 {} 条",
            master.len(),
            changes.len(),
            enriched.rows.len(),
            summaries.len()
        );

        Ok(DataStore {
            master,
            changes,
            enriched,
            summaries,
        })
    }

    fn dataset_path(&self, file_name: &str) -> Result<PathBuf> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            return Err(LoadError::MissingFile(path).into());
        }
        Ok(path)
    }

    /// 读取公司主表
    fn load_master(&self) -> Result<Vec<CompanyRecord>> {
        let path = self.dataset_path(&self.master_file)?;
        let mut reader = csv::Reader::from_path(&path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: CompanyRecord = row?;
            records.push(record);
        }
        Ok(records)
    }

    /// 读取变更事件表
    fn load_changes(&self) -> Result<Vec<ChangeEvent>> {
        let path = self.dataset_path(&self.changes_file)?;
        let mut reader = csv::Reader::from_path(&path)?;

        let mut events = Vec::new();
        for row in reader.deserialize() {
            let event: ChangeEvent = row?;
            events.push(event);
        }
        Ok(events)
    }

    /// 读取补充数据表（模式不固定，按字符串整表读入）
    fn load_enriched(&self) -> Result<EnrichedTable> {
        let path = self.dataset_path(&self.enriched_file)?;
        let mut reader = csv::Reader::from_path(&path)?;

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for row in reader.records() {
            let record = row?;
            rows.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(EnrichedTable { columns, rows })
    }

    /// 读取每日摘要序列
    fn load_summaries(&self) -> Result<Vec<DailySummary>> {
        let path = self.dataset_path(&self.summary_file)?;
        let content = std::fs::read_to_string(&path)?;

        let file: SummaryFile =
            serde_json::from_str(&content).map_err(|_| LoadError::MalformedSummary)?;
        Ok(file.summaries)
    }
}

/// 便捷函数：按配置的文件名从目录加载
pub fn load_store(data_dir: &Path, config: &crate::core::models::AppConfig) -> Result<DataStore> {
    DataLoader::new(data_dir.to_path_buf())
        .with_files(
            &config.master_file,
            &config.changes_file,
            &config.enriched_file,
            &config.summary_file,
        )
        .load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_datasets(dir: &Path) {
        fs::write(
            dir.join("master_day3.csv"),
            "CIN,Company Name,State,Company Status,Authorized Capital,Paid Up Capital,Principal Business Activity\n\
             U111MH2025PTC000001,Alpha Pvt Ltd,Maharashtra,Active,2000000,500000,Trading\n\
             U222GJ2025PTC000002,Beta Pvt Ltd,Gujarat,Active,,,\n",
        )
        .unwrap();
        fs::write(
            dir.join("all_changes.csv"),
            "CIN,Change_Type,Date\n\
             U111MH2025PTC000001,New Incorporation,2025-08-01\n\
             U333DL2025PTC000003,Deregistered/Struck Off,2025-08-02\n",
        )
        .unwrap();
        fs::write(
            dir.join("enriched_data.csv"),
            "CIN,Sector,Employees\nU111MH2025PTC000001,Retail,42\n",
        )
        .unwrap();
        fs::write(
            dir.join("daily_summary.json"),
            r#"{"summaries":[{"date":"2025-08-01","summary":"First day"},{"date":"2025-08-02","summary":"Second day"}]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_full_store() {
        let dir = tempdir().unwrap();
        write_datasets(dir.path());

        let store = DataLoader::new(dir.path().to_path_buf()).load().unwrap();

        assert_eq!(store.master.len(), 2);
        assert_eq!(store.changes.len(), 2);
        assert_eq!(store.enriched.columns, vec!["CIN", "Sector", "Employees"]);
        assert_eq!(store.enriched.rows.len(), 1);
        assert_eq!(store.latest_summary().unwrap().summary, "Second day");

        // CIN 保留为原文字符串
        assert_eq!(store.master[0].cin, "U111MH2025PTC000001");
        // 空的资本字段解析为 None
        assert_eq!(store.master[1].authorized_capital, None);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let err = DataLoader::new(dir.path().to_path_buf())
            .load()
            .unwrap_err();

        assert!(format!("{:#}", err).contains("master_day3.csv"));
    }

    #[test]
    fn test_malformed_summary_json() {
        let dir = tempdir().unwrap();
        write_datasets(dir.path());
        fs::write(dir.path().join("daily_summary.json"), r#"{"oops": true}"#).unwrap();

        let err = DataLoader::new(dir.path().to_path_buf())
            .load()
            .unwrap_err();
        assert!(format!("{:#}", err).contains("summaries"));
    }
}
