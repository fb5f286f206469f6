//! 数据表格组件
//!
//! 用 egui_extras 的 TableBuilder 渲染公司主表和补充数据表。
//! 表格只做展示，过滤和截断由调用方决定。

use crate::core::formatter::group_thousands;
use crate::core::models::{CompanyRecord, EnrichedTable};
use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

/// 渲染公司主表（调用方已完成过滤，这里只截断到 limit 行）
pub fn render_master(ui: &mut Ui, records: &[&CompanyRecord], limit: usize) {
    let headers = [
        "CIN",
        "公司名称",
        "邦",
        "状态",
        "授权资本",
        "实缴资本",
        "主营业务",
    ];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto().at_least(80.0), 4)
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in records.iter().take(limit) {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(&record.cin);
                    });
                    row.col(|ui| {
                        ui.label(&record.company_name);
                    });
                    row.col(|ui| {
                        ui.label(record.state.as_deref().unwrap_or("-"));
                    });
                    row.col(|ui| {
                        ui.label(record.company_status.as_deref().unwrap_or("-"));
                    });
                    row.col(|ui| {
                        ui.label(format_capital(record.authorized_capital));
                    });
                    row.col(|ui| {
                        ui.label(format_capital(record.paid_up_capital));
                    });
                    row.col(|ui| {
                        ui.label(
                            record
                                .principal_business_activity
                                .as_deref()
                                .unwrap_or("-"),
                        );
                    });
                });
            }
        });
}

/// 渲染补充数据表（列集不固定，整表按字符串展示）
pub fn render_enriched(ui: &mut Ui, table: &EnrichedTable, limit: usize) {
    if table.columns.is_empty() {
        ui.label("（无补充数据）");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(100.0), table.columns.len())
        .header(22.0, |mut header| {
            for title in &table.columns {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for cells in table.rows.iter().take(limit) {
                body.row(20.0, |mut row| {
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

/// 资本字段展示：缺失为 "-"，否则取整并加千位分隔
fn format_capital(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 0.0 => format!("₹{}", group_thousands(v as u64)),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_capital() {
        assert_eq!(format_capital(Some(2_000_000.0)), "₹2,000,000");
        assert_eq!(format_capital(Some(0.0)), "₹0");
        assert_eq!(format_capital(None), "-");
    }
}
