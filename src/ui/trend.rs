//! 变更趋势组件
//!
//! 按日期和变更类型聚合事件数，渲染成水平条形图。

use crate::core::models::ChangeEvent;
use crate::ui::styles::Theme;
use chrono::NaiveDate;
use eframe::egui::{self, Sense, Ui};
use std::collections::BTreeMap;

/// 条形最大宽度（像素）
const MAX_BAR_WIDTH: f32 = 240.0;

/// 按（日期，变更类型）聚合事件数
pub fn daily_counts(changes: &[ChangeEvent]) -> BTreeMap<NaiveDate, BTreeMap<String, usize>> {
    let mut counts: BTreeMap<NaiveDate, BTreeMap<String, usize>> = BTreeMap::new();
    for event in changes {
        *counts
            .entry(event.date)
            .or_default()
            .entry(event.change_type.clone())
            .or_default() += 1;
    }
    counts
}

/// 渲染每日变更趋势
pub fn render_trend(ui: &mut Ui, theme: &Theme, changes: &[ChangeEvent]) {
    let counts = daily_counts(changes);
    if counts.is_empty() {
        ui.label("（无变更事件）");
        return;
    }

    let max_count = counts
        .values()
        .flat_map(|per_type| per_type.values())
        .copied()
        .max()
        .unwrap_or(1)
        .max(1);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for (date, per_type) in &counts {
                ui.horizontal(|ui| {
                    ui.monospace(date.to_string());
                    ui.separator();

                    ui.vertical(|ui| {
                        for (change_type, count) in per_type {
                            ui.horizontal(|ui| {
                                let width =
                                    (*count as f32 / max_count as f32) * MAX_BAR_WIDTH;
                                let (rect, _) = ui.allocate_exact_size(
                                    egui::vec2(width.max(2.0), 12.0),
                                    Sense::hover(),
                                );
                                ui.painter().rect_filled(
                                    rect,
                                    2.0,
                                    theme.change_type_color(change_type),
                                );
                                ui.label(format!("{} ({})", change_type, count));
                            });
                        }
                    });
                });
                ui.separator();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(cin: &str, change_type: &str, day: u32) -> ChangeEvent {
        ChangeEvent {
            cin: cin.to_string(),
            change_type: change_type.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
        }
    }

    #[test]
    fn test_daily_counts_grouping() {
        let changes = vec![
            event("A", "New Incorporation", 1),
            event("B", "New Incorporation", 1),
            event("C", "Deregistered/Struck Off", 1),
            event("D", "New Incorporation", 2),
        ];

        let counts = daily_counts(&changes);
        let day1 = &counts[&NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()];

        assert_eq!(day1["New Incorporation"], 2);
        assert_eq!(day1["Deregistered/Struck Off"], 1);
        assert_eq!(
            counts[&NaiveDate::from_ymd_opt(2025, 8, 2).unwrap()]["New Incorporation"],
            1
        );
    }
}
