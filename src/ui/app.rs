//! 主应用程序
//!
//! 整合数据加载、过滤浏览和自然语言问答，提供完整的用户界面。
//! 侧边栏过滤和搜索直接作用于数据仓库，不经过问答管道；
//! 问答标签页把输入原样交给 core::chatbot，返回文本原样展示。

use crate::core::chatbot;
use crate::core::models::{AppConfig, CompanyRecord, DataStore};
use crate::storage::config::ConfigManager;
use crate::storage::loader;
use crate::ui::styles::Theme;
use crate::ui::tables;
use crate::ui::trend;
use eframe::egui::{self, RichText};
use std::path::PathBuf;

/// 过滤下拉框中表示"不过滤"的选项
const FILTER_ALL: &str = "All";

/// 应用状态
#[derive(PartialEq)]
enum AppState {
    /// 初始状态，等待选择数据目录
    Initial,
    /// 数据已加载
    Ready,
}

/// 当前标签页
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    /// 公司记录总览
    Dashboard,
    /// 变更历史趋势
    ChangeHistory,
    /// 补充数据
    Enriched,
    /// 数据问答
    Chat,
}

/// 主应用程序
pub struct InsightsApp {
    /// 应用状态
    state: AppState,
    /// 配置
    config: AppConfig,
    /// 主题
    theme: Theme,
    /// 数据目录输入框内容
    data_dir: String,
    /// 数据仓库（加载后只读）
    store: Option<DataStore>,
    /// 当前标签页
    active_tab: Tab,
    /// 邦过滤
    selected_state: String,
    /// 公司状态过滤
    selected_status: String,
    /// CIN/名称搜索
    search_query: String,
    /// 问答输入框内容
    chat_input: String,
    /// 最近一次问答响应
    chat_response: Option<String>,
    /// 状态消息
    status_message: String,
}

impl InsightsApp {
    /// 创建新的应用实例
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = match ConfigManager::new(ConfigManager::default_path()).load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("配置加载失败，使用默认配置: {}", e);
                AppConfig::default()
            }
        };

        let data_dir = config
            .data_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut app = Self {
            state: AppState::Initial,
            config,
            theme: Theme::default(),
            data_dir,
            store: None,
            active_tab: Tab::Dashboard,
            selected_state: FILTER_ALL.to_string(),
            selected_status: FILTER_ALL.to_string(),
            search_query: String::new(),
            chat_input: String::new(),
            chat_response: None,
            status_message: "请选择数据目录".to_string(),
        };

        // 配置里已有数据目录时直接加载
        if !app.data_dir.is_empty() {
            app.load_data();
        }
        app
    }

    /// 加载数据集
    fn load_data(&mut self) {
        let dir = PathBuf::from(&self.data_dir);
        if !dir.exists() {
            self.status_message = "数据目录不存在".to_string();
            return;
        }

        match loader::load_store(&dir, &self.config) {
            Ok(store) => {
                self.status_message = format!(
                    "加载完成: 公司 {} 条, 变更事件 {} 条",
                    store.master.len(),
                    store.changes.len()
                );
                self.store = Some(store);
                self.state = AppState::Ready;
                self.selected_state = FILTER_ALL.to_string();
                self.selected_status = FILTER_ALL.to_string();

                // 记住数据目录
                self.config.data_dir = Some(dir);
                if let Err(e) =
                    ConfigManager::new(ConfigManager::default_path()).save(&self.config)
                {
                    tracing::warn!("配置保存失败: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("数据加载失败: {:#}", e);
                self.status_message = format!("数据加载失败: {:#}", e);
            }
        }
    }

    /// 应用侧边栏过滤和搜索后的主表视图
    ///
    /// "All" 不过滤；选了具体值时缺失字段的记录一律不匹配。
    fn filtered_master<'a>(&self, store: &'a DataStore) -> Vec<&'a CompanyRecord> {
        let search = self.search_query.trim().to_lowercase();

        store
            .master
            .iter()
            .filter(|r| {
                if self.selected_state != FILTER_ALL
                    && r.state.as_deref() != Some(self.selected_state.as_str())
                {
                    return false;
                }
                if self.selected_status != FILTER_ALL
                    && r.company_status.as_deref() != Some(self.selected_status.as_str())
                {
                    return false;
                }
                if !search.is_empty()
                    && !r.cin.to_lowercase().contains(&search)
                    && !r.company_name.to_lowercase().contains(&search)
                {
                    return false;
                }
                true
            })
            .collect()
    }
}

impl eframe::App for InsightsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 顶部菜单栏
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("文件", |ui| {
                    if ui.button("📂 打开数据目录...").clicked() {
                        if let Some(path) = rfd::FileDialog::new().pick_folder() {
                            self.data_dir = path.to_string_lossy().to_string();
                            self.load_data();
                        }
                        ui.close_menu();
                    }
                    if ui.button("🔄 重新加载").clicked() {
                        self.load_data();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("❌ 退出").clicked() {
                        std::process::exit(0);
                    }
                });
            });
        });

        // 底部状态栏
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(store) = &self.store {
                        ui.label(format!(
                            "公司 {} | 事件 {} | 摘要 {}",
                            store.master.len(),
                            store.changes.len(),
                            store.summaries.len()
                        ));
                    }
                });
            });
        });

        // 左侧过滤面板
        if self.state == AppState::Ready {
            self.render_sidebar(ctx);
        }

        // 主内容区域
        egui::CentralPanel::default().show(ctx, |ui| match self.state {
            AppState::Initial => self.render_initial_view(ui),
            AppState::Ready => self.render_tabs(ui),
        });
    }
}

impl InsightsApp {
    /// 渲染初始视图
    fn render_initial_view(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);

            ui.heading(RichText::new("🔍 MCA Insights").size(48.0));
            ui.label("企业注册数据看板与自然语言问答");

            ui.add_space(30.0);

            ui.group(|ui| {
                ui.set_min_width(400.0);

                ui.horizontal(|ui| {
                    ui.label("数据目录:");
                    ui.text_edit_singleline(&mut self.data_dir);
                    if ui.button("📂 浏览").clicked() {
                        if let Some(path) = rfd::FileDialog::new().pick_folder() {
                            self.data_dir = path.to_string_lossy().to_string();
                        }
                    }
                });

                ui.label(
                    RichText::new(format!(
                        "（目录内需包含 {}、{}、{}、{}）",
                        self.config.master_file,
                        self.config.changes_file,
                        self.config.enriched_file,
                        self.config.summary_file
                    ))
                    .small()
                    .color(egui::Color32::GRAY),
                );
            });

            ui.add_space(20.0);

            let can_load = !self.data_dir.is_empty();
            if ui
                .add_enabled(can_load, egui::Button::new("🚀 加载数据"))
                .clicked()
            {
                self.load_data();
            }
        });
    }

    /// 渲染侧边栏（过滤器 + 最新摘要）
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let (states, statuses, latest) = match &self.store {
            Some(store) => (
                store.states(),
                store.statuses(),
                store.latest_summary().cloned(),
            ),
            None => return,
        };

        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("筛选条件");
                ui.separator();

                egui::ComboBox::from_label("邦")
                    .selected_text(&self.selected_state)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.selected_state,
                            FILTER_ALL.to_string(),
                            FILTER_ALL,
                        );
                        for state in &states {
                            ui.selectable_value(
                                &mut self.selected_state,
                                state.clone(),
                                state,
                            );
                        }
                    });

                egui::ComboBox::from_label("公司状态")
                    .selected_text(&self.selected_status)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.selected_status,
                            FILTER_ALL.to_string(),
                            FILTER_ALL,
                        );
                        for status in &statuses {
                            ui.selectable_value(
                                &mut self.selected_status,
                                status.clone(),
                                status,
                            );
                        }
                    });

                if let Some(summary) = latest {
                    ui.add_space(16.0);
                    ui.heading("📰 最新摘要");
                    ui.label(RichText::new(summary.date).color(self.theme.secondary));
                    ui.separator();
                    ui.label(summary.summary);
                }
            });
    }

    /// 渲染标签页区域
    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_tab, Tab::Dashboard, "📊 数据总览");
            ui.selectable_value(&mut self.active_tab, Tab::ChangeHistory, "📈 变更历史");
            ui.selectable_value(&mut self.active_tab, Tab::Enriched, "🧩 补充数据");
            ui.selectable_value(&mut self.active_tab, Tab::Chat, "💬 数据问答");
        });
        ui.separator();

        match self.active_tab {
            Tab::Dashboard => self.render_dashboard(ui),
            Tab::ChangeHistory => self.render_change_history(ui),
            Tab::Enriched => self.render_enriched(ui),
            Tab::Chat => self.render_chat(ui),
        }
    }

    /// 渲染公司记录总览
    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("按 CIN 或公司名称搜索...")
                    .desired_width(260.0),
            );
        });
        ui.separator();

        if let Some(store) = &self.store {
            let filtered = self.filtered_master(store);
            ui.label(format!(
                "符合条件 {} 条，展示前 {} 条",
                filtered.len(),
                filtered.len().min(self.config.dashboard_rows)
            ));
            tables::render_master(ui, &filtered, self.config.dashboard_rows);
        }
    }

    /// 渲染变更历史趋势
    fn render_change_history(&mut self, ui: &mut egui::Ui) {
        ui.heading("每日变更趋势");
        if let Some(store) = &self.store {
            trend::render_trend(ui, &self.theme, &store.changes);
        }
    }

    /// 渲染补充数据
    fn render_enriched(&mut self, ui: &mut egui::Ui) {
        ui.heading("补充数据样本");
        if let Some(store) = &self.store {
            tables::render_enriched(ui, &store.enriched, self.config.enriched_rows);
        }
    }

    /// 渲染数据问答
    fn render_chat(&mut self, ui: &mut egui::Ui) {
        ui.heading("用自然语言提问");
        ui.label(
            RichText::new(
                "例如: Show new incorporations in Maharashtra / \
                 How many companies were struck off?",
            )
            .small()
            .color(self.theme.secondary),
        );
        ui.add_space(8.0);

        let mut submitted = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text("💬 输入你的问题...")
                    .desired_width(420.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if ui.button("提问").clicked() {
                submitted = true;
            }
        });

        if submitted && !self.chat_input.trim().is_empty() {
            if let Some(store) = &self.store {
                self.chat_response = Some(chatbot::respond(store, &self.chat_input));
            }
        }

        if let Some(response) = &self.chat_response {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.set_min_width(480.0);
                // 核心输出原样展示
                ui.label(response);
            });
        }
    }
}
