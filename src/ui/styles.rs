//! 样式定义

use eframe::egui::Color32;

/// 颜色主题
pub struct Theme {
    pub primary: Color32,
    pub secondary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(66, 133, 244),    // 蓝色
            secondary: Color32::from_rgb(156, 156, 156), // 灰色
            success: Color32::from_rgb(52, 168, 83),     // 绿色
            warning: Color32::from_rgb(251, 188, 4),     // 黄色
            error: Color32::from_rgb(234, 67, 53),       // 红色
        }
    }
}

impl Theme {
    /// 获取变更类型对应的颜色
    pub fn change_type_color(&self, change_type: &str) -> Color32 {
        match change_type {
            "New Incorporation" => self.success,
            "Deregistered/Struck Off" => self.error,
            _ => self.secondary,
        }
    }
}
