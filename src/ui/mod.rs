//! UI模块 - 看板界面

pub mod app;
pub mod styles;
pub mod tables;
pub mod trend;
