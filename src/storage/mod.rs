//! Storage模块 - 数据集加载与配置持久化

pub mod config;
pub mod loader;
