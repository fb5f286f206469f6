//! Core模块 - 包含所有核心业务逻辑

pub mod models;
pub mod classifier;
pub mod resolver;
pub mod formatter;
pub mod chatbot;
