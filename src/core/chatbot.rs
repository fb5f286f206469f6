//! 问答管道模块
//!
//! 把分类、解析、格式化三步串成一次完整的问答调用。
//! 管道同步、无状态、纯函数：除了读取数据仓库没有任何副作用，
//! 每次调用相互独立，没有多轮会话上下文。

use crate::core::classifier::classify;
use crate::core::formatter::format_response;
use crate::core::models::DataStore;
use crate::core::resolver::resolve;

/// 回答一条自由文本查询
///
/// 任何输入都产生一条非空响应，管道内部没有失败路径。
pub fn respond(store: &DataStore, raw_query: &str) -> String {
    let intent = classify(raw_query);
    tracing::debug!("查询意图判定: {:?}", intent);

    let result = resolve(intent, raw_query, store);
    format_response(&result)
}
