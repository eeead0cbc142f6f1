//! FlowGraph - 最小费用最大流求解器
//!
//! 面向稠密运输网络的最小费用最大流求解库，支持：
//! - Bellman-Ford 最短费用增广路径搜索（容忍负费用的残余边）
//! - 原始容量快照与残余矩阵分离，可精确恢复每边流量
//! - 文本 / JSON 网络描述的批量加载
//! - 残余图负费用环检测

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod network;

// 重导出常用类型
pub use algorithm::{drain_report, AugmentingPath, FlowSummary, MinCostFlow};
pub use error::{Error, Result};
pub use loader::{load_json, load_network, parse_json, parse_network, LoadStats};
pub use network::{Capacity, Cost, EdgeFlow, FlowNetwork, SquareMatrix, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
