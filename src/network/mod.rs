//! 流网络核心模块
//!
//! 定义稠密矩阵和容量网络的核心数据结构

mod matrix;
mod network;

pub use matrix::SquareMatrix;
pub use network::{EdgeFlow, FlowNetwork};

/// 顶点 ID（矩阵中的稠密下标）
pub type VertexId = usize;

/// 边容量
pub type Capacity = i64;

/// 单位流量费用
pub type Cost = i64;
