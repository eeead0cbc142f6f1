//! 命令行展示模块
//!
//! 提供矩阵转储和求解结果的表格输出

mod printer;

pub use printer::{format_edge_flows, format_matrix, format_summary};
