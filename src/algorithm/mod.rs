//! 流算法模块
//!
//! 包含最小费用最大流引擎和排水式流量报告

mod flow_report;
mod min_cost_flow;

pub use flow_report::drain_report;
pub use min_cost_flow::{AugmentingPath, FlowSummary, MinCostFlow};
