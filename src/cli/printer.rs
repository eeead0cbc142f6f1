//! 结果打印器
//!
//! 提供矩阵转储和表格格式的结果输出

use crate::algorithm::FlowSummary;
use crate::network::{EdgeFlow, SquareMatrix};
use prettytable::{format, row, Table};

/// 带标签的矩阵转储
///
/// 标签行之后是列下标表头行，每个顶点一行并以其下标开头，
/// 所有单元格右对齐到宽度 5。
pub fn format_matrix(label: &str, matrix: &SquareMatrix) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n {} \n     ", label));
    for col in 0..matrix.dim() {
        out.push_str(&format!("{:5}", col));
    }
    out.push('\n');
    for r in 0..matrix.dim() {
        out.push_str(&format!("{:5}", r));
        for c in 0..matrix.dim() {
            out.push_str(&format!("{:5}", matrix.get(r, c)));
        }
        out.push('\n');
    }
    out
}

/// 每边流量表格
pub fn format_edge_flows(flows: &[EdgeFlow]) -> String {
    if flows.is_empty() {
        return "Empty set\n".to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["From", "To", "Flow", "Cost"]);

    for flow in flows {
        table.add_row(row![
            flow.from.to_string(),
            flow.to.to_string(),
            flow.amount.to_string(),
            flow.cost.to_string()
        ]);
    }

    format!("{}\n{} edge(s) carrying flow\n", table, flows.len())
}

/// 求解结果摘要
pub fn format_summary(vertex_count: usize, summary: &FlowSummary) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Property", "Value"]);
    table.add_row(row!["Vertex Count", vertex_count.to_string()]);
    table.add_row(row!["Max Flow", summary.total_flow.to_string()]);
    table.add_row(row!["Total Cost", summary.total_cost.to_string()]);
    table.add_row(row![
        "Augmenting Paths",
        summary.augmenting_paths.to_string()
    ]);
    table.to_string()
}
