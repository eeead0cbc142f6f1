//! 网络描述加载模块
//!
//! 支持从文本和 JSON 文件加载容量网络。任何格式错误都会使
//! 当前文件整体加载失败，由批处理调用方决定跳过并继续。

use crate::error::{Error, Result};
use crate::metrics::global_metrics;
use crate::network::FlowNetwork;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// 加载统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoadStats {
    pub vertex_count: usize,
    pub edges_loaded: usize,
    pub duration_ms: u64,
}

/// 边描述（JSON 格式）
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    from: usize,
    to: usize,
    capacity: i64,
    cost: i64,
}

/// 网络描述（JSON 格式）
#[derive(Debug, Serialize, Deserialize)]
struct NetworkRecord {
    vertices: usize,
    edges: Vec<EdgeRecord>,
}

/// 解析文本格式的网络描述
///
/// 第一个整数是顶点数，之后是零条或多条空白分隔的
/// `起点 终点 容量 费用` 四元组，读到输入结束为止。
pub fn parse_network(input: &str) -> Result<FlowNetwork> {
    parse_counted(input).map(|(network, _)| network)
}

fn parse_counted(input: &str) -> Result<(FlowNetwork, usize)> {
    let mut tokens = input.split_whitespace();

    let vertex_count =
        next_int(&mut tokens)?.ok_or_else(|| Error::ParseError("缺少顶点数".to_string()))?;
    if vertex_count < 0 {
        return Err(Error::ParseError(format!("顶点数为负: {}", vertex_count)));
    }

    let mut network = FlowNetwork::new(vertex_count as usize)?;
    let mut edges = 0;

    while let Some(from) = next_int(&mut tokens)? {
        let to = require_int(&mut tokens, "终点")?;
        let capacity = require_int(&mut tokens, "容量")?;
        let cost = require_int(&mut tokens, "费用")?;

        if from < 0 || to < 0 {
            return Err(Error::ParseError(format!("边端点为负: {} -> {}", from, to)));
        }
        network.add_edge(from as usize, to as usize, capacity, cost)?;
        edges += 1;
    }

    Ok((network, edges))
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Option<i64>> {
    match tokens.next() {
        None => Ok(None),
        Some(token) => token
            .parse::<i64>()
            .map(Some)
            .map_err(|_| Error::ParseError(format!("非法整数: {}", token))),
    }
}

fn require_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, field: &str) -> Result<i64> {
    next_int(tokens)?.ok_or_else(|| Error::ParseError(format!("四元组不完整: 缺少{}", field)))
}

/// 从文本文件加载网络
pub fn load_network<P: AsRef<Path>>(path: P) -> Result<(FlowNetwork, LoadStats)> {
    let start = std::time::Instant::now();
    let input = fs::read_to_string(&path)?;
    let (network, edges) = parse_counted(&input)?;

    let stats = LoadStats {
        vertex_count: network.vertex_count(),
        edges_loaded: edges,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    global_metrics().record_network_loaded();
    info!(
        path = %path.as_ref().display(),
        vertices = stats.vertex_count,
        edges = stats.edges_loaded,
        "网络加载完成"
    );
    Ok((network, stats))
}

/// 解析 JSON 格式的网络描述
///
/// 文档形如 `{"vertices": n, "edges": [{"from", "to", "capacity", "cost"}, ...]}`。
pub fn parse_json(input: &str) -> Result<FlowNetwork> {
    parse_json_counted(input).map(|(network, _)| network)
}

fn parse_json_counted(input: &str) -> Result<(FlowNetwork, usize)> {
    let record: NetworkRecord = serde_json::from_str(input)
        .map_err(|e| Error::ParseError(format!("JSON 解析错误: {}", e)))?;

    let mut network = FlowNetwork::new(record.vertices)?;
    for edge in &record.edges {
        network.add_edge(edge.from, edge.to, edge.capacity, edge.cost)?;
    }
    Ok((network, record.edges.len()))
}

/// 从 JSON 文件加载网络
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<(FlowNetwork, LoadStats)> {
    let start = std::time::Instant::now();
    let input = fs::read_to_string(&path)?;
    let (network, edges) = parse_json_counted(&input)?;

    let stats = LoadStats {
        vertex_count: network.vertex_count(),
        edges_loaded: edges,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    global_metrics().record_network_loaded();
    info!(
        path = %path.as_ref().display(),
        vertices = stats.vertex_count,
        edges = stats.edges_loaded,
        "网络加载完成"
    );
    Ok((network, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_text() {
        let net = parse_network("4  0 1 10 2  1 3 10 3  0 2 5 1  2 3 5 4").unwrap();
        assert_eq!(net.vertex_count(), 4);
        assert_eq!(net.capacity().get(0, 1), 10);
        assert_eq!(net.cost().get(3, 1), -3);
    }

    #[test]
    fn test_parse_no_edges() {
        let net = parse_network("2").unwrap();
        assert_eq!(net.vertex_count(), 2);
        assert_eq!(net.source_out_capacity(), 0);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_network(""), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_parse_truncated_tuple() {
        assert!(matches!(
            parse_network("3 0 1 10"),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_garbage_token() {
        assert!(matches!(
            parse_network("3 0 1 ten 2"),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_out_of_range_endpoint() {
        assert!(matches!(
            parse_network("3 0 7 10 2"),
            Err(Error::EdgeOutOfRange { .. })
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "4").unwrap();
        writeln!(file, "0 1 10 2").unwrap();
        writeln!(file, "1 3 10 3").unwrap();
        writeln!(file, "0 2 5 1").unwrap();
        writeln!(file, "2 3 5 4").unwrap();

        let (net, stats) = load_network(file.path()).unwrap();
        assert_eq!(net.vertex_count(), 4);
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edges_loaded, 4);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"vertices": 2, "edges": [{{"from": 0, "to": 1, "capacity": 7, "cost": 3}}]}}"#
        )
        .unwrap();

        let (net, stats) = load_json(file.path()).unwrap();
        assert_eq!(net.vertex_count(), 2);
        assert_eq!(net.capacity().get(0, 1), 7);
        assert_eq!(stats.edges_loaded, 1);
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(matches!(
            parse_json(r#"{"vertices": 2}"#),
            Err(Error::ParseError(_))
        ));
    }
}
