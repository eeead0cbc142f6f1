//! FlowGraph 批量求解工具
//!
//! 依次处理多个网络描述文件，输出最小费用最大流结果

use anyhow::Result;
use clap::Parser;
use flowgraph::cli::{format_edge_flows, format_matrix, format_summary};
use flowgraph::metrics::global_metrics;
use flowgraph::network::EdgeFlow;
use flowgraph::{drain_report, loader, FlowSummary, MinCostFlow};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "flowgraph-solve")]
#[command(about = "FlowGraph 最小费用最大流批量求解工具")]
struct Args {
    /// 网络描述文件（按给定顺序逐个处理）
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// 输入格式: text, json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// 转储容量/费用/残余矩阵
    #[arg(short, long)]
    matrices: bool,

    /// 附加排水式流量诊断（在独立的网络副本上运行）
    #[arg(short, long)]
    drain: bool,

    /// 以 JSON 输出求解结果
    #[arg(long)]
    json: bool,

    /// 结束时输出运行指标
    #[arg(long)]
    stats: bool,
}

/// 单个文件的求解报告（JSON 输出）
#[derive(Debug, Serialize)]
struct SolveReport {
    file: String,
    vertices: usize,
    summary: FlowSummary,
    edge_flows: Vec<EdgeFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drain: Option<Vec<EdgeFlow>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut failures = 0usize;

    // 每个文件独立建网求解，严格串行
    for path in &args.files {
        if let Err(e) = solve_file(path, &args) {
            warn!(path = %path.display(), error = %e, "文件处理失败，跳过");
            eprintln!("跳过 {}: {}", path.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!("\n{} 个文件处理失败", failures);
    }

    if args.stats {
        let snapshot = global_metrics().snapshot();
        println!("\n{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

fn solve_file(path: &Path, args: &Args) -> Result<()> {
    let loaded = match args.format.as_str() {
        "text" => loader::load_network(path),
        "json" => loader::load_json(path),
        other => anyhow::bail!("不支持的格式: {}", other),
    };
    let (network, _stats) = loaded.map_err(|e| {
        global_metrics().record_load_failure();
        e
    })?;

    if !args.json {
        println!("\n**** Find Flow {}", path.display());
    }

    if args.matrices && !args.json {
        print!("{}", format_matrix("Capacity", network.capacity()));
        print!("{}", format_matrix("Edge Cost", network.cost()));
    }

    // 排水诊断会清空残余矩阵，须在求解前留一份副本
    let drain_copy = args.drain.then(|| network.clone());

    let vertices = network.vertex_count();
    let mut engine = MinCostFlow::new(network);
    let summary = engine.max_flow()?;
    let edge_flows = engine.network().edge_flows();

    let drain_records = match drain_copy {
        Some(copy) => {
            let mut drain_engine = MinCostFlow::new(copy);
            Some(drain_report(&mut drain_engine)?)
        }
        None => None,
    };

    if args.json {
        let report = SolveReport {
            file: path.display().to_string(),
            vertices,
            summary,
            edge_flows,
            drain: drain_records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.matrices {
        print!("{}", format_matrix("Residual", engine.network().residual()));
    }

    println!("{}", format_summary(vertices, &summary));
    println!("{}", format_edge_flows(&edge_flows));

    if let Some(records) = drain_records {
        println!("Final flow on each edge (draining diagnostic)");
        for r in &records {
            println!("Flow {} -> {} fits: {}, cost: {}", r.from, r.to, r.amount, r.cost);
        }
    }

    Ok(())
}
