//! 性能指标收集模块
//!
//! 提供求解器运行时指标的收集和导出功能

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 求解统计
    solver_stats: SolverStats,
    /// 加载统计
    loader_stats: LoaderStats,
    /// 启动时间
    start_time: Instant,
}

/// 求解统计
#[derive(Debug)]
struct SolverStats {
    /// 增广路径搜索次数
    searches: AtomicU64,
    /// 成功增广次数
    augmentations: AtomicU64,
    /// 推送的流量单位总数
    flow_units: AtomicU64,
    /// 完成的求解次数
    solves: AtomicU64,
    /// 求解总耗时（微秒）
    total_solve_us: AtomicU64,
}

/// 加载统计
#[derive(Debug)]
struct LoaderStats {
    /// 成功加载的网络数
    networks_loaded: AtomicU64,
    /// 加载失败数
    load_failures: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    // 求解指标
    pub searches: u64,
    pub augmentations: u64,
    pub flow_units: u64,
    pub solves: u64,
    pub avg_solve_duration_ms: f64,

    // 加载指标
    pub networks_loaded: u64,
    pub load_failures: u64,

    // 系统指标
    pub uptime_seconds: u64,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            solver_stats: SolverStats {
                searches: AtomicU64::new(0),
                augmentations: AtomicU64::new(0),
                flow_units: AtomicU64::new(0),
                solves: AtomicU64::new(0),
                total_solve_us: AtomicU64::new(0),
            },
            loader_stats: LoaderStats {
                networks_loaded: AtomicU64::new(0),
                load_failures: AtomicU64::new(0),
            },
            start_time: Instant::now(),
        }
    }

    /// 记录一次增广路径搜索
    pub fn record_search(&self) {
        self.solver_stats.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次成功增广
    pub fn record_augmentation(&self, flow_units: u64) {
        self.solver_stats
            .augmentations
            .fetch_add(1, Ordering::Relaxed);
        self.solver_stats
            .flow_units
            .fetch_add(flow_units, Ordering::Relaxed);
    }

    /// 记录一次完整求解
    pub fn record_solve(&self, duration: Duration) {
        self.solver_stats.solves.fetch_add(1, Ordering::Relaxed);
        self.solver_stats
            .total_solve_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// 记录一次成功加载
    pub fn record_network_loaded(&self) {
        self.loader_stats
            .networks_loaded
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 记录一次加载失败
    pub fn record_load_failure(&self) {
        self.loader_stats
            .load_failures
            .fetch_add(1, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let searches = self.solver_stats.searches.load(Ordering::Relaxed);
        let augmentations = self.solver_stats.augmentations.load(Ordering::Relaxed);
        let flow_units = self.solver_stats.flow_units.load(Ordering::Relaxed);
        let solves = self.solver_stats.solves.load(Ordering::Relaxed);
        let total_solve_us = self.solver_stats.total_solve_us.load(Ordering::Relaxed);

        let avg_solve_duration_ms = if solves > 0 {
            (total_solve_us as f64) / (solves as f64) / 1000.0
        } else {
            0.0
        };

        MetricsSnapshot {
            searches,
            augmentations,
            flow_units,
            solves,
            avg_solve_duration_ms,
            networks_loaded: self.loader_stats.networks_loaded.load(Ordering::Relaxed),
            load_failures: self.loader_stats.load_failures.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.solver_stats.searches.store(0, Ordering::Relaxed);
        self.solver_stats.augmentations.store(0, Ordering::Relaxed);
        self.solver_stats.flow_units.store(0, Ordering::Relaxed);
        self.solver_stats.solves.store(0, Ordering::Relaxed);
        self.solver_stats.total_solve_us.store(0, Ordering::Relaxed);

        self.loader_stats.networks_loaded.store(0, Ordering::Relaxed);
        self.loader_stats.load_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}
