//! 最小费用最大流引擎
//!
//! 连续最短路算法：用 Bellman-Ford 松弛在残余图上反复寻找
//! 费用最低的增广路径并沿其推流，直到不存在增广路径为止。
//! 必须使用容忍负权的松弛搜索，因为增广产生的反向边携带负费用。

use crate::error::{Error, Result};
use crate::metrics::global_metrics;
use crate::network::{Capacity, Cost, FlowNetwork, VertexId};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// 求解结果汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSummary {
    /// 最大流量值
    pub total_flow: Capacity,
    /// 达成该流量的总费用
    pub total_cost: Cost,
    /// 使用的增广路径数
    pub augmenting_paths: usize,
}

/// 一条增广路径
///
/// 前驱数组在每次搜索时重新生成，消费完即丢弃，不跨调用复用。
#[derive(Debug, Clone)]
pub struct AugmentingPath {
    pred: Vec<Option<VertexId>>,
    cost: Cost,
    source: VertexId,
    sink: VertexId,
}

impl AugmentingPath {
    /// 路径总费用（源点到汇点的最短费用距离）
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// 从汇点回溯到源点，按回溯顺序给出 (前驱, 顶点) 边对
    ///
    /// 前驱链断裂或成环视为内部不变量被破坏。
    pub fn edges(&self) -> Result<Vec<(VertexId, VertexId)>> {
        let mut edges = Vec::new();
        let mut current = self.sink;
        while current != self.source {
            let prev = self.pred[current].ok_or(Error::DegeneratePath)?;
            edges.push((prev, current));
            if edges.len() > self.pred.len() {
                return Err(Error::DegeneratePath);
            }
            current = prev;
        }
        Ok(edges)
    }
}

/// 最小费用最大流引擎
///
/// 持有网络直到求解结束，通过 [`MinCostFlow::into_network`] 取回
/// 残余状态做事后分析。
pub struct MinCostFlow {
    network: FlowNetwork,
}

impl MinCostFlow {
    /// 创建引擎实例
    pub fn new(network: FlowNetwork) -> Self {
        Self { network }
    }

    /// 当前网络状态
    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub(crate) fn network_mut(&mut self) -> &mut FlowNetwork {
        &mut self.network
    }

    /// 取回网络（含增广后的残余矩阵）
    pub fn into_network(self) -> FlowNetwork {
        self.network
    }

    /// 在残余图上寻找费用最低的增广路径
    ///
    /// 完整跑满 `n - 1` 轮 Bellman-Ford 松弛，不做提前终止；
    /// 只松弛残余容量为正的边。返回 `Ok(None)` 表示汇点不可达，
    /// 这是算法的正常终止条件而非错误。
    pub fn find_augmenting_path(&self) -> Result<Option<AugmentingPath>> {
        let n = self.network.vertex_count();
        let source = self.network.source();
        let sink = self.network.sink();

        let mut dist = vec![Cost::MAX; n];
        let mut pred: Vec<Option<VertexId>> = vec![None; n];
        dist[source] = 0;

        for _ in 0..n.saturating_sub(1) {
            for u in 0..n {
                if dist[u] == Cost::MAX {
                    continue;
                }
                for v in 0..n {
                    if self.network.residual_at(u, v) > 0
                        && dist[v] > dist[u] + self.network.cost_at(u, v)
                    {
                        dist[v] = dist[u] + self.network.cost_at(u, v);
                        pred[v] = Some(u);
                    }
                }
            }
        }

        // 第 n 轮仍能松弛说明存在源点可达的负费用环
        for u in 0..n {
            if dist[u] == Cost::MAX {
                continue;
            }
            for v in 0..n {
                if self.network.residual_at(u, v) > 0
                    && dist[v] > dist[u] + self.network.cost_at(u, v)
                {
                    return Err(Error::NegativeCycle);
                }
            }
        }

        global_metrics().record_search();

        if pred[sink].is_none() {
            return Ok(None);
        }

        Ok(Some(AugmentingPath {
            pred,
            cost: dist[sink],
            source,
            sink,
        }))
    }

    /// 路径上的瓶颈容量
    ///
    /// 只能在搜索返回 `Some` 之后调用；空路径视为内部错误。
    pub fn bottleneck(&self, path: &AugmentingPath) -> Result<Capacity> {
        let edges = path.edges()?;
        edges
            .iter()
            .map(|&(u, v)| self.network.residual_at(u, v))
            .min()
            .ok_or(Error::DegeneratePath)
    }

    /// 沿路径推送指定流量
    pub fn augment(&mut self, path: &AugmentingPath, amount: Capacity) -> Result<()> {
        for (u, v) in path.edges()? {
            self.network.push_flow(u, v, amount);
        }
        Ok(())
    }

    /// 求最大流
    ///
    /// 循环：搜索增广路径 -> 计算瓶颈 -> 增广 -> 累加，直到无路径。
    /// 每次增广严格减少正向残余容量之和，保证终止。
    pub fn max_flow(&mut self) -> Result<FlowSummary> {
        let start = Instant::now();
        let mut summary = FlowSummary::default();

        loop {
            let path = match self.find_augmenting_path()? {
                Some(path) => path,
                None => break,
            };

            let bottleneck = self.bottleneck(&path)?;
            self.augment(&path, bottleneck)?;

            summary.total_flow += bottleneck;
            summary.total_cost += path.cost() * bottleneck;
            summary.augmenting_paths += 1;

            global_metrics().record_augmentation(bottleneck as u64);
            debug!(
                bottleneck,
                path_cost = path.cost(),
                total_flow = summary.total_flow,
                "沿增广路径推流"
            );
        }

        global_metrics().record_solve(start.elapsed());
        info!(
            total_flow = summary.total_flow,
            total_cost = summary.total_cost,
            augmenting_paths = summary.augmenting_paths,
            "最大流求解完成"
        );

        Ok(summary)
    }
}
