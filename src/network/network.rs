//! 容量网络
//!
//! 稠密矩阵表示的有向容量网络。原始容量在建图后保持不变，
//! 增广只作用于残余矩阵，因此每条边的实际流量始终可以由
//! 原始容量减残余容量精确恢复。

use super::matrix::SquareMatrix;
use super::{Capacity, Cost, VertexId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 单条边上的流量记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFlow {
    /// 起点
    pub from: VertexId,
    /// 终点
    pub to: VertexId,
    /// 流量
    pub amount: Capacity,
    /// 单位费用
    pub cost: Cost,
}

/// 容量网络
///
/// 源点固定为 0，汇点固定为 `vertex_ct - 1`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNetwork {
    /// 顶点数
    vertex_ct: usize,
    /// 原始容量矩阵（建图后只读）
    capacity: SquareMatrix,
    /// 残余容量矩阵（增广过程中变化）
    residual: SquareMatrix,
    /// 费用矩阵（反对称：cost[v][u] == -cost[u][v]）
    cost: SquareMatrix,
    /// 源点
    source: VertexId,
    /// 汇点
    sink: VertexId,
}

impl FlowNetwork {
    /// 创建指定顶点数的空网络
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 {
            return Err(Error::InvalidVertexCount(vertex_count));
        }

        Ok(Self {
            vertex_ct: vertex_count,
            capacity: SquareMatrix::zeros(vertex_count),
            residual: SquareMatrix::zeros(vertex_count),
            cost: SquareMatrix::zeros(vertex_count),
            source: 0,
            sink: vertex_count - 1,
        })
    }

    /// 添加有向边
    ///
    /// 同时写入原始容量和残余容量，费用按反对称写入两个方向。
    /// 反向残余容量从 0 开始，只随增广产生。
    /// 端点越界或容量为负时返回错误且不修改任何状态。
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        capacity: Capacity,
        cost: Cost,
    ) -> Result<()> {
        if from >= self.vertex_ct || to >= self.vertex_ct {
            return Err(Error::EdgeOutOfRange {
                from,
                to,
                vertex_count: self.vertex_ct,
            });
        }
        if capacity < 0 {
            return Err(Error::NegativeCapacity { from, to, capacity });
        }

        self.capacity.set(from, to, capacity);
        self.residual.set(from, to, capacity);
        self.cost.set(from, to, cost);
        self.cost.set(to, from, -cost);

        tracing::trace!(from, to, capacity, cost, "添加边");
        Ok(())
    }

    /// 顶点数
    pub fn vertex_count(&self) -> usize {
        self.vertex_ct
    }

    /// 源点
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 汇点
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    /// 原始容量矩阵
    pub fn capacity(&self) -> &SquareMatrix {
        &self.capacity
    }

    /// 残余容量矩阵
    pub fn residual(&self) -> &SquareMatrix {
        &self.residual
    }

    /// 费用矩阵
    pub fn cost(&self) -> &SquareMatrix {
        &self.cost
    }

    /// 单条边的残余容量
    pub fn residual_at(&self, from: VertexId, to: VertexId) -> Capacity {
        self.residual.get(from, to)
    }

    /// 单条边的费用
    pub fn cost_at(&self, from: VertexId, to: VertexId) -> Cost {
        self.cost.get(from, to)
    }

    /// 源点出边的原始容量之和（最大流的上界）
    pub fn source_out_capacity(&self) -> Capacity {
        self.capacity.row(self.source).iter().sum()
    }

    /// 沿边推送流量
    ///
    /// 正向残余减少，反向残余等量增加。增广循环中唯一的状态变更。
    pub fn push_flow(&mut self, from: VertexId, to: VertexId, amount: Capacity) {
        let forward = self.residual.get(from, to);
        let backward = self.residual.get(to, from);
        self.residual.set(from, to, forward - amount);
        self.residual.set(to, from, backward + amount);
    }

    /// 清空一条边的残余容量，返回清掉的数量
    ///
    /// 仅供排水式报告使用，不维护反向残余。
    pub fn drain_edge(&mut self, from: VertexId, to: VertexId) -> Capacity {
        let drained = self.residual.get(from, to);
        self.residual.set(from, to, 0);
        drained
    }

    /// 每条边的精确流量
    ///
    /// 流量 = 原始容量 - 残余容量，只报告原始容量为正且流量为正的边。
    pub fn edge_flows(&self) -> Vec<EdgeFlow> {
        let mut flows = Vec::new();
        for from in 0..self.vertex_ct {
            for to in 0..self.vertex_ct {
                let cap = self.capacity.get(from, to);
                if cap <= 0 {
                    continue;
                }
                let amount = cap - self.residual.get(from, to);
                if amount > 0 {
                    flows.push(EdgeFlow {
                        from,
                        to,
                        amount,
                        cost: self.cost.get(from, to),
                    });
                }
            }
        }
        flows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            FlowNetwork::new(0),
            Err(Error::InvalidVertexCount(0))
        ));
    }

    #[test]
    fn test_new_single_vertex() {
        // 单顶点网络合法，源点即汇点
        let net = FlowNetwork::new(1).unwrap();
        assert_eq!(net.source(), 0);
        assert_eq!(net.sink(), 0);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut net = FlowNetwork::new(3).unwrap();
        assert!(net.add_edge(0, 3, 10, 1).is_err());
        assert!(net.add_edge(5, 1, 10, 1).is_err());

        // 失败的插入不得留下任何痕迹
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(net.capacity().get(i, j), 0);
                assert_eq!(net.cost().get(i, j), 0);
            }
        }
    }

    #[test]
    fn test_add_edge_negative_capacity() {
        let mut net = FlowNetwork::new(2).unwrap();
        assert!(matches!(
            net.add_edge(0, 1, -5, 1),
            Err(Error::NegativeCapacity { .. })
        ));
    }

    #[test]
    fn test_cost_antisymmetry() {
        let mut net = FlowNetwork::new(4).unwrap();
        net.add_edge(0, 1, 10, 2).unwrap();
        net.add_edge(1, 3, 10, 3).unwrap();
        net.add_edge(0, 2, 5, -1).unwrap();

        assert_eq!(net.cost_at(1, 0), -2);
        assert_eq!(net.cost_at(3, 1), -3);
        assert_eq!(net.cost_at(2, 0), 1);
    }

    #[test]
    fn test_add_edge_no_reverse_capacity() {
        let mut net = FlowNetwork::new(2).unwrap();
        net.add_edge(0, 1, 7, 3).unwrap();

        assert_eq!(net.residual_at(0, 1), 7);
        // 反向残余只能由增广产生
        assert_eq!(net.residual_at(1, 0), 0);
        assert_eq!(net.capacity().get(1, 0), 0);
    }

    #[test]
    fn test_push_flow() {
        let mut net = FlowNetwork::new(2).unwrap();
        net.add_edge(0, 1, 7, 3).unwrap();
        net.push_flow(0, 1, 4);

        assert_eq!(net.residual_at(0, 1), 3);
        assert_eq!(net.residual_at(1, 0), 4);
        // 原始容量不受增广影响
        assert_eq!(net.capacity().get(0, 1), 7);
    }

    #[test]
    fn test_edge_flows() {
        let mut net = FlowNetwork::new(3).unwrap();
        net.add_edge(0, 1, 10, 2).unwrap();
        net.add_edge(1, 2, 8, 1).unwrap();
        net.push_flow(0, 1, 6);
        net.push_flow(1, 2, 6);

        let flows = net.edge_flows();
        assert_eq!(
            flows,
            vec![
                EdgeFlow {
                    from: 0,
                    to: 1,
                    amount: 6,
                    cost: 2
                },
                EdgeFlow {
                    from: 1,
                    to: 2,
                    amount: 6,
                    cost: 1
                },
            ]
        );
    }

    #[test]
    fn test_drain_edge() {
        let mut net = FlowNetwork::new(2).unwrap();
        net.add_edge(0, 1, 7, 3).unwrap();

        assert_eq!(net.drain_edge(0, 1), 7);
        assert_eq!(net.residual_at(0, 1), 0);
        // 排水不产生反向残余
        assert_eq!(net.residual_at(1, 0), 0);
    }

    #[test]
    fn test_source_out_capacity() {
        let mut net = FlowNetwork::new(4).unwrap();
        net.add_edge(0, 1, 10, 2).unwrap();
        net.add_edge(0, 2, 5, 1).unwrap();
        net.add_edge(1, 3, 10, 3).unwrap();

        assert_eq!(net.source_out_capacity(), 15);
    }
}
