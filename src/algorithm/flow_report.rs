//! 排水式流量报告
//!
//! 反复寻找当前费用最低的路径，把路径上每条边的残余容量
//! 一次性清空并记录，直到源汇之间再无路径。清空的是整条边
//! 而不是路径瓶颈，因此结果是粗粒度的诊断输出，精确的每边
//! 流量请使用 [`FlowNetwork::edge_flows`]。
//!
//! [`FlowNetwork::edge_flows`]: crate::network::FlowNetwork::edge_flows

use super::min_cost_flow::MinCostFlow;
use crate::error::Result;
use crate::network::EdgeFlow;
use tracing::debug;

/// 排水式遍历，返回 (起点, 终点, 访问时残余, 费用) 记录
///
/// 记录按路径发现顺序产生，单条路径内从汇点回溯到源点。
/// 破坏性操作：结束后网络的残余矩阵已被清空，不可重复调用取得
/// 相同结果。
pub fn drain_report(engine: &mut MinCostFlow) -> Result<Vec<EdgeFlow>> {
    let mut records = Vec::new();

    loop {
        let path = match engine.find_augmenting_path()? {
            Some(path) => path,
            None => break,
        };

        for (from, to) in path.edges()? {
            let amount = engine.network_mut().drain_edge(from, to);
            let cost = engine.network().cost_at(from, to);
            debug!(from, to, amount, cost, "清空路径边");
            records.push(EdgeFlow {
                from,
                to,
                amount,
                cost,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::FlowNetwork;

    #[test]
    fn test_drain_single_edge() {
        let mut net = FlowNetwork::new(2).unwrap();
        net.add_edge(0, 1, 7, 3).unwrap();

        let mut engine = MinCostFlow::new(net);
        let records = drain_report(&mut engine).unwrap();
        assert_eq!(
            records,
            vec![EdgeFlow {
                from: 0,
                to: 1,
                amount: 7,
                cost: 3
            }]
        );

        // 再次调用时网络已排空
        assert!(drain_report(&mut engine).unwrap().is_empty());
    }

    #[test]
    fn test_drain_two_paths() {
        let mut net = FlowNetwork::new(4).unwrap();
        net.add_edge(0, 1, 10, 2).unwrap();
        net.add_edge(1, 3, 10, 3).unwrap();
        net.add_edge(0, 2, 5, 1).unwrap();
        net.add_edge(2, 3, 5, 4).unwrap();

        let mut engine = MinCostFlow::new(net);
        let records = drain_report(&mut engine).unwrap();

        // 先清空费用 5 的 0-1-3（汇点回溯顺序），再清空 0-2-3
        assert_eq!(
            records,
            vec![
                EdgeFlow {
                    from: 1,
                    to: 3,
                    amount: 10,
                    cost: 3
                },
                EdgeFlow {
                    from: 0,
                    to: 1,
                    amount: 10,
                    cost: 2
                },
                EdgeFlow {
                    from: 2,
                    to: 3,
                    amount: 5,
                    cost: 4
                },
                EdgeFlow {
                    from: 0,
                    to: 2,
                    amount: 5,
                    cost: 1
                },
            ]
        );
    }

    #[test]
    fn test_drain_after_solve_is_empty() {
        let mut net = FlowNetwork::new(2).unwrap();
        net.add_edge(0, 1, 7, 3).unwrap();

        let mut engine = MinCostFlow::new(net);
        engine.max_flow().unwrap();

        // 求解后正向残余已饱和，排水报告为空
        assert!(drain_report(&mut engine).unwrap().is_empty());
    }
}
