//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点数无效: {0} (至少需要 1 个顶点)")]
    InvalidVertexCount(usize),

    #[error("边端点越界: {from} -> {to} (顶点数 {vertex_count})")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        vertex_count: usize,
    },

    #[error("边容量为负: {from} -> {to} 容量 {capacity}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: i64,
    },

    #[error("残余图中存在源点可达的负费用环")]
    NegativeCycle,

    #[error("增广路径退化: 无法从汇点回溯到源点")]
    DegeneratePath,

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("加载错误: {0}")]
    LoadError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
