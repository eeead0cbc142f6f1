//! 稠密方阵
//!
//! 容量、残余和费用矩阵的底层存储，行主序布局

use serde::{Deserialize, Serialize};

/// 稠密方阵（行主序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<i64>,
}

impl SquareMatrix {
    /// 创建全零方阵
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0; dim * dim],
        }
    }

    /// 矩阵维度
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// 读取元素
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.dim + col]
    }

    /// 写入元素
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        self.data[row * self.dim + col] = value;
    }

    /// 按行访问
    pub fn row(&self, row: usize) -> &[i64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }
}
