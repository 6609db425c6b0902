//! 穷举搜索
//!
//! 用位掩码从 0 扫描到 2^n - 1，复杂度随向量长度指数增长，实际使用时长度应控制在 24 到 30 以内。

use super::BruteSolution;
use crate::generators::{Task, MAX_VECTOR_LENGTH};
use crate::Error;
use std::time::Instant;
use tracing::debug;

pub struct BruteForceSolver;

impl BruteForceSolver {
    /// 找出所有和等于目标重量的子集，子集内的权重按向量中的顺序排列
    pub fn solve(task: &Task) -> Result<BruteSolution, Error> {
        let n = task.vector.len();
        if n > MAX_VECTOR_LENGTH {
            return Err(format!("向量长度 {n} 超过穷举搜索的上限 {MAX_VECTOR_LENGTH}").into());
        }
        let start = Instant::now();
        let last_mask = (1u64 << n) - 1;
        let mut solutions = vec![];
        let mut time_to_first = None;
        let mut time_to_all = None;

        for mask in 0..=last_mask {
            let weight: u64 = (0..n)
                .filter(|&i| mask >> i & 1 == 1)
                .map(|i| task.vector[i])
                .sum();
            if weight != task.target_weight {
                continue;
            }
            let subset: Vec<u64> = (0..n)
                .filter(|&i| mask >> i & 1 == 1)
                .map(|i| task.vector[i])
                .collect();
            solutions.push(subset);
            let elapsed = start.elapsed();
            time_to_first.get_or_insert(elapsed);
            // 最后一个掩码命中时扫描也随之结束，两个时间读自同一次计时
            if mask == last_mask {
                time_to_all = Some(elapsed);
            }
        }

        let time_to_all = time_to_all.unwrap_or_else(|| start.elapsed());
        debug!(
            "穷举完成：长度 {n}，共 {} 个解，用时 {:?}",
            solutions.len(),
            time_to_all
        );
        Ok(BruteSolution {
            solutions,
            time_to_first: time_to_first.unwrap_or_default(),
            time_to_all,
        })
    }
}
