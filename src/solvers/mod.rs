//! 求解方法：穷举搜索与遗传算法，以及它们共用的结果类型
//!

use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;

pub mod brute_force;
pub mod genetic;

/// 穷举搜索的结果，所有满足目标重量的子集及计时
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BruteSolution {
    pub solutions: Vec<Vec<u64>>,
    pub time_to_first: Duration,
    pub time_to_all: Duration,
}

impl BruteSolution {
    /// 遗传算法的时间预算，按找到第一个解所用时间的若干倍计算
    pub fn time_budget(&self, multiplier: f64) -> Duration {
        let nanos = self.time_to_first.as_nanos() as f64 * multiplier;
        Duration::from_nanos(nanos.round() as u64)
    }
}

/// 遗传算法停止的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    Found,
    TimeExpired,
    NoProgress,
}

impl StopReason {
    /// 结果表格中使用的编号
    pub fn code(&self) -> u8 {
        match self {
            StopReason::Found => 0,
            StopReason::TimeExpired => 1,
            StopReason::NoProgress => 2,
        }
    }
}

impl Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StopReason::Found => "found",
            StopReason::TimeExpired => "time expired",
            StopReason::NoProgress => "no progress",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneticSolution {
    pub chosen_items: Vec<u64>,
    pub elapsed: Duration,
    pub best_fitness: u64,
    pub stop_reason: StopReason,
    pub generation_count: u64,
}

impl GeneticSolution {
    pub fn is_solved(&self) -> bool {
        self.stop_reason == StopReason::Found
    }
}
