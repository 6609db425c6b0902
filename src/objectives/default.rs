use super::Fitness;
use crate::generators::Task;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 适应度的两种计算方式，在构造任务的适应度时选定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FitnessKind {
    /// `|sum - target|`
    #[default]
    Linear,
    /// `|(sum mod m) - (target mod m)|`，其中 `m = amax + 1`
    ///
    /// 这种方式让适应度地形更平坦，但同余而不相等的子集也会得到零分，
    /// 因此零分并不保证子集和恰好等于目标重量
    Modular,
}

impl Display for FitnessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitnessKind::Linear => write!(f, "linear"),
            FitnessKind::Modular => write!(f, "modular"),
        }
    }
}

/// 子集和问题的适应度，持有任务权重的副本
#[derive(Debug, Clone)]
pub struct SubsetSumFitness {
    weights: Vec<u64>,
    target: u64,
    length: usize,
    kind: FitnessKind,
    modulus: u64,
}

impl SubsetSumFitness {
    pub fn new(task: &Task, kind: FitnessKind) -> Self {
        Self {
            weights: task.vector.clone(),
            target: task.target_weight,
            length: task.length,
            kind,
            modulus: task.amax + 1,
        }
    }

    /// 被选中的权重，只考虑任务声明长度以内的基因
    fn selected<'a>(&'a self, genes: &'a [bool]) -> impl Iterator<Item = u64> + 'a {
        genes
            .iter()
            .zip(&self.weights)
            .take(self.length)
            .filter(|&(&gene, _)| gene)
            .map(|(_, &weight)| weight)
    }

    pub fn decode(&self, genes: &[bool]) -> Vec<u64> {
        self.selected(genes).collect()
    }

    pub fn selected_sum(&self, genes: &[bool]) -> u64 {
        self.selected(genes).sum()
    }
}

impl Fitness for SubsetSumFitness {
    fn evaluate(&self, genes: &[bool]) -> u64 {
        let sum = self.selected_sum(genes);
        match self.kind {
            FitnessKind::Linear => sum.abs_diff(self.target),
            FitnessKind::Modular => (sum % self.modulus).abs_diff(self.target % self.modulus),
        }
    }
}
