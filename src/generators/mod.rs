//! 实例生成：随机权重向量，以及基于向量构造的子集和任务
//!

use crate::Error;
use serde::Serialize;

pub mod default;
pub mod tasks;

/// 向量长度的上限，超过这个长度时穷举搜索无法完成，子集和也可能溢出
pub const MAX_VECTOR_LENGTH: usize = 40;

pub trait VectorGenerator {
    /// 生成一个新的权重向量，每个分量都在 `[1, amax]` 中
    fn generate(&mut self) -> Vec<u64>;

    fn amax(&self) -> u64;

    fn length(&self) -> usize;
}

/// 一个子集和问题的实例
///
/// 目标重量由向量的某个子集求和得到，因此每个生成的实例至少有一个精确解；
/// 每个实例都持有向量的独立副本，多个求解线程之间不共享数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub vector: Vec<u64>,
    pub vector_number: usize,
    pub target_weight: u64,
    pub fraction: f64,
    pub amax: u64,
    pub length: usize,
}

impl Task {
    /// 手工构造一个实例，`amax` 取向量中的最大值
    pub fn new(vector: Vec<u64>, target_weight: u64) -> Self {
        let amax = vector.iter().copied().max().unwrap_or(1);
        let length = vector.len();
        Self {
            vector,
            vector_number: 1,
            target_weight,
            fraction: 0.0,
            amax,
            length,
        }
    }
}

/// 按照向量长度给出默认的权重上限 `2^round(n / 1.4)`
pub fn default_amax(length: usize) -> Result<u64, Error> {
    if length == 0 || length > MAX_VECTOR_LENGTH {
        return Err(format!("向量长度 {length} 不在 1 到 {MAX_VECTOR_LENGTH} 之间").into());
    }
    let exponent = (length as f64 / 1.4).round() as u32;
    Ok(1 << exponent)
}
