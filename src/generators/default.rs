use super::{VectorGenerator, MAX_VECTOR_LENGTH};
use crate::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 默认的向量生成器，各分量独立地在 `[1, amax]` 上均匀分布
///
/// 随机源由生成器自己持有，相同的种子给出相同的向量序列
pub struct UniformVectorGenerator {
    length: usize,
    amax: u64,
    rng: StdRng,
}

impl UniformVectorGenerator {
    pub fn new(length: usize, amax: u64, seed: u64) -> Result<Self, Error> {
        if length == 0 || length > MAX_VECTOR_LENGTH {
            return Err(format!("向量长度 {length} 不在 1 到 {MAX_VECTOR_LENGTH} 之间").into());
        }
        if amax == 0 {
            return Err("权重上限 amax 必须为正数".into());
        }
        Ok(Self {
            length,
            amax,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl VectorGenerator for UniformVectorGenerator {
    fn generate(&mut self) -> Vec<u64> {
        (0..self.length)
            .map(|_| self.rng.random_range(1..=self.amax))
            .collect()
    }

    fn amax(&self) -> u64 {
        self.amax
    }

    fn length(&self) -> usize {
        self.length
    }
}
