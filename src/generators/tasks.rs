use super::{Task, VectorGenerator};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 子集占向量长度的比例在 `[MIN_FRACTION, MAX_FRACTION)` 中均匀选取
pub const MIN_FRACTION: f64 = 0.1;
pub const MAX_FRACTION: f64 = 0.5;

/// 基于随机向量批量生成子集和任务
///
/// 任务的组成依赖于调用顺序：向量生成和子集采样各用一个带种子的随机源，
/// 只有按相同顺序调用时才能复现同一批任务
pub struct TaskGenerator<G: VectorGenerator> {
    vector_generator: G,
    rng: StdRng,
}

impl<G: VectorGenerator> TaskGenerator<G> {
    pub fn new(vector_generator: G, seed: u64) -> Self {
        Self {
            vector_generator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 生成 `vector_count` 个向量，每个向量派生 `tasks_per_vector` 个任务
    ///
    /// 输出按向量编号分组，编号从 1 开始
    pub fn generate_tasks(&mut self, vector_count: usize, tasks_per_vector: usize) -> Vec<Task> {
        (1..=vector_count)
            .flat_map(|vector_number| self.generate_for_vector(vector_number, tasks_per_vector))
            .collect()
    }

    fn generate_for_vector(&mut self, vector_number: usize, tasks_per_vector: usize) -> Vec<Task> {
        let vector = self.vector_generator.generate();
        let amax = self.vector_generator.amax();
        let length = self.vector_generator.length();
        let n = vector.len();
        (0..tasks_per_vector)
            .map(|_| {
                let fraction = self.rng.random_range(MIN_FRACTION..MAX_FRACTION);
                let count = ((n as f64 * fraction).round() as usize).clamp(1, n);
                // 随机排列后取前 count 个下标，即不放回地抽取
                let mut indices: Vec<usize> = (0..n).collect();
                indices.shuffle(&mut self.rng);
                let target_weight = indices[..count].iter().map(|&i| vector[i]).sum();
                Task {
                    vector: vector.clone(),
                    vector_number,
                    target_weight,
                    fraction,
                    amax,
                    length,
                }
            })
            .collect()
    }
}
