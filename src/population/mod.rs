//! 遗传算法的种群
//!
//! 种群持有染色体、当前一代的适应度、遗传算子的参数和自己的随机源。每次进化都用同样大小的
//! 新一代整体替换旧的一代，不保留精英。

use crate::objectives::Fitness;
use crate::Error;
use rand::Rng;

mod chromosome;
pub mod operators;

pub use chromosome::Chromosome;

/// 默认的锦标赛规模
pub const TOURNAMENT_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationConfig {
    pub size: usize,
    pub chromosome_length: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub tournament_size: usize,
}

impl PopulationConfig {
    /// 检查参数，不合法时直接报错而不是截断到合法范围
    pub fn validate(&self) -> Result<(), Error> {
        if self.size == 0 || self.size % 2 != 0 {
            return Err(format!("种群大小必须为正偶数，当前为 {}", self.size).into());
        }
        if self.chromosome_length == 0 {
            return Err("染色体长度必须为正数".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!("变异率 {} 不在 [0, 1] 中", self.mutation_rate).into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(format!("杂交率 {} 不在 [0, 1] 中", self.crossover_rate).into());
        }
        if self.tournament_size == 0 || self.tournament_size > self.size {
            return Err(format!(
                "锦标赛规模 {} 必须在 1 到种群大小 {} 之间",
                self.tournament_size, self.size
            )
            .into());
        }
        Ok(())
    }
}

pub struct Population<F: Fitness, R: Rng> {
    chromosomes: Vec<Chromosome>,
    scores: Vec<u64>,
    config: PopulationConfig,
    fitness: F,
    rng: R,
}

impl<F: Fitness, R: Rng> Population<F, R> {
    /// 随机初始化一个种群
    pub fn new(config: PopulationConfig, fitness: F, mut rng: R) -> Result<Self, Error> {
        config.validate()?;
        let chromosomes = (0..config.size)
            .map(|_| Chromosome::random(config.chromosome_length, &mut rng))
            .collect();
        Ok(Self::assemble(config, chromosomes, fitness, rng))
    }

    /// 用给定的染色体构造种群
    pub fn from_chromosomes(
        config: PopulationConfig,
        chromosomes: Vec<Chromosome>,
        fitness: F,
        rng: R,
    ) -> Result<Self, Error> {
        config.validate()?;
        if chromosomes.len() != config.size {
            return Err(format!(
                "染色体数量 {} 与种群大小 {} 不一致",
                chromosomes.len(),
                config.size
            )
            .into());
        }
        if chromosomes.iter().any(|c| c.len() != config.chromosome_length) {
            return Err("染色体长度与配置不一致".into());
        }
        Ok(Self::assemble(config, chromosomes, fitness, rng))
    }

    fn assemble(
        config: PopulationConfig,
        chromosomes: Vec<Chromosome>,
        fitness: F,
        rng: R,
    ) -> Self {
        let mut population = Self {
            chromosomes,
            scores: vec![],
            config,
            fitness,
            rng,
        };
        population.evaluate();
        population
    }

    fn evaluate(&mut self) {
        self.scores = self
            .chromosomes
            .iter()
            .map(|c| self.fitness.evaluate(&c.genes))
            .collect();
    }

    /// 产生新的一代并替换当前的一代
    pub fn evolve(&mut self) {
        let PopulationConfig {
            size,
            mutation_rate,
            crossover_rate,
            tournament_size,
            ..
        } = self.config;
        let mut next = Vec::with_capacity(size);
        for _ in 0..size / 2 {
            let first =
                operators::tournament_selection(&self.scores, tournament_size, &mut self.rng);
            let second =
                operators::tournament_selection(&self.scores, tournament_size, &mut self.rng);
            let (mut child_a, mut child_b) = operators::single_point_crossover(
                &self.chromosomes[first],
                &self.chromosomes[second],
                crossover_rate,
                &mut self.rng,
            );
            operators::flip_mutation(&mut child_a, mutation_rate, &mut self.rng);
            operators::flip_mutation(&mut child_b, mutation_rate, &mut self.rng);
            next.push(child_a);
            next.push(child_b);
        }
        self.chromosomes = next;
        self.evaluate();
    }

    /// 在指定的参赛者中进行一次锦标赛
    pub fn tournament_among(&self, contestants: &[usize]) -> Option<usize> {
        operators::tournament_among(&self.scores, contestants)
    }

    fn best_index(&self) -> usize {
        let mut best = 0;
        for (index, &score) in self.scores.iter().enumerate() {
            if score < self.scores[best] {
                best = index;
            }
        }
        best
    }

    /// 当前一代中适应度最低的染色体，并列时取靠前的
    pub fn best(&self) -> &Chromosome {
        &self.chromosomes[self.best_index()]
    }

    pub fn best_fitness(&self) -> u64 {
        self.scores[self.best_index()]
    }

    pub fn average_fitness(&self) -> f64 {
        let total: u64 = self.scores.iter().sum();
        total as f64 / self.scores.len() as f64
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    pub fn fitness(&self) -> &F {
        &self.fitness
    }
}
