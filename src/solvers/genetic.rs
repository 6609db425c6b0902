//! 遗传算法求解
//!
//! 每一代先进化种群，再读取最优适应度和平均适应度，然后依次检查停止条件：
//!
//! 1. 最优适应度为零，找到了解；
//! 2. 用时超过时间预算；
//! 3. 平均适应度连续三次观测都相同，种群已经停滞。

use super::{GeneticSolution, StopReason};
use crate::config::GeneticConfig;
use crate::generators::Task;
use crate::objectives::default::SubsetSumFitness;
use crate::objectives::Fitness;
use crate::population::Population;
use crate::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Stopped(StopReason),
}

/// 停止条件的状态机，与具体的搜索过程无关，可以单独喂入观测值
#[derive(Debug, Clone)]
pub struct Termination {
    budget: Duration,
    previous: Option<f64>,
    before_previous: Option<f64>,
    state: SearchState,
}

impl Termination {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            previous: None,
            before_previous: None,
            state: SearchState::Running,
        }
    }

    /// 记录一代的观测值；一旦停止，后续的观测不再改变状态
    pub fn observe(
        &mut self,
        best_fitness: u64,
        average_fitness: f64,
        elapsed: Duration,
    ) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }
        let stagnant = self.previous == Some(average_fitness)
            && self.before_previous == Some(average_fitness);
        if best_fitness == 0 {
            self.state = SearchState::Stopped(StopReason::Found);
        } else if elapsed > self.budget {
            self.state = SearchState::Stopped(StopReason::TimeExpired);
        } else if stagnant {
            self.state = SearchState::Stopped(StopReason::NoProgress);
        } else {
            self.before_previous = self.previous;
            self.previous = Some(average_fitness);
        }
        self.state
    }
}

/// 反复进化种群直到停止，返回停止原因和代数
///
/// 初始种群算作第 1 代，因此代数比进化的次数多 1
pub fn evolve_until<F: Fitness, R: Rng>(
    population: &mut Population<F, R>,
    termination: &mut Termination,
    start: Instant,
) -> (StopReason, u64) {
    let mut generation_count = 1;
    loop {
        population.evolve();
        generation_count += 1;
        let best_fitness = population.best_fitness();
        let average_fitness = population.average_fitness();
        if let SearchState::Stopped(reason) =
            termination.observe(best_fitness, average_fitness, start.elapsed())
        {
            return (reason, generation_count);
        }
    }
}

pub struct GeneticSolver {
    config: GeneticConfig,
}

impl GeneticSolver {
    pub fn new(config: GeneticConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// 种群的随机源取自线程随机数
    pub fn solve(&self, task: &Task, budget: Duration) -> Result<GeneticSolution, Error> {
        self.solve_with(task, budget, StdRng::seed_from_u64(rand::random()))
    }

    pub fn solve_seeded(
        &self,
        task: &Task,
        budget: Duration,
        seed: u64,
    ) -> Result<GeneticSolution, Error> {
        self.solve_with(task, budget, StdRng::seed_from_u64(seed))
    }

    fn solve_with<R: Rng>(
        &self,
        task: &Task,
        budget: Duration,
        rng: R,
    ) -> Result<GeneticSolution, Error> {
        let fitness = SubsetSumFitness::new(task, self.config.fitness);
        let population_config = self.config.population_config(task.length);
        let start = Instant::now();
        let mut population = Population::new(population_config, fitness, rng)?;
        let mut termination = Termination::new(budget);
        let (stop_reason, generation_count) =
            evolve_until(&mut population, &mut termination, start);
        let elapsed = start.elapsed();
        let best = population.best();
        let chosen_items = population.fitness().decode(&best.genes);
        let best_fitness = population.best_fitness();
        debug!(
            "遗传算法停止：{stop_reason}，代数 {generation_count}，最优适应度 {best_fitness}，用时 {elapsed:?}"
        );
        Ok(GeneticSolution {
            chosen_items,
            elapsed,
            best_fitness,
            stop_reason,
            generation_count,
        })
    }
}
