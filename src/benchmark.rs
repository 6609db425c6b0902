//! 对比实验的各个阶段
//!
//! 生成实例，并行地穷举求解，按穷举结果为每个实例确定时间预算，再并行地用遗传算法求解。
//! 每个实例各占一个并行任务，阶段之间以收集全部结果作为同步点。

use crate::config::Config;
use crate::generators::default::UniformVectorGenerator;
use crate::generators::tasks::TaskGenerator;
use crate::generators::Task;
use crate::solvers::brute_force::BruteForceSolver;
use crate::solvers::genetic::GeneticSolver;
use crate::solvers::{BruteSolution, GeneticSolution};
use crate::Error;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// 按配置生成全部实例，向量生成和子集采样使用同一个种子
pub fn generate_tasks(config: &Config, seed: u64) -> Result<Vec<Task>, Error> {
    config.validate()?;
    let vectors = UniformVectorGenerator::new(config.vector_length, config.amax()?, seed)?;
    let mut generator = TaskGenerator::new(vectors, seed);
    let tasks = generator.generate_tasks(config.vector_count, config.tasks_per_vector);
    info!(
        "生成了 {} 个向量、{} 个实例，种子为 {seed}",
        config.vector_count,
        tasks.len()
    );
    Ok(tasks)
}

pub fn solve_brute_force(tasks: &[Task]) -> Result<Vec<BruteSolution>, Error> {
    info!("开始穷举搜索，共 {} 个实例", tasks.len());
    tasks.par_iter().map(BruteForceSolver::solve).collect()
}

pub fn time_budgets(solutions: &[BruteSolution], multiplier: f64) -> Vec<Duration> {
    solutions
        .iter()
        .map(|solution| solution.time_budget(multiplier))
        .collect()
}

pub fn solve_genetic(
    solver: &GeneticSolver,
    tasks: &[Task],
    budgets: &[Duration],
) -> Result<Vec<GeneticSolution>, Error> {
    if tasks.len() != budgets.len() {
        return Err(format!(
            "实例数 {} 与时间预算数 {} 不一致",
            tasks.len(),
            budgets.len()
        )
        .into());
    }
    info!(
        "开始遗传算法求解，共 {} 个实例，适应度为 {}",
        tasks.len(),
        solver.config().fitness
    );
    tasks
        .par_iter()
        .zip(budgets.par_iter())
        .map(|(task, &budget)| solver.solve(task, budget))
        .collect()
}

/// 一次实验的汇总统计，时间单位为毫秒
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub brute_first_ms: f64,
    pub brute_all_ms: f64,
    /// 只在求解成功的实例上平均，而不是除以全部实例数；两种口径只在全部求解成功时一致
    pub genetic_ms: f64,
    /// 与 `genetic_ms` 相同，只在求解成功的实例上平均
    pub genetic_generations: f64,
    pub solved: usize,
    pub total: usize,
    pub solved_share: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1e6
}

impl Summary {
    pub fn new(brute: &[BruteSolution], genetic: &[GeneticSolution]) -> Self {
        let solved: Vec<_> = genetic.iter().filter(|s| s.is_solved()).collect();
        let total = genetic.len();
        Self {
            brute_first_ms: mean(brute.iter().map(|s| millis(s.time_to_first))),
            brute_all_ms: mean(brute.iter().map(|s| millis(s.time_to_all))),
            genetic_ms: mean(solved.iter().map(|s| millis(s.elapsed))),
            genetic_generations: mean(solved.iter().map(|s| s.generation_count as f64)),
            solved: solved.len(),
            total,
            solved_share: if total == 0 {
                0.0
            } else {
                solved.len() as f64 / total as f64
            },
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "穷举搜索找到第一个解的平均用时：{:.3} ms", self.brute_first_ms)?;
        writeln!(f, "穷举搜索找到全部解的平均用时：{:.3} ms", self.brute_all_ms)?;
        writeln!(f, "遗传算法求解成功的平均用时：{:.3} ms", self.genetic_ms)?;
        writeln!(f, "遗传算法求解成功的平均代数：{:.1}", self.genetic_generations)?;
        writeln!(
            f,
            "求解成功 {} / {}，占比 {:.2}%",
            self.solved,
            self.total,
            self.solved_share * 100.0
        )
    }
}
