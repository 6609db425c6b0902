//! lab: 子集和问题对比实验［命令行版］
//!
//! 用法：`lab [CONFIG] [-o DIR] [-t THREADS] [-s SEED] <generate|brute|run>`。

use clap::Parser;
use lab::benchmark::{generate_tasks, solve_brute_force, solve_genetic, time_budgets, Summary};
use lab::solvers::genetic::GeneticSolver;
use lab::{Command, CommandLine, CommandLineArgs, Error, Interface, Message};
use rayon::ThreadPoolBuilder;
use std::time::Instant;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    let args = CommandLineArgs::parse();
    if let Some(threads) = args.threads {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| Error::from(format!("无法创建线程池：{e}")))?;
    }
    let command = args.command.clone();
    let cli = CommandLine::new(args)?;
    let (config, seed) = cli.load_config()?;

    let tasks = generate_tasks(&config, seed)?;
    cli.send(Message::TasksGenerated {
        vectors: config.vector_count,
        tasks: tasks.len(),
        seed,
    });
    cli.save_vectors(&tasks)?;
    cli.save_tasks(&tasks)?;
    if command == Command::Generate {
        return Ok(());
    }

    let start = Instant::now();
    let brute = solve_brute_force(&tasks)?;
    cli.send(Message::BruteForceFinished {
        tasks: brute.len(),
        solutions: brute.iter().map(|s| s.solutions.len()).sum(),
        elapsed: start.elapsed().as_millis(),
    });
    cli.save_brute_solutions(&brute)?;
    if command == Command::Brute {
        return Ok(());
    }

    let budgets = time_budgets(&brute, config.time_budget_multiplier);
    let solver = GeneticSolver::new(config.genetic.clone())?;
    let start = Instant::now();
    let genetic = solve_genetic(&solver, &tasks, &budgets)?;
    cli.send(Message::GeneticFinished {
        tasks: genetic.len(),
        solved: genetic.iter().filter(|s| s.is_solved()).count(),
        elapsed: start.elapsed().as_millis(),
    });
    cli.save_genetic_solutions(&genetic)?;

    let summary = Summary::new(&brute, &genetic);
    cli.save_summary(&summary)?;
    cli.send(Message::Summary { summary });
    Ok(())
}
