use lab::benchmark::{generate_tasks, solve_brute_force, solve_genetic, time_budgets, Summary};
use lab::config::{Config, GeneticConfig};
use lab::generators::Task;
use lab::interfaces::table::{replace, task_rows};
use lab::objectives::default::FitnessKind;
use lab::solvers::brute_force::BruteForceSolver;
use lab::solvers::genetic::GeneticSolver;
use lab::solvers::StopReason;
use std::time::Duration;

fn small_config() -> Config {
    Config {
        vector_length: 10,
        vector_count: 3,
        tasks_per_vector: 4,
        genetic: GeneticConfig {
            population_size: 20,
            ..GeneticConfig::default()
        },
        ..Config::default()
    }
}

#[test]
fn every_generated_task_has_an_exact_solution() {
    let tasks = generate_tasks(&small_config(), 2024).unwrap();
    assert_eq!(tasks.len(), 12);
    let solutions = solve_brute_force(&tasks).unwrap();
    for (task, solution) in tasks.iter().zip(&solutions) {
        assert!(!solution.solutions.is_empty());
        assert!(solution.time_to_first <= solution.time_to_all);
        for subset in &solution.solutions {
            assert_eq!(subset.iter().sum::<u64>(), task.target_weight);
        }
    }
}

#[test]
fn the_same_seed_reproduces_the_tasks() {
    let config = small_config();
    let first = generate_tasks(&config, 99).unwrap();
    let second = generate_tasks(&config, 99).unwrap();
    assert_eq!(first, second);
}

#[test]
fn brute_force_lists_all_answers() {
    let task = Task::new(vec![1, 2, 3], 3);
    let solution = BruteForceSolver::solve(&task).unwrap();
    assert_eq!(solution.solutions, vec![vec![1, 2], vec![3]]);
}

#[test]
fn genetic_search_finds_a_trivial_answer() {
    let solver = GeneticSolver::new(GeneticConfig {
        population_size: 10,
        ..GeneticConfig::default()
    })
    .unwrap();
    let task = Task::new(vec![9], 9);
    let solution = solver
        .solve_seeded(&task, Duration::from_secs(60), 5)
        .unwrap();
    assert_eq!(solution.stop_reason, StopReason::Found);
    assert_eq!(solution.chosen_items, vec![9]);
}

#[test]
fn the_whole_pipeline_produces_one_result_per_task() {
    let mut config = small_config();
    config.genetic.fitness = FitnessKind::Modular;
    let tasks = generate_tasks(&config, 7).unwrap();
    let brute = solve_brute_force(&tasks).unwrap();
    let budgets = time_budgets(&brute, config.time_budget_multiplier);
    let solver = GeneticSolver::new(config.genetic.clone()).unwrap();
    let genetic = solve_genetic(&solver, &tasks, &budgets).unwrap();
    assert_eq!(genetic.len(), tasks.len());
    for solution in &genetic {
        assert!(solution.generation_count >= 2);
        assert_eq!(solution.is_solved(), solution.best_fitness == 0);
    }
    let summary = Summary::new(&brute, &genetic);
    assert_eq!(summary.total, tasks.len());
    assert!(summary.solved <= summary.total);
}

#[test]
fn tables_are_written_transposed() {
    let tasks = generate_tasks(&small_config(), 1).unwrap();
    let path = std::env::temp_dir().join(format!("lab-tasks-{}.csv", std::process::id()));
    replace(&path, &task_rows(&tasks)).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("task number,1,2,3"));
    assert!(lines[1].starts_with("vector number,1,1,1,1,2"));
    assert_eq!(lines[2].split(',').count(), tasks.len() + 1);
    std::fs::remove_file(&path).unwrap();
}
