use super::table::{brute_rows, genetic_rows, replace, task_rows, vector_rows};
use super::{Interface, Message};
use crate::benchmark::Summary;
use crate::config::Config;
use crate::generators::Task;
use crate::solvers::{BruteSolution, GeneticSolution};
use crate::Error;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::fs::{create_dir_all, write};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 命令行参数的定义
#[derive(Parser, Clone, Debug)]
#[command(name = "子集和问题对比实验")]
#[command(author, version, about, long_about)]
#[command(propagate_version = true)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,
    /// 配置文件，默认为 config.yaml，不存在时使用默认配置
    pub config: Option<PathBuf>,
    /// 输出目录，默认为 output-<当前时间>
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// 线程数，默认由 rayon 决定
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// 随机种子，优先于配置文件中的种子
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// 命令行中所有可用的子命令
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// 只生成向量和实例
    Generate,
    /// 生成实例并穷举求解
    Brute,
    /// 完整的对比实验：穷举搜索后再用遗传算法求解
    Run,
}

/// 通过命令行运行实验的入口，实现了界面特征
pub struct CommandLine {
    pub args: CommandLineArgs,
    pub output_dir: PathBuf,
}

impl CommandLine {
    pub fn new(args: CommandLineArgs) -> Result<Self, Error> {
        let output_dir = args.output.clone().unwrap_or_else(|| {
            let time = Local::now().format("%m-%d+%H_%M_%S").to_string();
            PathBuf::from(format!("output-{time}"))
        });
        create_dir_all(&output_dir)?;
        Ok(Self { args, output_dir })
    }

    /// 读取配置并确定种子：命令行参数、配置文件、当前时间依次优先
    pub fn load_config(&self) -> Result<(Config, u64), Error> {
        let config = match &self.args.config {
            Some(path) => Config::from_file(path)?,
            None => {
                let path = Path::new("config.yaml");
                if path.exists() {
                    Config::from_file(path)?
                } else {
                    info!("未找到 config.yaml，使用默认配置");
                    Config::default()
                }
            }
        };
        let seed = self
            .args
            .seed
            .or(config.seed)
            .unwrap_or_else(|| Local::now().timestamp_micros() as u64);
        Ok((config, seed))
    }

    fn save(&self, name: &str, rows: &[Vec<String>]) -> Result<(), Error> {
        let path = self.output_dir.join(name);
        replace(&path, rows)?;
        self.send(Message::TableWritten {
            path: path.display().to_string(),
        });
        Ok(())
    }

    pub fn save_vectors(&self, tasks: &[Task]) -> Result<(), Error> {
        self.save("vectors.csv", &vector_rows(tasks))
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), Error> {
        self.save("tasks.csv", &task_rows(tasks))
    }

    pub fn save_brute_solutions(&self, solutions: &[BruteSolution]) -> Result<(), Error> {
        self.save("brutesolv.csv", &brute_rows(solutions))
    }

    pub fn save_genetic_solutions(&self, solutions: &[GeneticSolution]) -> Result<(), Error> {
        self.save("gensolv.csv", &genetic_rows(solutions))
    }

    pub fn save_summary(&self, summary: &Summary) -> Result<(), Error> {
        let path = self.output_dir.join("summary.yaml");
        write(&path, serde_yaml::to_string(summary)?)?;
        self.send(Message::TableWritten {
            path: path.display().to_string(),
        });
        Ok(())
    }
}

impl Interface for CommandLine {
    fn send(&self, message: Message) {
        let mut writer = std::io::stdout().lock();
        let result = match message {
            Message::TasksGenerated {
                vectors,
                tasks,
                seed,
            } => writeln!(
                &mut writer,
                "已生成 {vectors} 个向量、{tasks} 个实例，随机种子为 {seed}"
            ),
            Message::BruteForceFinished {
                tasks,
                solutions,
                elapsed,
            } => writeln!(
                &mut writer,
                "穷举搜索完成，{tasks} 个实例共找到 {solutions} 个解，用时 {elapsed} ms"
            ),
            Message::GeneticFinished {
                tasks,
                solved,
                elapsed,
            } => writeln!(
                &mut writer,
                "遗传算法完成，{tasks} 个实例中求解成功 {solved} 个，用时 {elapsed} ms"
            ),
            Message::TableWritten { path } => writeln!(&mut writer, "结果保存在 {path} 中"),
            Message::Summary { summary } => write!(&mut writer, "{summary}"),
        };
        if let Err(e) = result {
            warn!("无法输出消息：{e}");
        }
    }
}
