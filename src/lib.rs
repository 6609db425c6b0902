//! lab 是子集和问题的对比实验：随机生成权重向量和目标重量，分别用穷举搜索和遗传算法求解，并记录用时、解的质量和收敛情况。
//!
//! 遗传算法的时间预算由同一实例上穷举搜索找到第一个解的用时决定。命令行程序 `lab` 把实例和两种方法的结果写成 CSV 表格。

pub mod benchmark;
pub mod config;
pub mod error;
pub mod generators;
pub mod interfaces;
pub mod objectives;
pub mod population;
pub mod solvers;

pub use error::Error;
pub use interfaces::command_line::{Command, CommandLine, CommandLineArgs};
pub use interfaces::{Interface, Message};
