use crate::benchmark::Summary;
use serde::Serialize;

pub mod command_line;
pub mod table;

/// 向用户反馈的消息类型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    TasksGenerated {
        vectors: usize,
        tasks: usize,
        seed: u64,
    },
    BruteForceFinished {
        tasks: usize,
        solutions: usize,
        elapsed: u128,
    },
    GeneticFinished {
        tasks: usize,
        solved: usize,
        elapsed: u128,
    },
    TableWritten {
        path: String,
    },
    Summary {
        summary: Summary,
    },
}

/// 定义了向用户报告消息的接口，实验的各个阶段只通过它输出进度
pub trait Interface {
    fn send(&self, message: Message);
}
