//! 结果表格
//!
//! 除向量表外，表格都是转置的：每一行以标签开头，之后每一列对应一个实例。

use crate::generators::Task;
use crate::solvers::{BruteSolution, GeneticSolution};
use crate::Error;
use csv::{Writer, WriterBuilder};
use itertools::Itertools;
use std::fs::{remove_file, File, OpenOptions};
use std::path::Path;

/// 以追加方式写入的 CSV 文件，析构时写出缓冲区并关闭文件
pub struct Table {
    writer: Writer<File>,
}

impl Table {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);
        Ok(Self { writer })
    }

    pub fn write(&mut self, row: &[String]) -> Result<(), Error> {
        self.writer.write_record(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}

/// 删除已有的文件后重新写入全部行
pub fn replace(path: &Path, rows: &[Vec<String>]) -> Result<(), Error> {
    if path.exists() {
        remove_file(path)?;
    }
    let mut table = Table::open(path)?;
    for row in rows {
        table.write(row)?;
    }
    table.flush()
}

fn row<T: ToString>(label: &str, values: impl Iterator<Item = T>) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(values.map(|value| value.to_string()))
        .collect()
}

fn task_numbers(count: usize) -> Vec<String> {
    row("task number", 1..=count)
}

fn render_vector(vector: &[u64]) -> String {
    format!("[{}]", vector.iter().join(" "))
}

/// 向量表不转置：表头之后每个不同的向量占一行
pub fn vector_rows(tasks: &[Task]) -> Vec<Vec<String>> {
    let header = ["number", "vector", "amax"].map(String::from).to_vec();
    std::iter::once(header)
        .chain(
            tasks
                .iter()
                .unique_by(|task| task.vector_number)
                .map(|task| {
                    vec![
                        task.vector_number.to_string(),
                        render_vector(&task.vector),
                        task.amax.to_string(),
                    ]
                }),
        )
        .collect()
}

pub fn task_rows(tasks: &[Task]) -> Vec<Vec<String>> {
    vec![
        task_numbers(tasks.len()),
        row("vector number", tasks.iter().map(|task| task.vector_number)),
        row("target weight", tasks.iter().map(|task| task.target_weight)),
        row("fraction", tasks.iter().map(|task| format!("{:.3}", task.fraction))),
    ]
}

/// 时间以微秒为单位
pub fn brute_rows(solutions: &[BruteSolution]) -> Vec<Vec<String>> {
    vec![
        task_numbers(solutions.len()),
        row(
            "first solution time",
            solutions.iter().map(|s| s.time_to_first.as_micros()),
        ),
        row(
            "all solutions time",
            solutions.iter().map(|s| s.time_to_all.as_micros()),
        ),
        row("answers number", solutions.iter().map(|s| s.solutions.len())),
    ]
}

pub fn genetic_rows(solutions: &[GeneticSolution]) -> Vec<Vec<String>> {
    vec![
        task_numbers(solutions.len()),
        row("solution time", solutions.iter().map(|s| s.elapsed.as_micros())),
        row("fitness minimum", solutions.iter().map(|s| s.best_fitness)),
        row("stop reason", solutions.iter().map(|s| s.stop_reason.code())),
        row(
            "generation number",
            solutions.iter().map(|s| s.generation_count),
        ),
    ]
}
