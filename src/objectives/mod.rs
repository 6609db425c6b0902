//! 适应度接口，以及子集和问题的默认适应度实现
//!
//! 适应度是需要最小化的代价，取值为零表示找到了精确解

pub mod default;

pub trait Fitness {
    /// 对一条染色体打分，分数越低越好
    fn evaluate(&self, genes: &[bool]) -> u64;
}

impl<F: Fn(&[bool]) -> u64> Fitness for F {
    fn evaluate(&self, genes: &[bool]) -> u64 {
        self(genes)
    }
}
