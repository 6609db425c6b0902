//! 实验的配置文件
//!
//! 配置文件为 YAML 格式，所有字段都可以省略，省略时使用默认值。

use crate::generators::{default_amax, MAX_VECTOR_LENGTH};
use crate::objectives::default::FitnessKind;
use crate::population::{PopulationConfig, TOURNAMENT_SIZE};
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fs::read_to_string;
use std::path::Path;

/// 遗传算法的参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub tournament_size: usize,
    pub fitness: FitnessKind,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            mutation_rate: 0.2,
            crossover_rate: 0.85,
            tournament_size: TOURNAMENT_SIZE,
            fitness: FitnessKind::Linear,
        }
    }
}

impl GeneticConfig {
    /// 染色体长度总是等于任务的向量长度
    pub fn population_config(&self, chromosome_length: usize) -> PopulationConfig {
        PopulationConfig {
            size: self.population_size,
            chromosome_length,
            mutation_rate: self.mutation_rate,
            crossover_rate: self.crossover_rate,
            tournament_size: self.tournament_size,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.population_config(1).validate()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vector_length: usize,
    pub vector_count: usize,
    pub tasks_per_vector: usize,
    /// 权重上限，默认为 `2^round(n / 1.4)`
    pub amax: Option<u64>,
    /// 生成实例所用的随机种子，默认取当前时间
    pub seed: Option<u64>,
    /// 遗传算法的时间预算是穷举搜索找到第一个解所用时间的多少倍
    pub time_budget_multiplier: f64,
    pub genetic: GeneticConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vector_length: 24,
            vector_count: 50,
            tasks_per_vector: 20,
            amax: None,
            seed: None,
            time_budget_multiplier: 2.0,
            genetic: GeneticConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = read_to_string(path)
            .map_err(|e| Error::from(format!("无法读取配置文件 {}：{e}", path.display())))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn amax(&self) -> Result<u64, Error> {
        match self.amax {
            Some(amax) => Ok(amax),
            None => default_amax(self.vector_length),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.vector_length == 0 || self.vector_length > MAX_VECTOR_LENGTH {
            return Err(format!(
                "向量长度 {} 不在 1 到 {MAX_VECTOR_LENGTH} 之间",
                self.vector_length
            )
            .into());
        }
        if self.vector_count == 0 {
            return Err("向量个数必须为正数".into());
        }
        if self.tasks_per_vector == 0 {
            return Err("每个向量的任务数必须为正数".into());
        }
        if self.amax == Some(0) {
            return Err("权重上限 amax 必须为正数".into());
        }
        if !(self.time_budget_multiplier.is_finite() && self.time_budget_multiplier > 0.0) {
            return Err(format!(
                "时间预算倍数 {} 必须为正数",
                self.time_budget_multiplier
            )
            .into());
        }
        self.genetic.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_uses_defaults_for_missing_fields() {
        let config: Config = serde_yaml::from_str("vector_length: 12\n").unwrap();
        assert_eq!(config.vector_length, 12);
        assert_eq!(config.vector_count, 50);
        assert_eq!(config.genetic, GeneticConfig::default());
        assert_eq!(config.amax().unwrap(), 1 << 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn it_parses_nested_genetic_settings() {
        let yaml = "
vector_length: 16
amax: 1000
seed: 42
genetic:
  population_size: 50
  fitness: modular
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.amax().unwrap(), 1000);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.genetic.population_size, 50);
        assert_eq!(config.genetic.fitness, FitnessKind::Modular);
        assert_eq!(config.genetic.crossover_rate, 0.85);
    }

    #[test]
    fn it_rejects_odd_population_sizes() {
        let mut config = Config::default();
        config.genetic.population_size = 201;
        assert!(config.validate().is_err());
    }

    #[test]
    fn it_rejects_rates_out_of_range() {
        let mut config = Config::default();
        config.genetic.mutation_rate = 1.2;
        assert!(config.validate().is_err());
        let mut config = Config::default();
        config.genetic.crossover_rate = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn it_rejects_non_positive_sizes() {
        let config = Config {
            vector_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let config = Config {
            tasks_per_vector: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
        let config = Config {
            time_budget_multiplier: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn it_omits_unset_options_when_serialized() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("seed"));
        assert!(!yaml.contains("amax"));
        assert!(yaml.contains("population_size: 200"));
    }
}
