//! 选择、杂交、变异算子
//!

use super::Chromosome;
use rand::seq::index;
use rand::Rng;

/// 锦标赛选择：不放回地抽取 `size` 个下标，返回其中适应度最低者
///
/// 要求 `1 <= size <= scores.len()`，种群配置的校验保证了这一点
pub fn tournament_selection<R: Rng>(scores: &[u64], size: usize, rng: &mut R) -> usize {
    let contestants = index::sample(rng, scores.len(), size).into_vec();
    tournament_among(scores, &contestants).unwrap_or_default()
}

/// 在给定的参赛者中选出适应度最低者，并列时取先出现的；没有参赛者时返回 `None`
pub fn tournament_among(scores: &[u64], contestants: &[usize]) -> Option<usize> {
    let (&first, rest) = contestants.split_first()?;
    let mut winner = first;
    for &contestant in rest {
        if scores[contestant] < scores[winner] {
            winner = contestant;
        }
    }
    Some(winner)
}

/// 单点杂交：以 `rate` 的概率在随机位置切开并交换尾部，否则原样复制两个亲本
pub fn single_point_crossover<R: Rng>(
    first: &Chromosome,
    second: &Chromosome,
    rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    if !rng.random_bool(rate) {
        return (first.clone(), second.clone());
    }
    let cut = rng.random_range(0..first.len());
    Chromosome::splice(first, second, cut)
}

/// 以 `rate` 的概率翻转恰好一个随机基因，返回是否发生了变异
pub fn flip_mutation<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) -> bool {
    if !rng.random_bool(rate) {
        return false;
    }
    let index = rng.random_range(0..chromosome.len());
    chromosome.flip(index);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn it_picks_the_lowest_score_among_contestants() {
        let scores = [9, 4, 7, 1, 8, 6];
        assert_eq!(tournament_among(&scores, &[0, 2, 3, 5]), Some(3));
        assert_eq!(tournament_among(&scores, &[5, 3, 0]), Some(3));
        assert_eq!(tournament_among(&scores, &[4]), Some(4));
        assert_eq!(tournament_among(&scores, &[]), None);
    }

    #[test]
    fn it_breaks_ties_by_first_seen() {
        let scores = [5, 2, 2, 9];
        assert_eq!(tournament_among(&scores, &[3, 2, 1]), Some(2));
        assert_eq!(tournament_among(&scores, &[1, 2]), Some(1));
    }

    #[test]
    fn it_always_selects_the_best_when_everyone_competes() {
        let scores = [6, 6, 0, 6, 6];
        let mut rng = rng();
        for _ in 0..100 {
            assert_eq!(tournament_selection(&scores, scores.len(), &mut rng), 2);
        }
    }

    #[test]
    fn it_never_selects_the_worst_with_two_contestants() {
        let scores = [1, 2, 3, 100];
        let mut rng = rng();
        for _ in 0..200 {
            assert_ne!(tournament_selection(&scores, 2, &mut rng), 3);
        }
    }

    #[test]
    fn it_copies_parents_without_crossover() {
        let first: Chromosome = vec![true, true, false, false].into();
        let second: Chromosome = vec![false, true, true, false].into();
        let mut rng = rng();
        for _ in 0..50 {
            let (a, b) = single_point_crossover(&first, &second, 0.0, &mut rng);
            assert_eq!(a, first);
            assert_eq!(b, second);
        }
    }

    #[test]
    fn it_always_splices_with_full_crossover_rate() {
        let first: Chromosome = vec![true; 8].into();
        let second: Chromosome = vec![false; 8].into();
        let mut rng = rng();
        for _ in 0..50 {
            let (a, b) = single_point_crossover(&first, &second, 1.0, &mut rng);
            // 子代是前段为 1、后段为 0 的染色体，两个子代互补
            let cut = a.genes.iter().take_while(|&&g| g).count();
            assert!(a.genes[cut..].iter().all(|&g| !g));
            assert!(b.genes.iter().zip(&a.genes).all(|(x, y)| x != y));
        }
    }

    #[test]
    fn it_leaves_chromosome_alone_without_mutation() {
        let original: Chromosome = vec![true, false, true, false, true].into();
        let mut rng = rng();
        for _ in 0..50 {
            let mut chromosome = original.clone();
            assert!(!flip_mutation(&mut chromosome, 0.0, &mut rng));
            assert_eq!(chromosome, original);
        }
    }

    #[test]
    fn it_flips_exactly_one_gene_with_full_mutation_rate() {
        let original: Chromosome = vec![false; 16].into();
        let mut rng = rng();
        for _ in 0..100 {
            let mut chromosome = original.clone();
            assert!(flip_mutation(&mut chromosome, 1.0, &mut rng));
            let differences = chromosome
                .genes
                .iter()
                .zip(&original.genes)
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differences, 1);
        }
    }
}
