use rand::Rng;

/// 二进制染色体，第 i 个基因表示是否选中向量的第 i 个分量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    pub genes: Vec<bool>,
}

impl Chromosome {
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// 在 `cut` 处切开两个亲本并交换尾部
    ///
    /// 第一个子代取 `first` 的前段和 `second` 的后段，第二个子代相反
    pub fn splice(first: &Self, second: &Self, cut: usize) -> (Self, Self) {
        let mut genes_a = first.genes[..cut].to_vec();
        genes_a.extend_from_slice(&second.genes[cut..]);
        let mut genes_b = second.genes[..cut].to_vec();
        genes_b.extend_from_slice(&first.genes[cut..]);
        (Self { genes: genes_a }, Self { genes: genes_b })
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self { genes }
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &gene in &self.genes {
            write!(f, "{}", if gene { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(text: &str) -> Chromosome {
        text.chars().map(|c| c == '1').collect::<Vec<_>>().into()
    }

    #[test]
    fn it_splices_at_the_cut() {
        let (a, b) = Chromosome::splice(&bits("111111"), &bits("000000"), 2);
        assert_eq!(a.to_string(), "110000");
        assert_eq!(b.to_string(), "001111");
    }

    #[test]
    fn it_swaps_whole_parents_at_cut_zero() {
        let first = bits("1010");
        let second = bits("0110");
        let (a, b) = Chromosome::splice(&first, &second, 0);
        assert_eq!(a, second);
        assert_eq!(b, first);
    }

    #[test]
    fn it_flips_a_single_gene() {
        let mut chromosome = bits("0000");
        chromosome.flip(2);
        assert_eq!(chromosome.to_string(), "0010");
    }
}
