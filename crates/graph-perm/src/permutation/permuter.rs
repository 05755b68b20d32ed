//! Restricted label permutations for repeated-measures designs.

use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng};

use crate::{GraphTestError, LabelCodes, Result};

/// Permutes labels at the level of groups.
///
/// The permutation is done in two explicit steps: the labels of the distinct
/// groups are shuffled uniformly at random, and then every sample receives the
/// label now assigned to its group. Samples sharing a group therefore always
/// share a label.
///
/// The grouping is assumed to have passed `is_valid_grouping`. If a group
/// mixes labels anyway, it takes the label of its first sample.
#[derive(Debug, Clone)]
pub struct LabelPermuter {
    /// The index of the group of each sample.
    membership: Vec<usize>,
    /// The label code of each group, in order of first appearance.
    group_labels: Vec<u32>,
    /// The distinct label values, indexed by code.
    levels: Vec<String>,
}

impl LabelPermuter {
    /// Creates a permuter from the observed labels and one group identifier
    /// per sample.
    ///
    /// # Errors
    ///
    /// If the number of groups entries differs from the number of labels.
    pub fn new(labels: &LabelCodes, groups: &[String]) -> Result<Self> {
        if groups.len() != labels.len() {
            return Err(GraphTestError::InvalidInput(format!(
                "There are {} labels but {} group entries.",
                labels.len(),
                groups.len()
            )));
        }

        let mut index_of = HashMap::<&str, usize>::new();
        let mut group_labels = Vec::new();
        let membership = groups
            .iter()
            .zip(labels.codes())
            .map(|(g, &code)| {
                *index_of.entry(g.as_str()).or_insert_with(|| {
                    group_labels.push(code);
                    group_labels.len() - 1
                })
            })
            .collect();

        Ok(Self {
            membership,
            group_labels,
            levels: labels.levels().to_vec(),
        })
    }

    /// Returns the number of distinct groups.
    #[must_use]
    pub fn num_groups(&self) -> usize {
        self.group_labels.len()
    }

    /// Returns the group index of each sample.
    #[must_use]
    pub fn membership(&self) -> &[usize] {
        &self.membership
    }

    /// Draws a permutation, returning one label code per sample.
    pub fn permute_codes<R: Rng>(&self, rng: &mut R) -> Vec<u32> {
        let mut shuffled = self.group_labels.clone();
        shuffled.shuffle(rng);
        self.membership.iter().map(|&g| shuffled[g]).collect()
    }

    /// Draws a permutation as a new set of labels.
    pub fn permute<R: Rng>(&self, rng: &mut R) -> LabelCodes {
        LabelCodes::from_parts(self.permute_codes(rng), self.levels.clone())
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::LabelPermuter;
    use crate::{GraphTestError, LabelCodes};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn groups_stay_together() -> Result<(), GraphTestError> {
        let labels = LabelCodes::new(&strings(&["A", "A", "B", "B", "B", "A"]))?;
        let groups = strings(&["x", "x", "y", "y", "y", "z"]);
        let permuter = LabelPermuter::new(&labels, &groups)?;
        assert_eq!(permuter.num_groups(), 3);
        assert_eq!(permuter.membership(), &[0, 0, 1, 1, 1, 2]);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let codes = permuter.permute_codes(&mut rng);
            assert_eq!(codes[0], codes[1]);
            assert_eq!(codes[2], codes[3]);
            assert_eq!(codes[3], codes[4]);

            // Exactly one of the three groups carries B.
            let n_b = codes.iter().filter(|&&c| c == 1).count();
            assert!([1, 2, 3].contains(&n_b), "unexpected count {n_b}");
        }
        Ok(())
    }

    #[test]
    fn singletons_preserve_label_counts() -> Result<(), GraphTestError> {
        let values = strings(&["A", "B", "C", "A", "B", "A"]);
        let labels = LabelCodes::new(&values)?;
        let permuter = LabelPermuter::new(&labels, &strings(&["1", "2", "3", "4", "5", "6"]))?;

        let mut rng = StdRng::seed_from_u64(7);
        let mut expected = values.clone();
        expected.sort();
        for _ in 0..20 {
            let mut permuted = permuter.permute(&mut rng).values();
            permuted.sort();
            assert_eq!(permuted, expected);
        }
        Ok(())
    }

    #[test]
    fn length_mismatch() -> Result<(), GraphTestError> {
        let labels = LabelCodes::new(&strings(&["A", "B"]))?;
        assert!(matches!(
            LabelPermuter::new(&labels, &strings(&["1"])),
            Err(GraphTestError::InvalidInput(_))
        ));
        Ok(())
    }
}
