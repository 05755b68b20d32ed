//! Repeated-measures groupings and their compatibility with a label column.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{GraphTestError, Result};

use super::samples::SampleTable;

/// How samples are partitioned into units of permutation.
///
/// Samples in the same group are permuted together, so every group must
/// carry a single label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    /// Every sample is its own group.
    #[default]
    Singletons,
    /// One group identifier per sample, in sample order.
    Explicit(Vec<String>),
    /// The group of each sample is read from the named metadata column.
    Column(String),
}

impl Grouping {
    /// Resolves the grouping into one group identifier per sample.
    ///
    /// # Errors
    ///
    /// * If an explicit grouping does not have one entry per sample.
    /// * If the referenced column does not exist.
    pub fn resolve<T: SampleTable + ?Sized>(&self, table: &T) -> Result<Vec<String>> {
        let groups = match self {
            Self::Singletons => table.sample_names().to_vec(),
            Self::Explicit(groups) => groups.clone(),
            Self::Column(name) => table.require_column(name)?.to_vec(),
        };

        if groups.len() == table.cardinality() {
            Ok(groups)
        } else {
            Err(GraphTestError::Configuration(format!(
                "The grouping has {} entries but there are {} samples.",
                groups.len(),
                table.cardinality()
            )))
        }
    }
}

/// Checks whether every group in `grouping` carries a single value of the
/// `label` column.
///
/// The singleton grouping is always valid.
///
/// # Errors
///
/// * If the label column does not exist.
/// * If the grouping cannot be resolved to one group per sample.
pub fn is_valid_grouping<T: SampleTable + ?Sized>(table: &T, label: &str, grouping: &Grouping) -> Result<bool> {
    let labels = table.require_column(label)?;
    let groups = grouping.resolve(table)?;

    if matches!(grouping, Grouping::Singletons) {
        return Ok(true);
    }

    let mut group_labels = HashMap::<&str, &str>::new();
    for (g, l) in groups.iter().zip(labels) {
        match group_labels.get(g.as_str()) {
            Some(&existing) if existing != l.as_str() => {
                ftlog::debug!("Group `{g}` mixes labels `{existing}` and `{l}`.");
                return Ok(false);
            }
            Some(_) => (),
            None => {
                group_labels.insert(g, l);
            }
        }
    }

    Ok(true)
}
