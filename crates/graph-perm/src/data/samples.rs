//! Sample identifiers and the categorical metadata attached to them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{GraphTestError, Result};

/// A table of sample metadata whose columns can be looked up by name.
///
/// Every column holds one categorical value per sample, in the same order as
/// `sample_names`, which in turn must match the row order of the
/// `DistanceMatrix` the test is run on.
pub trait SampleTable {
    /// Returns the identifiers of the samples, in index order.
    fn sample_names(&self) -> &[String];

    /// Returns the values of the named column, if it exists.
    fn column(&self, name: &str) -> Option<&[String]>;

    /// Returns the number of samples.
    fn cardinality(&self) -> usize {
        self.sample_names().len()
    }

    /// Returns the values of the named column.
    ///
    /// # Errors
    ///
    /// If the table has no column with the given name.
    fn require_column(&self, name: &str) -> Result<&[String]> {
        self.column(name)
            .ok_or_else(|| GraphTestError::Configuration(format!("No column named `{name}` in the sample metadata.")))
    }
}

/// An in-memory `SampleTable`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleData {
    /// The unique sample identifiers.
    names: Vec<String>,
    /// The named columns, in insertion order.
    columns: Vec<(String, Vec<String>)>,
}

impl SampleData {
    /// Creates a new table with the given sample identifiers and no columns.
    ///
    /// # Errors
    ///
    /// If any identifier appears more than once.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(names.len());
        if let Some(dup) = names.iter().find(|&n| !seen.insert(n)) {
            return Err(GraphTestError::InvalidInput(format!("Duplicate sample identifier `{dup}`.")));
        }
        Ok(Self {
            names,
            columns: Vec::new(),
        })
    }

    /// Adds a column, replacing any existing column of the same name.
    ///
    /// # Errors
    ///
    /// If the number of values does not match the number of samples.
    pub fn add_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.names.len() {
            return Err(GraphTestError::InvalidInput(format!(
                "Column `{name}` has {} values but there are {} samples.",
                values.len(),
                self.names.len()
            )));
        }

        if let Some((_, existing)) = self.columns.iter_mut().find(|(n, _)| n == name) {
            *existing = values;
        } else {
            self.columns.push((name.to_string(), values));
        }
        Ok(())
    }

    /// Returns the names of the columns, in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }
}

impl SampleTable for SampleData {
    fn sample_names(&self) -> &[String] {
        &self.names
    }

    fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }
}

/// Categorical values interned as small integer codes.
///
/// Comparing codes is all the purity statistic needs, so the permutation loop
/// never touches the original strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCodes {
    /// The code of each sample.
    codes: Vec<u32>,
    /// The distinct values, indexed by code, in order of first appearance.
    levels: Vec<String>,
}

impl LabelCodes {
    /// Interns the given values.
    ///
    /// # Errors
    ///
    /// If there are more than `u32::MAX` distinct values.
    pub fn new(values: &[String]) -> Result<Self> {
        let mut lookup = HashMap::new();
        let mut levels = Vec::new();
        let mut codes = Vec::with_capacity(values.len());

        for v in values {
            let code = if let Some(&code) = lookup.get(v.as_str()) {
                code
            } else {
                let code = u32::try_from(levels.len())
                    .map_err(|_| GraphTestError::InvalidInput("Too many distinct labels.".to_string()))?;
                lookup.insert(v.as_str(), code);
                levels.push(v.clone());
                code
            };
            codes.push(code);
        }

        Ok(Self { codes, levels })
    }

    /// Wraps codes that were produced elsewhere, e.g. by a permutation.
    pub(crate) fn from_parts(codes: Vec<u32>, levels: Vec<String>) -> Self {
        Self { codes, levels }
    }

    /// Returns the code of each sample.
    #[must_use]
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Returns the distinct values, indexed by code.
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Returns the value of the sample at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        &self.levels[self.codes[index] as usize]
    }

    /// Decodes back to one value per sample.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.codes.iter().map(|&c| self.levels[c as usize].clone()).collect()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
