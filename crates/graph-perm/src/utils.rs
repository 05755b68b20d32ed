//! Utility functions for the crate.

/// Return the mean value of the given slice of counts.
///
/// Returns `0` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<usize>() as f64 / values.len() as f64
    }
}

/// Return the population standard deviation of the given slice of counts.
///
/// Returns `0` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn standard_deviation(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values
        .iter()
        .map(|&v| v as f64 - mean)
        .map(|v| v.powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::{mean, standard_deviation};

    #[test]
    fn moments() {
        assert_approx_eq!(f64, mean(&[1, 2, 3, 4]), 2.5);
        assert_approx_eq!(f64, standard_deviation(&[2, 4, 4, 4, 5, 5, 7, 9]), 2.0);
        assert_approx_eq!(f64, mean(&[]), 0.0);
    }
}
