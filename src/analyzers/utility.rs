/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mean of an accumulated (sum, count) pair. Returns `None` for an empty group.
pub fn group_mean(sum: u64, count: u32) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

/// Division with an explicit zero-denominator guard. Returns 0.0 rather than
/// NaN/infinity when `total` is 0.
pub fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_normal_values() {
        assert_eq!(mean(&[100.0, 200.0]), 150.0);
    }

    #[test]
    fn test_group_mean_empty_is_none() {
        assert_eq!(group_mean(0, 0), None);
        assert_eq!(group_mean(60, 2), Some(30.0));
    }

    #[test]
    fn test_ratio_zero_total() {
        assert_eq!(ratio(10, 0), 0.0);
        assert_eq!(ratio(230, 300), 230.0 / 300.0);
    }
}
