//! Small numeric helpers shared by the calculators.

/// Weighted average over `(value, weight)` pairs. Returns `None` when the
/// total weight is zero, so callers decide what an empty population means.
pub fn weighted_average(pairs: &[(f64, f64)]) -> Option<f64> {
    let total_weight: f64 = pairs.iter().map(|(_, weight)| weight).sum();
    safe_divide(
        pairs.iter().map(|(value, weight)| value * weight).sum(),
        total_weight,
    )
}

/// Division that treats a zero denominator as "no answer" instead of
/// producing an infinity that would poison downstream sums.
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_average_respects_weights() {
        let pairs = [(100.0, 1.0), (50.0, 3.0)];
        assert_eq!(weighted_average(&pairs), Some(62.5));
    }

    #[test]
    fn weighted_average_of_nothing_is_none() {
        assert_eq!(weighted_average(&[]), None);
    }

    #[test]
    fn zero_total_weight_is_none_rather_than_infinite() {
        assert_eq!(weighted_average(&[(80.0, 0.0)]), None);
    }

    #[test]
    fn safe_divide_guards_the_zero_denominator() {
        assert_eq!(safe_divide(10.0, 4.0), Some(2.5));
        assert_eq!(safe_divide(10.0, 0.0), None);
    }
}
