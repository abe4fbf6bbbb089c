/// Least-squares dissimilarity between two direction descriptors.
pub struct DirectionMatcher;

impl DirectionMatcher {
    /// Scores two descriptors in `[0, 1]`: 0 for an identical shape,
    /// 1 for the opposite direction on every segment. Symmetric up to
    /// floating-point rounding; lower is always a better match.
    pub fn score(a: &[f64], b: &[f64]) -> f64 {
        let len = a.len().min(b.len());
        if len == 0 {
            return 0.0;
        }
        let weight = 1.0 / len as f64;
        let mut error = 0.0;
        for i in 0..len {
            let mut distance = (a[i] - b[i]).abs();
            // Direction values are periodic with period 2: a raw
            // difference above 1 wraps back across the +/-1 boundary.
            if distance > 1.0 {
                distance = 2.0 - distance;
            }
            error += weight * distance * distance;
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_descriptors_score_zero() {
        let descriptor = vec![0.0, 0.25, -0.5, 0.99, -0.99];
        assert_eq!(DirectionMatcher::score(&descriptor, &descriptor), 0.0);
    }

    #[test]
    fn opposed_descriptors_reach_the_bound() {
        // Every segment points the opposite way: the angular distance
        // is 1 everywhere, so the weighted sum reaches the bound up to
        // accumulation rounding of the 1/(n-1) weight.
        let a = vec![0.0; 31];
        let b = vec![1.0; 31];
        let score = DirectionMatcher::score(&a, &b);
        assert!((score - 1.0).abs() < 1e-12);
        assert!(score <= 1.0);

        let c = vec![-0.5; 31];
        let d = vec![0.5; 31];
        let score = DirectionMatcher::score(&c, &d);
        assert!((score - 1.0).abs() < 1e-12);
        assert!(score <= 1.0);
    }

    #[test]
    fn opposed_descriptors_score_exactly_one_for_power_of_two_weight() {
        // With 32 segments the weight 1/32 is exactly representable,
        // so the sum hits the bound with no rounding at all.
        let a = vec![0.0; 32];
        let b = vec![1.0; 32];
        assert_eq!(DirectionMatcher::score(&a, &b), 1.0);
    }

    #[test]
    fn score_is_bounded_and_symmetric() {
        let a = vec![0.1, -0.9, 0.75, 0.0, -0.33, 1.0];
        let b = vec![-0.95, 0.9, -0.75, 0.5, 0.6, -1.0];
        let forward = DirectionMatcher::score(&a, &b);
        let backward = DirectionMatcher::score(&b, &a);
        assert!((0.0..=1.0).contains(&forward));
        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn wraparound_treats_boundary_crossing_as_small() {
        // 0.95 and -0.95 are 0.1 apart around the periodic boundary,
        // not 1.9 apart.
        let a = vec![0.95];
        let b = vec![-0.95];
        let score = DirectionMatcher::score(&a, &b);
        assert!((score - 0.01).abs() < 1e-12);
    }
}
