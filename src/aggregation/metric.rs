//! Numeric reconciliation: median, spread and agreement confidence

use crate::models::ReconciledMetric;

/// Base confidence by relative spread, checked top-down with strict `>`.
/// A spread at or below the last threshold scores [`FULL_AGREEMENT`].
pub const CONFIDENCE_TIERS: [(f64, u8); 4] = [(50.0, 30), (30.0, 50), (15.0, 70), (5.0, 85)];

/// Base confidence when the spread is within 5% of the value
pub const FULL_AGREEMENT: u8 = 100;

/// Bonus per contributing provider
pub const SOURCE_BONUS_PER_PROVIDER: usize = 2;

/// Upper bound on the source bonus
pub const MAX_SOURCE_BONUS: usize = 10;

/// Reconcile one field across providers.
///
/// Missing and non-finite values are skipped. Infinities are dropped along
/// with NaN since `[-inf, inf]` has a NaN median and would break
/// `min <= value <= max`. With nothing left the result is
/// [`ReconciledMetric::EMPTY`].
pub fn reconcile_metric<I>(values: I) -> ReconciledMetric
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut valid: Vec<f64> = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();

    valid.sort_by(f64::total_cmp);

    let (Some(&min), Some(&max)) = (valid.first(), valid.last()) else {
        return ReconciledMetric::EMPTY;
    };

    let value = median(&valid);
    let confidence = confidence_score(variation_percent(min, max, value), valid.len());

    ReconciledMetric {
        value,
        min,
        max,
        confidence,
        source_count: valid.len(),
    }
}

/// Median of an already sorted, non-empty slice
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Spread relative to the representative value, in percent.
/// The divisor never drops below 1 so values near zero stay bounded.
#[must_use]
pub fn variation_percent(min: f64, max: f64, value: f64) -> f64 {
    100.0 * (max - min) / value.abs().max(1.0)
}

/// Map a spread and a provider count to a 0-100 score
#[must_use]
pub fn confidence_score(variation_percent: f64, source_count: usize) -> u8 {
    let base = CONFIDENCE_TIERS
        .iter()
        .find(|(threshold, _)| variation_percent > *threshold)
        .map_or(FULL_AGREEMENT, |&(_, confidence)| confidence);

    let bonus = (source_count.saturating_mul(SOURCE_BONUS_PER_PROVIDER)).min(MAX_SOURCE_BONUS);
    (base + bonus as u8).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_three_providers_close_agreement() {
        let metric = reconcile_metric(some(&[20.0, 22.0, 19.0]));

        assert_eq!(metric.value, 20.0);
        assert_eq!(metric.min, 19.0);
        assert_eq!(metric.max, 22.0);
        // exactly 15% spread is not > 15, so base 85 plus 6 for three sources
        assert_eq!(metric.confidence, 91);
        assert_eq!(metric.source_count, 3);
    }

    #[test]
    fn test_even_count_uses_mean_of_middle_pair() {
        let metric = reconcile_metric(some(&[10.0, 14.0, 12.0, 20.0]));
        assert_eq!(metric.value, 13.0);
        assert_eq!(metric.min, 10.0);
        assert_eq!(metric.max, 20.0);
    }

    #[test]
    fn test_single_outlier_does_not_move_median() {
        let metric = reconcile_metric(some(&[1013.0, 1012.0, 1014.0, 1015.0, 400.0]));
        assert_eq!(metric.value, 1013.0);
        assert_eq!(metric.min, 400.0);
    }

    #[test]
    fn test_missing_and_nan_are_skipped() {
        let metric = reconcile_metric(vec![None, Some(f64::NAN), Some(5.0), None]);
        assert_eq!(metric.value, 5.0);
        assert_eq!(metric.source_count, 1);
        // zero spread, one provider
        assert_eq!(metric.confidence, 100);
    }

    #[test]
    fn test_infinities_keep_bounds_ordered() {
        let metric = reconcile_metric(vec![Some(f64::NEG_INFINITY), Some(3.0), Some(f64::INFINITY)]);
        assert_eq!(metric.value, 3.0);
        assert!(metric.min <= metric.value && metric.value <= metric.max);
        assert_eq!(metric.source_count, 1);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![None, None])]
    #[case(vec![Some(f64::NAN)])]
    #[case(vec![Some(f64::NEG_INFINITY), Some(f64::INFINITY)])]
    fn test_no_valid_values_yields_empty_sentinel(#[case] values: Vec<Option<f64>>) {
        assert_eq!(reconcile_metric(values), ReconciledMetric::EMPTY);
    }

    #[rstest]
    #[case(0.0, 100)]
    #[case(5.0, 100)]
    #[case(5.01, 85)]
    #[case(15.0, 85)]
    #[case(15.5, 70)]
    #[case(30.0, 70)]
    #[case(30.1, 50)]
    #[case(50.0, 50)]
    #[case(50.1, 30)]
    #[case(400.0, 30)]
    fn test_tier_boundaries_are_strict(#[case] variation: f64, #[case] base: u8) {
        assert_eq!(confidence_score(variation, 0), base);
    }

    #[rstest]
    #[case(1, 2)]
    #[case(3, 6)]
    #[case(5, 10)]
    #[case(12, 10)]
    fn test_source_bonus_is_capped(#[case] sources: usize, #[case] bonus: u8) {
        assert_eq!(confidence_score(40.0, sources), 50 + bonus);
    }

    #[test]
    fn test_confidence_never_exceeds_100() {
        assert_eq!(confidence_score(0.0, 1), 100);
        assert_eq!(confidence_score(0.0, 50), 100);
        assert_eq!(confidence_score(3.0, usize::MAX), 100);
    }

    #[test]
    fn test_confidence_monotonic() {
        let variations = [0.0, 4.0, 10.0, 20.0, 40.0, 80.0];
        for sources in 0..8 {
            for pair in variations.windows(2) {
                assert!(confidence_score(pair[0], sources) >= confidence_score(pair[1], sources));
            }
        }
        for variation in variations {
            for sources in 0..8 {
                assert!(confidence_score(variation, sources + 1) >= confidence_score(variation, sources));
            }
        }
    }

    #[test]
    fn test_variation_floor_near_zero() {
        // value 0.2 would blow up without the floor of 1
        assert_eq!(variation_percent(0.0, 0.4, 0.2), 40.0);
        assert_eq!(variation_percent(-5.0, 5.0, -2.0), 500.0);
    }

    #[test]
    fn test_value_within_bounds() {
        let inputs = [
            vec![3.0],
            vec![-4.0, 7.5],
            vec![0.0, 0.0, 0.1],
            vec![99.0, -99.0, 12.0, 13.0, 14.0, 15.0],
        ];
        for input in inputs {
            let metric = reconcile_metric(some(&input));
            assert!(metric.min <= metric.value && metric.value <= metric.max);
        }
    }
}
