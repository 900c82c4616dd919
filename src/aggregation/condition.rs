//! Condition reconciliation by normalized plurality vote

use crate::models::ReconciledCondition;

/// Pick the most reported condition.
///
/// Missing and empty descriptions do not vote. The rest are compared
/// case-insensitively after trimming, so a whitespace-only description
/// still counts toward the total. Ties go to the label that was seen first.
pub fn reconcile_condition<I, S>(conditions: I) -> ReconciledCondition
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    // insertion-ordered tally so the first-seen label wins a tie
    let mut tally: Vec<(String, usize)> = Vec::new();
    let mut total = 0usize;

    for condition in conditions.into_iter().flatten() {
        let condition = condition.as_ref();
        if condition.is_empty() {
            continue;
        }
        let normalized = condition.trim().to_lowercase();
        total += 1;
        match tally.iter_mut().find(|(label, _)| *label == normalized) {
            Some((_, count)) => *count += 1,
            None => tally.push((normalized, 1)),
        }
    }

    let mut winner: Option<&(String, usize)> = None;
    for entry in &tally {
        if winner.is_none_or(|(_, best)| entry.1 > *best) {
            winner = Some(entry);
        }
    }

    match winner {
        Some((label, count)) => ReconciledCondition {
            label: capitalize_words(label),
            confidence: 100.0 * *count as f64 / total as f64,
        },
        None => ReconciledCondition::unknown(),
    }
}

/// Uppercase the first character of every space-separated word.
/// The rest of each word is left as is.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_majority_with_case_differences() {
        let result = reconcile_condition([Some("Rain"), Some("rain"), Some("Cloudy")]);
        assert_eq!(result.label, "Rain");
        assert!((result.confidence - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unanimous_is_full_confidence() {
        let result = reconcile_condition([
            Some("  partly cloudy"),
            Some("Partly Cloudy "),
            Some("PARTLY CLOUDY"),
        ]);
        assert_eq!(result.label, "Partly Cloudy");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let result = reconcile_condition([Some("Fog"), Some("Mist"), Some("mist"), Some("fog")]);
        assert_eq!(result.label, "Fog");
        assert_eq!(result.confidence, 50.0);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![None, None])]
    #[case(vec![Some(""), None, Some("")])]
    fn test_no_votes_is_unknown(#[case] input: Vec<Option<&str>>) {
        assert_eq!(reconcile_condition(input), ReconciledCondition::unknown());
    }

    #[test]
    fn test_missing_entries_do_not_count_toward_total() {
        let result = reconcile_condition([None, Some("Clear sky"), Some(""), Some("clear sky")]);
        assert_eq!(result.label, "Clear Sky");
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_whitespace_only_entry_still_votes() {
        let result = reconcile_condition([Some("Rain"), Some("   ")]);
        assert_eq!(result.label, "Rain");
        assert_eq!(result.confidence, 50.0);
    }

    #[test]
    fn test_whitespace_majority_yields_empty_label() {
        let result = reconcile_condition([Some(" "), Some("\t"), Some("Snow")]);
        assert_eq!(result.label, "");
        assert!((result.confidence - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_owned_strings_are_accepted() {
        let conditions = vec![Some("Snow".to_string()), None];
        let result = reconcile_condition(conditions);
        assert_eq!(result.label, "Snow");
    }

    #[rstest]
    #[case("heavy rain showers", "Heavy Rain Showers")]
    #[case("thunderstorm with slight hail", "Thunderstorm With Slight Hail")]
    #[case("light  drizzle", "Light  Drizzle")]
    #[case("éclaircies", "Éclaircies")]
    fn test_capitalize_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_words(input), expected);
    }

    #[test]
    fn test_capitalize_leaves_tail_untouched() {
        // only the first character of each word changes
        assert_eq!(capitalize_words("heavy RAIN showers"), "Heavy RAIN Showers");
        assert_eq!(capitalize_words("mIXED"), "MIXED");
    }

    #[test]
    fn test_vote_lowercases_before_capitalizing() {
        let result = reconcile_condition([Some("heavy RAIN showers")]);
        assert_eq!(result.label, "Heavy Rain Showers");
    }
}
