// File: crates/langviz-core/src/stats.rs
// Summary: Language statistics model (counts and scores) with top-N and Other-bucket helpers.

/// A single measured value. Counts are exact tallies (repositories, lines
/// of code); scores carry fractional weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    Count(u64),
    Score(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::Count(n) => n as f64,
            StatValue::Score(s) => s,
        }
    }
}

/// One language with its measured value. Input order is display order;
/// callers sort before handing data over.
#[derive(Clone, Debug, PartialEq)]
pub struct StatEntry {
    pub language: String,
    pub value: StatValue,
}

impl StatEntry {
    pub fn count(language: impl Into<String>, n: u64) -> Self {
        Self { language: language.into(), value: StatValue::Count(n) }
    }

    pub fn score(language: impl Into<String>, s: f64) -> Self {
        Self { language: language.into(), value: StatValue::Score(s) }
    }
}

/// Per-language drill-down source: returns up to `top` `(repository name,
/// lines contributed)` pairs, largest first.
pub type BreakdownFn = dyn Fn(&str, usize) -> Vec<(String, u64)>;

/// First `n` entries, order preserved.
pub fn top_n(data: &[StatEntry], n: usize) -> &[StatEntry] {
    &data[..data.len().min(n)]
}

/// Largest value in the set, as f64 (0.0 when empty).
pub fn max_value(data: &[StatEntry]) -> f64 {
    data.iter().map(|e| e.value.as_f64()).fold(0.0, f64::max)
}

/// True when any entry carries a fractional score; axis ticks then keep a
/// decimal instead of count abbreviations.
pub fn has_scores(data: &[StatEntry]) -> bool {
    data.iter().any(|e| matches!(e.value, StatValue::Score(_)))
}

/// Keep the first `keep` entries and collapse the rest into a trailing
/// `Other` entry. A tail of pure counts stays an exact count; anything
/// else sums as a score.
pub fn with_other_bucket(data: &[StatEntry], keep: usize) -> Vec<StatEntry> {
    if data.len() <= keep {
        return data.to_vec();
    }
    let (head, tail) = data.split_at(keep);
    let mut out = head.to_vec();
    let value = if tail.iter().all(|e| matches!(e.value, StatValue::Count(_))) {
        StatValue::Count(
            tail.iter()
                .map(|e| match e.value {
                    StatValue::Count(n) => n,
                    StatValue::Score(_) => 0,
                })
                .sum(),
        )
    } else {
        StatValue::Score(tail.iter().map(|e| e.value.as_f64()).sum())
    };
    out.push(StatEntry { language: "Other".to_string(), value });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<StatEntry> {
        pairs.iter().map(|&(l, n)| StatEntry::count(l, n)).collect()
    }

    #[test]
    fn top_n_preserves_order_and_handles_short_input() {
        let data = counts(&[("Rust", 9), ("Go", 7), ("C", 5)]);
        let top = top_n(&data, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].language, "Rust");
        assert_eq!(top[1].language, "Go");
        assert_eq!(top_n(&data, 10).len(), 3);
    }

    #[test]
    fn seven_categories_collapse_to_six() {
        let data = counts(&[
            ("A", 70),
            ("B", 60),
            ("C", 50),
            ("D", 40),
            ("E", 30),
            ("F", 20),
            ("G", 10),
        ]);
        let bucketed = with_other_bucket(&data, 5);
        assert_eq!(bucketed.len(), 6);
        assert_eq!(bucketed[5].language, "Other");
        assert_eq!(bucketed[5].value, StatValue::Count(30));
        assert_eq!(bucketed[0].language, "A");
    }

    #[test]
    fn bucket_is_identity_when_within_limit() {
        let data = counts(&[("A", 2), ("B", 1)]);
        assert_eq!(with_other_bucket(&data, 5), data);
    }

    #[test]
    fn score_tail_sums_fractionally() {
        let data = vec![
            StatEntry::score("A", 4.0),
            StatEntry::score("B", 1.25),
            StatEntry::score("C", 0.5),
        ];
        let bucketed = with_other_bucket(&data, 1);
        assert_eq!(bucketed.len(), 2);
        assert_eq!(bucketed[1].value, StatValue::Score(1.75));
    }

    #[test]
    fn score_detection_and_max() {
        let data = vec![StatEntry::count("A", 12), StatEntry::score("B", 3.5)];
        assert!(has_scores(&data));
        assert!(!has_scores(&counts(&[("A", 1)])));
        assert_eq!(max_value(&data), 12.0);
        assert_eq!(max_value(&[]), 0.0);
    }
}
