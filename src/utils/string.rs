//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// "1 cycle", "3 cycles"
pub fn count_of(count: usize, word: &str) -> String {
    format!("{count} {}", pluralize(word, count))
}

/// Join labels with `separator` and repeat the first one at the end,
/// so a cycle reads as a closed loop
pub fn join_closed<S: AsRef<str>>(labels: &[S], separator: &str) -> String {
    let mut parts: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    if let Some(first) = parts.first().copied() {
        parts.push(first);
    }
    parts.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("cycle", 0), "cycles");
        assert_eq!(pluralize("cycle", 1), "cycle");
        assert_eq!(pluralize("topic", 5), "topics");
    }

    #[test]
    fn test_count_of() {
        assert_eq!(count_of(1, "graph"), "1 graph");
        assert_eq!(count_of(2, "graph"), "2 graphs");
    }

    #[test]
    fn test_join_closed() {
        assert_eq!(join_closed(&["A", "B", "C"], " → "), "A → B → C → A");
        assert_eq!(join_closed(&["X"], " -> "), "X -> X");
        assert_eq!(join_closed::<&str>(&[], " -> "), "");
    }
}
