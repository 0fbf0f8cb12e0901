//! Keyword heuristic deciding whether a question wants facts.

/// Trigger words; any case-insensitive substring hit counts.
///
/// `wie` is intentionally missing so small talk ("Wie geht es dir?") is
/// answered without a lookup.
pub const FACT_TRIGGERS: &[&str] = &[
    "wer",
    "was",
    "wann",
    "wo",
    "welche",
    "welcher",
    "welches",
    "warum",
    "wieso",
    "geschichte",
    "historisch",
    "komponist",
    "who",
    "what",
    "when",
    "where",
    "how",
    "which",
    "historical",
    "composer",
];

/// Returns `true` if `text` contains at least one trigger word.
pub fn is_factual(text: &str) -> bool {
    let lower = text.to_lowercase();
    FACT_TRIGGERS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trigger_matches_in_any_case() {
        for kw in FACT_TRIGGERS {
            assert!(is_factual(kw), "{kw}");
            assert!(is_factual(&kw.to_uppercase()), "{kw} upper");
            assert!(is_factual(&format!("Sag mir, {kw} denn?")), "{kw} embedded");
        }
    }

    #[test]
    fn factual_questions() {
        assert!(is_factual("Wer war Karl der Große?"));
        assert!(is_factual("WANN wurde die Kaiserpfalz gebaut?"));
        assert!(is_factual("Which composer wrote the Ninth?"));
        assert!(is_factual("Erzähl mir etwas über die Geschichte Lauterns."));
    }

    #[test]
    fn small_talk_is_not_factual() {
        assert!(!is_factual("Wie geht es dir?"));
        assert!(!is_factual("Guten Tag, Majestät!"));
        assert!(!is_factual(""));
    }
}
