//! Free-text note generator.

use rand::Rng;

const WORDS: &[&str] = &[
    "account", "added", "address", "after", "agent", "approved", "archived", "backup",
    "batch", "billing", "callback", "change", "checked", "client", "closed", "confirm",
    "contact", "customer", "delivery", "details", "draft", "duplicate", "entry", "expired",
    "exported", "flagged", "follow", "imported", "invoice", "issue", "legacy", "manual",
    "merged", "migrated", "missing", "needs", "new", "notified", "opened", "order",
    "payment", "pending", "phone", "profile", "record", "referral", "refund", "region",
    "rejected", "renewal", "request", "resolved", "review", "revised", "sent", "signup",
    "status", "support", "ticket", "update", "updated", "verified", "waiting", "welcome",
];

/// Assemble random sentences up to `max_chars` characters.
///
/// Sentences are capitalized word runs ending in a period; the result never
/// exceeds the cap and always contains at least one sentence fragment.
pub fn sentences<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let mut result = String::new();
    loop {
        let mut sentence = String::new();
        for i in 0..rng.gen_range(4..10) {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            if i == 0 {
                let mut chars = word.chars();
                if let Some(first) = chars.next() {
                    sentence.push(first.to_ascii_uppercase());
                    sentence.push_str(chars.as_str());
                }
            } else {
                sentence.push(' ');
                sentence.push_str(word);
            }
        }
        sentence.push('.');

        let separator = usize::from(!result.is_empty());
        if result.len() + separator + sentence.len() > max_chars {
            if result.is_empty() {
                // Even the first sentence was too long; truncate it at a
                // word boundary so the cap always holds.
                let mut truncated: String = sentence.chars().take(max_chars).collect();
                if let Some(cut) = truncated.rfind(' ') {
                    truncated.truncate(cut);
                }
                return truncated;
            }
            return result;
        }
        if separator == 1 {
            result.push(' ');
        }
        result.push_str(&sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_respects_max_chars() {
        let mut rng = StdRng::seed_from_u64(42);
        for max in [20, 50, 200] {
            for _ in 0..100 {
                let note = sentences(&mut rng, max);
                assert!(note.len() <= max, "{} > {max}: {note}", note.len());
                assert!(!note.is_empty());
            }
        }
    }

    #[test]
    fn test_notes_vary() {
        let mut rng = StdRng::seed_from_u64(42);
        let notes: Vec<String> = (0..20).map(|_| sentences(&mut rng, 200)).collect();
        let first = &notes[0];
        assert!(notes.iter().any(|n| n != first));
    }
}
