//! Varied-format email generator.

use crate::generators::person;
use rand::Rng;

const EMAIL_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "example.com",
    "test.com",
    "hotmail.com",
];

/// Generate an email in one of four formats over the provider pool:
/// `first.last@`, `first<N>@`, `last<N>@` or `firstlast@`.
pub fn varied_email<R: Rng>(rng: &mut R) -> String {
    let provider = EMAIL_PROVIDERS[rng.gen_range(0..EMAIL_PROVIDERS.len())];
    let local = match rng.gen_range(0..4) {
        0 => format!(
            "{}.{}",
            person::first_name(rng).to_lowercase(),
            person::last_name(rng).to_lowercase()
        ),
        1 => format!(
            "{}{}",
            person::first_name(rng).to_lowercase(),
            rng.gen_range(1..=100)
        ),
        2 => format!(
            "{}{}",
            person::last_name(rng).to_lowercase(),
            rng.gen_range(1..=100)
        ),
        _ => format!(
            "{}{}",
            person::first_name(rng).to_lowercase(),
            person::last_name(rng).to_lowercase()
        ),
    };
    format!("{local}@{provider}")
}
