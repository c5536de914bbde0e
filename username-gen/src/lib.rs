use std::collections::HashSet;

use crate::data::{descriptive::DESCRIPTIVE, subject::SUBJECT};

mod config;
mod data;
mod source;

pub use config::{ConfigError, GenerationConfig};
pub use source::{IndexSource, seeded_rng};

/// Word list a draw is made from: one of the built-in lists or a caller override.
#[derive(Clone, Copy)]
enum Words<'a> {
    Default(&'static [&'static str]),
    Custom(&'a [String]),
}

impl<'a> Words<'a> {
    fn resolve(custom: Option<&'a [String]>, default: &'static [&'static str]) -> Self {
        match custom {
            Some(words) if !words.is_empty() => Words::Custom(words),
            _ => Words::Default(default),
        }
    }

    fn pick(self, source: &mut impl IndexSource) -> &'a str {
        match self {
            Words::Default(words) => words[source.index(words.len())],
            Words::Custom(words) => &words[source.index(words.len())],
        }
    }
}

pub fn default_descriptive_words() -> &'static [&'static str] {
    DESCRIPTIVE
}

pub fn default_subject_words() -> &'static [&'static str] {
    SUBJECT
}

/// Generates a username with the thread local RNG.
/// Returns `None` if no candidate fit the length bounds within `max_attempts` draws.
///
/// ```
/// use username_gen::{GenerationConfig, generate_username};
///
/// let name = generate_username(&GenerationConfig::default()).unwrap();
/// assert_eq!(name.split('-').count(), 2);
/// ```
pub fn generate_username(config: &GenerationConfig) -> Option<String> {
    generate_username_with(config, &mut rand::rng())
}

/// Same as [`generate_username`], but reproducible for a given `seed`.
pub fn generate_username_seeded(seed: &[u8], config: &GenerationConfig) -> Option<String> {
    generate_username_with(config, &mut seeded_rng(seed))
}

/// `word_count - 1` descriptive words followed by one subject word, joined by
/// the separator. A `word_count` of 0 behaves like 1.
pub fn generate_username_with(
    config: &GenerationConfig,
    source: &mut impl IndexSource,
) -> Option<String> {
    let descriptive = Words::resolve(config.descriptive_words.as_deref(), DESCRIPTIVE);
    let subject = Words::resolve(config.subject_words.as_deref(), SUBJECT);
    let descriptive_count = config.word_count.saturating_sub(1);

    let mut words = Vec::with_capacity(descriptive_count + 1);
    for _ in 0..config.max_attempts {
        words.clear();
        for _ in 0..descriptive_count {
            words.push(descriptive.pick(source));
        }
        words.push(subject.pick(source));

        let candidate = words.join(&config.separator);
        if config.accepts_len(candidate.chars().count()) {
            return Some(candidate);
        }
    }

    log::trace!(
        "no username within length bounds {}..={:?} after {} attempts",
        config.min_length,
        config.max_length,
        config.max_attempts
    );
    None
}

/// Generates up to `count` distinct usernames with the thread local RNG.
pub fn generate_usernames(count: usize, config: &GenerationConfig) -> Vec<String> {
    generate_usernames_with(count, config, &mut rand::rng())
}

/// Collects distinct usernames in the order they were first produced.
///
/// Gives up after `count * max_attempts` calls to [`generate_username_with`],
/// so the result may hold fewer than `count` names.
pub fn generate_usernames_with(
    count: usize,
    config: &GenerationConfig,
    source: &mut impl IndexSource,
) -> Vec<String> {
    let budget = count.saturating_mul(config.max_attempts);
    let mut seen = HashSet::new();
    let mut usernames = Vec::new();

    let mut attempts = 0;
    while usernames.len() < count && attempts < budget {
        if let Some(name) = generate_username_with(config, source) {
            if seen.insert(name.clone()) {
                usernames.push(name);
            }
        }
        attempts += 1;
    }

    if usernames.len() < count {
        log::warn!(
            "generated {} of {count} requested usernames after {attempts} attempts",
            usernames.len()
        );
    }
    usernames
}
