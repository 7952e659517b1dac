//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet
//! (`a-z`, `A-Z`, `0-9`), one independent draw per position.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric code of the given length.
///
/// Uniqueness is not guaranteed here; callers check the registry and retry.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Produces candidate codes for a bounded collision-retry loop.
///
/// Each round yields `attempts_per_length` codes of the current length; when a
/// round is exhausted the length grows by one, for at most `escalations`
/// extra rounds. The iterator is finite, so the retry loop driving it is too.
#[derive(Debug, Clone)]
pub struct CodeCandidates {
    length: usize,
    attempts_per_length: usize,
    escalations: usize,
    attempt: usize,
    round: usize,
}

impl CodeCandidates {
    pub fn new(length: usize, attempts_per_length: usize, escalations: usize) -> Self {
        Self {
            length,
            attempts_per_length: attempts_per_length.max(1),
            escalations,
            attempt: 0,
            round: 0,
        }
    }

    /// Length of codes currently being produced.
    pub fn current_length(&self) -> usize {
        self.length + self.round
    }
}

impl Iterator for CodeCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt == self.attempts_per_length {
            if self.round == self.escalations {
                return None;
            }
            self.round += 1;
            self.attempt = 0;
        }

        self.attempt += 1;
        Some(generate_code(self.current_length()))
    }
}
