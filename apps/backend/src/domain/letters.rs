//! Letter pool: the letters not yet consumed by a round this session.

use serde::Serialize;

use crate::domain::rules::ALPHABET;

/// Remaining letters, kept in alphabetical order so cycling is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterPool {
    remaining: Vec<char>,
}

impl LetterPool {
    pub fn full() -> Self {
        Self {
            remaining: ALPHABET.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.remaining.contains(&letter)
    }

    /// Letter shown at `cursor` while cycling; wraps around the pool.
    pub fn letter_at(&self, cursor: usize) -> Option<char> {
        if self.remaining.is_empty() {
            return None;
        }
        Some(self.remaining[cursor % self.remaining.len()])
    }

    /// Permanently drop a used letter. Returns whether it was present.
    pub fn consume(&mut self, letter: char) -> bool {
        let before = self.remaining.len();
        self.remaining.retain(|&l| l != letter);
        self.remaining.len() != before
    }

    pub fn restore(&mut self) {
        *self = Self::full();
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::full()
    }
}
