// Licensed under the MIT license.

//! Whitespace-token spell checking against a [`MembershipSet`] vocabulary.
//!
//! Tokens are looked up exactly as written: no case folding and no
//! punctuation stripping. A token reported as known may still be a false
//! positive of the underlying set; a token reported unknown is definitely not
//! in the vocabulary.
use tracing::debug;

use crate::bloom::{self, MembershipSet, DEFAULT_FALSE_POSITIVE_RATE};
use crate::error::{Error, Result};

/// Smallest bit count used when sizing from the vocabulary length.
pub const MIN_BITS: usize = 64;

/// Sizing policy for the membership set behind a [`SpellChecker`].
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Target false positive rate, in `(0, 1)`.
    pub false_positive_rate: f64,
    /// Fixed filter size in bytes. When `None` the size is derived from the
    /// number of vocabulary words.
    pub size_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
            size_bytes: None,
        }
    }
}

impl Config {
    /// Set the target false positive rate.
    pub fn with_false_positive_rate(mut self, rate: f64) -> Self {
        self.false_positive_rate = rate;
        self
    }

    /// Use a fixed filter size instead of sizing from the vocabulary.
    pub fn with_size_bytes(mut self, nbytes: usize) -> Self {
        self.size_bytes = Some(nbytes);
        self
    }

    /// Check that the configuration can produce a membership set.
    pub fn validate(&self) -> Result<()> {
        let rate = self.false_positive_rate;
        if !(rate > 0. && rate < 1.) {
            return Err(Error::invalid(
                "false_positive_rate",
                format!("{} is not between 0 and 1", rate),
            ));
        }
        if self.size_bytes == Some(0) {
            return Err(Error::invalid("size_bytes", "must be greater than zero"));
        }
        Ok(())
    }

    fn membership_set(&self, words: usize) -> Result<MembershipSet> {
        self.validate()?;

        match self.size_bytes {
            Some(nbytes) => MembershipSet::with_size(nbytes, self.false_positive_rate),
            None => {
                let nbits = bloom::optimal_bits(words, self.false_positive_rate);
                // `k` follows the unpadded size; padding only lowers the rate.
                let nhashes = bloom::optimal_hashes(nbits, words);

                MembershipSet::new(nbits.max(MIN_BITS), nhashes)
            }
        }
    }
}

/// A spell checker holding its vocabulary in a [`MembershipSet`].
///
/// Built once from an in-memory word list and read-only afterwards, so a
/// shared reference can be queried from several threads at once.
#[derive(Clone, Debug)]
pub struct SpellChecker {
    vocab: MembershipSet,
}

impl SpellChecker {
    /// Build a checker for the given words with the default [`Config`].
    ///
    /// Returns [`Error::EmptyVocabulary`] when `words` yields nothing.
    pub fn from_vocabulary<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(words, &Config::default())
    }

    /// Build a checker for the given words, sized according to `config`.
    pub fn with_config<I, S>(words: I, config: &Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // The set is sized from the word count, so the words are
        // collected before anything is added.
        let words: Vec<S> = words.into_iter().collect();
        if words.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        let mut vocab = config.membership_set(words.len())?;

        for word in &words {
            vocab.add(word.as_ref());
        }
        debug!(
            words = words.len(),
            nbits = vocab.bits(),
            nhashes = vocab.hashes(),
            "Built spell checker vocabulary"
        );

        Ok(Self { vocab })
    }

    /// Split `sentence` on whitespace and pair every token with whether it
    /// is (possibly) in the vocabulary, in input order.
    pub fn spell_check<'a>(&self, sentence: &'a str) -> Vec<(&'a str, bool)> {
        sentence
            .split_whitespace()
            .map(|token| (token, self.vocab.contains(token)))
            .collect()
    }

    /// Tokens of `sentence` that are not in the vocabulary, in input order.
    pub fn misspelled<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        sentence
            .split_whitespace()
            .filter(|token| !self.vocab.contains(token))
            .collect()
    }

    /// Whether a single word is (possibly) in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.vocab.contains(word)
    }

    /// Expected false positive rate of the vocabulary lookups.
    pub fn false_positive_rate(&self) -> f64 {
        self.vocab.false_positive_rate()
    }

    /// The membership set holding the vocabulary.
    pub fn membership(&self) -> &MembershipSet {
        &self.vocab
    }
}
