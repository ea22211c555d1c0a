//! A spell checker backed by a Bloom filter, a space-efficient probabilistic
//! data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives. It has been shown that
//! fewer than 10 bits per element are required for a 1% false positive
//! probability, independent of the size or number of elements in the set.
//!
//! [`MembershipSet`] is such a filter over strings. [`SpellChecker`] stores a
//! whole vocabulary in one and flags the tokens of a sentence that are
//! definitely not in it. A word reported as known is correct with high
//! probability; a word reported as unknown is never in the vocabulary.
//!
//! # Enhanced Double Hashing
//!
//! Enhanced double hashing is used to set bit positions within a bit vector.
//! The choice for double hashing was shown to be effective without any loss in
//! the asymptotic false positive probability, leading to less computation and
//! potentially less need for randomness in practice, by Adam Kirsch and
//! Michael Mitzenmacher in a paper called *Less Hashing, Same Performance: Building
//! a Better Bloom Filter*.
//!
//! The enhanced double hash takes the form of the following formula:
//!
//! g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x) + f(i)) mod m, where
//! H<sub>1</sub> and H<sub>2</sub> are SipHash instantiations, and f(i) = i<sup>3</sup>
//!
//! Both SipHash keys are fixed, so the same word always maps to the same bits
//! from one run to the next.
//!
//! # Example
//!
//! ```
//! use bloomspell::SpellChecker;
//!
//! let spell = SpellChecker::from_vocabulary(["hello", "world"]).unwrap();
//!
//! assert_eq!(
//!     spell.spell_check("  hello  wrold "),
//!     vec![("hello", true), ("wrold", false)],
//! );
//! assert!(spell.spell_check("").is_empty());
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod spell;
pub mod vocab;

pub use bloom::MembershipSet;
pub use error::{Error, Result};
pub use spell::{Config, SpellChecker};
