// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A set-only Bloom filter over strings using enhanced double hashing.

use std::f64;
use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::bitvec::BitVec;
use crate::error::{Error, Result};

/// The default false positive probability value, 1%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Keys used for SipHash.
pub const HASHER_KEYS: [[u8; 16]; 2] = [
    [
        136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
    ],
    [
        103, 236, 177, 212, 54, 11, 66, 5, 194, 86, 6, 254, 82, 93, 203, 37,
    ],
];

/// Probabilistic set of strings.
///
/// Items can be added but never removed. [`MembershipSet::contains`] may
/// report an item that was never added (a false positive), but never misses
/// one that was.
#[derive(Clone, Debug)]
pub struct MembershipSet {
    bits: BitVec,
    nhashes: usize,
    hashers: [SipHasher13; 2],
    len: usize,
}

impl MembershipSet {
    /// Return an empty set of `nbits` bits probed by `nhashes` hash functions.
    pub fn new(nbits: usize, nhashes: usize) -> Result<Self> {
        Self::with_keys(nbits, nhashes, HASHER_KEYS)
    }

    /// Like [`MembershipSet::new`], with caller-chosen SipHash keys.
    ///
    /// Two sets built with the same parameters, keys and items are identical.
    pub fn with_keys(nbits: usize, nhashes: usize, keys: [[u8; 16]; 2]) -> Result<Self> {
        if nbits == 0 {
            return Err(Error::invalid("nbits", "must be greater than zero"));
        }
        if nhashes == 0 {
            return Err(Error::invalid("nhashes", "must be greater than zero"));
        }
        if keys[0] == keys[1] {
            return Err(Error::invalid("keys", "the two hasher keys must differ"));
        }

        Ok(MembershipSet {
            bits: BitVec::new(nbits),
            nhashes,
            hashers: [
                SipHasher13::new_with_key(&keys[0]),
                SipHasher13::new_with_key(&keys[1]),
            ],
            len: 0,
        })
    }

    /// Return an empty set sized for `capacity` items at the given false
    /// positive rate.
    pub fn with_rate(capacity: usize, fp_rate: f64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity", "must be greater than zero"));
        }
        check_rate(fp_rate)?;

        let nbits = optimal_bits(capacity, fp_rate);
        let nhashes = optimal_hashes(nbits, capacity);

        Self::new(nbits, nhashes)
    }

    /// Return an empty set occupying `nbytes` bytes, with as many hash
    /// functions as suit the number of items that budget can hold at
    /// `fp_rate`.
    pub fn with_size(nbytes: usize, fp_rate: f64) -> Result<Self> {
        if nbytes == 0 {
            return Err(Error::invalid("nbytes", "must be greater than zero"));
        }
        check_rate(fp_rate)?;

        let nbits = nbytes
            .checked_mul(8)
            .ok_or_else(|| Error::invalid("nbytes", "too large"))?;
        let capacity = optimal_capacity(nbits, fp_rate).max(1);
        let nhashes = optimal_hashes(nbits, capacity);

        Self::new(nbits, nhashes)
    }

    /// Add an item to the set. Adding the same item again leaves the bits
    /// unchanged.
    pub fn add(&mut self, item: &str) {
        let (h1, h2) = self.sip_hashes(item);

        for i in 0..self.nhashes {
            let index = self.bloom_hash(h1, h2, i as u64);
            self.bits.set(index);
        }
        self.len += 1;
    }

    /// Return whether the item is possibly in the set. `false` is definite,
    /// `true` may be a false positive.
    pub fn contains(&self, item: &str) -> bool {
        let (h1, h2) = self.sip_hashes(item);

        for i in 0..self.nhashes {
            let index = self.bloom_hash(h1, h2, i as u64);
            if !self.bits.is_set(index) {
                return false;
            }
        }
        true
    }

    /// Return the number of bits in this set (`m`).
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Number of [`MembershipSet::add`] calls so far, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Estimate the number of distinct items from the fraction of set bits.
    ///
    /// A saturated set, with every bit set, gives no estimate and returns
    /// `usize::MAX`.
    pub fn count(&self) -> usize {
        let nbits_set = self.bits.count_ones();
        if nbits_set == self.bits.len() {
            return usize::MAX;
        }
        let nbits = self.bits.len() as f64;
        let nbits_set = nbits_set as f64;
        let nhashes = self.nhashes as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        count.round() as usize
    }

    /// Expected false positive rate given how many items were added.
    pub fn false_positive_rate(&self) -> f64 {
        estimated_false_positive_rate(self.bits(), self.len, self.nhashes)
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    fn sip_hashes(&self, item: &str) -> (u64, u64) {
        let mut sip1 = self.hashers[0];
        let mut sip2 = self.hashers[1];

        sip1.write(item.as_bytes());
        sip2.write(item.as_bytes());

        (sip1.finish(), sip2.finish())
    }

    /// g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x) + i<sup>3</sup>) mod m
    fn bloom_hash(&self, h1: u64, h2: u64, i: u64) -> usize {
        let r = h1.wrapping_add(i.wrapping_mul(h2)).wrapping_add(i.wrapping_pow(3));
        (r % self.bits() as u64) as usize
    }
}

impl PartialEq for MembershipSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
            && self.nhashes == other.nhashes
            && self.hashers[0].keys() == other.hashers[0].keys()
            && self.hashers[1].keys() == other.hashers[1].keys()
    }
}

impl Eq for MembershipSet {}

impl AsRef<[u8]> for MembershipSet {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

fn check_rate(fp_rate: f64) -> Result<()> {
    if fp_rate > 0. && fp_rate < 1. {
        Ok(())
    } else {
        Err(Error::invalid(
            "fp_rate",
            format!("{} is not between 0 and 1", fp_rate),
        ))
    }
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil() as usize
}

/// Return the optimal item capacity of a filter given a bit vector size and false positive rate.
pub fn optimal_capacity(nbits: usize, fp_rate: f64) -> usize {
    ((-(nbits as f64) * LN_SQR) / fp_rate.ln()).round() as usize
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size. Never less than one.
///
/// Also called `k`.
pub fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    let ratio = nbits as f64 / capacity.max(1) as f64;
    ((ratio * f64::consts::LN_2).ceil() as usize).max(1)
}

/// False positive probability `(1 - e^(-kn/m))^k` of a filter with `nbits`
/// bits and `nhashes` hashes after `items` insertions.
pub fn estimated_false_positive_rate(nbits: usize, items: usize, nhashes: usize) -> f64 {
    if nbits == 0 {
        return 1.;
    }
    let exponent = -(nhashes as f64) * (items as f64) / (nbits as f64);
    (1. - exponent.exp()).powf(nhashes as f64)
}
