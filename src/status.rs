// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Fixed capacity sets of automaton states.

use std::fmt;

use fixedbitset::FixedBitSet;

/// A subset of the states `0..capacity` of an automaton.
///
/// A `StatusSet` is a plain value: two sets are equal exactly when they have
/// the same capacity and the same members. This makes it usable as the
/// identity of a compound state during determinization and as the membership
/// of a block during minimization.
///
/// # Panics
/// Every operation that takes a state index panics if the index is not less
/// than the capacity given at construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StatusSet {
    bits: FixedBitSet,
}

impl StatusSet {
    /// Creates an empty `StatusSet` for states `0..capacity`.
    pub fn new(capacity: usize) -> StatusSet {
        StatusSet {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Creates a `StatusSet` holding just `state`.
    pub fn singleton(capacity: usize, state: usize) -> StatusSet {
        let mut set = StatusSet::new(capacity);
        set.set(state, true);
        set
    }

    /// Creates a `StatusSet` holding the states produced by `states`.
    pub fn from_states<I>(capacity: usize, states: I) -> StatusSet
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = StatusSet::new(capacity);
        set.extend(states);
        set
    }

    /// The number of states this set ranges over.
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Sets the membership of `index` to `value`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.check_index(index);
        self.bits.set(index, value);
    }

    /// Gets the membership of `index`.
    pub fn get(&self, index: usize) -> bool {
        self.check_index(index);
        self.bits.contains(index)
    }

    /// Adds `index` to the set, returning true if it was not already a member.
    pub fn insert(&mut self, index: usize) -> bool {
        self.check_index(index);
        !self.bits.put(index)
    }

    /// Checks if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits.count_ones(..) == 0
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Iterates over the members in ascending order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
        self.bits.ones()
    }

    /// The smallest member, if any.
    pub fn first(&self) -> Option<usize> {
        self.bits.ones().next()
    }

    /// Exports the members as a sorted list of indices.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.bits.len(),
            "state {} is out of range for a StatusSet of capacity {}",
            index,
            self.bits.len()
        );
    }
}

impl Extend<usize> for StatusSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.set(index, true);
        }
    }
}

impl<'a> IntoIterator for &'a StatusSet {
    type Item = usize;
    type IntoIter = ::fixedbitset::Ones<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.ones()
    }
}

impl fmt::Display for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for index in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
