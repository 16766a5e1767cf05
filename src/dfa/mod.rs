// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Deterministic finite automata.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use indexmap::IndexSet;

use status::StatusSet;
use {Step, Symbol};

mod minimize;

/// A deterministic finite automaton over the states `0..len()`.
///
/// The transition function is partial: a state with no transition for a
/// symbol falls into an implicit trap on that symbol. The live configuration
/// is a single current state, or no state at all once the automaton has
/// fallen into the implicit trap.
///
/// # Panics
/// All methods that take a state panic if it is not less than `len()`.
#[derive(Clone)]
pub struct Dfa {
    transitions: Vec<BTreeMap<Symbol, usize>>,
    inverse_transitions: Vec<Vec<usize>>,
    accepting: StatusSet,
    reachable: StatusSet,
    alphabet: IndexSet<Symbol>,
    initial: usize,
    current: Option<usize>,
}

impl Dfa {
    /// Creates a `Dfa` with `len` states, no transitions, and `initial` as its
    /// initial state.
    ///
    /// # Panics
    /// `new` will panic if `initial` is not less than `len`.
    pub fn new(len: usize, initial: usize) -> Dfa {
        assert!(
            initial < len,
            "initial state {} is out of range for a Dfa with {} states",
            initial,
            len
        );

        Dfa {
            transitions: vec![BTreeMap::new(); len],
            inverse_transitions: vec![Vec::new(); len],
            accepting: StatusSet::new(len),
            reachable: StatusSet::new(len),
            alphabet: IndexSet::new(),
            initial,
            current: Some(initial),
        }
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Checks if the `Dfa` has no states; never true, since `new` needs an
    /// initial state.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// The initial state.
    pub fn initial(&self) -> usize {
        self.initial
    }

    /// Adds a transition from `from` to `to` on `symbol`.
    ///
    /// The first transition added for a given `from` and `symbol` wins; later
    /// ones are ignored.
    pub fn add_transition<S: Into<Symbol>>(&mut self, from: usize, to: usize, symbol: S) {
        self.check_state(from);
        self.check_state(to);

        let symbol = symbol.into();
        if self.transitions[from].contains_key(&symbol) {
            return;
        }

        self.transitions[from].insert(symbol, to);
        if !self.inverse_transitions[to].contains(&from) {
            self.inverse_transitions[to].push(from);
        }
        self.alphabet.insert(symbol);

        if self.reachable.get(to) && !self.reachable.get(from) {
            self.mark_reachable(from);
        }
    }

    /// Marks `state` as an accepting state.
    pub fn add_accept(&mut self, state: usize) {
        self.check_state(state);

        self.accepting.set(state, true);
        self.mark_reachable(state);
    }

    /// Feeds `symbol` to the automaton.
    ///
    /// Feeding a symbol for which the current state has no transition traps
    /// the automaton. A trapped automaton stays trapped.
    pub fn step<S: Into<Symbol>>(&mut self, symbol: S) -> Step {
        if self.is_trapped() {
            return Step::trapped();
        }

        let symbol = symbol.into();
        self.current = self.current
            .and_then(|state| self.transitions[state].get(&symbol).cloned());

        match self.current {
            Some(state) => Step {
                accepted: self.accepting.get(state),
                trapped: !self.reachable.get(state),
            },
            None => Step::trapped(),
        }
    }

    /// Feeds every symbol of `input` to a freshly reset automaton and
    /// reports if the whole input is accepted.
    pub fn accepts<I>(&mut self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        self.reset();
        let mut accepted = self.accepting.get(self.initial);
        for symbol in input {
            accepted = self.step(symbol).accepted;
        }
        accepted
    }

    /// Returns the automaton to its initial state.
    pub fn reset(&mut self) {
        self.current = Some(self.initial);
    }

    /// The current state, or `None` if the automaton fell into the implicit
    /// trap of a missing transition.
    pub fn status_code(&self) -> Option<usize> {
        self.current
    }

    /// Checks if no continuation of the input so far can be accepted.
    pub fn is_trapped(&self) -> bool {
        self.current.map_or(true, |state| !self.reachable.get(state))
    }

    /// Checks if `state` is an accepting state.
    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting.get(state)
    }

    /// Checks if some path from `state` leads to an accepting state.
    pub fn can_reach_accept(&self, state: usize) -> bool {
        self.reachable.get(state)
    }

    /// The target of the transition from `state` on `symbol`, if any.
    pub fn transition<S: Into<Symbol>>(&self, state: usize, symbol: S) -> Option<usize> {
        self.check_state(state);
        self.transitions[state].get(&symbol.into()).cloned()
    }

    /// The symbols of all transitions, in registration order.
    pub fn alphabet<'a>(&'a self) -> impl Iterator<Item = Symbol> + 'a {
        self.alphabet.iter().cloned()
    }

    /// Iterates over the edges leaving `state` as `(symbol, target)` pairs
    /// in symbol order.
    pub fn edges<'a>(&'a self, state: usize) -> impl Iterator<Item = (Symbol, usize)> + 'a {
        self.transitions[state].iter().map(|(symbol, to)| (*symbol, *to))
    }

    fn mark_reachable(&mut self, state: usize) {
        let mut queue = VecDeque::new();
        self.reachable.set(state, true);
        queue.push_back(state);

        while let Some(next) = queue.pop_front() {
            for &prev in &self.inverse_transitions[next] {
                if self.reachable.insert(prev) {
                    queue.push_back(prev);
                }
            }
        }
    }

    fn check_state(&self, state: usize) {
        assert!(
            state < self.len(),
            "state {} is out of range for a Dfa with {} states",
            state,
            self.len()
        );
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for state in 0..self.len() {
            write!(f, "status {}:", state)?;
            for (symbol, to) in self.edges(state) {
                write!(f, " [{}]=>{}", symbol, to)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "from: {}", self.initial)?;
        write!(f, "accept:")?;
        for state in &self.accepting {
            write!(f, " {}", state)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("len", &self.len())
            .field("initial", &self.initial)
            .field("accepting", &self.accepting)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // matches "ab" only; state 3 is an explicit dead state
    fn ab_dfa() -> Dfa {
        let mut dfa = Dfa::new(4, 0);
        dfa.add_transition(0, 1, 'a');
        dfa.add_transition(1, 2, 'b');
        dfa.add_accept(2);
        dfa
    }

    #[test]
    fn new_dfa_without_accept_is_trapped() {
        let sut = Dfa::new(2, 1);

        assert!(!sut.is_empty());
        assert_eq!(sut.status_code(), Some(1));
        assert!(sut.is_trapped());
    }

    #[test]
    #[should_panic]
    fn new_dfa_with_out_of_range_initial_panics() {
        Dfa::new(2, 2);
    }

    #[test]
    fn first_transition_wins() {
        let mut sut = Dfa::new(3, 0);

        sut.add_transition(0, 1, 'a');
        sut.add_transition(0, 2, 'a');

        assert_eq!(sut.transition(0, 'a'), Some(1));
    }

    #[test]
    fn alphabet_is_in_registration_order() {
        let mut sut = Dfa::new(2, 0);

        sut.add_transition(0, 1, 'z');
        sut.add_transition(1, 0, 'a');
        sut.add_transition(0, 0, 'z');

        let alphabet: Vec<_> = sut.alphabet().collect();
        assert_eq!(alphabet, vec!['z' as Symbol, 'a' as Symbol]);
    }

    #[test]
    fn add_accept_propagates_backwards() {
        let sut = ab_dfa();

        assert!(sut.can_reach_accept(0));
        assert!(sut.can_reach_accept(1));
        assert!(sut.can_reach_accept(2));
        assert!(!sut.can_reach_accept(3));
        assert!(!sut.is_trapped());
    }

    #[test]
    fn step_through_accepted_input() {
        let mut sut = ab_dfa();

        assert_eq!(sut.step('a'), Step { accepted: false, trapped: false });
        assert_eq!(sut.step('b'), Step { accepted: true, trapped: false });
        assert_eq!(sut.status_code(), Some(2));
    }

    #[test]
    fn step_on_unmapped_symbol_traps() {
        let mut sut = ab_dfa();

        let result = sut.step('b');

        assert_eq!(result, Step::trapped());
        assert_eq!(sut.status_code(), None);
        assert!(sut.is_trapped());
    }

    #[test]
    fn step_into_dead_state_traps() {
        let mut sut = ab_dfa();
        sut.add_transition(0, 3, 'x');

        let result = sut.step('x');

        assert_eq!(result, Step::trapped());
        assert_eq!(sut.status_code(), Some(3));
    }

    #[test]
    fn trapped_dfa_ignores_input() {
        let mut sut = ab_dfa();
        sut.step('q');

        let result = sut.step('a');

        assert_eq!(result, Step::trapped());
        assert_eq!(sut.status_code(), None);
    }

    #[test]
    fn reset_untraps() {
        let mut sut = ab_dfa();
        sut.step('q');

        sut.reset();

        assert_eq!(sut.status_code(), Some(0));
        assert!(!sut.is_trapped());
    }

    #[test]
    fn accepts_checks_whole_input() {
        let mut sut = ab_dfa();

        assert!(sut.accepts("ab".chars()));
        assert!(!sut.accepts("".chars()));
        assert!(!sut.accepts("abab".chars()));
    }

    #[test]
    #[should_panic]
    fn add_transition_out_of_range_panics() {
        Dfa::new(2, 0).add_transition(0, 5, 'a');
    }

    #[test]
    fn display_lists_edges_initial_and_accepting_states() {
        let mut sut = Dfa::new(2, 0);
        sut.add_transition(0, 1, 98u32);
        sut.add_transition(0, 0, 97u32);
        sut.add_accept(1);

        assert_eq!(
            sut.to_string(),
            "status 0: [97]=>0 [98]=>1\nstatus 1:\nfrom: 0\naccept: 1\n"
        );
    }
}
