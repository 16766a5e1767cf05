// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Nondeterministic finite automata with epsilon transitions.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use indexmap::IndexSet;

use status::StatusSet;
use {Step, Symbol};

mod determinize;

/// The label of an `Nfa` edge: `Some(symbol)` for a symbol transition and
/// `None` for an epsilon transition.
pub type Label = Option<Symbol>;

/// A nondeterministic finite automaton over the states `0..len()`.
///
/// State 0 is the initial state. An `Nfa` is built by adding transitions and
/// accepting states, and can then be simulated one symbol at a time with
/// `step`. The live configuration is the set of currently active states and
/// is always closed under epsilon transitions.
///
/// # Panics
/// All methods that take a state panic if it is not less than `len()`.
#[derive(Clone)]
pub struct Nfa {
    transitions: Vec<BTreeMap<Label, Vec<usize>>>,
    inverse_transitions: Vec<Vec<usize>>,
    accepting: StatusSet,
    reachable: StatusSet,
    alphabet: IndexSet<Symbol>,
    configuration: StatusSet,
    trapped: bool,
}

impl Nfa {
    /// Creates an `Nfa` with `len` states and no transitions.
    pub fn new(len: usize) -> Nfa {
        let mut nfa = Nfa {
            transitions: vec![BTreeMap::new(); len],
            inverse_transitions: vec![Vec::new(); len],
            accepting: StatusSet::new(len),
            reachable: StatusSet::new(len),
            alphabet: IndexSet::new(),
            configuration: StatusSet::new(len),
            trapped: true,
        };
        nfa.reset();
        nfa
    }

    /// The number of states.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Checks if the `Nfa` has no states.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Adds a transition from `from` to `to` on `label`.
    ///
    /// A label of `None` adds an epsilon transition. An edge identical to an
    /// existing one is ignored, but several targets for the same `from` and
    /// `label` are all kept.
    pub fn add_transition(&mut self, from: usize, to: usize, label: Label) {
        self.check_state(from);
        self.check_state(to);

        {
            let targets = self.transitions[from].entry(label).or_insert_with(Vec::new);
            if targets.contains(&to) {
                return;
            }
            targets.push(to);
        }

        if !self.inverse_transitions[to].contains(&from) {
            self.inverse_transitions[to].push(from);
        }
        if let Some(symbol) = label {
            self.alphabet.insert(symbol);
        }
        if self.reachable.get(to) && !self.reachable.get(from) {
            self.mark_reachable(from);
        }

        let configuration = self.configuration.clone();
        self.configuration = self.epsilon_closure(configuration);
        self.update_trapped();
    }

    /// Adds a transition from `from` to `to` on `symbol`.
    pub fn add_symbol_transition<S: Into<Symbol>>(&mut self, from: usize, to: usize, symbol: S) {
        self.add_transition(from, to, Some(symbol.into()));
    }

    /// Adds an epsilon transition from `from` to `to`.
    pub fn add_epsilon_transition(&mut self, from: usize, to: usize) {
        self.add_transition(from, to, None);
    }

    /// Marks `state` as an accepting state.
    pub fn add_accept(&mut self, state: usize) {
        self.check_state(state);

        self.accepting.set(state, true);
        self.mark_reachable(state);
        self.update_trapped();
    }

    /// Feeds `symbol` to the automaton.
    ///
    /// A trapped automaton stays trapped with an empty configuration.
    pub fn step<S: Into<Symbol>>(&mut self, symbol: S) -> Step {
        if self.trapped {
            self.configuration = StatusSet::new(self.len());
            return Step::trapped();
        }

        self.configuration = self.move_on(&self.configuration, symbol.into());
        self.update_trapped();

        Step {
            accepted: self.is_accepting_set(&self.configuration),
            trapped: self.trapped,
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
        let mut accepted = self.is_accepting_set(&self.configuration);
        for symbol in input {
            accepted = self.step(symbol).accepted;
        }
        accepted
    }

    /// Returns the automaton to the epsilon closure of the initial state.
    pub fn reset(&mut self) {
        let start = if self.len() == 0 {
            StatusSet::new(0)
        } else {
            StatusSet::singleton(self.len(), 0)
        };
        self.configuration = self.epsilon_closure(start);
        self.update_trapped();
    }

    /// Exports the current configuration.
    pub fn status_code(&self) -> StatusSet {
        self.configuration.clone()
    }

    /// The current configuration.
    pub fn configuration(&self) -> &StatusSet {
        &self.configuration
    }

    /// Checks if no continuation of the input so far can be accepted.
    pub fn is_trapped(&self) -> bool {
        self.trapped
    }

    /// Checks if `state` is an accepting state.
    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting.get(state)
    }

    /// Checks if some path from `state` leads to an accepting state.
    pub fn can_reach_accept(&self, state: usize) -> bool {
        self.reachable.get(state)
    }

    /// The symbols of all non-epsilon transitions, in registration order.
    pub fn alphabet<'a>(&'a self) -> impl Iterator<Item = Symbol> + 'a {
        self.alphabet.iter().cloned()
    }

    /// Iterates over the edges leaving `state` as `(label, target)` pairs.
    pub fn edges<'a>(&'a self, state: usize) -> impl Iterator<Item = (Label, usize)> + 'a {
        self.transitions[state]
            .iter()
            .flat_map(|(label, targets)| targets.iter().map(move |to| (*label, *to)))
    }

    fn targets(&self, state: usize, label: Label) -> &[usize] {
        self.transitions[state]
            .get(&label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn is_accepting_set(&self, set: &StatusSet) -> bool {
        set.iter().any(|state| self.accepting.get(state))
    }

    fn update_trapped(&mut self) {
        self.trapped = self.configuration
            .iter()
            .all(|state| !self.reachable.get(state));
    }

    // Breadth first search backwards from `state` along the inverse edges.
    // The reachable flag gates the queue so each state is visited once.
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

    pub(crate) fn epsilon_closure(&self, mut set: StatusSet) -> StatusSet {
        let mut queue: VecDeque<usize> = set.iter().collect();

        while let Some(state) = queue.pop_front() {
            for &next in self.targets(state, None) {
                if set.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        set
    }

    pub(crate) fn move_on(&self, set: &StatusSet, symbol: Symbol) -> StatusSet {
        let mut next = StatusSet::new(self.len());
        for state in set {
            next.extend(self.targets(state, Some(symbol)).iter().cloned());
        }
        self.epsilon_closure(next)
    }

    fn check_state(&self, state: usize) {
        assert!(
            state < self.len(),
            "state {} is out of range for an Nfa with {} states",
            state,
            self.len()
        );
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for state in 0..self.len() {
            write!(f, "status {}:", state)?;
            for (label, to) in self.edges(state) {
                match label {
                    Some(symbol) => write!(f, " [{}]=>{}", symbol, to)?,
                    None => write!(f, " none=>{}", to)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "accept:")?;
        for state in &self.accepting {
            write!(f, " {}", state)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Nfa")
            .field("len", &self.len())
            .field("accepting", &self.accepting)
            .field("configuration", &self.configuration)
            .field("trapped", &self.trapped)
            .finish()
    }
}
