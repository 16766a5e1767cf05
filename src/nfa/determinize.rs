// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::collections::VecDeque;

use indexmap::IndexSet;

use dfa::Dfa;
use status::StatusSet;
use Symbol;

use super::Nfa;

impl Nfa {
    /// Converts the `Nfa` into an equivalent `Dfa` by the subset construction.
    ///
    /// Each state of the resulting `Dfa` stands for one epsilon closed subset
    /// of the states of the `Nfa` that is reachable from the closure of state
    /// 0, which becomes `Dfa` state 0. The remaining states are numbered in
    /// breadth first discovery order. The empty subset is kept as an ordinary
    /// (trapped) state so that the result has a transition for every state
    /// and every symbol of the alphabet.
    pub fn determinize(&self) -> Dfa {
        let mut subsets: IndexSet<StatusSet> = IndexSet::new();
        let mut edges: Vec<(usize, usize, Symbol)> = Vec::new();
        let mut queue = VecDeque::new();

        let start = if self.len() == 0 {
            StatusSet::new(0)
        } else {
            StatusSet::singleton(self.len(), 0)
        };
        subsets.insert(self.epsilon_closure(start));
        queue.push_back(0);

        while let Some(current) = queue.pop_front() {
            let subset = subsets[current].clone();
            for symbol in self.alphabet() {
                let image = self.move_on(&subset, symbol);
                let (next, is_new) = subsets.insert_full(image);
                if is_new {
                    queue.push_back(next);
                }
                edges.push((current, next, symbol));
            }
        }

        let mut dfa = Dfa::new(subsets.len(), 0);
        for (from, to, symbol) in edges {
            dfa.add_transition(from, to, symbol);
        }
        for (state, subset) in subsets.iter().enumerate() {
            if self.is_accepting_set(subset) {
                dfa.add_accept(state);
            }
        }

        debug!(
            "determinized nfa of {} states into dfa of {} states over {} symbols",
            self.len(),
            dfa.len(),
            self.alphabet.len()
        );

        dfa
    }
}
