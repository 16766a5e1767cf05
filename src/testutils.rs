// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::collections::{HashSet, VecDeque};

use dfa::Dfa;
use Symbol;

const MAX_INPUT_LEN: usize = 10;

pub fn symbols(input: &str) -> Vec<Symbol> {
    input.chars().map(Symbol::from).collect()
}

/// Maps arbitrary bytes onto a short string over the chars of `alphabet`.
pub fn to_input(bytes: &[u8], alphabet: &str) -> Vec<Symbol> {
    let alphabet = symbols(alphabet);
    bytes
        .iter()
        .take(MAX_INPUT_LEN)
        .map(|&b| alphabet[b as usize % alphabet.len()])
        .collect()
}

/// Builds a total dfa of up to six states over `alphabet`, shaped by `shape`.
pub fn random_dfa(shape: &[u8], alphabet: &str) -> Dfa {
    let alphabet = symbols(alphabet);
    let mut bytes = shape.iter().cloned().cycle();
    let len = 1 + bytes.next().unwrap_or(0) as usize % 6;

    let mut dfa = Dfa::new(len, 0);
    for state in 0..len {
        for &symbol in &alphabet {
            let to = bytes.next().unwrap_or(0) as usize % len;
            dfa.add_transition(state, to, symbol);
        }
        if bytes.next().unwrap_or(0) % 3 == 0 {
            dfa.add_accept(state);
        }
    }
    dfa
}

/// Checks if no input distinguishes state `a` from state `b`.
///
/// Walks the product of the two states' futures; a missing transition is a
/// rejecting sink.
pub fn equivalent_states(dfa: &Dfa, a: usize, b: usize) -> bool {
    let alphabet: Vec<Symbol> = dfa.alphabet().collect();
    let accepting = |state: Option<usize>| state.map_or(false, |s| dfa.is_accepting(s));

    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back((Some(a), Some(b)));

    while let Some((p, q)) = queue.pop_front() {
        if !seen.insert((p, q)) {
            continue;
        }
        if accepting(p) != accepting(q) {
            return false;
        }
        for &symbol in &alphabet {
            let next = |state: Option<usize>| state.and_then(|s| dfa.transition(s, symbol));
            queue.push_back((next(p), next(q)));
        }
    }

    true
}
