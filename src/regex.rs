// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Regular expression trees and their compilation into automata.
//!
//! A `Regex` is built programmatically from its constructors; there is no
//! textual regular expression syntax. Compilation follows Thompson's
//! construction: every node occupies a contiguous range of `size()` states
//! whose first state is the node's start and whose last state is the node's
//! accept.

use std::char;
use std::fmt;

use dfa::Dfa;
use nfa::Nfa;
use Symbol;

/// The shape of one node of a `Regex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegexKind {
    /// Exactly one symbol.
    Literal(Symbol),

    /// The left expression followed by the right expression.
    Concatenation(Box<Regex>, Box<Regex>),

    /// Either the left or the right expression.
    Alternation(Box<Regex>, Box<Regex>),

    /// Zero or more repetitions of the expression.
    Repetition(Box<Regex>),

    /// Zero or one occurrence of the expression.
    Optional(Box<Regex>),
}

/// A regular expression tree.
///
/// Each node caches the number of automaton states it compiles to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Regex {
    kind: RegexKind,
    size: usize,
}

impl Regex {
    /// Creates a `Regex` from its kind, computing its size.
    pub fn new(kind: RegexKind) -> Regex {
        let size = compute_size(&kind);
        Regex { kind, size }
    }

    /// Matches exactly `symbol`.
    pub fn literal<S: Into<Symbol>>(symbol: S) -> Regex {
        Regex::new(RegexKind::Literal(symbol.into()))
    }

    /// Matches `left` followed by `right`.
    pub fn concat(left: Regex, right: Regex) -> Regex {
        Regex::new(RegexKind::Concatenation(Box::new(left), Box::new(right)))
    }

    /// Matches either `left` or `right`.
    pub fn alternation(left: Regex, right: Regex) -> Regex {
        Regex::new(RegexKind::Alternation(Box::new(left), Box::new(right)))
    }

    /// Matches zero or more repetitions of `item`.
    pub fn repetition(item: Regex) -> Regex {
        Regex::new(RegexKind::Repetition(Box::new(item)))
    }

    /// Matches zero or one occurrence of `item`.
    pub fn optional(item: Regex) -> Regex {
        Regex::new(RegexKind::Optional(Box::new(item)))
    }

    /// Matches one or more repetitions of `item`.
    pub fn one_or_more(item: Regex) -> Regex {
        let repeated = Regex::repetition(item.clone());
        Regex::concat(item, repeated)
    }

    /// Concatenates `items`, folding from the right.
    ///
    /// # Panics
    /// `concat_all` panics if `items` is empty.
    pub fn concat_all<I: IntoIterator<Item = Regex>>(items: I) -> Regex {
        fold_right(items, "concat_all", Regex::concat)
    }

    /// Alternates between `items`, folding from the right.
    ///
    /// # Panics
    /// `alternation_all` panics if `items` is empty.
    pub fn alternation_all<I: IntoIterator<Item = Regex>>(items: I) -> Regex {
        fold_right(items, "alternation_all", Regex::alternation)
    }

    /// Matches the sequence of `symbols`.
    ///
    /// # Panics
    /// `string` panics if `symbols` is empty.
    pub fn string<I, S>(symbols: I) -> Regex
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Regex::concat_all(symbols.into_iter().map(Regex::literal))
    }

    /// Matches any one of `symbols`.
    ///
    /// # Panics
    /// `any_of` panics if `symbols` is empty.
    pub fn any_of<I, S>(symbols: I) -> Regex
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Regex::alternation_all(symbols.into_iter().map(Regex::literal))
    }

    /// The shape of the root node.
    pub fn kind(&self) -> &RegexKind {
        &self.kind
    }

    /// The number of automaton states this expression compiles to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Recomputes the cached sizes of the whole tree from the leaves up.
    pub fn recompute_size(&mut self) -> usize {
        match self.kind {
            RegexKind::Literal(_) => {}
            RegexKind::Concatenation(ref mut left, ref mut right)
            | RegexKind::Alternation(ref mut left, ref mut right) => {
                left.recompute_size();
                right.recompute_size();
            }
            RegexKind::Repetition(ref mut item) | RegexKind::Optional(ref mut item) => {
                item.recompute_size();
            }
        }
        self.size = compute_size(&self.kind);
        self.size
    }

    /// Wires this expression into the states `base..base + size()` of `nfa`.
    ///
    /// State `base` is the start of the expression and state
    /// `base + size() - 1` is its accept. Nothing is marked accepting.
    ///
    /// # Panics
    /// `emit` panics if `nfa` has fewer than `base + size()` states.
    pub fn emit(&self, nfa: &mut Nfa, base: usize) {
        let accept = base + self.size - 1;

        match self.kind {
            RegexKind::Literal(symbol) => {
                nfa.add_symbol_transition(base, accept, symbol);
            }
            RegexKind::Concatenation(ref left, ref right) => {
                // left's accept is right's start
                left.emit(nfa, base);
                right.emit(nfa, base + left.size - 1);
            }
            RegexKind::Alternation(ref left, ref right) => {
                let left_start = base + 1;
                let right_start = left_start + left.size;
                left.emit(nfa, left_start);
                right.emit(nfa, right_start);

                nfa.add_epsilon_transition(base, left_start);
                nfa.add_epsilon_transition(base, right_start);
                nfa.add_epsilon_transition(left_start + left.size - 1, accept);
                nfa.add_epsilon_transition(right_start + right.size - 1, accept);
            }
            RegexKind::Repetition(ref item) => {
                let item_start = base + 1;
                let item_accept = item_start + item.size - 1;
                item.emit(nfa, item_start);

                nfa.add_epsilon_transition(base, item_start);
                nfa.add_epsilon_transition(item_accept, accept);
                nfa.add_epsilon_transition(item_accept, item_start);
                nfa.add_epsilon_transition(base, accept);
            }
            RegexKind::Optional(ref item) => {
                item.emit(nfa, base);
                nfa.add_epsilon_transition(base, accept);
            }
        }
    }

    /// Compiles the expression into an `Nfa` whose last state accepts.
    pub fn compile(&self) -> Nfa {
        let mut nfa = Nfa::new(self.size);
        self.emit(&mut nfa, 0);
        nfa.add_accept(self.size - 1);
        nfa
    }

    /// Compiles, determinizes and minimizes the expression.
    pub fn to_dfa(&self) -> Dfa {
        self.compile().determinize().minimize()
    }
}

fn compute_size(kind: &RegexKind) -> usize {
    match *kind {
        RegexKind::Literal(_) => 2,
        RegexKind::Concatenation(ref left, ref right) => left.size + right.size - 1,
        RegexKind::Alternation(ref left, ref right) => left.size + right.size + 2,
        RegexKind::Repetition(ref item) => item.size + 2,
        RegexKind::Optional(ref item) => item.size,
    }
}

fn fold_right<I, F>(items: I, name: &str, combine: F) -> Regex
where
    I: IntoIterator<Item = Regex>,
    F: Fn(Regex, Regex) -> Regex,
{
    let mut items: Vec<Regex> = items.into_iter().collect();
    let last = match items.pop() {
        Some(last) => last,
        None => panic!("{} needs at least one expression", name),
    };

    items
        .into_iter()
        .rev()
        .fold(last, |acc, item| combine(item, acc))
}

/// Renders the expression in a conventional regular expression notation.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            RegexKind::Literal(symbol) => match char::from_u32(symbol) {
                Some(c) if "|()*?\\".contains(c) => write!(f, "\\{}", c),
                Some(c) if !c.is_control() => write!(f, "{}", c),
                _ => write!(f, "\\u{{{:x}}}", symbol),
            },
            RegexKind::Concatenation(ref left, ref right) => write!(f, "{}{}", left, right),
            RegexKind::Alternation(ref left, ref right) => write!(f, "({}|{})", left, right),
            RegexKind::Repetition(ref item) => write!(f, "({})*", item),
            RegexKind::Optional(ref item) => write!(f, "({})?", item),
        }
    }
}
