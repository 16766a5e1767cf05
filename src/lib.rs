// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! A library for building finite automata from regular expression trees and
//! for lexing with them.
//!
//! The pipeline runs from a `Regex` expression tree, through a nondeterministic
//! automaton (`Nfa`) produced by Thompson's construction, to a deterministic
//! automaton (`Dfa`) produced by the subset construction, which is then
//! minimized by partition refinement. A `Lexer` runs one minimized `Dfa` per
//! lexical rule in parallel and performs a maximal-munch scan of its input,
//! producing a sequence of `Token`s.
//!
//! ```
//! use munch::{Lexer, Regex};
//!
//! let mut lexer = Lexer::from_rules(vec![
//!     Regex::literal(';'),
//!     Regex::one_or_more(Regex::any_of("ab".chars())),
//! ]).expect("no rules");
//!
//! let tokens = lexer.scan("ab;ba");
//! let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
//!
//! assert_eq!(texts, vec!["ab", ";", "ba"]);
//! ```
//!
//! The alphabet is a set of opaque integer codes (`Symbol`). Scanning a `str`
//! maps each `char` to its scalar value.

#![deny(missing_docs)]

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate encode_unicode;
extern crate fixedbitset;
extern crate indexmap;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
extern crate quickcheck;

mod error;
mod token;
pub mod dfa;
pub mod lexer;
pub mod nfa;
pub mod patterns;
pub mod regex;
pub mod status;
pub mod utf8;

#[cfg(test)]
mod testutils;

pub use dfa::Dfa;
pub use error::{Error, Result};
pub use lexer::{Lexer, LexerBuilder, Scan, TieBreak};
pub use nfa::Nfa;
pub use regex::{Regex, RegexKind};
pub use status::StatusSet;
pub use token::Token;

/// An input symbol.
///
/// Symbols are opaque integer codes. A `char` converts into the `Symbol` equal
/// to its scalar value.
pub type Symbol = u32;

/// The outcome of feeding one symbol to an automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// The automaton is in an accepting configuration after the symbol.
    pub accepted: bool,

    /// No continuation of the input consumed so far can be accepted.
    pub trapped: bool,
}

impl Step {
    pub(crate) fn trapped() -> Step {
        Step {
            accepted: false,
            trapped: true,
        }
    }
}
