// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Maximal-munch lexing with one automaton per rule.
//!
//! A `Lexer` feeds each input symbol to the automata of all of its rules in
//! declaration order. It remembers the longest prefix that some rule
//! accepted and keeps going until every rule is trapped or the input ends.
//! The remembered prefix becomes a `Token` and scanning restarts right after
//! it. When two rules accept a prefix of the same length the `TieBreak`
//! decides which of them produces the token.
//!
//! Scanning stops at the first position where no rule accepts any prefix.
//! This is not an error: the tokens up to that position are returned and
//! `Scan::consumed` tells how much of the input they cover.

use std::char;
use std::io::Read;

use dfa::Dfa;
use error::{Error, Result};
use regex::Regex;
use token::Token;
use utf8::ReadUtf8Chars;
use Symbol;

/// The policy for choosing between rules that accept equally long prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// The rule declared last wins.
    LastDeclared,

    /// The rule declared first wins.
    FirstDeclared,
}

impl Default for TieBreak {
    fn default() -> TieBreak {
        TieBreak::LastDeclared
    }
}

impl TieBreak {
    // `current` is the match recorded so far as (end offset, rule); the
    // candidate is a later rule accepting at `cursor`.
    fn prefers_candidate(self, current: Option<(usize, usize)>, cursor: usize) -> bool {
        match (self, current) {
            (_, None) => true,
            (TieBreak::LastDeclared, Some(_)) => true,
            (TieBreak::FirstDeclared, Some((end, _))) => end != cursor,
        }
    }
}

/// Collects the rules and options of a `Lexer`.
#[derive(Clone, Debug, Default)]
pub struct LexerBuilder {
    rules: Vec<Dfa>,
    tie_break: TieBreak,
}

impl LexerBuilder {
    /// Creates a builder with no rules and the default `TieBreak`.
    pub fn new() -> LexerBuilder {
        Default::default()
    }

    /// Appends the minimal automaton of `regex` as the next rule.
    pub fn rule(mut self, regex: &Regex) -> LexerBuilder {
        self.rules.push(regex.to_dfa());
        self
    }

    /// Appends `dfa` unchanged as the next rule.
    pub fn rule_dfa(mut self, dfa: Dfa) -> LexerBuilder {
        self.rules.push(dfa);
        self
    }

    /// Sets the policy for rules that accept equally long prefixes.
    pub fn tie_break(mut self, tie_break: TieBreak) -> LexerBuilder {
        self.tie_break = tie_break;
        self
    }

    /// Builds the `Lexer`.
    ///
    /// # Errors
    /// `build` fails with `Error::NoRules` if no rule was added.
    pub fn build(self) -> Result<Lexer> {
        if self.rules.is_empty() {
            return Err(Error::NoRules);
        }

        Ok(Lexer {
            rules: self.rules,
            tie_break: self.tie_break,
        })
    }
}

/// The result of a scan that may have stopped before the end of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    /// The tokens in input order.
    pub tokens: Vec<Token>,

    /// The number of symbols covered by the tokens.
    pub consumed: usize,
}

impl Scan {
    /// Checks if the tokens cover an input of `len` symbols.
    pub fn is_complete(&self, len: usize) -> bool {
        self.consumed == len
    }
}

/// A maximal-munch lexer over an ordered list of rules.
#[derive(Clone, Debug)]
pub struct Lexer {
    rules: Vec<Dfa>,
    tie_break: TieBreak,
}

impl Lexer {
    /// Creates a builder for a `Lexer`.
    pub fn builder() -> LexerBuilder {
        LexerBuilder::new()
    }

    /// Creates a `Lexer` with one rule per expression and the default
    /// `TieBreak`.
    ///
    /// # Errors
    /// `from_rules` fails with `Error::NoRules` if `rules` is empty.
    pub fn from_rules<I>(rules: I) -> Result<Lexer>
    where
        I: IntoIterator<Item = Regex>,
    {
        rules
            .into_iter()
            .fold(LexerBuilder::new(), |builder, regex| builder.rule(&regex))
            .build()
    }

    /// The rule automata in declaration order.
    pub fn rules(&self) -> &[Dfa] {
        &self.rules
    }

    /// The policy for rules that accept equally long prefixes.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Scans `text`, counting offsets in `char`s.
    ///
    /// The tokens cover only a prefix of `text` if some position matches no
    /// rule.
    pub fn scan(&mut self, text: &str) -> Vec<Token> {
        self.scan_complete(text).tokens
    }

    /// Scans `text` and reports how much of it the tokens cover.
    pub fn scan_complete(&mut self, text: &str) -> Scan {
        let symbols: Vec<Symbol> = text.chars().map(Symbol::from).collect();
        self.scan_symbols(&symbols)
    }

    /// Scans raw symbols.
    ///
    /// Symbols that are not `char`s appear as U+FFFD in token text.
    pub fn scan_symbols(&mut self, input: &[Symbol]) -> Scan {
        let tie_break = self.tie_break;
        let mut tokens = Vec::new();
        let mut start = 0;

        while start < input.len() {
            self.reset();

            let mut recent: Option<(usize, usize)> = None;
            let mut cursor = start;
            while cursor < input.len() {
                let mut all_trapped = true;
                for (rule, dfa) in self.rules.iter_mut().enumerate() {
                    let step = dfa.step(input[cursor]);
                    if step.accepted && tie_break.prefers_candidate(recent, cursor) {
                        recent = Some((cursor, rule));
                    }
                    all_trapped &= step.trapped;
                }

                cursor += 1;
                if all_trapped {
                    break;
                }
            }

            match recent {
                Some((end, rule)) => {
                    let matched = &input[start..end + 1];
                    let token = Token::new(rule, start, matched.len(), text_of(matched));
                    trace!("matched {}", token);

                    tokens.push(token);
                    start = end + 1;
                }
                None => {
                    debug!(
                        "no rule matches at offset {} of {}; scan stopped",
                        start,
                        input.len()
                    );
                    break;
                }
            }
        }

        Scan {
            tokens,
            consumed: start,
        }
    }

    /// Decodes `reader` as utf8 and scans the resulting `char`s.
    ///
    /// # Errors
    /// `scan_reader` fails with `Error::InputError` if reading fails or the
    /// bytes are not valid utf8. No tokens are produced in that case.
    pub fn scan_reader<R: Read>(&mut self, reader: R) -> Result<Scan> {
        let symbols = reader
            .utf8_chars()
            .map(|c| c.map(Symbol::from))
            .collect::<::std::io::Result<Vec<_>>>()?;

        Ok(self.scan_symbols(&symbols))
    }

    /// Returns every rule automaton to its initial state.
    pub fn reset(&mut self) {
        for dfa in &mut self.rules {
            dfa.reset();
        }
    }
}

fn text_of(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|&symbol| char::from_u32(symbol).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
