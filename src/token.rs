// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::fmt;

/// A matched slice of the input together with the rule that matched it.
///
/// Offsets and lengths count symbols, not bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    rule: usize,
    start: usize,
    len: usize,
    text: String,
}

impl Token {
    pub(crate) fn new(rule: usize, start: usize, len: usize, text: String) -> Token {
        Token {
            rule,
            start,
            len,
            text,
        }
    }

    /// The index of the matching rule, in declaration order.
    pub fn rule(&self) -> usize {
        self.rule
    }

    /// The offset of the first symbol of the token.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The number of symbols in the token; never zero.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the token covers no symbols; never true for a scanned token.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The offset one past the last symbol of the token.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The matched text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.rule, self.start, self.len, self.text)
    }
}
