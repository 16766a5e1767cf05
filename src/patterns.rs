// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

//! Predefined expressions for common lexical rules of C-like languages.

use regex::Regex;

/// `[0-9]`
pub fn dec_digit() -> Regex {
    Regex::any_of("0123456789".chars())
}

/// `[1-9]`
pub fn nonzero_digit() -> Regex {
    Regex::any_of("123456789".chars())
}

/// `[0-7]`
pub fn oct_digit() -> Regex {
    Regex::any_of("01234567".chars())
}

/// `[0-9a-f]`
pub fn hex_digit() -> Regex {
    Regex::any_of("0123456789abcdef".chars())
}

/// `[a-z]`
pub fn lower_alpha() -> Regex {
    Regex::any_of("abcdefghijklmnopqrstuvwxyz".chars())
}

/// `[A-Z]`
pub fn upper_alpha() -> Regex {
    Regex::any_of("ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars())
}

/// `[a-zA-Z_][0-9a-zA-Z_]*`
pub fn c_identifier() -> Regex {
    let head = Regex::alternation_all(vec![lower_alpha(), upper_alpha(), Regex::literal('_')]);
    let tail = Regex::alternation_all(vec![
        dec_digit(),
        lower_alpha(),
        upper_alpha(),
        Regex::literal('_'),
    ]);

    Regex::concat(head, Regex::repetition(tail))
}

/// `0|[1-9][0-9]*`
pub fn dec_integer() -> Regex {
    Regex::alternation(
        Regex::literal('0'),
        Regex::concat(nonzero_digit(), Regex::repetition(dec_digit())),
    )
}

/// `0[0-7]+`
pub fn oct_integer() -> Regex {
    Regex::concat(Regex::literal('0'), Regex::one_or_more(oct_digit()))
}

/// `0[xX][0-9a-f]+`
pub fn hex_integer() -> Regex {
    Regex::concat_all(vec![
        Regex::literal('0'),
        Regex::any_of("xX".chars()),
        Regex::one_or_more(hex_digit()),
    ])
}

/// A decimal, octal or hexadecimal integer.
pub fn integer() -> Regex {
    Regex::alternation_all(vec![dec_integer(), oct_integer(), hex_integer()])
}

/// A decimal number with an optional fraction, exponent and `f` suffix.
///
/// The mantissa is an integer, an integer followed by `.`, a `.` followed by
/// digits, or both. The exponent is `e`, an optional `-` and a decimal
/// integer.
pub fn float() -> Regex {
    let fraction = || Regex::concat(Regex::literal('.'), Regex::repetition(dec_digit()));
    let mantissa = Regex::alternation_all(vec![
        Regex::concat(dec_integer(), Regex::literal('.')),
        fraction(),
        Regex::concat(dec_integer(), fraction()),
        dec_integer(),
    ]);
    let exponent = Regex::concat_all(vec![
        Regex::literal('e'),
        Regex::optional(Regex::literal('-')),
        dec_integer(),
    ]);

    Regex::concat_all(vec![
        mantissa,
        Regex::optional(exponent),
        Regex::optional(Regex::any_of("fF".chars())),
    ])
}

/// Zero or more blank characters: space, tab, vertical tab, carriage return,
/// newline, bell, backspace and form feed.
pub fn blank() -> Regex {
    Regex::repetition(Regex::any_of(
        vec![' ', '\t', '\u{b}', '\r', '\n', '\u{7}', '\u{8}', '\u{c}'],
    ))
}
