// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

use std::{io, result};

/// The error type for building and running lexers.
///
/// Input that no rule matches is not an error; see `Lexer::scan_complete`.
#[derive(Debug, Fail)]
pub enum Error {
    /// A lexer was built without any rules.
    #[fail(display = "A lexer needs at least one rule.")]
    NoRules,

    /// Reading or decoding the input failed.
    #[fail(display = "The lexer encountered an input error.")]
    InputError(#[cause] io::Error),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::InputError(error)
    }
}

/// A specialized Result type for lexer operations.
pub type Result<T> = result::Result<T, Error>;
