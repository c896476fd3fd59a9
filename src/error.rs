//! Errors raised while loading tests.

use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "unexpected end of input while reading {}", what)]
    UnexpectedEof { what: &'static str },
    #[display(fmt = "invalid {} {:?}", what, token)]
    InvalidNumber { token: String, what: &'static str },
    #[display(
        fmt = "experiment ({}, {}) out of range for {} researchers and {} bugs",
        left,
        right,
        n_left,
        n_right
    )]
    InvalidGraph {
        left: usize,
        right: usize,
        n_left: usize,
        n_right: usize,
    },
    #[display(fmt = "trailing input after the last test")]
    TrailingInput,
}

impl std::error::Error for Err {}
