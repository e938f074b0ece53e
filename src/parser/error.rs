//! Parser status tracking.
//!
//! Parse failure is sticky: the first syntax error writes one diagnostic
//! line and flips a status flag that short-circuits all further parsing.
//! This module holds just that flag and the one diagnostic line it
//! produces — there's no per-error enum because only the first error is
//! ever observable.

/// Whether the parser has hit a syntax error yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserStatus {
    Ok,
    Error,
}
