//! Shared domain model of the story map.
//!
//! Everything in this crate is plain Rust with no browser dependency, so the
//! data rules (parsing, fallback, selection, category styling, marker and
//! popup construction, configuration) are tested on the host.

pub mod domain;
pub mod enums;
pub mod shared;
