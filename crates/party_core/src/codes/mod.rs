//! Literal code templates, one module per game.
//!
//! Generators never parse or validate. Whatever the caller passes is
//! written into the block as-is, so a malformed slot value produces a
//! malformed code line rather than an error.

pub mod mp6;
pub mod mp9;
