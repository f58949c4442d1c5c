//! tsx-doctor library
//!
//! Core logic behind the tsx-doctor CLI: the brace balance scanner and the
//! utility-class repair rule set, both pure and printing-free so they can be
//! used from other tools.

pub mod repair;
pub mod scanner;
