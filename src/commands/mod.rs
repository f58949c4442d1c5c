//! CLI commands

pub mod check;
pub mod fix_classes;
pub mod match_close;
pub mod utils;
