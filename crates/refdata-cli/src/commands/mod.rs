//! CLI command implementations.

pub mod compare;
pub mod generate;
pub mod info;
pub mod run;
pub mod scenarios;
