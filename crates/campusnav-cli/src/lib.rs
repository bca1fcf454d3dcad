//! Campus navigation CLI library.
//!
//! This crate provides the output formatting shared by the `campusnav`
//! subcommands.

pub mod output;
