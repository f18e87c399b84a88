// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod core;

pub mod error;
pub mod parse;
pub mod store;
pub mod filter;
pub mod csv;
pub mod file;

#[cfg(feature = "cli")]
pub mod cli;
