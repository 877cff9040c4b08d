//! # `tokmap` main library
//!
//! This library generates C tables from a token header during a compiler build.
//! The header holds an enumeration of token identifiers named `TOK_<NAME>`, one per line.
//!
//! ## Architecture
//!
//! Every generator is the same pipeline with a different policy:
//! * `extract` finds the token lines and filters them through an `ExclusionSet`
//! * `pipeline::MapPolicy` turns surviving tokens into entries and renders them
//! * `pipeline::run` reads the input, applies the policy, and writes the output atomically
//!
//! ## Generators
//!
//! * `keyword::KeywordMap` produces the sorted keyword lookup table used by the scanner
//! * `opcode::OpcodeMap` produces the opcode enumeration used by the assembler,
//!   packed against the top of the byte range
//!
//! Each generator compiles to its own executable, see `src/bin`.
//! Both executables share the argument definitions in `cli`.

pub mod extract;
pub mod pipeline;
pub mod keyword;
pub mod opcode;
pub mod settings;
pub mod cli;
pub mod commands;
#[cfg(test)]
mod keyword_test;
#[cfg(test)]
mod opcode_test;

use std::path::PathBuf;

/// Prefix that marks a line of the token header as a token identifier
pub const TOKEN_PREFIX: &str = "TOK_";

#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("argument error: {0}")]
    ArgumentError(String),
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },
    #[error("could not read input file {path}: {source}")]
    InputUnreadable { path: PathBuf, source: std::io::Error },
    #[error("could not write output file {path}: {source}")]
    OutputWriteFailure { path: PathBuf, source: std::io::Error },
    #[error("{count} opcodes do not fit in a range of capacity {capacity}")]
    RangeOverflow { count: usize, capacity: usize },
    #[error("{stage} of {path}: {source}")]
    Stage { stage: String, path: PathBuf, source: Box<Error> }
}

impl Error {
    /// The underlying error, looking through any `Stage` context
    pub fn root(&self) -> &Error {
        match self {
            Error::Stage { source, .. } => source.root(),
            _ => self
        }
    }
}

/// Timestamp in the form used by the banner of every generated file, e.g., `Mon Jan  6 09:05:00 2025`
pub fn ctime(time: &chrono::DateTime<chrono::Local>) -> String {
    time.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Banner placed at the top of every generated file
pub fn banner(source_name: &str,time: &chrono::DateTime<chrono::Local>) -> String {
    format!("\n// This file is generated from {}.\n// DO NOT EDIT\n// Generated: {}\n",source_name,ctime(time))
}
