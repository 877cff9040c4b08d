//! # Token Extraction
//!
//! Scans a token header for lines that begin with a token identifier.
//! Anything else in the header (comments, preprocessor lines, the enclosing
//! `typedef enum`) is silently passed over.

use std::collections::HashSet;
use std::path::Path;
use log::{debug,error,trace};
use crate::{Error,TOKEN_PREFIX};

/// Immutable set of token identifiers that a generator must never emit.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct ExclusionSet {
    tokens: HashSet<String>
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self {
            tokens: HashSet::new()
        }
    }
    pub fn from_list(list: &[&str]) -> Self {
        Self {
            tokens: list.iter().map(|s| s.to_string()).collect()
        }
    }
    /// Return a new set that also contains everything in `more`
    pub fn union<S: AsRef<str>>(&self,more: &[S]) -> Self {
        let mut tokens = self.tokens.clone();
        for s in more {
            tokens.insert(s.as_ref().to_string());
        }
        Self { tokens }
    }
    /// Exact string match, no case folding
    pub fn contains(&self,tok: &str) -> bool {
        self.tokens.contains(tok)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(|s| s.as_ref().to_string()).collect()
        }
    }
}

/// If the line is a token line return the normalized identifier.
/// The prefix test is safe for lines of any length, including empty ones.
pub fn candidate(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.starts_with(TOKEN_PREFIX) {
        return Some(trimmed.trim_end_matches(','));
    }
    None
}

/// Extract the surviving token identifiers from the lines of a header.
/// Order of appearance is kept, and duplicates are not removed.
pub fn extract_tokens<'a,I>(lines: I,exclude: &ExclusionSet) -> Vec<String>
where I: IntoIterator<Item = &'a str> {
    let mut ans = Vec::new();
    for line in lines {
        match candidate(line) {
            Some(tok) if exclude.contains(tok) => debug!("excluding {}",tok),
            Some(tok) => {
                trace!("found {}",tok);
                ans.push(tok.to_string());
            },
            None => {}
        }
    }
    ans
}

/// Read the whole token header at `path`.
/// The file is released before returning.
pub fn read_header(path: &Path) -> Result<String,Error> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("read {} bytes from {}",text.len(),path.display());
            Ok(text)
        },
        Err(e) if e.kind()==std::io::ErrorKind::NotFound => {
            error!("token header {} was not found",path.display());
            Err(Error::InputNotFound { path: path.to_path_buf() })
        },
        Err(e) => {
            error!("token header {} could not be read",path.display());
            Err(Error::InputUnreadable { path: path.to_path_buf(), source: e })
        }
    }
}
