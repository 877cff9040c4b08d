//! # Opcode Map
//!
//! Generates the `opcode_t` enumeration used by the assembler.
//! Opcodes are packed against the top of the byte range; the low values belong to
//! another numbering space.
//!
//! Rows keep the order of the token header.  Sorting them would renumber existing
//! opcodes whenever a token is added, so the order here must never change.

use std::fmt::Write;
use log::error;
use crate::extract::ExclusionSet;
use crate::keyword;
use crate::pipeline::MapPolicy;
use crate::settings::Settings;
use crate::{Error,TOKEN_PREFIX};

pub const OPCODE_PREFIX: &str = "OP_";

/// Tokens that are not instructions: registers, directives, and integer types
const INSTRUCTION_EXCLUSIONS: [&str;44] = [
    "TOK_R0", "TOK_R1", "TOK_R2", "TOK_R3", "TOK_R4", "TOK_R5", "TOK_R6", "TOK_R7",
    "TOK_R8", "TOK_R9", "TOK_R10", "TOK_R11", "TOK_R12", "TOK_R13", "TOK_R14", "TOK_R15",
    "TOK_R16", "TOK_R17", "TOK_R18", "TOK_R19", "TOK_R20", "TOK_R21", "TOK_R22", "TOK_R23",
    "TOK_R24", "TOK_R25", "TOK_R26", "TOK_R27", "TOK_R28", "TOK_R29", "TOK_R30", "TOK_R31",
    "TOK_SECTION",
    "TOK_INCLUDE",
    "TOK_INT8",
    "TOK_INT16",
    "TOK_INT32",
    "TOK_INT64",
    "TOK_UINT8",
    "TOK_UINT16",
    "TOK_UINT32",
    "TOK_UINT64",
    "TOK_GLOBAL",
    "TOK_CONST",
];

/// Default exclusions: everything the keyword map excludes, plus the non-instructions
pub fn default_exclusions() -> ExclusionSet {
    ExclusionSet::from_list(&keyword::DEFAULT_EXCLUSIONS).union(&INSTRUCTION_EXCLUSIONS)
}

/// Bounds on the opcode values.
/// Opcodes are assigned downward from `end`, exclusive, and never go below `start`.
/// The largest value assigned is `end - 1`, and at most `end - start` opcodes fit.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct OpcodeRange {
    pub start: u8,
    pub end: u8
}

impl OpcodeRange {
    /// Most opcodes that can be assigned
    pub fn capacity(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }
    /// Value of the first of `count` opcodes, or `RangeOverflow` if they do not fit
    pub fn first_value(&self,count: usize) -> Result<u8,Error> {
        if count > self.capacity() {
            error!("{} opcodes requested but only {} are available",count,self.capacity());
            return Err(Error::RangeOverflow { count, capacity: self.capacity() });
        }
        Ok(self.end - count as u8)
    }
}

impl Default for OpcodeRange {
    fn default() -> Self {
        Self {
            start: 0,
            end: 255
        }
    }
}

#[derive(Clone,Debug,PartialEq)]
pub struct OpcodeEntry {
    pub name: String,
    pub value: u8
}

/// Opcode symbol for a token, `TOK_ADD` becomes `OP_ADD`
pub fn opcode_name(token: &str) -> String {
    match token.strip_prefix(TOKEN_PREFIX) {
        Some(stem) => [OPCODE_PREFIX,stem].concat(),
        None => token.to_string()
    }
}

pub struct OpcodeMap {
    exclude: ExclusionSet,
    range: OpcodeRange,
    tokens_header: String,
    guard: String
}

impl OpcodeMap {
    pub fn new() -> Self {
        Self::with_settings(&Settings::new())
    }
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            exclude: settings.exclusions(&default_exclusions()),
            range: settings.range,
            tokens_header: settings.tokens_header.clone(),
            guard: settings.guard.clone()
        }
    }
}

impl Default for OpcodeMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapPolicy for OpcodeMap {
    type Entry = OpcodeEntry;
    fn name(&self) -> &str {
        "opcode map"
    }
    fn exclusions(&self) -> &ExclusionSet {
        &self.exclude
    }
    fn map(&self,tokens: Vec<String>) -> Result<Vec<OpcodeEntry>,Error> {
        let first = self.range.first_value(tokens.len())?;
        // the checked start guarantees no overflow for the whole run
        let ans = tokens.iter().enumerate().map(|(i,tok)| OpcodeEntry {
            name: opcode_name(tok),
            value: first + i as u8
        }).collect();
        Ok(ans)
    }
    fn render(&self,entries: &[OpcodeEntry],time: &chrono::DateTime<chrono::Local>) -> String {
        let mut ans = crate::banner(&self.tokens_header,time);
        // formatting into a String cannot fail
        let _ = write!(ans,"\n#ifndef {}\n#define {}\n\n",self.guard,self.guard);
        ans += "typedef enum {\n";
        for entry in entries {
            let _ = writeln!(ans,"    {} = 0x{:02X},",entry.name,entry.value);
        }
        ans += "} opcode_t;\n\n#endif\n\n";
        ans
    }
}
