//! # Keyword Map
//!
//! Generates the `keyword_map` table the scanner uses to recognize reserved words.
//! Each row pairs a token with its keyword, which is the token name without the
//! prefix, in lower case.  Rows are sorted by token name so the table is stable
//! from build to build.

use std::fmt::Write;
use crate::extract::ExclusionSet;
use crate::pipeline::MapPolicy;
use crate::settings::Settings;
use crate::{Error,TOKEN_PREFIX};

/// Tokens with no keyword: literals, operators, and punctuation
pub const DEFAULT_EXCLUSIONS: [&str;26] = [
    "TOK_ERROR",
    "TOK_END_INPUT",
    "TOK_STRING_LITERAL",
    "TOK_IDENTIFIER",
    "TOK_UNUM_LITERAL",
    "TOK_INUM_LITERAL",
    "TOK_FNUM_LITERAL",
    "TOK_PLUS",
    "TOK_MINUS",
    "TOK_STAR",
    "TOK_SLASH",
    "TOK_BWSHL",
    "TOK_BWSHR",
    "TOK_BWAND",
    "TOK_BWOR",
    "TOK_XOR",
    "TOK_BWNOT",
    "TOK_OCURLY",
    "TOK_CCURLY",
    "TOK_OPAREN",
    "TOK_CPAREN",
    "TOK_OSQUARE",
    "TOK_CSQUARE",
    "TOK_EQUAL",
    "TOK_PERIOD",
    "TOK_COMMA",
];

#[derive(Clone,Debug,PartialEq)]
pub struct KeywordEntry {
    pub token: String,
    pub keyword: String
}

impl KeywordEntry {
    pub fn from_token(token: &str) -> Self {
        let stem = token.strip_prefix(TOKEN_PREFIX).unwrap_or(token);
        Self {
            token: token.to_string(),
            keyword: stem.to_lowercase()
        }
    }
}

pub struct KeywordMap {
    exclude: ExclusionSet,
    tokens_header: String,
    map_header: String
}

impl KeywordMap {
    pub fn new() -> Self {
        Self::with_settings(&Settings::new())
    }
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            exclude: settings.exclusions(&ExclusionSet::from_list(&DEFAULT_EXCLUSIONS)),
            tokens_header: settings.tokens_header.clone(),
            map_header: settings.map_header.clone()
        }
    }
}

impl Default for KeywordMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MapPolicy for KeywordMap {
    type Entry = KeywordEntry;
    fn name(&self) -> &str {
        "keyword map"
    }
    fn exclusions(&self) -> &ExclusionSet {
        &self.exclude
    }
    fn map(&self,mut tokens: Vec<String>) -> Result<Vec<KeywordEntry>,Error> {
        tokens.sort();
        Ok(tokens.iter().map(|t| KeywordEntry::from_token(t)).collect())
    }
    fn render(&self,entries: &[KeywordEntry],time: &chrono::DateTime<chrono::Local>) -> String {
        let mut ans = crate::banner(&self.tokens_header,time);
        ans += "\n#include <stdlib.h>\n\n";
        // formatting into a String cannot fail
        let _ = write!(ans,"\n#include \"{}\"\n\n",self.tokens_header);
        let _ = write!(ans,"\n#include \"{}\"\n\n",self.map_header);
        ans += "keyword_map_t keyword_map[] = {\n";
        for entry in entries {
            let _ = writeln!(ans,"    {{{}, \"{}\"}},",entry.token,entry.keyword);
        }
        ans += "};\n\n";
        ans += "const size_t num_keywords = (sizeof(keyword_map)/sizeof(keyword_map_t));\n\n";
        ans
    }
}
