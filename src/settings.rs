//! Parse the settings string passed with `--config`.
//!
//! The generators check for specific keys that may affect their output.
//! Keys a generator does not use are accepted and ignored by that generator.

use serde_json;
use log::warn;
use crate::Error;
use crate::extract::ExclusionSet;
use crate::opcode::OpcodeRange;

#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
    /// replaces the default exclusions if present
    pub exclude: Option<Vec<String>>,
    /// added to the exclusions
    pub exclude_extra: Vec<String>,
    pub tokens_header: String,
    pub map_header: String,
    pub guard: String,
    pub range: OpcodeRange
}

impl Settings {
    pub fn new() -> Self {
        Self {
            exclude: None,
            exclude_extra: Vec::new(),
            tokens_header: "tokens.h".to_string(),
            map_header: "keyword_map.h".to_string(),
            guard: "__OPCODES_H__".to_string(),
            range: OpcodeRange::default()
        }
    }
    /// Resolve the exclusions given the generator's default set
    pub fn exclusions(&self,default: &ExclusionSet) -> ExclusionSet {
        let base = match &self.exclude {
            Some(list) => list.iter().collect::<ExclusionSet>(),
            None => default.clone()
        };
        base.union(&self.exclude_extra)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

fn string_list(val: &serde_json::Value,key: &str) -> Result<Vec<String>,Error> {
    let bad = || Error::ArgumentError(format!("`{}` must be a list of strings",key));
    let arr = val.as_array().ok_or_else(bad)?;
    let mut ans = Vec::new();
    for item in arr {
        ans.push(item.as_str().ok_or_else(bad)?.to_string());
    }
    Ok(ans)
}

fn string_val(val: &serde_json::Value,key: &str) -> Result<String,Error> {
    match val.as_str() {
        Some(s) if s.len() > 0 => Ok(s.to_string()),
        _ => Err(Error::ArgumentError(format!("`{}` must be a non-empty string",key)))
    }
}

fn range_val(val: &serde_json::Value,curr: OpcodeRange) -> Result<OpcodeRange,Error> {
    let mut ans = curr;
    let obj = match val.as_object() {
        Some(obj) => obj,
        None => return Err(Error::ArgumentError("`range` must be an object".to_string()))
    };
    for (key,bound) in obj {
        let b = match bound.as_u64() {
            Some(b) if b <= u8::MAX as u64 => b as u8,
            _ => return Err(Error::ArgumentError(format!("range `{}` must be an integer from 0 to 255",key)))
        };
        match key.as_str() {
            "start" => ans.start = b,
            "end" => ans.end = b,
            _ => warn!("unknown range key `{}`",key)
        }
    }
    if ans.start > ans.end {
        return Err(Error::ArgumentError(format!("range start {} exceeds end {}",ans.start,ans.end)));
    }
    Ok(ans)
}

pub fn parse(json: &str) -> Result<Settings,Error> {
    let mut ans = Settings::new();
    let root = match serde_json::from_str::<serde_json::Value>(json) {
        Ok(root) => root,
        Err(e) => return Err(Error::ArgumentError(format!("settings are not valid JSON: {}",e)))
    };
    let obj = match root.as_object() {
        Some(obj) => obj,
        None => return Err(Error::ArgumentError("settings must be a JSON object".to_string()))
    };
    for (key,val) in obj {
        match key.as_str() {
            "exclude" => ans.exclude = Some(string_list(val,key)?),
            "excludeExtra" => ans.exclude_extra = string_list(val,key)?,
            "tokensHeader" => ans.tokens_header = string_val(val,key)?,
            "mapHeader" => ans.map_header = string_val(val,key)?,
            "guard" => ans.guard = string_val(val,key)?,
            "range" => ans.range = range_val(val,ans.range)?,
            _ => warn!("unknown settings key `{}`",key)
        }
    }
    Ok(ans)
}
