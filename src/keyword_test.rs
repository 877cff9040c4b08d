use chrono::TimeZone;
use super::keyword::{KeywordEntry,KeywordMap,DEFAULT_EXCLUSIONS};
use super::pipeline::{generate,MapPolicy};
use super::settings;

fn fixed_time() -> chrono::DateTime<chrono::Local> {
	chrono::Local.with_ymd_and_hms(2024,3,5,14,7,9).single().expect("bad time")
}

fn keyword_rows(text: &str) -> Vec<String> {
	text.lines().filter(|l| l.starts_with("    {")).map(|l| l.to_string()).collect()
}

#[test]
fn entry_from_token() {
	let entry = KeywordEntry::from_token("TOK_JMP_IF_Z");
	assert_eq!(entry.token,"TOK_JMP_IF_Z");
	assert_eq!(entry.keyword,"jmp_if_z");
}

#[test]
fn add_sub_scenario() {
	let input = "TOK_ADD,\nTOK_ERROR,\nTOK_IDENTIFIER,\nTOK_SUB,";
	let (text,count) = generate(&KeywordMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	assert_eq!(count,2);
	assert_eq!(keyword_rows(&text),vec![
		"    {TOK_ADD, \"add\"},",
		"    {TOK_SUB, \"sub\"},"
	]);
}

#[test]
fn sorted_by_identifier() {
	let input = "TOK_SUB,\nTOK_NOP,\nTOK_ADD,\nTOK_ADD_F,\nTOK_ADDF,";
	let entries = KeywordMap::new().map(input.lines().map(|s| s.trim_end_matches(',').to_string()).collect()).expect("map failed");
	for pair in entries.windows(2) {
		assert!(pair[0].token <= pair[1].token);
	}
	let names: Vec<&str> = entries.iter().map(|e| e.token.as_str()).collect();
	assert_eq!(names,vec!["TOK_ADD","TOK_ADDF","TOK_ADD_F","TOK_NOP","TOK_SUB"]);
}

#[test]
fn default_exclusions_absent() {
	let mut input = String::new();
	for tok in DEFAULT_EXCLUSIONS {
		input += &format!("    {},\n    {},\n",tok,tok);
	}
	input += "    TOK_HALT,\n";
	let (text,count) = generate(&KeywordMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	assert_eq!(count,1);
	for tok in DEFAULT_EXCLUSIONS {
		assert!(!text.contains(&format!("{{{},",tok)));
	}
}

#[test]
fn duplicates_preserved() {
	let input = "TOK_NOP,\nTOK_NOP,";
	let (text,count) = generate(&KeywordMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	assert_eq!(count,2);
	assert_eq!(keyword_rows(&text).len(),2);
}

#[test]
fn full_layout() {
	let input = "typedef enum {\n    TOK_NOP,\n    TOK_BREAK,\n    TOK_PLUS,\n} token_t;";
	let (text,_) = generate(&KeywordMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	let expected = "
// This file is generated from tokens.h.
// DO NOT EDIT
// Generated: Tue Mar  5 14:07:09 2024

#include <stdlib.h>


#include \"tokens.h\"


#include \"keyword_map.h\"

keyword_map_t keyword_map[] = {
    {TOK_BREAK, \"break\"},
    {TOK_NOP, \"nop\"},
};

const size_t num_keywords = (sizeof(keyword_map)/sizeof(keyword_map_t));

";
	assert_eq!(text,expected);
}

#[test]
fn custom_headers() {
	let s = settings::parse(r#"{"tokensHeader":"toks.h","mapHeader":"kw.h"}"#).expect("settings");
	let (text,_) = generate(&KeywordMap::with_settings(&s),"TOK_NOP".lines(),&fixed_time()).expect("generate failed");
	assert!(text.contains("// This file is generated from toks.h."));
	assert!(text.contains("#include \"toks.h\""));
	assert!(text.contains("#include \"kw.h\""));
}

#[test]
fn empty_table() {
	let (text,count) = generate(&KeywordMap::new(),"".lines(),&fixed_time()).expect("generate failed");
	assert_eq!(count,0);
	assert!(text.contains("keyword_map_t keyword_map[] = {\n};"));
}
