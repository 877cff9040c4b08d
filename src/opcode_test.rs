use chrono::TimeZone;
use super::opcode::{opcode_name,default_exclusions,OpcodeMap,OpcodeRange};
use super::pipeline::{generate,MapPolicy};
use super::settings;
use super::Error;

fn fixed_time() -> chrono::DateTime<chrono::Local> {
	chrono::Local.with_ymd_and_hms(2024,3,5,14,7,9).single().expect("bad time")
}

fn tokens(n: usize) -> Vec<String> {
	(0..n).map(|i| format!("TOK_OP{}",i)).collect()
}

#[test]
fn renaming() {
	assert_eq!(opcode_name("TOK_ADD"),"OP_ADD");
	assert_eq!(opcode_name("TOK_TOK_X"),"OP_TOK_X");
}

#[test]
fn add_sub_scenario() {
	let input = "TOK_ADD,\nTOK_ERROR,\nTOK_IDENTIFIER,\nTOK_SUB,";
	let (text,count) = generate(&OpcodeMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	assert_eq!(count,2);
	assert!(text.contains("    OP_ADD = 0xFD,\n    OP_SUB = 0xFE,\n"));
}

#[test]
fn header_order_kept() {
	let input = "TOK_SUB,\nTOK_NOP,\nTOK_ADD,";
	let (text,_) = generate(&OpcodeMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("    OP_")).collect();
	assert_eq!(rows,vec![
		"    OP_SUB = 0xFC,",
		"    OP_NOP = 0xFD,",
		"    OP_ADD = 0xFE,"
	]);
}

#[test]
fn contiguous_values() {
	let entries = OpcodeMap::new().map(tokens(40)).expect("map failed");
	assert_eq!(entries.len(),40);
	assert_eq!(entries[0].value,255-40);
	for pair in entries.windows(2) {
		assert_eq!(pair[0].value + 1,pair[1].value);
	}
}

#[test]
fn largest_table() {
	let entries = OpcodeMap::new().map(tokens(255)).expect("255 opcodes should fit");
	assert_eq!(entries[0].value,0);
	assert_eq!(entries[254].value,254);
}

#[test]
fn overflow() {
	match OpcodeMap::new().map(tokens(256)) {
		Err(Error::RangeOverflow { count, capacity }) => {
			assert_eq!(count,256);
			assert_eq!(capacity,255);
		},
		_ => panic!("expected RangeOverflow")
	}
}

#[test]
fn narrow_range() {
	let range = OpcodeRange { start: 250, end: 255 };
	assert_eq!(range.capacity(),5);
	assert_eq!(range.first_value(5).expect("should fit"),250);
	assert!(range.first_value(6).is_err());
	let s = settings::parse(r#"{"range":{"start":250,"end":255}}"#).expect("settings");
	assert!(matches!(OpcodeMap::with_settings(&s).map(tokens(6)),Err(Error::RangeOverflow { .. })));
}

#[test]
fn instruction_exclusions() {
	let excl = default_exclusions();
	for tok in ["TOK_R0","TOK_R31","TOK_SECTION","TOK_INCLUDE","TOK_UINT64","TOK_GLOBAL","TOK_CONST","TOK_COMMA"] {
		assert!(excl.contains(tok),"{} should be excluded",tok);
	}
	assert!(!excl.contains("TOK_R32"));
	let input = "TOK_R1,\nTOK_MOV,\nTOK_R2,\nTOK_INT8,";
	let (text,count) = generate(&OpcodeMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	assert_eq!(count,1);
	assert!(text.contains("    OP_MOV = 0xFE,\n"));
	assert!(!text.contains("OP_R1"));
}

#[test]
fn full_layout() {
	let input = "    TOK_NOP,\n    TOK_HALT,\n";
	let (text,_) = generate(&OpcodeMap::new(),input.lines(),&fixed_time()).expect("generate failed");
	let expected = "
// This file is generated from tokens.h.
// DO NOT EDIT
// Generated: Tue Mar  5 14:07:09 2024

#ifndef __OPCODES_H__
#define __OPCODES_H__

typedef enum {
    OP_NOP = 0xFD,
    OP_HALT = 0xFE,
} opcode_t;

#endif

";
	assert_eq!(text,expected);
}

#[test]
fn custom_guard() {
	let s = settings::parse(r#"{"guard":"OPS_H"}"#).expect("settings");
	let (text,_) = generate(&OpcodeMap::with_settings(&s),"TOK_NOP".lines(),&fixed_time()).expect("generate failed");
	assert!(text.contains("#ifndef OPS_H\n#define OPS_H\n"));
}
