use clap::{crate_version, Arg, Command, ValueHint};

const LONG_HELP: &str = "The token header is scanned for lines that begin with `TOK_`.
A trailing comma is dropped, and tokens in the exclusion list are skipped.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error";

const CONFIG_LONG_HELP: &str = "JSON object with any of the keys
`exclude` (list, replaces the default exclusions),
`excludeExtra` (list, added to the exclusions),
`tokensHeader`, `mapHeader`, `guard` (strings),
`range` (object with `start` and `end` from 0 to 255)";

fn infile_arg() -> Arg {
    Arg::new("infile").short('i').long("infile").value_name("PATH")
        .help("specify the full name of the input file")
        .value_hint(ValueHint::FilePath)
        .required(true)
}

fn outfile_arg() -> Arg {
    Arg::new("outfile").short('o').long("outfile").value_name("PATH")
        .help("specify the full name of the output file")
        .value_hint(ValueHint::FilePath)
        .required(true)
}

fn config_arg() -> Arg {
    Arg::new("config").long("config").value_name("JSON")
        .help("settings as a JSON string")
        .long_help(CONFIG_LONG_HELP)
        .required(false)
}

fn generator_cli(name: &'static str,about: &'static str,examples: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .after_long_help(format!("{}\n\nExamples:\n---------\n{}",LONG_HELP,examples))
        .version(crate_version!())
        .arg(infile_arg())
        .arg(outfile_arg())
        .arg(config_arg())
}

pub fn build_keyword_cli() -> Command {
    generator_cli("gen-keyword-map",
        "Process the tokens file into the keyword_map table",
"default table:     `gen-keyword-map -i tokens.h -o keyword_map.c`
custom header:     `gen-keyword-map -i tokens.h -o kw.c --config '{\"mapHeader\":\"kw.h\"}'`")
}

pub fn build_opcode_cli() -> Command {
    generator_cli("gen-opcode-map",
        "Process the tokens file into the opcode_t enumeration",
"default enum:      `gen-opcode-map -i tokens.h -o opcodes.h`
narrower range:    `gen-opcode-map -i tokens.h -o opcodes.h --config '{\"range\":{\"start\":128,\"end\":255}}'`")
}
