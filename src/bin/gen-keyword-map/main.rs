//! Generates the keyword_map table from the token header.
//! Cargo will compile this to a standalone executable.
//!
//! The tokmap library crate does the work, see `tokmap::keyword`.

use colored::Colorize;
use tokmap::cli;
use tokmap::commands::{self,Generator};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);
    let matches = cli::build_keyword_cli().get_matches();
    if let Err(e) = commands::generate(Generator::KeywordMap,&matches) {
        eprintln!("\u{2717} {}",e.to_string().red());
        std::process::exit(1);
    }
}
