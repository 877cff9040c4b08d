//! # CLI Commands
//!
//! Runs a generator from parsed command line arguments.
//! The executables in `src/bin` are thin wrappers around `generate`.

use std::path::PathBuf;
use log::error;
use crate::pipeline::{self,MapPolicy};
use crate::settings::{self,Settings};
use crate::Error;

const RCH: &str = "unreachable was reached";

/// Which table the command produces
#[derive(PartialEq,Clone,Copy,Debug)]
pub enum Generator {
    KeywordMap,
    OpcodeMap
}

/// Build the settings from the optional `--config` argument
pub fn settings_from_args(cmd: &clap::ArgMatches) -> Result<Settings,Error> {
    match cmd.get_one::<String>("config") {
        Some(json) => settings::parse(json).inspect_err(|e| error!("{}",e)),
        None => Ok(Settings::new())
    }
}

fn paths_from_args(cmd: &clap::ArgMatches) -> (PathBuf,PathBuf) {
    // clap enforces both as required
    let infile = cmd.get_one::<String>("infile").expect(RCH);
    let outfile = cmd.get_one::<String>("outfile").expect(RCH);
    (PathBuf::from(infile),PathBuf::from(outfile))
}

fn run_policy<P: MapPolicy>(policy: &P,cmd: &clap::ArgMatches) -> Result<usize,Error> {
    let (infile,outfile) = paths_from_args(cmd);
    pipeline::run(policy,&infile,&outfile)
}

/// Run the generator and print the summary, returning the number of tokens processed
pub fn generate(which: Generator,cmd: &clap::ArgMatches) -> Result<usize,Error> {
    let settings = settings_from_args(cmd)?;
    let count = match which {
        Generator::KeywordMap => run_policy(&crate::keyword::KeywordMap::with_settings(&settings),cmd)?,
        Generator::OpcodeMap => run_policy(&crate::opcode::OpcodeMap::with_settings(&settings),cmd)?
    };
    println!("Finished: Processed {} tokens",count);
    Ok(count)
}
