//! # Generator Pipeline
//!
//! Both generators run the same steps: read the token header, filter it, map the
//! survivors, render, and write.  What differs is supplied by a `MapPolicy`.
//!
//! The output is fully rendered in memory, then written to a temporary file in the
//! destination directory and renamed over the destination.  A failed run never
//! leaves a truncated output file behind.

use std::io::Write;
use std::path::Path;
use log::{debug,error,info};
use crate::extract::{self,ExclusionSet};
use crate::Error;

/// The parts of a generator that vary between keyword tables and opcode enumerations.
pub trait MapPolicy {
    type Entry;
    /// Short name used in log messages
    fn name(&self) -> &str;
    /// Token identifiers this generator never emits
    fn exclusions(&self) -> &ExclusionSet;
    /// Map the surviving tokens, in header order, to entries in rendering order
    fn map(&self,tokens: Vec<String>) -> Result<Vec<Self::Entry>,Error>;
    /// Render the complete text of the generated file
    fn render(&self,entries: &[Self::Entry],time: &chrono::DateTime<chrono::Local>) -> String;
}

/// Run a policy over a sequence of header lines, returning the rendered text and the entry count.
/// This is the whole pipeline minus the file system.
pub fn generate<'a,P,I>(policy: &P,lines: I,time: &chrono::DateTime<chrono::Local>) -> Result<(String,usize),Error>
where P: MapPolicy, I: IntoIterator<Item = &'a str> {
    let tokens = extract::extract_tokens(lines,policy.exclusions());
    let entries = policy.map(tokens)?;
    Ok((policy.render(&entries,time),entries.len()))
}

/// Permissions for the output: those of the file being replaced, otherwise the
/// usual default for a new file (masked by the umask).
fn output_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        return Some(std::fs::Permissions::from_mode(0o666));
    }
    #[cfg(not(unix))]
    return None;
}

/// Write `text` to `path` atomically.
/// An existing file keeps its permissions.
pub fn write_atomic(path: &Path,text: &str) -> Result<(),Error> {
    let fail = |e: std::io::Error| {
        error!("could not write {}",path.display());
        Error::OutputWriteFailure { path: path.to_path_buf(), source: e }
    };
    let dir = match path.parent() {
        Some(p) if p.as_os_str().len() > 0 => p,
        _ => Path::new(".")
    };
    let existed = path.exists();
    let perms = output_permissions(path);
    let mut builder = tempfile::Builder::new();
    if let Some(p) = &perms {
        builder.permissions(p.clone());
    }
    let mut tmp = builder.tempfile_in(dir).map_err(fail)?;
    tmp.write_all(text.as_bytes()).map_err(fail)?;
    tmp.flush().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    // undo the umask applied to the temporary file
    if let (true,Some(p)) = (existed,perms) {
        std::fs::set_permissions(path,p).map_err(fail)?;
    }
    debug!("wrote {} bytes to {}",text.len(),path.display());
    Ok(())
}

/// Run the generator from `infile` to `outfile`, returning the number of entries written.
pub fn run<P: MapPolicy>(policy: &P,infile: &Path,outfile: &Path) -> Result<usize,Error> {
    info!("{}: reading {}",policy.name(),infile.display());
    let header = extract::read_header(infile)?;
    let (text,count) = generate(policy,header.lines(),&chrono::Local::now()).map_err(|e| Error::Stage {
        stage: policy.name().to_string(),
        path: infile.to_path_buf(),
        source: Box::new(e)
    })?;
    write_atomic(outfile,&text)?;
    info!("{}: wrote {} entries to {}",policy.name(),count,outfile.display());
    Ok(count)
}
