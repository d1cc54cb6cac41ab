//! Text to binary conversion, writing plain program files or appending to a
//! T64 archive.

use std::io::Write;
use std::str::FromStr;
use clap::ArgMatches;
use log::{info,error};
use crate::lang::{Dialect,basic::program};
use crate::tape;
use crate::STDRESULT;

/// Archive written to when `--t64` is selected, created on first use.
const ARCHIVE_NAME: &str = "bastok.t64";

/// Run the `tokenize` subcommand: scan each input file for marker-delimited
/// sections and write one program per section.
pub fn run(cmd: &ArgMatches) -> STDRESULT {
    let force = match cmd.get_one::<String>("dialect") {
        Some(name) => Dialect::from_str(name)?,
        None => Dialect::Unspecified
    };
    let t64 = cmd.get_flag("t64");
    for path in cmd.get_many::<String>("FILE").expect("file arguments") {
        info!("processing: {}",path);
        let text = std::fs::read_to_string(path)?;
        let mut lines = text.lines();
        while let Some(prog) = program::next_program(&mut lines,force) {
            if prog.errors > 0 {
                error!("{} errors in tokenization of {}",prog.errors,prog.name);
            }
            if t64 {
                append_to_archive(&prog)?;
            } else {
                write_program_file(&prog)?;
            }
        }
    }
    Ok(())
}

/// Plain program file: load address prefix, then the pointer chain.
fn write_program_file(prog: &program::TokenizedProgram) -> STDRESULT {
    let mut file = std::fs::File::create(&prog.name)?;
    file.write_all(&prog.load_addr.to_le_bytes())?;
    file.write_all(&prog.image)?;
    Ok(())
}

/// Append to the working archive, creating it if it does not exist yet.
fn append_to_archive(prog: &program::TokenizedProgram) -> STDRESULT {
    let mut archive = match std::fs::read(ARCHIVE_NAME) {
        Ok(buf) => tape::Archive::from_bytes(buf)?,
        Err(_) => tape::Archive::create()
    };
    archive.append(&prog.name,prog.load_addr,prog.end_addr(),&prog.image)?;
    std::fs::write(ARCHIVE_NAME,archive.to_bytes())?;
    Ok(())
}
