//! Binary to text conversion, plain program files or T64 archives.

use std::io::Write;
use std::path::Path;
use clap::ArgMatches;
use log::{info,warn,error};
use crate::lang::{known_address,basic::program};
use crate::tape;
use crate::STDRESULT;

/// Run the `detokenize` subcommand: convert each input file to text, writing
/// to the destination file (append) or stdout.  Per-program hard errors are
/// reported but do not stop the run.
pub fn run(cmd: &ArgMatches) -> STDRESULT {
    let strict = cmd.get_flag("strict");
    let all = cmd.get_flag("all");
    let t64 = cmd.get_flag("t64");
    let mut text = String::new();
    for path in cmd.get_many::<String>("FILE").expect("file arguments") {
        info!("processing: {}",path);
        let buf = std::fs::read(path)?;
        if t64 {
            text += &from_archive(&buf,all,strict)?;
        } else {
            text += &from_program_file(&buf,path,all,strict);
        }
    }
    match cmd.get_one::<String>("dest") {
        Some(dest) => {
            let mut file = std::fs::OpenOptions::new().create(true).append(true).open(dest)?;
            file.write_all(text.as_bytes())?;
        },
        None => {
            std::io::stdout().write_all(text.as_bytes())?;
        }
    };
    Ok(())
}

/// Convert one plain program file, the load address in the first two bytes.
/// The section name is the file name with the directory part dropped.
fn from_program_file(buf: &[u8],path: &str,all: bool,strict: bool) -> String {
    if buf.len() < 2 {
        error!("file too short to hold a program: {}",path);
        return String::new();
    }
    let load_addr = u16::from_le_bytes([buf[0],buf[1]]);
    let name = match Path::new(path).file_name() {
        Some(base) => base.to_string_lossy().to_string(),
        None => path.to_string()
    };
    if !all && !known_address(load_addr) {
        error!("invalid BASIC start address: {:04x} ({})",load_addr,load_addr);
        return String::new();
    }
    let (text,errors) = program::to_text(&buf[2..],load_addr,&name,strict);
    if errors > 0 {
        warn!("{} errors while detokenizing {}",errors,name);
    }
    text
}

/// Convert every program record in a T64 archive.
fn from_archive(buf: &[u8],all: bool,strict: bool) -> Result<String,crate::DYNERR> {
    let archive = tape::Archive::from_bytes(buf.to_vec())?;
    let mut ans = String::new();
    for record in archive.records() {
        let name = record.name();
        if !all && !known_address(record.start_addr) {
            error!("invalid BASIC start address: {:04x} ({})",record.start_addr,record.start_addr);
            continue;
        }
        info!("converting: {}",name);
        let (text,errors) = program::to_text(archive.file_data(&record),record.start_addr,&name,strict);
        if errors > 0 {
            warn!("{} errors while detokenizing {}",errors,name);
        }
        ans += &text;
    }
    Ok(ans)
}
