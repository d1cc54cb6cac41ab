//! Whole-program conversion: next-line pointer chains on the binary side,
//! `start`/`stop` section markers on the text side.  One line at a time is
//! handed to the codec in `tokenizer`.

use log::{warn,error,info};
use crate::lang::{Dialect,select_dialect};
use super::tokenizer::Tokenizer;

/// A line record (pointer, line number, payload, terminator) never reaches
/// this length in a valid program.
const MAX_LINE_RECORD: u16 = 256;

/// Result of tokenizing one marker-delimited section of text.
pub struct TokenizedProgram {
    /// file name taken from the start marker
    pub name: String,
    pub load_addr: u16,
    /// pointer chain through the final null pointer, without the load address
    pub image: Vec<u8>,
    pub errors: usize
}

fn strip_prefix_nocase<'a>(line: &'a str,prefix: &str) -> Option<&'a str> {
    // prefixes are ASCII, so a byte match lands on a character boundary
    if line.len() >= prefix.len() && line.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes()) {
        return Some(&line[prefix.len()..]);
    }
    None
}

/// Detokenize a binary program into marker-delimited text.
/// `prg` is the program without its load address prefix.  The dialect comes
/// from the load address; strict mode is dropped with a warning for C128
/// programs, which the tok64 format cannot carry.
/// Returns the text and the codec's hard-error count.
pub fn to_text(prg: &[u8],load_addr: u16,name: &str,strict: bool) -> (String,usize) {
    let dialect = select_dialect(load_addr);
    let mut strict = strict;
    let mut ans = String::new();
    if load_addr != 0x0801 && load_addr != 0x1C01 {
        ans += &format!("\nstart bastext {}",load_addr);
    }
    if dialect.is_c128() {
        if strict {
            strict = false;
            warn!("strict mode ignored for C128 program: {}",name);
        }
        ans += &format!("\nstart tok128 {}\n",name);
    } else {
        ans += &format!("\nstart tok64 {}\n",name);
    }
    let mut pos: usize = 0;
    let mut addr = load_addr;
    if load_addr == 0x132D {
        // BASIC 7.1 with the extension bound in front, skip to the program
        pos = 0x1C01 - 0x132D;
        addr = 0x1C01;
    }
    let mut tokenizer = Tokenizer::new(dialect);
    tokenizer.set_strict(strict);
    let mut intact = false;
    while pos + 2 <= prg.len() {
        let next = u16::from_le_bytes([prg[pos],prg[pos+1]]);
        pos += 2;
        if next == 0 {
            intact = true;
            break;
        }
        // pointers must advance, lines are bounded
        if next <= addr || next - addr >= MAX_LINE_RECORD {
            break;
        }
        let line_len = (next - addr - 2) as usize;
        if pos + line_len > prg.len() {
            break;
        }
        ans += &tokenizer.detokenize_line(&prg[pos..pos+line_len]);
        ans.push('\n');
        pos += line_len;
        addr = next;
    }
    if !intact {
        error!("invalid BASIC file: {}",name);
        ans += &format!("63999 REM \"invalid basic input {}\n",name);
    }
    if dialect.is_c128() {
        ans += "stop tok128\n(bastok)\n";
    } else {
        ans += "stop tok64\n(bastok)\n";
    }
    (ans,tokenizer.err_count())
}

/// Scan `lines` for the next start marker and tokenize through the matching
/// stop marker (or end of input).  A `start bastext` header carries the load
/// address; without one, `tok64` sections assume 0x0801 and `tok128` sections
/// 0x1C01.  Returns None when no further section exists.
pub fn next_program<'a>(lines: &mut impl Iterator<Item = &'a str>,force: Dialect) -> Option<TokenizedProgram> {
    let mut load_addr: u16 = 0x0801;
    let mut dialect = match force {
        Dialect::Unspecified => Dialect::Basic7,
        _ => force
    };
    let mut extra_header = false;
    let mut name = String::new();
    let mut found = false;
    while let Some(raw) = lines.next() {
        let line = raw.trim_end_matches('\r');
        if let Some(rest) = strip_prefix_nocase(line,"start bastext ") {
            match rest.trim().parse::<u32>() {
                Ok(parsed) => load_addr = (parsed & 0xFFFF) as u16,
                Err(_) => warn!("bad address in bastext header: {}",rest)
            };
            if force == Dialect::Unspecified {
                dialect = select_dialect(load_addr);
            }
            if load_addr == 0x132D {
                // the bound extension is not present, rebase the program
                load_addr = 0x1C01;
            }
            extra_header = true;
        } else if let Some(rest) = strip_prefix_nocase(line,"start tok64 ") {
            name = rest.to_string();
            found = true;
            break;
        } else if let Some(rest) = strip_prefix_nocase(line,"start tok128 ") {
            name = rest.to_string();
            found = true;
            if !extra_header {
                load_addr = 0x1C01;
                if force == Dialect::Unspecified {
                    dialect = Dialect::Basic71;
                }
            }
            break;
        }
    }
    if !found {
        return None;
    }
    info!("tokenizing: {}",name);
    let mut tokenizer = Tokenizer::new(dialect);
    let mut image: Vec<u8> = Vec::new();
    let mut addr = load_addr;
    while let Some(raw) = lines.next() {
        let mut text = raw.trim_end_matches('\r').to_string();
        while text.ends_with('\\') {
            text.pop();
            match lines.next() {
                Some(cont) => text += cont.trim_end_matches('\r').trim_start_matches(' '),
                None => break
            };
        }
        if strip_prefix_nocase(&text,"stop tok").is_some() {
            break;
        }
        let line = tokenizer.tokenize_line(&text);
        addr = addr.wrapping_add(line.len() as u16 + 2);
        image.extend_from_slice(&addr.to_le_bytes());
        image.extend_from_slice(&line);
    }
    let errors = tokenizer.err_count();
    if errors > 0 {
        error!("{} errors while tokenizing {}",errors,name);
        let diag = format!("63999 REM\"{} errors in tokenization",errors);
        let line = Tokenizer::new(dialect).tokenize_line(&diag);
        addr = addr.wrapping_add(line.len() as u16 + 2);
        image.extend_from_slice(&addr.to_le_bytes());
        image.extend_from_slice(&line);
    }
    // a null pointer ends the program
    image.push(0);
    image.push(0);
    Some(TokenizedProgram { name, load_addr, image, errors })
}

impl TokenizedProgram {
    /// Last address occupied by the program when loaded.
    pub fn end_addr(&self) -> u16 {
        self.load_addr.wrapping_add(self.image.len() as u16).wrapping_sub(1)
    }
}
