//! Module containing the Commodore BASIC line codec.
//!
//! Both directions operate on one logical line at a time.  The binary side is
//! the line payload only: two line number bytes, the token/character stream,
//! and the null terminator.  The next-line pointer is framing and belongs to
//! the `program` module.

use log::{warn,error};
use crate::lang::Dialect;
use super::tokens;

const QUOTE: u8 = 34;
const ASTERISK: u8 = 42;

/// Longest character name accepted inside a `{...}` escape.
const MAX_ESCAPE_NAME: usize = 15;

/// Scan state carried through one line.  Quote mode is toggled by a literal
/// quote in either direction; the no-tokenize flag latches once a REM or DATA
/// token has been emitted.
struct ScanState {
    quote_mode: bool,
    no_tokenize: bool
}

/// A keyword recognized at the head of the remaining text.
struct KeywordMatch {
    /// token encoding, one byte or prefix+byte
    code: Vec<u8>,
    /// length of the matched keyword text
    text_len: usize,
    /// match suppresses tokenization for the rest of the line
    no_tokenize: bool
}

fn starts_with_keyword(text: &[u8],keyword: &str) -> bool {
    keyword.len() > 0 && text.len() >= keyword.len()
        && text[..keyword.len()].eq_ignore_ascii_case(keyword.as_bytes())
}

/// Handles (de)tokenization of Commodore BASIC lines for one dialect.
/// Hard errors never abort a line; they are counted so the framing layer can
/// report an aggregate at the end of a program.
pub struct Tokenizer {
    dialect: Dialect,
    strict: bool,
    errors: usize
}

impl Tokenizer {
    /// Create a new `Tokenizer` structure
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect, strict: false, errors: 0 }
    }
    /// Strict mode forces tok64-incompatible codes to numeric escapes when
    /// detokenizing.  It has no effect on tokenizing.
    pub fn set_strict(&mut self,strict: bool) {
        self.strict = strict;
    }
    /// Hard errors accumulated since creation or the last `reset`.
    pub fn err_count(&self) -> usize {
        self.errors
    }
    pub fn reset(&mut self) {
        self.errors = 0;
    }

    /// The single-byte extension table active for this dialect, if any.
    /// The C128 dialects and BASIC 3.5 share one vocabulary; the third-party
    /// extensions are mutually exclusive by dialect.
    fn extension_table(&self) -> Option<&'static [&'static str]> {
        match self.dialect {
            Dialect::Basic35 | Dialect::Basic7 | Dialect::Basic71 => Some(&tokens::C128_TOKENS),
            Dialect::Graphics52 => Some(&tokens::GRAPHICS52_TOKENS),
            Dialect::TFC3 => Some(&tokens::TFC3_TOKENS),
            Dialect::Basic4 => Some(&tokens::BASIC4_TOKENS),
            Dialect::VicSuper => Some(&tokens::SUPER_TOKENS),
            Dialect::Unspecified | Dialect::Basic2 => None
        }
    }

    fn fe_ceiling(&self) -> u8 {
        match self.dialect {
            Dialect::Basic7 => tokens::FE_CEILING_BASIC7,
            Dialect::Basic71 => tokens::FE_CEILING_BASIC71,
            _ => 0
        }
    }

    /// Rendering of one PETSCII code as text: either its (possibly
    /// single-character) name, or a three-digit numeric escape when strict
    /// mode bars the name.
    fn rendering(&self,code: u8) -> String {
        if self.strict && tokens::tok64_incompatible(code) {
            return format!("{:03}",code);
        }
        tokens::PETSCII[code as usize].to_string()
    }

    /// Resolve a token code at `pos`, trying each table in priority order:
    /// base, CE-prefixed, FE-prefixed, then the dialect's extension table.
    /// Returns the keyword and the number of bytes consumed, or None when no
    /// table claims the code.
    fn resolve_token(&self,bytes: &[u8],pos: usize) -> Option<(&'static str,usize)> {
        let code = bytes[pos];
        let next = match pos + 1 < bytes.len() {
            true => bytes[pos+1],
            false => 0
        };
        if code <= 203 {
            return Some((tokens::BASE_TOKENS[(code - 128) as usize],1));
        }
        if code == 0xCE && self.dialect.is_c128() && next >= 2 && (next as usize) < tokens::CE_TOKENS.len() {
            let keyword = tokens::CE_TOKENS[next as usize];
            if keyword.len() > 0 {
                return Some((keyword,2));
            }
        }
        if code == 0xFE && next >= 2 && next <= self.fe_ceiling() {
            let keyword = tokens::FE_TOKENS[next as usize];
            if keyword.len() > 0 {
                return Some((keyword,2));
            }
        }
        if let Some(table) = self.extension_table() {
            let idx = (code - 204) as usize;
            if idx < table.len() && table[idx].len() > 0 {
                return Some((table[idx],1));
            }
        }
        None
    }

    /// Detokenize one line payload into a text line (without newline).
    /// Valid binary input cannot fail; anything unrecognized degrades to a
    /// numeric escape and the line keeps going.
    pub fn detokenize_line(&mut self,line: &[u8]) -> String {
        let mut ans = String::new();
        if line.len() < 2 {
            error!("line payload shorter than a line number");
            self.errors += 1;
            return ans;
        }
        let linenum = u16::from_le_bytes([line[0],line[1]]);
        ans += &(u16::to_string(&linenum) + " ");
        let bytes = &line[2..];
        // reads past the terminator see more terminator
        let at = |i: usize| -> u8 {
            match i < bytes.len() {
                true => bytes[i],
                false => 0
            }
        };
        let mut state = ScanState { quote_mode: false, no_tokenize: false };
        let mut i = 0;
        while i < bytes.len() && bytes[i] != 0 {
            let code = bytes[i];
            let rendering = self.rendering(code);
            if state.quote_mode {
                if code == QUOTE {
                    ans.push('"');
                    state.quote_mode = false;
                    i += 1;
                    continue;
                }
                if code == ASTERISK {
                    // never collapsed, {**n} would not parse
                    ans.push('*');
                    i += 1;
                    continue;
                }
                let named = rendering.len() > 1;
                // Collapse a run when the next byte matches, the character is
                // named or space or the run is at least 3 long, and strict
                // mode does not insist on literal redundancy.
                if at(i+1) == code
                    && (named || code == 32 || at(i+2) == code)
                    && (!self.strict || code == 32 || rendering.len() > 1) {
                    let mut run = 2;
                    while at(i+run) == code {
                        run += 1;
                    }
                    if code == 32 {
                        ans += &format!("{{space*{}}}",run);
                    } else {
                        ans += &format!("{{{}*{}}}",rendering,run);
                    }
                    i += run;
                    continue;
                }
                if named {
                    ans += &format!("{{{}}}",rendering);
                } else {
                    ans += &rendering;
                }
                i += 1;
                continue;
            }
            // command mode
            if code >= 128 && code <= 254 {
                match self.resolve_token(bytes,i) {
                    Some((keyword,consumed)) => {
                        ans += keyword;
                        i += consumed;
                    },
                    None => {
                        // not an error, the escape survives a round trip
                        warn!("token {} unknown to the dialect at line {}",code,linenum);
                        ans += &format!("{{{}}}",code);
                        i += 1;
                    }
                }
                continue;
            }
            if (code >= 32 && code <= 64) || code == 91 || code == 93 {
                ans.push(code as char);
                if code == QUOTE {
                    state.quote_mode = true;
                }
            } else if code >= 65 && code <= 90 {
                // unshifted text reads better in lowercase, keywords own the uppercase
                ans.push((code + 32) as char);
            } else {
                ans += &format!("{{{}}}",rendering);
            }
            i += 1;
        }
        ans
    }

    /// Tokenize one text line into a binary payload, line number bytes through
    /// the null terminator.  Hard errors are counted and the offending input
    /// is skipped, the rest of the line is still converted.
    pub fn tokenize_line(&mut self,line: &str) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        let src = line.as_bytes();
        let mut i = 0;
        while i < src.len() && (src[i] == b' ' || src[i] == b'\t') {
            i += 1;
        }
        let mut linenum: u32 = 0;
        while i < src.len() && src[i].is_ascii_digit() {
            linenum = linenum.saturating_mul(10).saturating_add((src[i] - b'0') as u32);
            i += 1;
        }
        if linenum >= 64000 {
            // still encoded, truncated to 16 bits
            warn!("illegal line number: {}",linenum);
        }
        out.extend_from_slice(&((linenum & 0xFFFF) as u16).to_le_bytes());
        if i < src.len() && src[i] == b' ' {
            i += 1;
        }
        let mut state = ScanState { quote_mode: false, no_tokenize: false };
        while i < src.len() {
            let ch = src[i];
            if ch == b'{' {
                i = self.tokenize_escape(src,i,linenum,&mut out);
                continue;
            }
            if !state.quote_mode {
                // no keyword starts with a numeral or space
                if !state.no_tokenize && ch != b' ' && !ch.is_ascii_digit() {
                    if let Some(found) = self.match_keyword(&src[i..]) {
                        out.extend_from_slice(&found.code);
                        i += found.text_len;
                        if found.no_tokenize {
                            state.no_tokenize = true;
                        }
                        continue;
                    }
                }
                if (ch >= 32 && ch <= 91) || ch == 93 {
                    out.push(ch);
                    if ch == QUOTE {
                        state.quote_mode = !state.quote_mode;
                    }
                } else if ch >= 96 && ch <= 122 {
                    // lowercase ASCII to unshifted PETSCII
                    out.push(ch - 32);
                } else {
                    error!("illegal character in input (nonquoted): {} at line {}",ch,linenum);
                    self.errors += 1;
                }
                i += 1;
            } else {
                if (ch >= 32 && ch <= 64) || ch == 91 || ch == 93 || ch == 94 {
                    out.push(ch);
                    if ch == QUOTE {
                        state.quote_mode = !state.quote_mode;
                    }
                } else if ch >= 65 && ch <= 90 {
                    // uppercase ASCII to shifted PETSCII
                    out.push(ch | 128);
                } else if ch >= 97 && ch <= 122 {
                    out.push(ch & !32);
                } else {
                    error!("illegal character in input (quoted): {} at line {}",ch,linenum);
                    self.errors += 1;
                }
                i += 1;
            }
        }
        out.push(0);
        out
    }

    /// Consume a `{name}`, `{name*n}`, or `{NNN}` escape starting at the brace.
    /// Returns the index to resume scanning from; resolved codes are appended
    /// to `out`, malformed escapes are counted and emit nothing.
    fn tokenize_escape(&mut self,src: &[u8],start: usize,linenum: u32,out: &mut Vec<u8>) -> usize {
        let mut i = start + 1;
        let mut name = String::new();
        while i < src.len() && src[i] != b'*' && src[i] != b'}' && name.len() < MAX_ESCAPE_NAME {
            name.push(src[i] as char);
            i += 1;
        }
        if i >= src.len() || (src[i] != b'*' && src[i] != b'}') {
            error!("special character sequence incorrect: '{{{}' at line {}",name,linenum);
            self.errors += 1;
            return i;
        }
        let code = match resolve_escape(&name) {
            Some(code) => code,
            None => {
                error!("illegal special character: {{{}}} at line {}",name,linenum);
                self.errors += 1;
                // skip the rest of the escape
                while i < src.len() && src[i] != b'}' {
                    i += 1;
                }
                return usize::min(i + 1,src.len());
            }
        };
        let mut count: usize = 1;
        if src[i] == b'*' {
            i += 1;
            let mut parsed: usize = 0;
            while i < src.len() && src[i].is_ascii_digit() {
                parsed = usize::min(parsed * 10 + (src[i] - b'0') as usize,1000);
                i += 1;
            }
            if i >= src.len() || src[i] != b'}' || parsed == 0 || parsed > 255 {
                error!("illegal character count at line {}",linenum);
                self.errors += 1;
                if i < src.len() && src[i] == b'}' {
                    i += 1;
                }
                return i;
            }
            count = parsed;
        }
        i += 1; // closing brace
        for _rep in 0..count {
            out.push(code);
        }
        i
    }

    /// Try the token tables against the head of `text` in priority order:
    /// base table, then (C128 dialects only) FE- and CE-prefixed tables, then
    /// the dialect's single-byte extension table.  First match wins.
    fn match_keyword(&self,text: &[u8]) -> Option<KeywordMatch> {
        for (idx,&keyword) in tokens::BASE_TOKENS.iter().enumerate() {
            if starts_with_keyword(text,keyword) {
                return Some(KeywordMatch {
                    code: vec![128 + idx as u8],
                    text_len: keyword.len(),
                    no_tokenize: idx == tokens::REM_INDEX || idx == tokens::DATA_INDEX
                });
            }
        }
        if self.dialect.is_c128() {
            for idx in 2..=self.fe_ceiling() as usize {
                let keyword = tokens::FE_TOKENS[idx];
                if starts_with_keyword(text,keyword) {
                    return Some(KeywordMatch {
                        code: vec![0xFE,idx as u8],
                        text_len: keyword.len(),
                        no_tokenize: false
                    });
                }
            }
            for idx in 2..tokens::CE_TOKENS.len() {
                let keyword = tokens::CE_TOKENS[idx];
                if starts_with_keyword(text,keyword) {
                    return Some(KeywordMatch {
                        code: vec![0xCE,idx as u8],
                        text_len: keyword.len(),
                        no_tokenize: false
                    });
                }
            }
        }
        if let Some(table) = self.extension_table() {
            for (idx,&keyword) in table.iter().enumerate() {
                if starts_with_keyword(text,keyword) {
                    return Some(KeywordMatch {
                        code: vec![204 + idx as u8],
                        text_len: keyword.len(),
                        no_tokenize: false
                    });
                }
            }
        }
        None
    }
}

/// Resolve an escape name to a PETSCII code.  Exactly three digits are a
/// direct numeric code.  Names whose code lands in a letter band are matched
/// case-sensitively (otherwise `e` would match `E`), the rest ignore case,
/// and `space` is accepted as a synonym for code 32.
fn resolve_escape(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    if bytes.len() == 3 && bytes.iter().all(|b| b.is_ascii_digit()) {
        let parsed: u16 = name.parse().ok()?;
        if parsed >= 1 && parsed <= 255 {
            return Some(parsed as u8);
        }
        return None;
    }
    for code in 1..=255u16 {
        let entry = tokens::PETSCII[code as usize];
        let letter_band = (code & 0x7f) >= 0x41 && (code & 0x7f) <= 0x5A;
        let hit = match letter_band {
            true => entry == name,
            false => entry.eq_ignore_ascii_case(name)
        };
        if hit {
            return Some(code as u8);
        }
    }
    if name.eq_ignore_ascii_case("space") {
        return Some(32);
    }
    None
}
