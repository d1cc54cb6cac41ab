//! # T64 tape archive
//!
//! The T64 container is a 64-byte header, a fixed-size directory of 32-byte
//! records, and raw file data.  All words are little-endian.  Only normal
//! program records matter here; other allocation flags are passed over.

use thiserror::Error;
use log::info;

pub const HEADER_SIZE: usize = 64;
pub const RECORD_SIZE: usize = 32;
/// Directory size used when creating a new archive.
pub const STD_DIRSIZE: u16 = 30;

const ALLOC_NORM: u8 = 1;
const FILETYPE_PRG: u8 = 1;

#[derive(Error,Debug)]
pub enum Error {
    #[error("file is not a T64 archive")]
    NotT64,
    #[error("error in T64 archive header")]
    BadHeader,
    #[error("T64 archive directory is full")]
    DirectoryFull
}

/// One directory record, already unpacked from its 32 bytes.
pub struct Record {
    pub start_addr: u16,
    pub end_addr: u16,
    pub offset: u32,
    /// PETSCII file name, space padded
    pub raw_name: [u8;16]
}

impl Record {
    /// Host-friendly file name: high bits stripped, lowercase raised,
    /// spaces turned to underscores, `.prg` appended.
    pub fn name(&self) -> String {
        let mut trimmed: Vec<u8> = self.raw_name.to_vec();
        while let Some(last) = trimmed.last() {
            if *last == 32 || *last == 160 || *last == 0 {
                trimmed.pop();
            } else {
                break;
            }
        }
        let mut ans = String::new();
        for byte in trimmed {
            let mut ch = byte & 0x7F;
            if ch & 0x60 == 0x60 {
                ch &= !0x20;
            }
            if ch == 32 {
                ch = b'_';
            }
            ans.push(ch as char);
        }
        ans + ".prg"
    }
}

/// In-memory T64 archive, kept as the raw byte buffer plus interpreted
/// directory fields.
pub struct Archive {
    buf: Vec<u8>,
    max_files: u16,
    used_files: u16
}

impl Archive {
    /// Create an empty archive with the standard directory size.
    pub fn create() -> Self {
        let mut buf = vec![0;HEADER_SIZE + RECORD_SIZE * STD_DIRSIZE as usize];
        let description = b"C64 tape archive bastok\x1a";
        buf[0..description.len()].copy_from_slice(description);
        buf[32..34].copy_from_slice(&0x0100u16.to_le_bytes());
        buf[34..36].copy_from_slice(&STD_DIRSIZE.to_le_bytes());
        // numfiles starts at 0, title is space padded
        buf[40..64].copy_from_slice(b"CREATED BY BASTOK       ");
        Self { buf, max_files: STD_DIRSIZE, used_files: 0 }
    }

    /// Interpret an existing archive, validating the header.
    pub fn from_bytes(buf: Vec<u8>) -> Result<Self,Error> {
        if buf.len() < HEADER_SIZE {
            return Err(Error::NotT64);
        }
        let description = String::from_utf8_lossy(&buf[0..32]).to_string();
        if !description.contains("C64") || !description.contains("tape") {
            return Err(Error::NotT64);
        }
        let max_files = u16::from_le_bytes([buf[34],buf[35]]);
        let used_files = u16::from_le_bytes([buf[36],buf[37]]);
        if max_files == 0 || used_files > max_files {
            return Err(Error::BadHeader);
        }
        if buf.len() < HEADER_SIZE + RECORD_SIZE * max_files as usize {
            return Err(Error::BadHeader);
        }
        Ok(Self { buf, max_files, used_files })
    }

    pub fn to_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Allocated program records, in directory order.
    pub fn records(&self) -> Vec<Record> {
        let mut ans = Vec::new();
        for i in 0..self.used_files as usize {
            let rec = &self.buf[HEADER_SIZE + RECORD_SIZE*i..HEADER_SIZE + RECORD_SIZE*(i+1)];
            if rec[0] != ALLOC_NORM {
                continue;
            }
            let mut raw_name = [0u8;16];
            raw_name.copy_from_slice(&rec[16..32]);
            ans.push(Record {
                start_addr: u16::from_le_bytes([rec[2],rec[3]]),
                end_addr: u16::from_le_bytes([rec[4],rec[5]]),
                offset: u32::from_le_bytes([rec[8],rec[9],rec[10],rec[11]]),
                raw_name
            });
        }
        ans
    }

    /// File data from the record's offset to the end of the archive.
    /// Program walkers stop at the null pointer, so no length is imposed.
    pub fn file_data(&self,record: &Record) -> &[u8] {
        let offset = usize::min(record.offset as usize,self.buf.len());
        &self.buf[offset..]
    }

    /// Append a program to the archive, filling in the first unused record.
    /// `data` is the pointer chain without the load address.
    pub fn append(&mut self,name: &str,start_addr: u16,end_addr: u16,data: &[u8]) -> Result<(),Error> {
        if self.used_files >= self.max_files {
            return Err(Error::DirectoryFull);
        }
        let offset = self.buf.len() as u32;
        self.buf.extend_from_slice(data);
        let mut rec = [0u8;RECORD_SIZE];
        rec[0] = ALLOC_NORM;
        rec[1] = FILETYPE_PRG;
        rec[2..4].copy_from_slice(&start_addr.to_le_bytes());
        rec[4..6].copy_from_slice(&end_addr.to_le_bytes());
        rec[8..12].copy_from_slice(&offset.to_le_bytes());
        rec[16..32].copy_from_slice(&petscii_name(name));
        let pos = HEADER_SIZE + RECORD_SIZE * self.used_files as usize;
        self.buf[pos..pos+RECORD_SIZE].copy_from_slice(&rec);
        self.used_files += 1;
        self.buf[36..38].copy_from_slice(&self.used_files.to_le_bytes());
        info!("appended {} to archive at offset {}",name,offset);
        Ok(())
    }
}

/// Build the 16-byte directory name: `.prg` dropped, underscores turned to
/// spaces, lowercase raised, space padded.
fn petscii_name(name: &str) -> [u8;16] {
    let stem = match name.strip_suffix(".prg") {
        Some(stripped) => stripped,
        None => name
    };
    let mut ans = [32u8;16];
    for (i,byte) in stem.bytes().take(16).enumerate() {
        let mut ch = byte;
        if ch == b'_' {
            ch = 32;
        } else if ch & 0x60 == 0x60 {
            ch &= !0x20;
        }
        ans[i] = ch;
    }
    ans
}
