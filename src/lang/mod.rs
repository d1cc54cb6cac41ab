//! # Language Module
//!
//! Dialect selection and the shared error type.  The codec itself is in the
//! `basic` submodule; it is a byte-level state machine, there is no grammar
//! or syntax tree involved.

pub mod basic;

use std::str::FromStr;
use thiserror::Error;
use log::warn;

/// One of the modeled BASIC variants.  The dialect decides which token tables
/// are active and how the ambiguous byte range 204-254 is interpreted.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Dialect {
    Unspecified,
    Basic2,
    Basic35,
    Basic4,
    Graphics52,
    TFC3,
    Basic7,
    Basic71,
    VicSuper
}

#[derive(Error,Debug)]
pub enum Error {
    #[error("unknown dialect")]
    UnknownDialect,
    #[error("tokenization error")]
    Tokenization,
    #[error("detokenization error")]
    Detokenization
}

impl FromStr for Dialect {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "basic2" => Ok(Self::Basic2),
            "basic35" => Ok(Self::Basic35),
            "basic4" => Ok(Self::Basic4),
            "graphics52" => Ok(Self::Graphics52),
            "tfc3" => Ok(Self::TFC3),
            "basic7" => Ok(Self::Basic7),
            "basic71" => Ok(Self::Basic71),
            "vicsuper" => Ok(Self::VicSuper),
            _ => Err(Error::UnknownDialect)
        }
    }
}

impl Dialect {
    /// true for the C128 dialects, which use the CE/FE two-byte token prefixes
    pub fn is_c128(&self) -> bool {
        matches!(self,Self::Basic7 | Self::Basic71)
    }
}

/// Select a probable BASIC dialect from a program's load address.
/// Where two dialects share an address the super-set wins:
/// 0x0401 is VIC-20 BASIC 2.0 or Graphics52, 0x0801 is C64 BASIC 2.0 or TFC3,
/// 0x1C01 is BASIC 7.0 or 7.1, 0x132D is BASIC 7.1 with a bound extension file.
/// Any other address falls back to BASIC 7.1 with a warning.
pub fn select_dialect(addr: u16) -> Dialect {
    match addr {
        0x0401 => Dialect::Graphics52,
        0x0801 => Dialect::TFC3,
        0x132D | 0x1C01 => Dialect::Basic71,
        0x4001 => Dialect::Basic7,
        _ => {
            warn!("unrecognized start address of BASIC: {:04x}",addr);
            Dialect::Basic71
        }
    }
}

/// The load addresses `select_dialect` recognizes without a warning.
pub fn known_address(addr: u16) -> bool {
    matches!(addr,0x0401 | 0x0801 | 0x132D | 0x1C01 | 0x4001)
}
