//! # `bastok` main library
//!
//! This library converts between the tokenized binary form of a Commodore BASIC
//! program and an editable text form, for the dialects that shipped on (or were
//! bolted onto) the PET, VIC-20, C64, C16/+4, and C128.
//!
//! ## Architecture
//!
//! The conversion is built around three layers:
//! * `lang::basic::tokenizer` is the line codec.  It maps one line's byte payload
//!   (line number, token/character bytes, terminator) to one text line and back,
//!   given a `lang::Dialect` and the strict-compatibility flag.
//! * `lang::basic::program` is the framing layer.  It walks the next-line pointer
//!   chain of a binary program and the `start`/`stop` section markers of the text
//!   form, handing single lines to the codec.
//! * `tape` reads and writes the T64 archive container, which can bundle several
//!   programs in one file.
//!
//! The codec never performs I/O and never aborts mid-line: it always produces a
//! best-effort output and accumulates a hard-error count that the framing layer
//! reports.  The CLI entry point is in `main.rs`, subcommand bodies are in
//! `commands`.
//!
//! ## Dialects
//!
//! The supported dialects are BASIC 2.0 (the base vocabulary shared by all),
//! BASIC 3.5 (C16/+4), BASIC 7.0 and 7.1 (C128, with the CE/FE two-byte token
//! prefixes), PET/C64 BASIC 4.0, Graphics52, TFC3, and the VIC Super Expander.
//! When nothing is forced, the dialect is inferred from the program's load
//! address, see `lang::select_dialect`.

pub mod lang;
pub mod tape;
pub mod commands;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;
