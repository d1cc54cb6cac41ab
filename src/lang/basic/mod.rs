//! # Commodore BASIC (de)tokenization
//!
//! `tokenizer` converts single lines, `program` converts whole programs with
//! their pointer-chain framing and text section markers, `tokens` holds the
//! per-dialect vocabulary and the PETSCII name table.

mod tokens;
#[cfg(test)]
mod tokenize_test;
pub mod tokenizer;
pub mod program;
