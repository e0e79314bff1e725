// src/parser/mod.rs

pub mod ast;
pub mod lexer;
pub mod parser;

pub use parser::parse;
