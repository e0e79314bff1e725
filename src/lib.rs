// src/lib.rs

pub mod error;
pub mod factor;
pub mod integer_math;
pub mod parser;
pub mod polynomial;
