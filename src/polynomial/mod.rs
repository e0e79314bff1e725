// src/polynomial/mod.rs

pub mod field;
pub mod polynomial;
pub mod random;
pub mod term;
