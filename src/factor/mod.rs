// src/factor/mod.rs

pub mod cantor_zassenhaus;
