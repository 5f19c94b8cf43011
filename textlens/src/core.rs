// src/core.rs
pub mod analyzer;
pub mod frequency;
pub mod sentences;
pub mod tokenize;

pub use analyzer::{analyze, analyze_with};
