//! # IO Module
//!
//! Adapters to systems outside the process. Currently only the advice provider.

pub mod gemini;

pub use gemini::GeminiProvider;
