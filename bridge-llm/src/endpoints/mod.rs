//! # Chat-Completions Endpoints

pub mod completions;
