// CallScope - core/mod.rs
//
// Core business logic layer: the pure parse -> filter -> summarise ->
// render/export pipeline. Must NOT open files or talk to the terminal
// directly; the shell layer owns all real I/O endpoints.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod render;
pub mod summary;
