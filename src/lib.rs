// CallScope - lib.rs
//
// Library entry point, exposing the pipeline modules for integration
// testing and potential future programmatic use.
//
// The CLI shell lives in `main.rs` and is not part of the library
// surface.

pub mod core;
pub mod util;
