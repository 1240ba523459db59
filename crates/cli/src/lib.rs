// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
