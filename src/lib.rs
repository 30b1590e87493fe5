// Module declarations for the library crate.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod remap;
pub mod stream;
pub mod telemetry;
pub mod util;

pub use error::{Error, ErrorKind};
pub use remap::{Action, RemapEngine, RemapTable};
