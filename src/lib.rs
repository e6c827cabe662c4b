//! Text Embedding Service Library
//!
//! Loads one pretrained sentence-embedding model at startup and serves
//! text-to-vector conversion over HTTP.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod embeddings;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
