pub mod archive;
pub mod cli;
pub mod client;
pub mod downloader;
pub mod error;
pub mod parser;
pub mod runner;
pub mod types;

pub use client::{LokaliseApi, LokaliseClient};
pub use error::SyncError;
pub use runner::{RunOptions, SyncRunner};
