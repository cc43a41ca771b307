#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultAnnotatorClient is meant to be used through the AnnotatorPort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultAnnotatorClient;

// Configuration
pub use config::{AnnotatorClientConfig, DEFAULT_ENDPOINT, ResponseFormat};

// Errors
pub use error::{ClientError, ClientResult};
