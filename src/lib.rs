// ABOUTME: Public library API for the notekeep storage client
// ABOUTME: Re-exports core modules for external use

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod note;
pub mod settings;
pub mod transport;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use note::{Note, UpstreamState};
pub use transport::{HttpTransport, Method, ReqwestTransport, Request, Response};
