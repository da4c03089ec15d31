//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use zoomstitch::service::ServiceError;
use zoomstitch::transport::TransportError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to create the HTTP client
    Transport(TransportError),
    /// Reconstruction pipeline failed
    Reconstruct(ServiceError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Reconstruct(ServiceError::Naming(_)) => {
                eprintln!();
                eprintln!("The URL must point to a collection resource, for example:");
                eprintln!("  https://example.org/resource/B+43122");
            }
            CliError::Reconstruct(ServiceError::Descriptor(_)) => {
                eprintln!();
                eprintln!("Check that the resource exposes a tiles.json descriptor and");
                eprintln!("that the server is reachable from this machine.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Transport(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Reconstruct(e) => write!(f, "Failed to reconstruct photograph: {}", e),
        }
    }
}
