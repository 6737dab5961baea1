//! Deploy Errors

use std::fmt;

#[derive(Debug)]
pub enum DeployError {
    /// Artifact file could not be read
    Io(String),
    /// Artifact has no usable bytecode
    Artifact(String),
    /// Node unreachable or answered with a non-JSON body
    Http(String),
    /// JSON-RPC error object
    Rpc { code: i64, message: String },
    /// Node answered but not in the expected shape
    InvalidResponse(String),
    NoAccount,
    Reverted(String),
    Timeout(String),
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::Io(msg) => write!(f, "Cannot read artifact: {}", msg),
            DeployError::Artifact(msg) => write!(f, "Invalid artifact: {}", msg),
            DeployError::Http(msg) => write!(f, "RPC transport error: {}", msg),
            DeployError::Rpc { code, message } => write!(f, "RPC error {}: {}", code, message),
            DeployError::InvalidResponse(msg) => write!(f, "Unexpected RPC response: {}", msg),
            DeployError::NoAccount => write!(f, "Node has no unlocked accounts; pass --from"),
            DeployError::Reverted(hash) => write!(f, "Deployment transaction {} reverted", hash),
            DeployError::Timeout(hash) => write!(f, "Timed out waiting for receipt of {}", hash),
        }
    }
}

impl std::error::Error for DeployError {}

impl From<std::io::Error> for DeployError {
    fn from(e: std::io::Error) -> Self {
        DeployError::Io(e.to_string())
    }
}

impl From<reqwest::Error> for DeployError {
    fn from(e: reqwest::Error) -> Self {
        DeployError::Http(e.to_string())
    }
}
