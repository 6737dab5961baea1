//! Application Errors
//!
//! Every failure ends up as alert text, so `Display` is the user-facing message.

use eip1193::ProviderError;

/// Common result type for wallet and contract operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// No injected wallet in this browser
    WalletMissing,
    /// An operation needed a connected account
    NotConnected,
    /// Connected to a chain other than the configured one
    WrongNetwork(String),
    /// No bytecode at the configured contract address
    ContractMissing(String),
    /// The user dismissed the wallet prompt
    Rejected,
    /// Any other wallet / node error
    Provider { code: i64, message: String },
    /// Transaction mined with status 0
    Reverted(String),
    /// Gave up waiting for a receipt
    Timeout(String),
    /// Node answer could not be decoded
    Decode(String),
    /// Form input rejected before anything was sent
    Validation(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::WalletMissing => {
                write!(f, "Please install MetaMask or another Ethereum wallet provider")
            }
            AppError::NotConnected => write!(f, "Wallet not connected"),
            AppError::WrongNetwork(current) => write!(
                f,
                "Please connect to the Sepolia Test Network. Current network: {}",
                current
            ),
            AppError::ContractMissing(address) => {
                write!(f, "No contract found at address {}", address)
            }
            AppError::Rejected => write!(f, "Request rejected in wallet"),
            AppError::Provider { message, .. } => write!(f, "{}", message),
            AppError::Reverted(hash) => write!(f, "Transaction {} reverted", hash),
            AppError::Timeout(hash) => {
                write!(f, "Timed out waiting for transaction {} to be mined", hash)
            }
            AppError::Decode(msg) => write!(f, "Unexpected response from the network: {}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejected() {
            AppError::Rejected
        } else {
            AppError::Provider { code: err.code, message: err.message }
        }
    }
}

impl AppError {
    /// Wallet error code, if this came from the provider
    pub fn code(&self) -> Option<i64> {
        match self {
            AppError::Provider { code, .. } => Some(*code),
            AppError::Rejected => Some(eip1193::USER_REJECTED),
            _ => None,
        }
    }
}
