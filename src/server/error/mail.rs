use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient address could not be parsed.
    #[error("Invalid mail address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message itself could not be assembled.
    #[error("Failed to build email: {0}")]
    Build(String),

    /// The relay refused the message or could not be reached.
    #[error("Failed to send email: {0}")]
    Transport(String),
}
