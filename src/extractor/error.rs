use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}
