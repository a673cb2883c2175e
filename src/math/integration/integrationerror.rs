use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IntegrationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}
