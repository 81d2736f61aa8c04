use meridian_types::ContractViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed consensus params: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}
