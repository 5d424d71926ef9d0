use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FarmCalcError {
    #[error("plant '{plant}' defines factor '{factor}' but has no level '{level}'")]
    UnknownFactorLevel {
        plant: String,
        factor: String,
        level: String,
    },

    #[error("plant '{plant}' is missing required field '{field}'")]
    MissingField { plant: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, FarmCalcError>;
