use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Your request is incorrect: {0}")]
    InvalidRequest(String),
    #[error("The name \"{name}\" has already voted")]
    DuplicateName { name: String },
    #[error("Error from the Steam storefront: {0}")]
    Steam(String),
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("Error while fetching: {0}")]
    Fetch(String),
}

impl Error {
    pub fn to_code(&self) -> u16 {
        match *self {
            Error::InvalidRequest(_) => 400,
            Error::DuplicateName { .. } => 409,
            Error::Steam(_) => 502,
            Error::Decode(_) => 500,
            Error::Fetch(_) => 502,
        }
    }

    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Error::DuplicateName { .. })
    }
}

impl From<Error> for String {
    fn from(val: Error) -> Self {
        val.to_string()
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Steam(e.to_string())
    }
}

#[cfg(feature = "ssr")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_name_is_a_conflict() {
        let err = Error::DuplicateName {
            name: "sam".to_owned(),
        };
        assert!(err.is_duplicate_name());
        assert_eq!(err.to_code(), 409);
    }

    #[test]
    fn validation_errors_are_client_errors() {
        assert_eq!(Error::InvalidRequest("empty".to_owned()).to_code(), 400);
        assert!(!Error::Fetch("timeout".to_owned()).is_duplicate_name());
    }
}
