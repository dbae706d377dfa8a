// frontend_movie_stream/src/api/error.rs
use thiserror::Error;

/// Everything that can go wrong between building a request and decoding its body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{operation} request failed: {reason}")]
    Request { operation: String, reason: String },

    #[error("{operation} failed with status: {status}")]
    Status { operation: String, status: u16 },

    #[error("failed to parse {operation} response: {reason}")]
    Decode { operation: String, reason: String },

    #[error("failed to encode {operation} body: {reason}")]
    Encode { operation: String, reason: String },

    #[error("login response did not contain a token")]
    MissingToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let err = ApiError::Status { operation: "/movies".into(), status: 503 };
        assert_eq!(err.to_string(), "/movies failed with status: 503");

        let err = ApiError::Request { operation: "/movies".into(), reason: "offline".into() };
        assert_eq!(err.to_string(), "/movies request failed: offline");

        assert_eq!(ApiError::MissingToken.to_string(), "login response did not contain a token");
    }
}
