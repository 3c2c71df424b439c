use thiserror::Error;

/// Failure of a gateway call. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("Error HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the envelope status was not OK
    #[error("{0}")]
    Envelope(String),

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        let e = ApiError::Status {
            status: 404,
            message: "Artículo no encontrado".into(),
        };
        assert_eq!(e.to_string(), "Error HTTP 404: Artículo no encontrado");
        assert_eq!(ApiError::Envelope("Stock insuficiente".into()).to_string(), "Stock insuficiente");
        assert!(ApiError::Network("offline".into()).is_network());
    }
}
