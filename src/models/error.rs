#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(error: &AppError) -> &'static str {
        match error {
            AppError::ApiError(_) => "API error",
            AppError::DataError(_) => "Data error",
            AppError::StorageError(_) => "Storage error",
            AppError::AuthError(_) => "Authentication error",
        }
    }

    #[test]
    fn test_every_variant_names_its_source() {
        let errors = [
            AppError::ApiError("timeout".to_string()),
            AppError::DataError("bad status".to_string()),
            AppError::StorageError("quota".to_string()),
            AppError::AuthError("Missing user id".to_string()),
        ];
        for error in &errors {
            assert!(error.to_string().starts_with(prefix(error)));
        }
    }
}
