use std::fmt;

/// Error type for storage accessor and platform client operations
#[derive(Debug)]
pub enum StorageError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// JSON parsing error
    Json(String),
    /// No workspace id given at call time or at construction
    MissingWorkspaceId,
    /// No tenant id given at call time or at construction
    MissingTenantId,
}

impl StorageError {
    /// True for errors caused by missing caller configuration.
    ///
    /// These are surfaced to the caller; every other kind is absorbed by the
    /// accessor's fallback path.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            StorageError::MissingWorkspaceId | StorageError::MissingTenantId
        )
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Http(e) => write!(f, "HTTP request failed: {}", e),
            StorageError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            StorageError::TokenNotFound(msg) => write!(f, "{}", msg),
            StorageError::Json(msg) => write!(f, "JSON error: {}", msg),
            StorageError::MissingWorkspaceId => write!(
                f,
                "workspace_id must be provided either as parameter or during initialization"
            ),
            StorageError::MissingTenantId => write!(
                f,
                "tenant_id must be provided either as parameter or during initialization"
            ),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        StorageError::Http(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Json(err.to_string())
    }
}

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = StorageError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Accessors are shared across tasks, so their errors must be too
        assert_send_sync::<StorageError>();
    }

    #[test]
    fn test_missing_workspace_id_display() {
        let err = StorageError::MissingWorkspaceId;
        assert!(err.to_string().contains("workspace_id must be provided"));
    }

    #[test]
    fn test_missing_tenant_id_display() {
        let err = StorageError::MissingTenantId;
        assert!(err.to_string().contains("tenant_id must be provided"));
    }

    #[test]
    fn test_is_configuration() {
        assert!(StorageError::MissingWorkspaceId.is_configuration());
        assert!(StorageError::MissingTenantId.is_configuration());
        assert!(!StorageError::TokenNotFound("x".to_string()).is_configuration());
        assert!(!StorageError::Api {
            status: 500,
            message: "boom".to_string()
        }
        .is_configuration());
    }

    #[test]
    fn test_json_error_display() {
        let err = StorageError::Json("Invalid JSON".to_string());
        assert!(err.to_string().contains("JSON error"));
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: StorageError = json_err.into();
        match err {
            StorageError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected StorageError::Json"),
        }
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = StorageError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}
