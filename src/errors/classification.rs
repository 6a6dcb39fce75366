use super::types::SeoError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl SeoError {
    /// Classify this error to determine its type and whether it can be retried.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Retryable errors
            SeoError::RateLimit(_) => ErrorClassification {
                error_type: "RateLimitError",
                retryable: true,
            },
            SeoError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                retryable: true,
            },
            SeoError::Timeout(_) => ErrorClassification {
                error_type: "TimeoutError",
                retryable: true,
            },
            SeoError::Upstream { status, .. } => ErrorClassification {
                error_type: "UpstreamError",
                retryable: *status >= 500,
            },

            // Non-retryable errors
            SeoError::Authentication(_) => ErrorClassification {
                error_type: "AuthenticationError",
                retryable: false,
            },
            SeoError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                retryable: false,
            },
            SeoError::InvalidShop(_) => ErrorClassification {
                error_type: "InvalidShopError",
                retryable: false,
            },
            SeoError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                retryable: false,
            },
            SeoError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                retryable: false,
            },
            SeoError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                retryable: false,
            },

            // Local failures are not worth repeating a remote call for
            SeoError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                retryable: false,
            },
            SeoError::Io(_) => ErrorClassification {
                error_type: "IoError",
                retryable: false,
            },
            SeoError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                retryable: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_retryable() {
        let err = SeoError::RateLimit("too many requests".into());
        let class = err.classify();
        assert!(class.retryable);
        assert_eq!(class.error_type, "RateLimitError");
    }

    #[test]
    fn test_auth_error_not_retryable() {
        let err = SeoError::Authentication("Shop x not authenticated".into());
        let class = err.classify();
        assert!(!class.retryable);
        assert_eq!(class.error_type, "AuthenticationError");
    }

    #[test]
    fn test_upstream_server_error_retryable() {
        let err = SeoError::Upstream { status: 502, message: "bad gateway".into() };
        assert!(err.classify().retryable);
    }

    #[test]
    fn test_upstream_client_error_not_retryable() {
        let err = SeoError::Upstream { status: 403, message: "forbidden".into() };
        assert!(!err.classify().retryable);
    }

    #[test]
    fn test_network_error_retryable() {
        let err = SeoError::Network("connection refused".into());
        assert!(err.classify().retryable);
    }

    #[test]
    fn test_not_found_not_retryable() {
        let err = SeoError::NotFound("No active theme found".into());
        assert!(!err.classify().retryable);
        assert_eq!(err.classify().error_type, "NotFoundError");
    }
}
