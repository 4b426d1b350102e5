use thiserror::Error;

/// Convenient result alias for the aerodata library.
pub type Result<T> = std::result::Result<T, Error>;

/// Operation context used when classifying upstream failures.
///
/// The same upstream status maps to different domain errors depending on
/// which surface was called; a 404 from a document read means the document
/// is missing, while a 404 from the query or search service means the
/// index or keyspace is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Create,
    Get,
    Update,
    Delete,
    Query,
    Search,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or empty credentials/endpoint configuration.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Malformed caller input, rejected before any network call.
    #[error("{message}")]
    Validation { message: String },

    /// Upstream rejected the request as malformed.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Document not found on a document operation.
    #[error("{message}")]
    NotFound { message: String },

    /// Key collision on create, or version mismatch on mutate.
    #[error("{message}")]
    Conflict { message: String },

    /// Upstream rejected the supplied credentials.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Query keyspace or search index missing.
    #[error("{message}")]
    IndexNotFound { message: String },

    /// Network-level fault (DNS, connection refused, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Unclassified upstream failure.
    #[error("upstream request failed with status {status}: {message}")]
    Internal { status: u16, message: String },
}

impl Error {
    /// Stable wire code used as the `error` field of the outward envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Configuration { .. } => "ConfigurationError",
            Error::Validation { .. } => "ValidationError",
            Error::InvalidArgument { .. } => "InvalidArgument",
            Error::NotFound { .. } => "DocumentNotFound",
            Error::Conflict { .. } => "Conflict",
            Error::Unauthorized { .. } => "InvalidAuth",
            Error::IndexNotFound { .. } => "IndexNotFound",
            Error::Transport(_) => "TransportError",
            Error::Internal { .. } => "InternalError",
        }
    }

    /// HTTP status returned to the outward caller for this error.
    ///
    /// Auth failures are not surfaced outward; the kind stays
    /// distinguishable in logs but callers see a 500.
    pub fn outward_status(&self) -> u16 {
        match self {
            Error::Validation { .. } | Error::InvalidArgument { .. } => 400,
            Error::NotFound { .. } => 404,
            Error::Conflict { .. } => 409,
            _ => 500,
        }
    }

    /// Operational hint attached to search failures.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Error::IndexNotFound { .. } => Some(
                "Make sure the 'hotel-geo-index' FTS index exists with geo mapping for the 'geo' field",
            ),
            _ => None,
        }
    }
}

/// Map an upstream HTTP status to a domain error.
///
/// This is the single place where upstream status codes are interpreted;
/// no other component may special-case them. The message is the upstream
/// body, or a default phrase when the body is empty.
pub fn classify(operation: OperationKind, status: u16, body: &str) -> Error {
    use OperationKind::*;

    let message = |default: &str| {
        if body.trim().is_empty() {
            default.to_string()
        } else {
            body.to_string()
        }
    };

    match (operation, status) {
        (_, 400) => Error::InvalidArgument {
            message: message("upstream rejected the request as malformed"),
        },
        (_, 403) => Error::Unauthorized {
            message: message("upstream rejected the supplied credentials"),
        },
        (Get | Update | Delete, 404) => Error::NotFound {
            message: message("document not found"),
        },
        (Query | Search, 404) => Error::IndexNotFound {
            message: message("query or search resource not found"),
        },
        (Create, 409) => Error::Conflict {
            message: message("document already exists"),
        },
        (Get | Update | Delete, 409) => Error::Conflict {
            message: message("document version mismatch"),
        },
        (_, status) => Error::Internal {
            status,
            message: message("unclassified upstream failure"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_400_as_invalid_argument_for_every_operation() {
        for op in [
            OperationKind::Create,
            OperationKind::Get,
            OperationKind::Update,
            OperationKind::Delete,
            OperationKind::Query,
            OperationKind::Search,
        ] {
            let err = classify(op, 400, "bad request");
            assert!(matches!(err, Error::InvalidArgument { .. }), "{op:?}");
            assert_eq!(err.outward_status(), 400);
        }
    }

    #[test]
    fn classifies_403_as_unauthorized_with_500_outward() {
        let err = classify(OperationKind::Get, 403, "");
        assert!(matches!(err, Error::Unauthorized { .. }));
        assert_eq!(err.outward_status(), 500);
    }

    #[test]
    fn classifies_404_by_operation_kind() {
        for op in [OperationKind::Get, OperationKind::Update, OperationKind::Delete] {
            let err = classify(op, 404, "");
            assert!(matches!(err, Error::NotFound { .. }), "{op:?}");
            assert_eq!(err.outward_status(), 404);
        }
        for op in [OperationKind::Query, OperationKind::Search] {
            let err = classify(op, 404, "");
            assert!(matches!(err, Error::IndexNotFound { .. }), "{op:?}");
            assert_eq!(err.outward_status(), 500);
        }
        // 404 is not a mapped outcome for create.
        let err = classify(OperationKind::Create, 404, "");
        assert!(matches!(err, Error::Internal { status: 404, .. }));
    }

    #[test]
    fn classifies_409_with_operation_specific_defaults() {
        let err = classify(OperationKind::Create, 409, "");
        match &err {
            Error::Conflict { message } => assert_eq!(message, "document already exists"),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(err.outward_status(), 409);

        let err = classify(OperationKind::Update, 409, "");
        match &err {
            Error::Conflict { message } => assert_eq!(message, "document version mismatch"),
            other => panic!("unexpected: {other:?}"),
        }

        let err = classify(OperationKind::Query, 409, "");
        assert!(matches!(err, Error::Internal { status: 409, .. }));
    }

    #[test]
    fn unmapped_statuses_fall_through_to_internal() {
        for status in [401u16, 418, 500, 502, 503] {
            let err = classify(OperationKind::Get, status, "boom");
            match err {
                Error::Internal { status: s, ref message } => {
                    assert_eq!(s, status);
                    assert_eq!(message, "boom");
                }
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    #[test]
    fn upstream_body_is_preserved_as_the_message() {
        let err = classify(OperationKind::Get, 404, "no such document");
        assert_eq!(err.to_string(), "no such document");
    }

    #[test]
    fn index_not_found_carries_the_operational_hint() {
        let err = classify(OperationKind::Search, 404, "");
        assert!(err.detail().unwrap().contains("hotel-geo-index"));
        assert!(classify(OperationKind::Get, 404, "").detail().is_none());
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(classify(OperationKind::Get, 404, "").code(), "DocumentNotFound");
        assert_eq!(classify(OperationKind::Get, 403, "").code(), "InvalidAuth");
        assert_eq!(classify(OperationKind::Create, 409, "").code(), "Conflict");
        assert_eq!(classify(OperationKind::Get, 500, "").code(), "InternalError");
        let err = Error::Validation {
            message: "bad".to_string(),
        };
        assert_eq!(err.code(), "ValidationError");
    }
}
