use axum::{response::{IntoResponse, Response}, http::StatusCode, extract::rejection::JsonRejection};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    Internal,
    BadRequest,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::Internal => "Internal",
            HandlerErrorKind::BadRequest => "BadRequest",
        };
        write!(f, "{}", s)
    }
}

/// A single rejected input field, reported back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        FieldError { field: field.into(), message: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl HandlerError {
    pub fn new<M: Into<String>>(error: HandlerErrorKind, message: M) -> Self {
        HandlerError { error, message: message.into(), details: None, fields: None }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

// Malformed JSON or wrong value types never reach the service layer.
impl From<JsonRejection> for HandlerError {
    fn from(rejection: JsonRejection) -> Self {
        HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: "Invalid request body".to_string(),
            details: Some(rejection.body_text()),
            fields: None,
        }
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HandlerError::new(HandlerErrorKind::NotFound, msg),
            ServiceError::InvalidRequest(fields) => HandlerError {
                error: HandlerErrorKind::Validation,
                message: "Validation failed".to_string(),
                details: None,
                fields: Some(fields),
            },
            ServiceError::PersistenceFailure(msg) => HandlerError {
                error: HandlerErrorKind::Internal,
                message: "Failed to persist record".to_string(),
                details: Some(msg),
                fields: None,
            },
            ServiceError::InternalError(msg) => HandlerError::new(HandlerErrorKind::Internal, msg),
        }
    }
}


#[derive(Debug, Clone)]
pub enum ServiceError {
    NotFound(String),
    InvalidRequest(Vec<FieldError>),
    PersistenceFailure(String),
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::InvalidRequest(fields) => {
                let names: Vec<&str> = fields.iter().map(|e| e.field.as_str()).collect();
                write!(f, "Invalid Request: {}", names.join(", "))
            }
            ServiceError::PersistenceFailure(msg) => write!(f, "Persistence Failure: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl ServiceError {
    pub fn invalid_field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        ServiceError::InvalidRequest(vec![FieldError::new(field, message)])
    }
}

// Allow conversion from RepositoryError to ServiceError
impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::PersistenceFailure(other.to_string()),
        }
    }
}

/// Flattens `validator` output into field errors keyed by wire (camelCase) names.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        let field = to_camel_case(&field);
        for err in errs.iter() {
            let message = match &err.message {
                Some(msg) => msg.to_string(),
                None => format!("failed '{}' check", err.code),
            };
            out.push(FieldError::new(field.clone(), message));
        }
    }
    sort_field_errors(&mut out);
    out
}

pub fn sort_field_errors(errors: &mut Vec<FieldError>) {
    errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    errors.dedup();
}

fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("distance_km"), "distanceKm");
        assert_eq!(to_camel_case("additional_services"), "additionalServices");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("serviceType"), "serviceType");
    }

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let err = ServiceError::invalid_field("name", "must not be blank");
        let response = HandlerError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_persistence_failure_maps_to_internal() {
        let err = ServiceError::PersistenceFailure("store offline".to_string());
        let response = HandlerError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = HandlerError::from(ServiceError::NotFound("lead 7".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_sort_field_errors_dedups() {
        let mut errors = vec![
            FieldError::new("phone", "too short"),
            FieldError::new("name", "too short"),
            FieldError::new("phone", "too short"),
        ];
        sort_field_errors(&mut errors);
        assert_eq!(errors, vec![FieldError::new("name", "too short"), FieldError::new("phone", "too short")]);
    }
}
