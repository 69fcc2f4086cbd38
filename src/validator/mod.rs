//! Request body extractors.
//!
//! - [`ValidatedBody`] runs a [`RuleSet`] over the raw JSON before the DTO is
//!   deserialized, so type mistakes (`"name": 4`) surface as field messages
//!   rather than serde errors.
//! - [`ValidatedJson`] deserializes first and then runs `validator` derive
//!   checks.
//!
//! Neither extractor requires a `Content-Type` header; an absent body is
//! treated as `{}`.

pub mod rules;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use nomad_core::{AppError, FieldError};

pub use rules::{Check, FieldRule, RuleSet, evaluate};

pub const INVALID_BODY: &str = "Invalid request body";

/// Reads the request body as a JSON object.
async fn read_object<S>(req: Request, state: &S) -> Result<Map<String, Value>, AppError>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|_| AppError::bad_request(INVALID_BODY))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::bad_request(INVALID_BODY)),
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .filter_map(|(field, errors)| {
            errors.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field.to_string(), message)
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedBody<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedBody<T>
where
    T: RuleSet + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = read_object(req, state).await?;

        if body.is_empty() {
            if let Some(message) = T::EMPTY_BODY_MESSAGE {
                return Err(AppError::unprocessable(message));
            }
        }

        let errors = evaluate(T::RULES, &body);
        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        serde_json::from_value(Value::Object(body))
            .map(ValidatedBody)
            .map_err(|e| {
                tracing::debug!(error = %e, "Body passed rules but failed to deserialize");
                AppError::bad_request(INVALID_BODY)
            })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = read_object(req, state).await?;

        let value: T = serde_json::from_value(Value::Object(body)).map_err(|e| {
            let error_msg = e.to_string();

            if let Some(field) = error_msg
                .split("missing field `")
                .nth(1)
                .and_then(|s| s.split('`').next())
            {
                return AppError::validation(vec![FieldError::new(
                    field,
                    format!("{} is required", field),
                )]);
            }

            AppError::bad_request(INVALID_BODY)
        })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(field_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Room {
        name: String,
    }

    impl RuleSet for Room {
        const RULES: &'static [FieldRule] = &[FieldRule {
            field: "name",
            message: "Kindly provide a name",
            optional: false,
            checks: &[
                (Check::NotEmpty, None),
                (Check::IsString, Some("name must be a string")),
            ],
        }];
        const EMPTY_BODY_MESSAGE: Option<&'static str> = Some("Nothing to save");
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Credentials {
        #[validate(email)]
        email: String,
    }

    fn request(body: &'static str) -> Request {
        Request::builder().body(Body::from(body)).unwrap()
    }

    async fn rejection_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validated_body_accepts_valid_payload() {
        let ValidatedBody(room) =
            ValidatedBody::<Room>::from_request(request(r#"{"name":"Suite"}"#), &())
                .await
                .unwrap();
        assert_eq!(room.name, "Suite");
    }

    #[tokio::test]
    async fn test_validated_body_empty_body_message() {
        for body in ["", "{}", "  "] {
            let err = ValidatedBody::<Room>::from_request(request(body), &())
                .await
                .unwrap_err();
            let (status, json) = rejection_json(err).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(json["error"], "Nothing to save");
        }
    }

    #[tokio::test]
    async fn test_validated_body_reports_rule_failures() {
        let err = ValidatedBody::<Room>::from_request(request(r#"{"name":4}"#), &())
            .await
            .unwrap_err();
        let (status, json) = rejection_json(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"][0]["field"], "name");
        assert_eq!(json["error"][0]["message"], "name must be a string");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = ValidatedBody::<Room>::from_request(request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = ValidatedBody::<Room>::from_request(request("[1,2]"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validated_json_runs_derive_checks() {
        let err = ValidatedJson::<Credentials>::from_request(request(r#"{"email":"nope"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);

        let err = ValidatedJson::<Credentials>::from_request(request("{}"), &())
            .await
            .unwrap_err();
        let (_, json) = rejection_json(err).await;
        assert_eq!(json["error"][0]["message"], "email is required");

        let ValidatedJson(creds) =
            ValidatedJson::<Credentials>::from_request(request(r#"{"email":"a@b.com"}"#), &())
                .await
                .unwrap();
        assert_eq!(creds.email, "a@b.com");
    }
}
