//! Normalized response envelope handed to views.
//!
//! `success` is true exactly when `data` is present and `error` is absent. The
//! fields are private and every constructor (including deserialization)
//! upholds that.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::shared::error::ClientError;

const DEFAULT_FAILURE: &str = "Request failed";

/// `{ success, data?, error? }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    status: Option<u16>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Status code of the failure, when the envelope came from a [`ClientError`]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn into_result(self) -> Result<T, String> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(self.error.unwrap_or_else(|| DEFAULT_FAILURE.to_string())),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            status: self.status,
        }
    }
}

impl<T> From<Result<T, ClientError>> for ApiResponse<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self {
                status: Some(err.status_code()),
                ..Self::err(err.message())
            },
        }
    }
}

#[derive(Deserialize)]
struct RawApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<'de, T> Deserialize<'de> for ApiResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawApiResponse::<T>::deserialize(deserializer)?;
        match (raw.success, raw.data, raw.error) {
            (true, Some(data), None) => Ok(Self::ok(data)),
            (false, None, error) => Ok(Self::err(
                error.unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
            )),
            (true, _, _) => Err(de::Error::custom(
                "successful response must carry data and no error",
            )),
            (false, Some(_), _) => Err(de::Error::custom("failed response must not carry data")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ok_holds_invariant() {
        let response = ApiResponse::ok(vec![1, 2, 3]);
        assert!(response.is_success());
        assert_eq!(response.data(), Some(&vec![1, 2, 3]));
        assert!(response.error().is_none());
    }

    #[test]
    fn test_err_holds_invariant() {
        let response: ApiResponse<u32> = ApiResponse::err("Network error");
        assert!(!response.is_success());
        assert!(response.data().is_none());
        assert_eq!(response.error(), Some("Network error"));
    }

    #[test]
    fn test_from_client_error_keeps_status() {
        let response: ApiResponse<()> = Err(ClientError::api(404, "Not found")).into();
        assert!(!response.is_success());
        assert_eq!(response.error(), Some("Not found"));
        assert_eq!(response.status(), Some(404));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let json = serde_json::to_value(ApiResponse::ok("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": "hi" }));

        let json = serde_json::to_value(ApiResponse::<String>::err("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "nope" }));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_envelope() {
        let parsed: Result<ApiResponse<u32>, _> =
            serde_json::from_str(r#"{ "success": true }"#);
        assert!(parsed.is_err());

        let parsed: Result<ApiResponse<u32>, _> =
            serde_json::from_str(r#"{ "success": false, "data": 1 }"#);
        assert!(parsed.is_err());

        let parsed: Result<ApiResponse<u32>, _> =
            serde_json::from_str(r#"{ "success": true, "data": 1, "error": "x" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_deserialize_failure_without_message() {
        let parsed: ApiResponse<u32> = serde_json::from_str(r#"{ "success": false }"#).unwrap();
        assert_eq!(parsed.error(), Some(DEFAULT_FAILURE));
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Ticket {
        id: u32,
        subject: String,
    }

    #[test]
    fn test_deserialize_payload_without_default() {
        let parsed: ApiResponse<Ticket> =
            serde_json::from_str(r#"{ "success": true, "data": { "id": 7, "subject": "Refund" } }"#)
                .unwrap();
        assert_eq!(
            parsed.data(),
            Some(&Ticket {
                id: 7,
                subject: "Refund".to_string()
            })
        );

        let failed: ApiResponse<Ticket> =
            serde_json::from_str(r#"{ "success": false, "error": "Not found" }"#).unwrap();
        assert_eq!(failed.error(), Some("Not found"));
    }

    #[test]
    fn test_into_result_and_map() {
        let doubled = ApiResponse::ok(21).map(|n| n * 2);
        assert_eq!(doubled.into_result(), Ok(42));

        let failed: ApiResponse<u32> = ApiResponse::err("boom");
        assert_eq!(failed.map(|n| n + 1).into_result(), Err("boom".to_string()));
    }
}
