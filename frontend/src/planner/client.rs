use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;

use crate::config;
use super::error::SubmissionFailed;
use super::models::{PlanRequest, PlanResponse};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Anything that can turn preferences into plan text.
///
/// The returned future owns everything it needs so the store can hold it
/// across an await without borrowing the service.
pub trait PlanService {
    fn request_plan(&self, request: PlanRequest) -> LocalBoxFuture<'static, Result<String, SubmissionFailed>>;
}

/// Talks to the planning backend over `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpPlanService {
    endpoint: String,
}

impl HttpPlanService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpPlanService {
    fn default() -> Self {
        Self::new(config::generate_endpoint())
    }
}

impl PlanService for HttpPlanService {
    fn request_plan(&self, request: PlanRequest) -> LocalBoxFuture<'static, Result<String, SubmissionFailed>> {
        let endpoint = self.endpoint.clone();
        async move {
            let body = encode_plan_request(&request)?;
            let response = Request::post(&endpoint)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;

            let status = response.status();
            let body = response.text().await?;
            decode_plan_response(status, &body)
        }
        .boxed_local()
    }
}

/// JSON body sent to the planner: exactly `destination`, `budget`, `interests`.
pub fn encode_plan_request(request: &PlanRequest) -> Result<String, SubmissionFailed> {
    Ok(serde_json::to_string(request)?)
}

/// Checks the status and pulls `plan` out of a finished response.
pub fn decode_plan_response(status: u16, body: &str) -> Result<String, SubmissionFailed> {
    if !(200..300).contains(&status) {
        return Err(SubmissionFailed::HttpStatus(status));
    }
    let parsed: PlanResponse = serde_json::from_str(body)?;
    Ok(parsed.plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_returns_plan_verbatim() {
        let plan = decode_plan_response(200, r#"{"plan": "Day 1: ...\nDay 2: ..."}"#).unwrap();
        assert_eq!(plan, "Day 1: ...\nDay 2: ...");
    }

    #[test]
    fn any_2xx_is_success() {
        assert_eq!(decode_plan_response(201, r#"{"plan": "ok"}"#).unwrap(), "ok");
        assert_eq!(decode_plan_response(299, r#"{"plan": ""}"#).unwrap(), "");
    }

    #[test]
    fn error_statuses_fail_without_reading_body() {
        let err = decode_plan_response(500, r#"{"error": "Failed to generate itinerary"}"#).unwrap_err();
        assert_eq!(err, SubmissionFailed::HttpStatus(500));

        let err = decode_plan_response(400, r#"{"plan": "ignored"}"#).unwrap_err();
        assert_eq!(err, SubmissionFailed::HttpStatus(400));

        assert_eq!(decode_plan_response(304, "").unwrap_err(), SubmissionFailed::HttpStatus(304));
    }

    #[test]
    fn missing_plan_field_is_invalid_body() {
        let err = decode_plan_response(200, r#"{"itinerary": "Day 1"}"#).unwrap_err();
        assert!(matches!(err, SubmissionFailed::InvalidBody(_)));
    }

    #[test]
    fn non_json_body_is_invalid_body() {
        let err = decode_plan_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, SubmissionFailed::InvalidBody(_)));
    }

    #[test]
    fn encoded_request_is_json_with_three_fields() {
        let request = PlanRequest {
            destination: "Kerala".to_string(),
            budget: "".to_string(),
            interests: "houseboats \"and\" food".to_string(),
        };
        let body = encode_plan_request(&request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "destination": "Kerala",
                "budget": "",
                "interests": "houseboats \"and\" food",
            })
        );
        assert_eq!(JSON_CONTENT_TYPE, "application/json");
    }

    #[test]
    fn duplicate_plan_key_is_invalid_body() {
        let err = decode_plan_response(200, r#"{"plan": "a", "plan": "b"}"#).unwrap_err();
        assert!(matches!(err, SubmissionFailed::InvalidBody(_)));
    }

    #[test]
    fn default_service_uses_configured_endpoint() {
        assert_eq!(HttpPlanService::default().endpoint(), config::generate_endpoint());
    }
}
