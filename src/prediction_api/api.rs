//! HTTP calls to the prediction service and response classification.

use serde::de::DeserializeOwned;
use url::Url;

use super::multipart;
use super::{
    BatchPredictionResult, CsvUpload, PredictionRequest, PredictionResult, RetrainingResponse,
    SubmitError,
};
use crate::http_client;

const MAX_PREDICTION_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_BATCH_RESPONSE_BYTES: usize = 16 * 1024 * 1024;
const MAX_ERROR_RESPONSE_BYTES: usize = 256 * 1024;
const UPLOAD_FIELD: &str = "file";

/// Send one record to `POST /predict`.
pub fn post_prediction(
    url: &Url,
    request: &PredictionRequest,
) -> Result<PredictionResult, SubmitError> {
    tracing::debug!("POST {url}");
    let response = http_client::agent()
        .post(url.as_str())
        .set("Accept", "application/json")
        .set("Content-Type", "application/json")
        .send_json(request);
    let body = read_success_body(response, MAX_PREDICTION_RESPONSE_BYTES)?;
    parse_prediction(&body)
}

/// Upload a CSV to `POST /predict/batch`.
pub fn post_batch(url: &Url, upload: &CsvUpload) -> Result<BatchPredictionResult, SubmitError> {
    let body = post_upload(url, upload, MAX_BATCH_RESPONSE_BYTES)?;
    parse_json(&body)
}

/// Upload a labelled CSV to `POST /retrain`.
pub fn post_retraining(url: &Url, upload: &CsvUpload) -> Result<RetrainingResponse, SubmitError> {
    let body = post_upload(url, upload, MAX_PREDICTION_RESPONSE_BYTES)?;
    parse_json(&body)
}

fn post_upload(url: &Url, upload: &CsvUpload, max_bytes: usize) -> Result<String, SubmitError> {
    let payload = multipart::encode_file(UPLOAD_FIELD, upload);
    tracing::debug!(
        "POST {url} ({} bytes from {})",
        upload.bytes.len(),
        upload.file_name
    );
    let response = http_client::agent()
        .post(url.as_str())
        .set("Accept", "application/json")
        .set("Content-Type", &payload.content_type)
        .send_bytes(&payload.bytes);
    read_success_body(response, max_bytes)
}

fn read_success_body(
    response: Result<ureq::Response, ureq::Error>,
    max_bytes: usize,
) -> Result<String, SubmitError> {
    let response = match response {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_response_text(response, MAX_ERROR_RESPONSE_BYTES)
                .unwrap_or_default();
            return Err(map_status_error(code, &body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(SubmitError::Unreachable(err.to_string()));
        }
    };
    http_client::read_response_text(response, max_bytes).map_err(|err| match err.kind() {
        std::io::ErrorKind::InvalidData => SubmitError::MalformedResponse(err.to_string()),
        _ => SubmitError::Unreachable(err.to_string()),
    })
}

fn map_status_error(status: u16, body: &str) -> SubmitError {
    let message = parse_error_detail(body).unwrap_or_else(|| format!("Server error ({status})"));
    tracing::warn!("Prediction service returned HTTP {status}: {message}");
    SubmitError::ServerError { status, message }
}

/// Extract the `detail` message from an error body.
///
/// Accepts a plain string detail or a list of validation entries carrying a
/// `msg` each, which are joined with `"; "`.
pub(crate) fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).ok()?;
    let detail = value.get("detail")?;
    if let Some(text) = detail.as_str() {
        let text = text.trim();
        return (!text.is_empty()).then(|| text.to_string());
    }
    let messages = detail
        .as_array()?
        .iter()
        .filter_map(|entry| entry.get("msg").and_then(|msg| msg.as_str()))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .collect::<Vec<_>>();
    (!messages.is_empty()).then(|| messages.join("; "))
}

fn parse_prediction(body: &str) -> Result<PredictionResult, SubmitError> {
    let result: PredictionResult = parse_json(body)?;
    if result.prediction > 1 {
        return Err(SubmitError::MalformedResponse(format!(
            "prediction must be 0 or 1, got {}",
            result.prediction
        )));
    }
    if !(0.0..=1.0).contains(&result.probability) {
        return Err(SubmitError::MalformedResponse(format!(
            "probability out of range: {}",
            result.probability
        )));
    }
    Ok(result)
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, SubmitError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::MalformedResponse("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| SubmitError::MalformedResponse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_response, serve_once, unreachable_url};
    use crate::validation::Field;

    fn request() -> PredictionRequest {
        crate::form::build_request(&crate::form::valid_form()).unwrap()
    }

    fn url(base: &str, path: &str) -> Url {
        Url::parse(&format!("{base}{path}")).unwrap()
    }

    fn request_body(raw: &[u8]) -> Vec<u8> {
        let start = raw.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
        raw[start..].to_vec()
    }

    #[test]
    fn prediction_sends_all_fields_and_parses_result() {
        let (base, requests) = serve_once(json_response(
            "200 OK",
            r#"{"prediction": 1, "probability": 0.87}"#,
        ));
        let result = post_prediction(&url(&base, "/predict"), &request()).unwrap();
        assert_eq!(
            result,
            PredictionResult {
                prediction: 1,
                probability: 0.87
            }
        );

        let raw = requests.recv().unwrap();
        let head = String::from_utf8_lossy(&raw);
        assert!(head.starts_with("POST /predict HTTP/1.1"));
        let sent: serde_json::Value = serde_json::from_slice(&request_body(&raw)).unwrap();
        let sent = sent.as_object().unwrap();
        assert_eq!(sent.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(sent.contains_key(field.wire_name()));
        }
    }

    #[test]
    fn error_detail_is_surfaced_verbatim() {
        let (base, _) = serve_once(json_response("400 Bad Request", r#"{"detail": "bad input"}"#));
        let err = post_prediction(&url(&base, "/predict"), &request()).unwrap_err();
        assert!(matches!(err, SubmitError::ServerError { status: 400, .. }));
        assert_eq!(err.to_string(), "bad input");
    }

    #[test]
    fn error_without_detail_reports_status() {
        let (base, _) = serve_once(
            "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 7\r\nConnection: close\r\n\r\nupstrea"
                .to_string(),
        );
        let err = post_prediction(&url(&base, "/predict"), &request()).unwrap_err();
        assert_eq!(err.to_string(), "Server error (502)");
    }

    #[test]
    fn unparseable_success_body_is_malformed() {
        let (base, _) = serve_once(json_response("200 OK", "<html>sleeping</html>"));
        let err = post_prediction(&url(&base, "/predict"), &request()).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn out_of_range_prediction_is_malformed() {
        let (base, _) = serve_once(json_response(
            "200 OK",
            r#"{"prediction": 3, "probability": 0.5}"#,
        ));
        let err = post_prediction(&url(&base, "/predict"), &request()).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn refused_connection_is_unreachable() {
        let err = post_prediction(&url(&unreachable_url(), "/predict"), &request()).unwrap_err();
        assert!(matches!(err, SubmitError::Unreachable(_)));
    }

    #[test]
    fn batch_upload_posts_multipart_file() {
        let (base, requests) = serve_once(json_response(
            "200 OK",
            r#"{"names": ["A", "B"], "predictions": [0, 1], "probabilities": [0.2, 0.9]}"#,
        ));
        let upload = CsvUpload {
            file_name: "patients.csv".into(),
            bytes: b"name,age\nA,54\nB,61\n".to_vec(),
        };
        let result = post_batch(&url(&base, "/predict/batch"), &upload).unwrap();
        assert_eq!(result.names, vec!["A", "B"]);
        assert_eq!(result.predictions, vec![0, 1]);

        let raw = requests.recv().unwrap();
        let text = String::from_utf8_lossy(&raw);
        assert!(text.starts_with("POST /predict/batch HTTP/1.1"));
        assert!(text.to_ascii_lowercase().contains("content-type: multipart/form-data; boundary="));
        assert!(text.contains("name=\"file\"; filename=\"patients.csv\""));
        assert!(text.contains("name,age\nA,54\nB,61\n"));
    }

    #[test]
    fn retraining_parses_metrics() {
        let (base, _) = serve_once(json_response(
            "200 OK",
            r#"{"message": "Model retrained successfully", "metrics": {"accuracy": 0.9, "precision": 0.88, "recall": 0.91, "f1_score": 0.895, "roc_auc": 0.95, "training_samples": 800, "test_samples": 200}}"#,
        ));
        let upload = CsvUpload {
            file_name: "train.csv".into(),
            bytes: b"age,target\n54,1\n".to_vec(),
        };
        let response = post_retraining(&url(&base, "/retrain"), &upload).unwrap();
        assert_eq!(response.message, "Model retrained successfully");
        assert_eq!(response.metrics.training_samples, 800);
        assert_eq!(response.metrics.roc_auc, 0.95);
    }

    #[test]
    fn parses_validation_detail_lists() {
        let body = r#"{"detail": [{"loc": ["body", "age"], "msg": "field required"}, {"msg": "value is not a valid integer"}]}"#;
        assert_eq!(
            parse_error_detail(body).as_deref(),
            Some("field required; value is not a valid integer")
        );
        assert_eq!(parse_error_detail(r#"{"detail": ""}"#), None);
        assert_eq!(parse_error_detail("Internal Server Error"), None);
    }
}
