use super::error::ScanError;
use super::format::{is_falsy, number_text, to_fixed, value_text};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Вклад одного признака в решение модели
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reason {
    pub feature: String,
    #[serde(default)]
    pub value: Value,
    pub weight: f64,
}

impl Reason {
    pub fn value_text(&self) -> String {
        value_text(&self.value)
    }

    /// Weight with exactly four decimal places
    pub fn weight_text(&self) -> String {
        to_fixed(self.weight, 4)
    }
}

/// Confidence as sent by the server: a number or a preformatted string.
/// Never rounded; an integral float prints without `.0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(n) => f.write_str(&number_text(n)),
            Confidence::Text(s) => f.write_str(s),
        }
    }
}

/// Ответ `/predict_email` как он приходит по сети (все поля необязательны)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub label: Option<i64>,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub reasons: Option<Vec<Reason>>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Проверенный успешный ответ
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: Confidence,
    pub label: Option<i64>,
    pub reasons: Vec<Reason>,
}

impl TryFrom<PredictionResponse> for Prediction {
    type Error = ScanError;

    fn try_from(resp: PredictionResponse) -> Result<Self, Self::Error> {
        let prediction = resp
            .prediction
            .ok_or_else(|| ScanError::Decode("missing field `prediction`".to_string()))?;
        let confidence = resp
            .confidence
            .ok_or_else(|| ScanError::Decode("missing field `confidence`".to_string()))?;

        Ok(Self {
            prediction,
            confidence,
            label: resp.label,
            reasons: resp.reasons.unwrap_or_default(),
        })
    }
}

/// Result of one scan as seen by the popup
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Success(Prediction),
    /// Server answered with a failure status
    Failure {
        error: Option<String>,
        trace: Option<String>,
    },
}

impl ScanOutcome {
    /// Decode a response body. `ok` is the transport-level status; the body
    /// is parsed as JSON in both cases.
    ///
    /// A failure status only needs JSON other than `null`: a body without an
    /// `error` field (an array, a bare string) is a failure with no message.
    /// A success status needs an object with `prediction` and `confidence`.
    pub fn decode(ok: bool, body: &str) -> Result<Self, ScanError> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_null() {
            return Err(ScanError::Decode("response body is null".to_string()));
        }

        if !ok {
            return Ok(ScanOutcome::Failure {
                error: error_text(value.get("error")),
                trace: value
                    .get("trace")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            });
        }

        if !value.is_object() {
            return Err(ScanError::Decode(
                "response body is not a JSON object".to_string(),
            ));
        }
        let resp: PredictionResponse = serde_json::from_value(value)?;
        Ok(ScanOutcome::Success(Prediction::try_from(resp)?))
    }
}

/// Falsy errors (null, empty, `false`, `0`) count as absent
fn error_text(error: Option<&Value>) -> Option<String> {
    let error = error?;
    if is_falsy(error) {
        return None;
    }
    Some(value_text(error))
}
