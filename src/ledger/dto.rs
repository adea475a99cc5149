use serde::{Deserialize, Serialize, Serializer};

/// Body of `POST /deposit` and `POST /withdraw`.
///
/// `amount` is kept as raw JSON so a missing field or a non-number is
/// reported as an invalid amount instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    #[serde(default)]
    pub amount: serde_json::Value,
}

impl AmountRequest {
    pub fn number(&self) -> Option<f64> {
        self.amount.as_f64()
    }
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    #[serde(serialize_with = "serialize_number")]
    pub balance: f64,
}

/// Largest integer an `f64` holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole values go out as JSON integers (`100`, not `100.0`); zero is never `-0`.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
