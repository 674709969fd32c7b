use bmi_core::{Explanation, ValidationError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How `bmi compute` prints its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// The markdown explanation; rejected input is reported on stderr.
    #[default]
    Markdown,
    /// A JSON object holding either the explanation or the error.
    Json,
    /// One string holding either the explanation or a `❌` error line.
    Text,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    kind: &'a str,
    field: &'a str,
    message: String,
}

/// Encodes either outcome as pretty-printed JSON.
pub fn to_json(result: &Result<Explanation, ValidationError>) -> serde_json::Result<String> {
    match result {
        Ok(explanation) => serde_json::to_string_pretty(explanation),
        Err(err) => serde_json::to_string_pretty(&ErrorBody {
            error: ErrorDetail {
                kind: err.kind(),
                field: err.field().key(),
                message: err.to_string(),
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bmi_core::{Field, RawInput, compute_bmi};
    use serde_json::Value;

    #[test]
    fn error_json_names_kind_and_field() {
        let json = to_json(&Err(ValidationError::NonPositive(Field::HeightTotalIn))).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["error"]["kind"], "non_positive");
        assert_eq!(value["error"]["field"], "height_total_in");
        assert_eq!(
            value["error"]["message"],
            "Total height in inches must be greater than 0."
        );
    }

    #[test]
    fn explanation_json() {
        let result = compute_bmi(&RawInput::imperial(180.0, 5.0, 7.0));
        let value: Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();

        assert_eq!(value["units"], "imperial");
        assert_eq!(value["rounded"], 28.2);
        assert_eq!(value["category"], "Overweight");
    }
}
