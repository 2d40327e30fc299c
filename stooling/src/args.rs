//! JSON argument parsing helpers for function and trait-based tools.
//!
//! ```rust
//! use stooling::{parse_json_object, required_string};
//!
//! let args = parse_json_object(r#"{"query":"rain"}"#).expect("object should parse");
//! let query = required_string(&args, "query").expect("query should be present");
//! assert_eq!(query, "rain");
//! ```

use serde_json::{Map, Value};

use crate::ToolError;

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    serde_json::from_str(args_json)
        .map_err(|err| ToolError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, ToolError> {
    let value = parse_json_value(args_json)?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| ToolError::invalid_arguments("expected JSON object arguments"))
}

pub fn required_string(args: &Map<String, Value>, key: &str) -> Result<String, ToolError> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| ToolError::invalid_arguments(format!("missing required string: '{key}'")))
}

pub fn optional_string(args: &Map<String, Value>, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

pub fn optional_bool_or(args: &Map<String, Value>, key: &str, default: bool) -> bool {
    args.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub fn optional_i64(args: &Map<String, Value>, key: &str) -> Option<i64> {
    args.get(key).and_then(Value::as_i64)
}

/// Absent, null, non-numeric, or zero all fall back to the default: a falsy
/// zero is treated as "use the default", so an explicit 0 cannot be
/// requested through this helper.
pub fn optional_u32_or(args: &Map<String, Value>, key: &str, default: u32) -> u32 {
    args.get(key)
        .and_then(Value::as_u64)
        .filter(|value| *value != 0)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(default)
}

pub fn optional_string_list(args: &Map<String, Value>, key: &str) -> Vec<String> {
    args.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ToolErrorKind;

    #[test]
    fn parse_object_and_extract_required_string() {
        let args = parse_json_object("{\"query\":\"rain\"}").expect("args should parse");
        let query = required_string(&args, "query").expect("query should exist");
        assert_eq!(query, "rain");
    }

    #[test]
    fn parse_invalid_json_returns_invalid_arguments() {
        let error = parse_json_value("{").expect_err("json should fail");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn required_string_rejects_missing_and_empty_values() {
        let args = parse_json_object(r#"{"query":""}"#).expect("args should parse");
        assert!(required_string(&args, "query").is_err());
        assert!(required_string(&args, "absent").is_err());
    }

    #[test]
    fn zero_numeric_arguments_fall_back_to_defaults() {
        let args = parse_json_object(r#"{"slop":0,"size":null}"#).expect("args should parse");
        assert_eq!(optional_u32_or(&args, "slop", 2), 2);
        assert_eq!(optional_u32_or(&args, "size", 10), 10);

        let args = parse_json_object(r#"{"slop":4}"#).expect("args should parse");
        assert_eq!(optional_u32_or(&args, "slop", 2), 4);
    }

    #[test]
    fn optional_helpers_tolerate_absent_keys() {
        let args = parse_json_object("{}").expect("args should parse");
        assert!(optional_string(&args, "custom").is_none());
        assert!(optional_bool_or(&args, "diaspora", true));
        assert!(optional_i64(&args, "year").is_none());
        assert!(optional_string_list(&args, "filters").is_empty());
    }

    #[test]
    fn string_list_collects_only_string_items() {
        let args: Map<String, Value> = parse_json_object(
            &json!({"filters": ["Talmud", 7, "Midrash"]}).to_string(),
        )
        .expect("args should parse");
        assert_eq!(
            optional_string_list(&args, "filters"),
            vec!["Talmud".to_string(), "Midrash".to_string()]
        );
    }
}
