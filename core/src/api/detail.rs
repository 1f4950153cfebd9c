// core/src/api/detail.rs

//! Turning rejected responses into something a student can read.

use serde_json::Value;

/// The `detail` string of an error body, if there is one.
pub fn detail_from_body(body: &[u8]) -> Option<String> {
  let value: Value = serde_json::from_slice(body).ok()?;
  value.get("detail")?.as_str().map(str::to_string)
}

/// Flattens a field-error map such as `{"username": ["taken"]}` into
/// `"username: taken"`, joining several entries with `"; "`.
pub fn field_errors_from_body(body: &[u8]) -> Option<String> {
  let value: Value = serde_json::from_slice(body).ok()?;
  let fields = value.as_object()?;
  let mut parts = Vec::new();
  for (field, messages) in fields {
    match messages {
      Value::String(text) => parts.push(format!("{field}: {text}")),
      Value::Array(items) => {
        for item in items.iter().filter_map(Value::as_str) {
          parts.push(format!("{field}: {item}"));
        }
      }
      _ => {}
    }
  }
  if parts.is_empty() {
    None
  } else {
    Some(parts.join("; "))
  }
}

pub fn generic_failure(status: u16) -> String {
  format!("Request failed with status {status}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_detail_field_only_when_it_is_a_string() {
    assert_eq!(
      detail_from_body(br#"{"detail":"Invalid credentials"}"#).as_deref(),
      Some("Invalid credentials")
    );
    assert_eq!(detail_from_body(br#"{"detail":42}"#), None);
    assert_eq!(detail_from_body(br#"{"error":"Invalid credentials"}"#), None);
    assert_eq!(detail_from_body(b"<html>502</html>"), None);
  }

  #[test]
  fn flattens_field_errors() {
    let body = br#"{"username":["A user with that username already exists."],"password":"This field is required."}"#;
    let flattened = field_errors_from_body(body).unwrap();
    assert!(flattened.contains("username: A user with that username already exists."));
    assert!(flattened.contains("password: This field is required."));
    assert_eq!(field_errors_from_body(b"{}"), None);
  }
}
