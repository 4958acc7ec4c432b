use reqwest::StatusCode;
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();

        match self.0.iter_mut().find(|(existing, _)| *existing == field) {
            Some((_, messages)) => messages.push(message),
            None => self.0.push((field, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
    }

    /// Unrecognised bodies end up as a single `detail` entry, never as an empty set.
    pub fn from_response_body(status: StatusCode, body: &[u8]) -> Self {
        let mut errors = Self::default();

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => {
                for (field, value) in map {
                    match value {
                        Value::Array(items) => {
                            for item in items {
                                errors.push(field.clone(), message_text(item));
                            }
                        }
                        other => errors.push(field, message_text(other)),
                    }
                }
            }
            Ok(other) => errors.push("detail", message_text(other)),
            Err(_) => {}
        }

        if errors.is_empty() {
            errors.push("detail", format!("HTTP {status}"));
        }

        errors
    }
}

fn message_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_message_is_kept() {
        let body = br#"{"code": ["student with this code already exists."], "email": ["Enter a valid email address.", "Too long."]}"#;
        let errors = FieldErrors::from_response_body(StatusCode::BAD_REQUEST, body);

        let lines: Vec<_> = errors.lines().collect();
        assert_eq!(
            lines,
            vec![
                "code: student with this code already exists.".to_string(),
                "email: Enter a valid email address., Too long.".to_string(),
            ]
        );
    }

    #[test]
    fn bare_string_messages_are_accepted() {
        let errors =
            FieldErrors::from_response_body(StatusCode::BAD_REQUEST, br#"{"detail": "Nope"}"#);

        assert_eq!(errors.to_string(), "detail: Nope");
    }

    #[test]
    fn unreadable_bodies_fall_back_to_the_status() {
        let errors = FieldErrors::from_response_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            b"<html>Server Error</html>",
        );

        assert_eq!(errors.to_string(), "detail: HTTP 500 Internal Server Error");
    }

    #[test]
    fn pushes_group_by_field() {
        let mut errors = FieldErrors::default();
        errors.push("email", "a");
        errors.push("code", "b");
        errors.push("email", "c");

        assert_eq!(errors.to_string(), "email: a, c\ncode: b");
    }
}
