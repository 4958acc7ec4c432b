use crate::data::field_errors::FieldErrors;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned and opaque. The API hands these out as numbers, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentId(String);

impl StudentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    pub email: String,
    pub code: String,
}

/// Everything the API needs to create a student, all of it required.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub full_name: String,
    pub email: String,
    pub code: String,
}

pub const REQUIRED_FIELD_MESSAGE: &str = "Este campo es obligatorio.";

impl NewStudent {
    pub fn new(full_name: &str, email: &str, code: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        for (field, value) in [("full_name", full_name), ("email", email), ("code", code)] {
            if value.trim().is_empty() {
                errors.push(field, REQUIRED_FIELD_MESSAGE);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            code: code.trim().to_string(),
        })
    }
}
