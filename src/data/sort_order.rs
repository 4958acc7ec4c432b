use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    FullName,
    Code,
    Email,
}

impl SortField {
    pub const ALL: [Self; 3] = [Self::FullName, Self::Code, Self::Email];

    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Code => "code",
            Self::Email => "email",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Nombre",
            Self::Code => "Código",
            Self::Email => "Email",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// An ordering key as the API understands it: the field name, prefixed with `-` for descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub struct SortOrder {
    pub field: SortField,
    pub descending: bool,
}

impl SortOrder {
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    /// What clicking the direction control of `field` leads to: the current ascending field flips
    /// to descending, anything else becomes `field` ascending.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        if self == Self::ascending(field) {
            Self {
                field,
                descending: true,
            }
        } else {
            Self::ascending(field)
        }
    }

    pub fn is_ascending_on(self, field: SortField) -> bool {
        self == Self::ascending(field)
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.descending {
            write!(f, "-")?;
        }
        write!(f, "{}", self.field.key())
    }
}

impl From<&str> for SortOrder {
    fn from(raw: &str) -> Self {
        let (descending, key) = match raw.strip_prefix('-') {
            Some(key) => (true, key),
            None => (false, raw),
        };

        SortField::from_key(key.trim()).map_or_else(Self::default, |field| Self {
            field,
            descending,
        })
    }
}

impl From<String> for SortOrder {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_ascending_again() {
        let start = SortOrder::ascending(SortField::Code);

        let once = start.toggled(SortField::Code);
        assert_eq!(once.to_string(), "-code");

        let twice = once.toggled(SortField::Code);
        assert_eq!(twice, start);
    }

    #[test]
    fn toggling_another_field_starts_ascending() {
        let descending_name = SortOrder::from("-full_name");

        assert_eq!(
            descending_name.toggled(SortField::Code),
            SortOrder::ascending(SortField::Code)
        );
        assert_eq!(
            SortOrder::default().toggled(SortField::Email).to_string(),
            "email"
        );
    }

    #[test]
    fn parses_ordering_keys() {
        assert_eq!(SortOrder::from("code"), SortOrder::ascending(SortField::Code));
        assert_eq!(
            SortOrder::from("-email"),
            SortOrder {
                field: SortField::Email,
                descending: true
            }
        );
        assert_eq!(SortOrder::from("group"), SortOrder::default());
        assert_eq!(SortOrder::from(""), SortOrder::default());
        assert_eq!(SortOrder::default().to_string(), "full_name");
    }
}
