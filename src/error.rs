use crate::data::field_errors::FieldErrors;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Unable to parse API base URL {:?}", original))]
    InvalidBaseUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("API base URL {:?} cannot have paths appended to it", original))]
    UnusableBaseUrl { original: String },
    #[snafu(display("Error building HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("Error sending request to {}", url))]
    SendRequest { source: reqwest::Error, url: String },
    #[snafu(display("Error decoding response from {}", url))]
    DecodeResponse { source: reqwest::Error, url: String },
    #[snafu(display("Got status {} from {}", status, url))]
    UnexpectedStatus { status: StatusCode, url: String },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: String },
    #[snafu(display("Unable to parse page URL {:?}", original))]
    InvalidPageUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("Refusing to follow page URL {:?} outside of the students API", url))]
    ForeignPageUrl { url: String },
    #[snafu(display("Student was rejected: {}", errors))]
    StudentRejected { errors: FieldErrors },
}

impl IntoResponse for RosterError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //upstream api misbehaved

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Error "}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } | Self::ParseNumber { .. } => ISE,
            Self::InvalidBaseUrl { .. } | Self::UnusableBaseUrl { .. } => ISE,
            Self::BuildHttpClient { .. } => ISE,
            Self::SendRequest { .. } | Self::DecodeResponse { .. } => BG,
            Self::UnexpectedStatus { .. } => BG,
            Self::MissingStudent { .. } => NF,
            Self::InvalidPageUrl { .. } | Self::ForeignPageUrl { .. } => BI,
            Self::StudentRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()).into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_page_urls_are_bad_requests() {
        let response = RosterError::ForeignPageUrl {
            url: "https://elsewhere.example/students/?page=2".into(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_students_are_not_found() {
        let response = RosterError::MissingStudent { id: "7".into() }.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
