use crate::{
    routes::{
        all_students::{
            internal_get_students, internal_get_students_page, internal_post_new_student,
        },
        index::get_index_route,
        student_in_detail::{get_student, internal_get_student_in_detail},
    },
    state::RosterState,
};
use axum::{Router, routing::get};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub mod all_students;
pub mod index;
pub mod student_in_detail;

/// Header htmx reads to override the swap of the element that made the request.
pub const HX_RESWAP: &str = "HX-Reswap";

/// Encodes an opaque identifier so it survives as exactly one path segment of our own routes.
pub fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

pub fn router() -> Router<RosterState> {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students/{id}", get(get_student))
        .route(
            "/internal/students",
            get(internal_get_students).post(internal_post_new_student),
        )
        .route("/internal/students_page", get(internal_get_students_page))
        .route(
            "/internal/students/{id}",
            get(internal_get_student_in_detail),
        )
}
