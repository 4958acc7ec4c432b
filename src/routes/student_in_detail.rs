use crate::{
    error::RosterError,
    maud_conveniences::{labelled_value, title},
    routes::path_segment,
    state::RosterState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};

pub async fn get_student(State(state): State<RosterState>, Path(id): Path<String>) -> Markup {
    state.render(html! {
        div class="container mx-auto px-4 py-8 max-w-md w-full flex flex-col space-y-4" {
            a href="/" class="self-start bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" {
                "← Volver al listado"
            }
            div hx-get={"/internal/students/" (path_segment(&id))} hx-trigger="load" hx-swap="outerHTML" {
                p class="text-gray-400 italic" {"Cargando..."}
            }
        }
    })
}

/// Always answers 200 so that htmx swaps the placeholder in, even when the student is missing.
pub async fn internal_get_student_in_detail(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> Markup {
    let student = match state.get_student(&id).await {
        Ok(student) => student,
        Err(e) => {
            match &e {
                RosterError::MissingStudent { .. } => warn!(?id, "Student not found"),
                _ => error!(?e, ?id, "Unable to get student"),
            }
            return html! {
                div class="bg-gray-800 p-8 rounded shadow-md text-center" {
                    p class="text-gray-300" {"Estudiante no encontrado"}
                }
            };
        }
    };

    html! {
        div class="bg-gray-800 p-6 md:p-8 rounded-lg shadow-xl" {
            (title("Detalle del Estudiante"))

            div class="flex flex-col space-y-4" {
                (labelled_value("Nombre completo", &student.full_name))
                (labelled_value("Email", &student.email))
                (labelled_value("Código", &student.code))
                (labelled_value("ID", student.id.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{ApiConfig, RuntimeConfiguration},
        routes::router,
        state::RosterState,
    };
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use std::{num::NonZeroU64, time::Duration};
    use tower::ServiceExt;

    fn app_for(server: &mockito::ServerGuard) -> Router {
        let config = ApiConfig::from_parts(
            &server.url(),
            NonZeroU64::new(5).unwrap(),
            Duration::from_secs(5),
        )
        .unwrap();
        let state = RosterState::new(RuntimeConfiguration::for_api(config)).unwrap();
        router().with_state(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn shell_shows_loading_until_the_fragment_arrives() {
        let server = mockito::Server::new_async().await;

        let (status, body) = get(app_for(&server), "/students/7").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Cargando..."));
        assert!(body.contains(r#"hx-get="/internal/students/7""#));
        assert!(body.contains("Volver al listado"));
    }

    #[tokio::test]
    async fn renders_all_four_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/students/7/")
            .with_status(200)
            .with_body(
                json!({"id": 7, "full_name": "Ana Ruiz", "email": "a@x.com", "code": "A1"})
                    .to_string(),
            )
            .create_async()
            .await;

        let (status, body) = get(app_for(&server), "/internal/students/7").await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        for expected in ["Ana Ruiz", "a@x.com", "A1", ">7<"] {
            assert!(body.contains(expected), "missing {expected} in {body}");
        }
        assert!(!body.contains("<input"));
    }

    #[tokio::test]
    async fn ids_that_look_like_other_routes_still_reach_the_detail() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/students/page/")
            .with_status(200)
            .with_body(
                json!({"id": "page", "full_name": "Ana Ruiz", "email": "a@x.com", "code": "A1"})
                    .to_string(),
            )
            .create_async()
            .await;

        let (_, shell) = get(app_for(&server), "/students/page").await;
        assert!(shell.contains(r#"hx-get="/internal/students/page""#));

        let (status, body) = get(app_for(&server), "/internal/students/page").await;

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        for expected in ["Ana Ruiz", "a@x.com", "A1", ">page<"] {
            assert!(body.contains(expected), "missing {expected} in {body}");
        }
    }

    #[tokio::test]
    async fn unknown_students_render_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/students/999/")
            .with_status(404)
            .with_body(json!({"detail": "No Student matches the given query."}).to_string())
            .create_async()
            .await;

        let (status, body) = get(app_for(&server), "/internal/students/999").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Estudiante no encontrado"));
    }

    #[tokio::test]
    async fn garbled_responses_render_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/students/7/")
            .with_status(200)
            .with_body("<html>definitely not json</html>")
            .create_async()
            .await;

        let (status, body) = get(app_for(&server), "/internal/students/7").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Estudiante no encontrado"));
    }
}
