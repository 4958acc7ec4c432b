use crate::{
    data::{
        page::Page,
        sort_order::{SortField, SortOrder},
        student::{NewStudent, Student},
    },
    error::{RosterError, RosterResult},
    maud_conveniences::{Toast, form_submit_button, simple_form_element, title},
    routes::{HX_RESWAP, path_segment},
    state::RosterState,
};
use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use serde_json::json;
use std::num::NonZeroU64;

pub const STUDENT_LIST_ID: &str = "student_list";
pub const CREATE_DIALOG_ID: &str = "create_student_dialog";

const CREATED_TITLE: &str = "Estudiante agregado con éxito";
const NOT_CREATED_TITLE: &str = "Error al agregar el estudiante";
const API_UNREACHABLE: &str = "No se pudo contactar con el servidor de estudiantes";

#[derive(Deserialize)]
pub struct StudentsQuery {
    #[serde(default)]
    search: String,
    #[serde(default)]
    ordering: SortOrder,
}

pub async fn internal_get_students(
    State(state): State<RosterState>,
    Query(StudentsQuery { search, ordering }): Query<StudentsQuery>,
) -> Response {
    match state.list_students(&search, ordering).await {
        Ok(page) => render_student_list(&page, ordering, state.page_size()).into_response(),
        Err(e) => {
            error!(?e, ?search, %ordering, "Unable to list students, keeping the current list");
            without_swap(html! {})
        }
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    url: String,
    #[serde(default)]
    ordering: SortOrder,
}

pub async fn internal_get_students_page(
    State(state): State<RosterState>,
    Query(PageQuery { url, ordering }): Query<PageQuery>,
) -> RosterResult<Response> {
    match state.follow_page(&url).await {
        Ok(page) => Ok(render_student_list(&page, ordering, state.page_size()).into_response()),
        Err(e @ (RosterError::InvalidPageUrl { .. } | RosterError::ForeignPageUrl { .. })) => {
            Err(e)
        }
        Err(e) => {
            error!(?e, %url, "Unable to follow students page, keeping the current list");
            Ok(without_swap(html! {}))
        }
    }
}

#[derive(Deserialize)]
pub struct NewStudentForm {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    search: String,
    #[serde(default)]
    ordering: SortOrder,
}

pub async fn internal_post_new_student(
    State(state): State<RosterState>,
    Form(NewStudentForm {
        full_name,
        email,
        code,
        search,
        ordering,
    }): Form<NewStudentForm>,
) -> Response {
    let new_student = match NewStudent::new(&full_name, &email, &code) {
        Ok(new_student) => new_student,
        Err(errors) => {
            warn!(%errors, "Not sending incomplete student");
            return creation_failed(errors.lines().collect());
        }
    };

    let created = match state.create_student(&new_student).await {
        Ok(created) => created,
        Err(RosterError::StudentRejected { errors }) => {
            warn!(%errors, "Students API rejected new student");
            return creation_failed(errors.lines().collect());
        }
        Err(e) => {
            error!(?e, "Unable to create student");
            return creation_failed(vec![API_UNREACHABLE.to_string()]);
        }
    };
    info!(id = %created.id, code = %created.code, "Added student");

    let out_of_band = html! {
        (create_student_dialog(true))
        (Toast::Success { title: CREATED_TITLE }.out_of_band())
    };

    match state.list_students(&search, ordering).await {
        Ok(page) => html! {
            (render_student_list(&page, ordering, state.page_size()))
            (out_of_band)
        }
        .into_response(),
        Err(e) => {
            error!(?e, "Unable to reload students after adding one");
            without_swap(out_of_band)
        }
    }
}

/// Leaves the requesting element alone, only out-of-band fragments in `markup` get swapped in.
fn without_swap(markup: Markup) -> Response {
    (AppendHeaders([(HX_RESWAP, "none")]), markup).into_response()
}

fn creation_failed(lines: Vec<String>) -> Response {
    without_swap(
        Toast::Error {
            title: NOT_CREATED_TITLE,
            lines,
        }
        .out_of_band(),
    )
}

pub fn render_student_list(
    page: &Page<Student>,
    ordering: SortOrder,
    page_size: NonZeroU64,
) -> Markup {
    html! {
        div id=(STUDENT_LIST_ID) class="flex flex-col space-y-2" {
            input type="hidden" id="ordering" name="ordering" value=(ordering.to_string()) {}

            div class="flex flex-row space-x-2" {
                @for field in SortField::ALL {
                    (sort_button(field, ordering))
                }
            }
            hr class="border-gray-600";

            ul class="h-96 overflow-y-auto" {
                @for student in &page.results {
                    li {
                        a href={"/students/" (path_segment(student.id.as_str()))} title=(student.email) class="flex flex-row justify-between items-center p-2 my-2 rounded hover:bg-gray-700 font-medium" {
                            span {(student.full_name)}
                            span {(student.code)}
                        }
                    }
                }
            }
            hr class="border-gray-600";

            div class="flex flex-row justify-center items-center space-x-4" {
                (page_button("Anterior", page.previous.as_deref(), ordering))
                span class="px-4 py-2 text-sm" {
                    "Página " (page.current_page()) " de " (page.total_pages(page_size))
                }
                (page_button("Siguiente", page.next.as_deref(), ordering))
            }
        }
    }
}

fn sort_button(field: SortField, current: SortOrder) -> Markup {
    let arrow = if current.is_ascending_on(field) { "↓" } else { "↑" };
    let vals = json!({ "ordering": current.toggled(field).to_string() }).to_string();

    html! {
        button type="button" hx-get="/internal/students" hx-vals=(vals) hx-include="#search" hx-target={"#" (STUDENT_LIST_ID)} hx-swap="outerHTML" class="border border-gray-600 hover:bg-gray-700 py-1 px-3 rounded text-sm" {
            (field.label()) " " (arrow)
        }
    }
}

fn page_button(label: &'static str, url: Option<&str>, ordering: SortOrder) -> Markup {
    let vals = url.map(|url| json!({ "url": url, "ordering": ordering.to_string() }).to_string());
    let state_classes = if vals.is_some() {
        "cursor-pointer hover:bg-gray-700"
    } else {
        "pointer-events-none opacity-50"
    };

    html! {
        button type="button" disabled[vals.is_none()] hx-get="/internal/students_page" hx-vals=[vals] hx-target={"#" (STUDENT_LIST_ID)} hx-swap="outerHTML" class={"border border-gray-600 py-1 px-3 rounded text-sm " (state_classes)} {
            (label)
        }
    }
}

pub fn create_student_dialog(out_of_band: bool) -> Markup {
    html! {
        dialog id=(CREATE_DIALOG_ID) hx-swap-oob=[out_of_band.then_some("true")] class="m-auto bg-gray-800 text-white rounded shadow-md p-8 w-full max-w-md backdrop:bg-black/60" {
            (title("Crear Estudiante"))
            form hx-post="/internal/students" hx-include="#search, #ordering" hx-target={"#" (STUDENT_LIST_ID)} hx-swap="outerHTML" {
                (simple_form_element("full_name", "Nombre completo", true, None, Some("Ingresa el nombre")))
                (simple_form_element("email", "Email", true, None, Some("Ingresa el email")))
                (simple_form_element("code", "Código", true, None, Some("Ingresa el código")))

                div class="flex items-center justify-end space-x-2" {
                    button type="button" class="bg-gray-600 hover:bg-gray-700 font-bold py-2 px-4 rounded" onclick="this.closest('dialog').close()" {
                        "Cancelar"
                    }
                    (form_submit_button(Some("Agregar")))
                }
            }
        }
    }
}
