use crate::{
    maud_conveniences::title,
    routes::all_students::{STUDENT_LIST_ID, create_student_dialog},
    state::RosterState,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full flex flex-col space-y-4" {
            (title("Estudiantes"))

            input type="search" id="search" name="search" placeholder="Buscar..." autocomplete="off"
                hx-get="/internal/students" hx-trigger="input changed" hx-include="#ordering"
                hx-target={"#" (STUDENT_LIST_ID)} hx-swap="outerHTML"
                class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}

            div id=(STUDENT_LIST_ID) hx-get="/internal/students" hx-trigger="load" hx-swap="outerHTML" {
                p class="text-gray-400 italic p-4" {"Cargando..."}
            }

            button type="button" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" onclick="document.getElementById('create_student_dialog').showModal()" {
                "Crear Estudiante"
            }

            (create_student_dialog(false))
        }
    })
}
