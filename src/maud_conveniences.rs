use maud::{Markup, Render, html};

pub const TOASTS_ID: &str = "toasts";

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (element)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    ty: Option<&'static str>,
    placeholder: Option<&'static str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input required[required] type=(ty.unwrap_or("text")) id=(id) name=(id) placeholder=[placeholder] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        },
    )
}

pub fn form_submit_button(text: Option<&'static str>) -> Markup {
    html! {
        button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
            (text.unwrap_or("Submit"))
        }
    }
}

pub fn labelled_value(label: &'static str, value: impl Render) -> Markup {
    html! {
        div {
            p class="text-gray-400 text-sm font-medium" {(label)}
            p class="text-gray-100 text-lg" {(value)}
        }
    }
}

pub enum Toast<'a> {
    Success {
        title: &'a str,
    },
    Error {
        title: &'a str,
        lines: Vec<String>,
    },
}

impl Toast<'_> {
    /// Wraps the toast so htmx appends it to the page's toast area, whatever the request's target.
    pub fn out_of_band(&self) -> Markup {
        html! {
            div hx-swap-oob={"beforeend:#" (TOASTS_ID)} {
                (self)
            }
        }
    }
}

impl Render for Toast<'_> {
    fn render(&self) -> Markup {
        let (colours, title, lines) = match self {
            Self::Success { title } => (
                "bg-green-100 border-green-400 text-green-800",
                *title,
                &[][..],
            ),
            Self::Error { title, lines } => (
                "bg-red-100 border-red-400 text-red-700",
                *title,
                lines.as_slice(),
            ),
        };

        html! {
            div role="alert" class={"border px-4 py-3 rounded shadow-md relative " (colours)} {
                button type="button" class="absolute top-1 right-2 font-bold" onclick="this.parentElement.remove()" {"×"}
                strong class="font-bold block" {(title)}
                @for line in lines {
                    span class="block text-sm" {(line)}
                }
            }
        }
    }
}
