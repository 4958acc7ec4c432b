use crate::{
    api::StudentsApi,
    config::RuntimeConfiguration,
    error::RosterResult,
    maud_conveniences::TOASTS_ID,
};
use maud::{DOCTYPE, Markup, html};
use std::{num::NonZeroU64, ops::Deref};

#[derive(Clone, Debug)]
pub struct RosterState {
    api: StudentsApi,
    config: RuntimeConfiguration,
}

impl RosterState {
    pub fn new(config: RuntimeConfiguration) -> RosterResult<Self> {
        let api = StudentsApi::new(&config.api_config())?;

        Ok(Self { api, config })
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="es" {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Estudiantes" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white" {
                    div id=(TOASTS_ID) class="fixed top-4 right-4 flex flex-col space-y-2 w-80 z-50" {}
                    (markup)
                }
            }
        }
    }

    pub fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub fn page_size(&self) -> NonZeroU64 {
        self.config.api_config().page_size()
    }
}

impl Deref for RosterState {
    type Target = StudentsApi;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
