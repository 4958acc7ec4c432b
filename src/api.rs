use crate::{
    config::ApiConfig,
    data::{
        field_errors::FieldErrors,
        page::Page,
        sort_order::SortOrder,
        student::{NewStudent, Student},
    },
    error::{
        BuildHttpClientSnafu, DecodeResponseSnafu, ForeignPageUrlSnafu, InvalidPageUrlSnafu,
        MissingStudentSnafu, RosterError, RosterResult, SendRequestSnafu, UnexpectedStatusSnafu,
    },
};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use std::{sync::Arc, time::Duration};
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct StudentsApi {
    http: Client,
    base_url: Arc<Url>,
}

impl StudentsApi {
    pub fn new(config: &ApiConfig) -> RosterResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(config.timeout()))
            .build()
            .context(BuildHttpClientSnafu)?;

        Ok(Self {
            http,
            base_url: Arc::new(config.base_url().clone()),
        })
    }

    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = (*self.base_url).clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push("");
        }
        url
    }

    pub async fn list_students(
        &self,
        search: &str,
        ordering: SortOrder,
    ) -> RosterResult<Page<Student>> {
        let url = self.url_for(&["students"]);
        let ordering = ordering.to_string();
        debug!(%url, search, %ordering, "Listing students");

        let request = self
            .http
            .get(url.clone())
            .query(&[("search", search), ("ordering", ordering.as_str())]);
        self.fetch_json(request, &url).await
    }

    pub async fn follow_page(&self, page_url: &str) -> RosterResult<Page<Student>> {
        let url = Url::parse(page_url).context(InvalidPageUrlSnafu {
            original: page_url,
        })?;
        snafu::ensure!(
            url.origin() == self.base_url.origin(),
            ForeignPageUrlSnafu { url: page_url }
        );
        debug!(%url, "Following students page");

        self.fetch_json(self.http.get(url.clone()), &url).await
    }

    pub async fn get_student(&self, id: &str) -> RosterResult<Student> {
        let url = self.url_for(&["students", id]);
        debug!(%url, "Getting student");

        match self.fetch_json(self.http.get(url.clone()), &url).await {
            Err(RosterError::UnexpectedStatus { status, .. }) if status == StatusCode::NOT_FOUND => {
                MissingStudentSnafu { id }.fail()
            }
            other => other,
        }
    }

    pub async fn create_student(&self, new_student: &NewStudent) -> RosterResult<Student> {
        let url = self.url_for(&["students"]);
        debug!(%url, code = %new_student.code, "Creating student");

        let response = self
            .http
            .post(url.clone())
            .json(new_student)
            .send()
            .await
            .context(SendRequestSnafu { url: url.as_str() })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .context(DecodeResponseSnafu { url: url.as_str() });
        }

        let body = response
            .bytes()
            .await
            .context(DecodeResponseSnafu { url: url.as_str() })?;
        Err(RosterError::StudentRejected {
            errors: FieldErrors::from_response_body(status, &body),
        })
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> RosterResult<T> {
        let response = request
            .send()
            .await
            .context(SendRequestSnafu { url: url.as_str() })?;

        let status = response.status();
        snafu::ensure!(
            status.is_success(),
            UnexpectedStatusSnafu {
                status,
                url: url.as_str()
            }
        );

        response
            .json()
            .await
            .context(DecodeResponseSnafu { url: url.as_str() })
    }
}
