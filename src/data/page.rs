use serde::Deserialize;
use std::num::NonZeroU64;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

impl<T> Page<T> {
    pub fn current_page(&self) -> u64 {
        self.current_page
            .filter(|page| *page > 0)
            .unwrap_or_else(|| infer_current_page(self.next.as_deref(), self.previous.as_deref()))
    }

    pub fn total_pages(&self, page_size: NonZeroU64) -> u64 {
        self.count.div_ceil(page_size.get()).max(1)
    }
}

enum PageParam {
    Absent,
    Page(u64),
    Unreadable,
}

fn page_param(raw: &str) -> PageParam {
    let Ok(url) = Url::parse(raw) else {
        return PageParam::Unreadable;
    };

    match url.query_pairs().find(|(key, _)| key == "page") {
        None => PageParam::Absent,
        Some((_, value)) => value
            .parse()
            .map_or(PageParam::Unreadable, PageParam::Page),
    }
}

// a `previous` without `page` links to the first page
pub fn infer_current_page(next: Option<&str>, previous: Option<&str>) -> u64 {
    if let Some(previous) = previous {
        return match page_param(previous) {
            PageParam::Absent => 2,
            PageParam::Page(page) => page.saturating_add(1),
            PageParam::Unreadable => 1,
        };
    }

    if let Some(next) = next {
        return match page_param(next) {
            PageParam::Page(page) => page.saturating_sub(1).max(1),
            PageParam::Absent | PageParam::Unreadable => 1,
        };
    }

    1
}
