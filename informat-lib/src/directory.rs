use crate::{processor::CallProcessor, url_builder::BaseUrl, url_builder::UrlBuilder};

/// A domain of the API (personnel, students) that hands out calls.
pub trait Directory<C> {
    fn base_url(&self) -> &BaseUrl;

    fn call_processor(&self) -> &CallProcessor<C>;

    fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::new(self.base_url().clone())
    }
}
