use url::Url;

use crate::processor::CallError;

const PERSONNEL_URL: &str = "https://personeelsapi.informatsoftware.be/";
const STUDENTS_URL: &str = "https://leerlingenapi.informatsoftware.be/";

/// Root URL of one of the Informat APIs.
///
/// Use [`BaseUrl::Raw`](BaseUrl::Raw) to target another environment, such as a test instance or
/// a local mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrl {
    Personnel,
    Students,
    Raw(String),
}

impl BaseUrl {
    pub fn as_str(&self) -> &str {
        match self {
            BaseUrl::Personnel => PERSONNEL_URL,
            BaseUrl::Students => STUDENTS_URL,
            BaseUrl::Raw(url) => url,
        }
    }
}

/// Joins a [`BaseUrl`] with an endpoint path and query string.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: BaseUrl,
}

impl UrlBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn build(&self, endpoint: &str, query: Option<&str>) -> Result<Url, CallError> {
        let base = self.base_url.as_str();
        // Without a trailing slash `join` would replace the last path segment of the base.
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };

        let mut url = base.join(endpoint.trim_start_matches('/'))?;
        url.set_query(query.filter(|query| !query.is_empty()));
        Ok(url)
    }
}
