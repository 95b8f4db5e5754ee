use hyper::{client::connect::Connect, header, Body, Method, Request, Response};

use crate::{
    directory::Directory,
    ids::InstituteNumber,
    processor::{CallError, CallProcessor},
    url_builder::UrlBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_hyper(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Description of a single API operation.
///
/// Implementors only describe the request, [`CallContext`](CallContext) turns that description
/// into an HTTP exchange.
pub trait Call {
    fn method(&self) -> HttpMethod;

    /// Path relative to the base URL of the directory, e.g. `employees`.
    fn endpoint(&self) -> String;

    fn body(&self) -> Option<String> {
        None
    }

    fn api_version(&self) -> Option<&str> {
        None
    }

    /// Encoded query string, without the leading `?`.
    fn query(&self) -> Option<String> {
        None
    }
}

/// What every call is bound to: a processor, a base URL and one institute number.
#[derive(Debug, Clone)]
pub struct CallContext<C> {
    processor: CallProcessor<C>,
    url_builder: UrlBuilder,
    institute_number: InstituteNumber,
}

impl<C: Clone> CallContext<C> {
    pub fn new<D>(directory: &D, institute_number: &InstituteNumber) -> Self
    where
        D: Directory<C> + ?Sized,
    {
        Self {
            processor: directory.call_processor().clone(),
            url_builder: directory.url_builder(),
            institute_number: institute_number.clone(),
        }
    }
}

impl<C> CallContext<C> {
    pub fn institute_number(&self) -> &InstituteNumber {
        &self.institute_number
    }

    pub fn build_request<T: Call + ?Sized>(&self, call: &T) -> Result<Request<Body>, CallError> {
        let url = self
            .url_builder
            .build(&call.endpoint(), call.query().as_deref())?;
        let mut builder = self.processor.build_request(
            &url,
            call.method(),
            &self.institute_number,
            call.api_version(),
        );

        let body = match call.body() {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };

        Ok(builder.body(body)?)
    }
}

impl<C> CallContext<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    pub async fn perform_request<T: Call + ?Sized>(
        &self,
        call: &T,
    ) -> Result<Response<Body>, CallError> {
        let request = self.build_request(call)?;
        self.processor.send(request).await
    }
}
