//! Calls of the students API.

mod model;

pub use model::{Registration, Student};

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use hyper::{client::connect::Connect, Body, Request};

use crate::{
    call::{Call, CallContext, HttpMethod},
    directory::Directory,
    ids::{InstituteNumber, Schoolyear},
    mapper,
    processor::{CallError, CallProcessor, DefaultConnector},
    query::{impl_has_query_params, HasQueryParams, QueryParams},
    url_builder::BaseUrl,
    Error,
};

const STUDENTS_PROPERTY: &str = "students";
const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry point of the students API.
#[derive(Debug, Clone)]
pub struct StudentsDirectory<C = DefaultConnector> {
    processor: CallProcessor<C>,
    base_url: BaseUrl,
}

impl<C> StudentsDirectory<C> {
    pub fn new(processor: CallProcessor<C>) -> Self {
        Self::with_base_url(processor, BaseUrl::Students)
    }

    pub fn with_base_url(processor: CallProcessor<C>, base_url: BaseUrl) -> Self {
        Self {
            processor,
            base_url,
        }
    }
}

impl<C: Clone> StudentsDirectory<C> {
    /// Gets the students of an institute for a school year, `None` meaning the current one.
    pub fn get_students(
        &self,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> GetStudentsCall<C> {
        GetStudentsCall::new(self, institute_number, schoolyear)
    }
}

impl<C> Directory<C> for StudentsDirectory<C> {
    fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    fn call_processor(&self) -> &CallProcessor<C> {
        &self.processor
    }
}

#[derive(Debug, Clone)]
pub struct GetStudentsCall<C = DefaultConnector> {
    context: CallContext<C>,
    query: QueryParams,
}

impl<C: Clone> GetStudentsCall<C> {
    fn new(
        directory: &StudentsDirectory<C>,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> Self {
        let mut call = Self {
            context: CallContext::new(directory, institute_number),
            query: QueryParams::new(),
        };
        call.set_query_param("schoolYear", Schoolyear::or_current(schoolyear));
        call
    }
}

impl<C> GetStudentsCall<C> {
    /// Limits the results to students with a registration in which the reference date falls.
    ///
    /// The API clamps a reference date outside of the school year to its first or last day.
    pub fn set_reference_date(mut self, date: NaiveDate) -> Self {
        self.set_query_param("refdate", date.format(REFERENCE_DATE_FORMAT));
        self
    }

    /// Limits the results to students whose data changed since `date`.
    ///
    /// The API determines the change date from several levels of the response, so a student may
    /// show up because e.g. only one of their registrations changed.
    pub fn set_changed_since(mut self, date: DateTime<FixedOffset>) -> Self {
        self.set_query_param(
            "changedSince",
            date.to_rfc3339_opts(SecondsFormat::Secs, false),
        );
        self
    }

    pub fn request(&self) -> Result<Request<Body>, CallError> {
        self.context.build_request(self)
    }
}

impl<C> GetStudentsCall<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the API call.
    pub async fn send(self) -> Result<Vec<Student>, Error> {
        let response = self.context.perform_request(&self).await?;
        mapper::map_property_array(response, STUDENTS_PROPERTY).await
    }
}

impl<C> Call for GetStudentsCall<C> {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        "1/students".to_owned()
    }

    fn query(&self) -> Option<String> {
        self.query_string()
    }
}

impl_has_query_params!(GetStudentsCall);

#[cfg(test)]
mod tests {
    use hyper::{client::HttpConnector, Client};

    use super::*;

    fn call() -> GetStudentsCall<HttpConnector> {
        StudentsDirectory::new(CallProcessor::with_client(Client::new()))
            .get_students(&InstituteNumber::new("12345").unwrap(), Some(Schoolyear::new(2023)))
    }

    #[test]
    fn get_students_request() {
        let request = call().request().unwrap();

        assert_eq!(
            request.uri(),
            "https://leerlingenapi.informatsoftware.be/1/students?schoolYear=2023"
        );
        assert!(request.headers().get("api-version").is_none());
    }

    #[test]
    fn reference_date_is_rendered_as_is() {
        // Far outside of the 2023-24 school year, clamping is up to the API.
        let date = NaiveDate::from_ymd_opt(1999, 2, 3).unwrap();
        let request = call().set_reference_date(date).request().unwrap();

        assert_eq!(
            request.uri().query(),
            Some("schoolYear=2023&refdate=1999-02-03")
        );
    }

    #[test]
    fn changed_since_is_iso_8601() {
        let date = DateTime::parse_from_rfc3339("2023-09-01T08:30:00+02:00").unwrap();
        let request = call().set_changed_since(date).request().unwrap();

        assert_eq!(
            request.uri().query(),
            Some("schoolYear=2023&changedSince=2023-09-01T08%3A30%3A00%2B02%3A00")
        );
    }
}
