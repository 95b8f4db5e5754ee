use hyper::{client::connect::Connect, Body, Request};
use uuid::Uuid;

use super::{model::Interruption, PersonnelDirectory};
use crate::{
    call::{Call, CallContext, HttpMethod},
    ids::{InstituteNumber, Schoolyear},
    mapper,
    processor::{CallError, DefaultConnector},
    query::{impl_has_query_params, HasQueryParams, QueryParams},
    Error,
};

/// Gets all the interruptions for the combination institute number, school year and structure.
#[derive(Debug, Clone)]
pub struct GetInterruptionsCall<C = DefaultConnector> {
    context: CallContext<C>,
    query: QueryParams,
}

impl<C: Clone> GetInterruptionsCall<C> {
    pub(crate) fn new(
        directory: &PersonnelDirectory<C>,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> Self {
        Self {
            context: CallContext::new(directory, institute_number),
            query: QueryParams::new(),
        }
        .set_schoolyear(schoolyear)
    }
}

impl<C> GetInterruptionsCall<C> {
    pub fn set_schoolyear(mut self, schoolyear: Option<Schoolyear>) -> Self {
        self.set_query_param("schoolYear", Schoolyear::or_current(schoolyear));
        self
    }

    pub fn set_structure(mut self, structure: &str) -> Self {
        self.set_query_param("structure", structure);
        self
    }

    pub fn request(&self) -> Result<Request<Body>, CallError> {
        self.context.build_request(self)
    }
}

impl<C> GetInterruptionsCall<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the API call.
    pub async fn send(self) -> Result<Vec<Interruption>, Error> {
        let response = self.context.perform_request(&self).await?;
        mapper::map_array(response).await
    }
}

impl<C> Call for GetInterruptionsCall<C> {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        "employees/interruptions".to_owned()
    }

    fn query(&self) -> Option<String> {
        self.query_string()
    }
}

/// Gets the interruptions of one employee for the combination institute number, school year and
/// structure.
#[derive(Debug, Clone)]
pub struct GetInterruptionsForEmployeeCall<C = DefaultConnector> {
    context: CallContext<C>,
    person_id: Uuid,
    query: QueryParams,
}

impl<C: Clone> GetInterruptionsForEmployeeCall<C> {
    pub(crate) fn new(
        directory: &PersonnelDirectory<C>,
        institute_number: &InstituteNumber,
        person_id: Uuid,
        schoolyear: Option<Schoolyear>,
    ) -> Self {
        Self {
            context: CallContext::new(directory, institute_number),
            person_id,
            query: QueryParams::new(),
        }
        .set_schoolyear(schoolyear)
    }
}

impl<C> GetInterruptionsForEmployeeCall<C> {
    pub fn set_schoolyear(mut self, schoolyear: Option<Schoolyear>) -> Self {
        self.set_query_param("schoolYear", Schoolyear::or_current(schoolyear));
        self
    }

    pub fn set_structure(mut self, structure: &str) -> Self {
        self.set_query_param("structure", structure);
        self
    }

    pub fn request(&self) -> Result<Request<Body>, CallError> {
        self.context.build_request(self)
    }
}

impl<C> GetInterruptionsForEmployeeCall<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the API call.
    pub async fn send(self) -> Result<Vec<Interruption>, Error> {
        let response = self.context.perform_request(&self).await?;
        mapper::map_array(response).await
    }
}

impl<C> Call for GetInterruptionsForEmployeeCall<C> {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        format!("employees/{}/interruptions", self.person_id)
    }

    fn query(&self) -> Option<String> {
        self.query_string()
    }
}

impl_has_query_params!(GetInterruptionsCall, GetInterruptionsForEmployeeCall);
