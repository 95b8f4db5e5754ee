use hyper::{client::connect::Connect, Body, Request};
use uuid::Uuid;

use super::{model::Employee, PersonnelDirectory};
use crate::{
    call::{Call, CallContext, HttpMethod},
    ids::{InstituteNumber, Schoolyear},
    mapper,
    processor::{CallError, DefaultConnector},
    query::{impl_has_query_params, HasQueryParams, QueryParams},
    Error,
};

/// Gets all the employees for the combination institute number, school year and structure.
#[derive(Debug, Clone)]
pub struct GetEmployeesCall<C = DefaultConnector> {
    context: CallContext<C>,
    query: QueryParams,
}

impl<C: Clone> GetEmployeesCall<C> {
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

impl<C> GetEmployeesCall<C> {
    /// For current and future school years, limits the results to employees with an assignment
    /// within the school year or who are marked as active for the institute. For past school
    /// years, only employees with an assignment within that year are returned.
    ///
    /// Also used to determine the institutes of `first_service_school_group` and
    /// `first_service_school_community`. `None` means the current school year.
    pub fn set_schoolyear(mut self, schoolyear: Option<Schoolyear>) -> Self {
        self.set_query_param("schoolYear", Schoolyear::or_current(schoolyear));
        self
    }

    /// Additional restriction on the school year filter. Also refines `main_office`,
    /// `first_service_school` and `is_active` for the combination of institute and structure.
    ///
    /// Only the structures `311` and `312` are taken into account by the API.
    pub fn set_structure(mut self, structure: &str) -> Self {
        self.set_query_param("structure", structure);
        self
    }

    pub fn request(&self) -> Result<Request<Body>, CallError> {
        self.context.build_request(self)
    }
}

impl<C> GetEmployeesCall<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the API call.
    pub async fn send(self) -> Result<Vec<Employee>, Error> {
        let response = self.context.perform_request(&self).await?;
        mapper::map_array(response).await
    }
}

impl<C> Call for GetEmployeesCall<C> {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        "employees".to_owned()
    }

    fn api_version(&self) -> Option<&str> {
        Some("2")
    }

    fn query(&self) -> Option<String> {
        self.query_string()
    }
}

/// Gets a single employee by their person id.
#[derive(Debug, Clone)]
pub struct GetEmployeeCall<C = DefaultConnector> {
    context: CallContext<C>,
    person_id: Uuid,
    query: QueryParams,
}

impl<C: Clone> GetEmployeeCall<C> {
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

impl<C> GetEmployeeCall<C> {
    /// Only used to determine the institutes of `first_service_school_group` and
    /// `first_service_school_community`.
    pub fn set_schoolyear(mut self, schoolyear: Option<Schoolyear>) -> Self {
        self.set_query_param("schoolYear", Schoolyear::or_current(schoolyear));
        self
    }

    pub fn request(&self) -> Result<Request<Body>, CallError> {
        self.context.build_request(self)
    }
}

impl<C> GetEmployeeCall<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the API call.
    pub async fn send(self) -> Result<Employee, Error> {
        let response = self.context.perform_request(&self).await?;
        mapper::map_object(response).await
    }
}

impl<C> Call for GetEmployeeCall<C> {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        format!("employees/{}", self.person_id)
    }

    fn api_version(&self) -> Option<&str> {
        Some("2")
    }

    fn query(&self) -> Option<String> {
        self.query_string()
    }
}

impl_has_query_params!(GetEmployeesCall, GetEmployeeCall);
