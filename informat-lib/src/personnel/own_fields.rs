use hyper::{client::connect::Connect, Body, Request};

use super::{model::OwnField, PersonnelDirectory};
use crate::{
    call::{Call, CallContext, HttpMethod},
    ids::{InstituteNumber, Schoolyear},
    mapper,
    processor::{CallError, DefaultConnector},
    query::{impl_has_query_params, HasQueryParams, QueryParams},
    Error,
};

/// Gets the custom fields of all employees of an institute.
#[derive(Debug, Clone)]
pub struct GetOwnFieldsCall<C = DefaultConnector> {
    context: CallContext<C>,
    query: QueryParams,
}

impl<C: Clone> GetOwnFieldsCall<C> {
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

impl<C> GetOwnFieldsCall<C> {
    pub fn set_schoolyear(mut self, schoolyear: Option<Schoolyear>) -> Self {
        self.set_query_param("schoolYear", Schoolyear::or_current(schoolyear));
        self
    }

    pub fn request(&self) -> Result<Request<Body>, CallError> {
        self.context.build_request(self)
    }
}

impl<C> GetOwnFieldsCall<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    /// Perform the API call.
    pub async fn send(self) -> Result<Vec<OwnField>, Error> {
        let response = self.context.perform_request(&self).await?;
        mapper::map_array(response).await
    }
}

impl<C> Call for GetOwnFieldsCall<C> {
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn endpoint(&self) -> String {
        "employees/ownfields".to_owned()
    }

    fn query(&self) -> Option<String> {
        self.query_string()
    }
}

impl_has_query_params!(GetOwnFieldsCall);
