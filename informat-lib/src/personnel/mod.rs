//! Calls of the personnel API.

mod diplomas;
mod employees;
mod interruptions;
mod model;
mod own_fields;

pub use diplomas::{GetDiplomasCall, GetDiplomasForEmployeeCall};
pub use employees::{GetEmployeeCall, GetEmployeesCall};
pub use interruptions::{GetInterruptionsCall, GetInterruptionsForEmployeeCall};
pub use model::{
    Address, Assignment, BankAccount, Diploma, Email, Employee, Interruption, OwnField,
    PhoneNumber,
};
pub use own_fields::GetOwnFieldsCall;

use uuid::Uuid;

use crate::{
    directory::Directory,
    ids::{InstituteNumber, Schoolyear},
    processor::{CallProcessor, DefaultConnector},
    url_builder::BaseUrl,
};

/// Entry point of the personnel API.
///
/// Every operation takes `None` as school year to mean the current one.
#[derive(Debug, Clone)]
pub struct PersonnelDirectory<C = DefaultConnector> {
    processor: CallProcessor<C>,
    base_url: BaseUrl,
}

impl<C> PersonnelDirectory<C> {
    pub fn new(processor: CallProcessor<C>) -> Self {
        Self::with_base_url(processor, BaseUrl::Personnel)
    }

    pub fn with_base_url(processor: CallProcessor<C>, base_url: BaseUrl) -> Self {
        Self {
            processor,
            base_url,
        }
    }
}

impl<C: Clone> PersonnelDirectory<C> {
    /// Gets all the employees for the combination institute number, school year and structure.
    pub fn get_employees(
        &self,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> GetEmployeesCall<C> {
        GetEmployeesCall::new(self, institute_number, schoolyear)
    }

    /// Gets an employee by their person id.
    ///
    /// The school year is only used to determine the institutes of
    /// `first_service_school_group` and `first_service_school_community`.
    pub fn get_employee(
        &self,
        institute_number: &InstituteNumber,
        person_id: Uuid,
        schoolyear: Option<Schoolyear>,
    ) -> GetEmployeeCall<C> {
        GetEmployeeCall::new(self, institute_number, person_id, schoolyear)
    }

    pub fn get_own_fields(
        &self,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> GetOwnFieldsCall<C> {
        GetOwnFieldsCall::new(self, institute_number, schoolyear)
    }

    /// Gets all the interruptions for the combination institute number, school year and
    /// structure.
    pub fn get_interruptions(
        &self,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> GetInterruptionsCall<C> {
        GetInterruptionsCall::new(self, institute_number, schoolyear)
    }

    pub fn get_interruptions_for_employee(
        &self,
        institute_number: &InstituteNumber,
        person_id: Uuid,
        schoolyear: Option<Schoolyear>,
    ) -> GetInterruptionsForEmployeeCall<C> {
        GetInterruptionsForEmployeeCall::new(self, institute_number, person_id, schoolyear)
    }

    /// Gets all the diplomas for the combination institute number, school year and structure.
    pub fn get_diplomas(
        &self,
        institute_number: &InstituteNumber,
        schoolyear: Option<Schoolyear>,
    ) -> GetDiplomasCall<C> {
        GetDiplomasCall::new(self, institute_number, schoolyear)
    }

    pub fn get_diplomas_for_employee(
        &self,
        institute_number: &InstituteNumber,
        person_id: Uuid,
        schoolyear: Option<Schoolyear>,
    ) -> GetDiplomasForEmployeeCall<C> {
        GetDiplomasForEmployeeCall::new(self, institute_number, person_id, schoolyear)
    }
}

impl<C> Directory<C> for PersonnelDirectory<C> {
    fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    fn call_processor(&self) -> &CallProcessor<C> {
        &self.processor
    }
}
