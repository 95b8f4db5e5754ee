//! Response models of the personnel API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member of the institute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub person_id: Uuid,
    #[serde(rename = "pPersoon")]
    pub internal_id: Option<i64>,
    #[serde(rename = "naam")]
    pub last_name: String,
    #[serde(rename = "voornaam")]
    pub first_name: String,
    #[serde(rename = "geslacht")]
    pub gender: Option<String>,
    #[serde(rename = "geboortedatum")]
    pub date_of_birth: Option<NaiveDateTime>,
    #[serde(rename = "geboorteplaats")]
    pub place_of_birth: Option<String>,
    #[serde(rename = "nationaliteit")]
    pub nationality: Option<String>,
    #[serde(rename = "rijksregisternr")]
    pub national_register_number: Option<String>,
    #[serde(rename = "stamnr")]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    /// Main office, determined per institute number and structure.
    #[serde(rename = "hoofdAmbt")]
    pub main_office: Option<String>,
    #[serde(rename = "eersteDienstSchool")]
    pub first_service_school: Option<String>,
    #[serde(rename = "eersteDienstScholengroep")]
    pub first_service_school_group: Option<String>,
    #[serde(rename = "eersteDienstScholengemeenschap")]
    pub first_service_school_community: Option<String>,
    #[serde(rename = "adressen", default)]
    pub addresses: Vec<Address>,
    #[serde(rename = "emailadressen", default)]
    pub emails: Vec<Email>,
    #[serde(rename = "telefoonnummers", default)]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(rename = "bankrekeningen", default)]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(rename = "opdrachten", default)]
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "straat")]
    pub street: Option<String>,
    #[serde(rename = "nr")]
    pub number: Option<String>,
    #[serde(rename = "bus")]
    pub box_number: Option<String>,
    #[serde(rename = "postcode")]
    pub postal_code: Option<String>,
    #[serde(rename = "gemeente")]
    pub city: Option<String>,
    #[serde(rename = "land")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub email: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(rename = "nummer")]
    pub number: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub iban: String,
    pub bic: Option<String>,
}

/// An assignment of an employee within an institute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "instelnr")]
    pub institute_number: Option<String>,
    #[serde(rename = "schooljaar")]
    pub schoolyear: Option<String>,
    #[serde(rename = "ambt")]
    pub office: Option<String>,
    #[serde(rename = "begindatum")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(rename = "einddatum")]
    pub end_date: Option<NaiveDateTime>,
}

/// A custom field ("eigen veld") defined by the institute, with its value for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnField {
    pub person_id: Uuid,
    #[serde(rename = "naam")]
    pub name: String,
    #[serde(rename = "waarde")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub data_type: Option<String>,
    #[serde(rename = "rubriek")]
    pub section: Option<String>,
}

/// A period in which an employee interrupted their assignment (leave, illness, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interruption {
    pub id: Uuid,
    pub person_id: Uuid,
    pub code: Option<String>,
    #[serde(rename = "omschrijving")]
    pub description: Option<String>,
    #[serde(rename = "begindatum")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(rename = "einddatum")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(rename = "instelnr")]
    pub institute_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diploma {
    pub id: Uuid,
    pub person_id: Uuid,
    pub code: Option<String>,
    #[serde(rename = "omschrijving")]
    pub description: Option<String>,
    #[serde(rename = "niveau")]
    pub level: Option<String>,
    #[serde(rename = "datumBehaald")]
    pub date_obtained: Option<NaiveDateTime>,
    #[serde(rename = "onderwijsinstelling")]
    pub institution: Option<String>,
}
