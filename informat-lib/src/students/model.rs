//! Response models of the students API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "persoonId")]
    pub person_id: Uuid,
    #[serde(rename = "pPersoon")]
    pub internal_id: Option<i64>,
    #[serde(rename = "stamnr")]
    pub registration_number: Option<String>,
    #[serde(rename = "naam")]
    pub last_name: String,
    #[serde(rename = "voornaam")]
    pub first_name: String,
    #[serde(rename = "geslacht")]
    pub gender: Option<String>,
    #[serde(rename = "geboortedatum")]
    pub date_of_birth: Option<NaiveDateTime>,
    #[serde(rename = "rijksregisternr")]
    pub national_register_number: Option<String>,
    #[serde(rename = "nationaliteit")]
    pub nationality: Option<String>,
    #[serde(rename = "inschrijvingen", default)]
    pub registrations: Vec<Registration>,
}

/// Enrolment of a student in an institute for a period of time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "inschrijvingsId")]
    pub id: Uuid,
    #[serde(rename = "schooljaar")]
    pub schoolyear: Option<String>,
    #[serde(rename = "instelnr")]
    pub institute_number: Option<String>,
    #[serde(rename = "begindatum")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(rename = "einddatum")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(rename = "klascode")]
    pub class_code: Option<String>,
}
