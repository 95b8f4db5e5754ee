use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use chrono::{NaiveDate, NaiveDateTime};
use hyper::{
    client::HttpConnector,
    service::{make_service_fn, service_fn},
    Body, Client, Request, Response, Server, StatusCode,
};
use informat_lib::{
    personnel::PersonnelDirectory, students::StudentsDirectory, BaseUrl, CallError,
    CallProcessor, Error, InstituteNumber, MapError, Schoolyear,
};
use uuid::Uuid;

const EMPLOYEES: &str = include_str!("fixtures/employees.json");
const EMPLOYEE: &str = include_str!("fixtures/employee.json");
const OWN_FIELDS: &str = include_str!("fixtures/own_fields.json");
const INTERRUPTIONS: &str = include_str!("fixtures/interruptions.json");
const DIPLOMAS: &str = include_str!("fixtures/diplomas.json");
const STUDENTS: &str = include_str!("fixtures/students.json");

const PERSON_ID: &str = "6f1f7c4e-2b0a-4d8e-9a55-0c4b1d2e3f40";

/// A request as seen by the mock API.
#[derive(Debug, Clone)]
struct Received {
    path_and_query: String,
    institute_number: Option<String>,
    api_version: Option<String>,
    authorization: Option<String>,
}

/// Canned responses keyed by request path.
type Routes = Vec<(String, StatusCode, &'static str)>;

fn route(
    path: impl Into<String>,
    status: StatusCode,
    body: &'static str,
) -> (String, StatusCode, &'static str) {
    (path.into(), status, body)
}

struct MockApi {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockApi {
    fn start(routes: Routes) -> Self {
        let routes = Arc::new(routes);
        let received = Arc::new(Mutex::new(Vec::new()));

        let make_service = {
            let received = received.clone();
            make_service_fn(move |_| {
                let routes = routes.clone();
                let received = received.clone();
                async move {
                    Ok::<_, Infallible>(service_fn(move |request: Request<Body>| {
                        let response = respond(&routes, &received, request);
                        async move { Ok::<_, Infallible>(response) }
                    }))
                }
            })
        };

        let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
        let addr = server.local_addr();
        tokio::spawn(server);

        Self { addr, received }
    }

    fn base_url(&self) -> BaseUrl {
        BaseUrl::Raw(format!("http://{}/", self.addr))
    }

    fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

fn respond(
    routes: &Routes,
    received: &Mutex<Vec<Received>>,
    request: Request<Body>,
) -> Response<Body> {
    let header = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    };
    received.lock().unwrap().push(Received {
        path_and_query: request
            .uri()
            .path_and_query()
            .map(ToString::to_string)
            .unwrap_or_default(),
        institute_number: header("instituteno"),
        api_version: header("api-version"),
        authorization: header("authorization"),
    });

    let (status, body) = routes
        .iter()
        .find(|(path, _, _)| path == request.uri().path())
        .map(|(_, status, body)| (*status, *body))
        .unwrap_or((StatusCode::NOT_FOUND, "no such route"));

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn processor() -> CallProcessor<HttpConnector> {
    CallProcessor::with_client(Client::new())
}

fn institute() -> InstituteNumber {
    InstituteNumber::new("12345").unwrap()
}

fn person() -> Uuid {
    Uuid::parse_str(PERSON_ID).unwrap()
}

fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn get_employees() -> Result<(), Error> {
    let api = MockApi::start(vec![route("/employees", StatusCode::OK, EMPLOYEES)]);
    let personnel = PersonnelDirectory::with_base_url(processor(), api.base_url());

    let employees = personnel
        .get_employees(&institute(), Some(Schoolyear::new(2023)))
        .set_structure("311")
        .send()
        .await?;

    let received = api.received();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].path_and_query,
        "/employees?schoolYear=2023&structure=311"
    );
    assert_eq!(received[0].institute_number.as_deref(), Some("12345"));
    assert_eq!(received[0].api_version.as_deref(), Some("2"));
    assert_eq!(received[0].authorization, None);

    assert_eq!(employees.len(), 2);
    let an = &employees[0];
    assert_eq!(an.person_id, person());
    assert_eq!(an.internal_id, Some(10452));
    assert_eq!(an.last_name, "Peeters");
    assert_eq!(an.first_name, "An");
    assert_eq!(an.gender.as_deref(), Some("V"));
    assert_eq!(an.date_of_birth, Some(datetime(1984, 3, 12)));
    assert_eq!(an.national_register_number.as_deref(), Some("84031212345"));
    assert!(an.is_active);
    assert_eq!(an.main_office.as_deref(), Some("Leraar secundair onderwijs"));
    assert_eq!(an.first_service_school.as_deref(), Some("012345"));
    assert_eq!(an.first_service_school_group.as_deref(), Some("112233"));
    assert_eq!(an.first_service_school_community, None);
    assert_eq!(an.addresses.len(), 1);
    assert_eq!(an.addresses[0].street.as_deref(), Some("Naamsestraat"));
    assert_eq!(an.addresses[0].box_number.as_deref(), Some("B"));
    assert_eq!(an.addresses[0].postal_code.as_deref(), Some("3000"));
    assert_eq!(an.emails[0].email, "an.peeters@example.be");
    assert_eq!(an.phone_numbers[0].kind.as_deref(), Some("gsm"));
    assert_eq!(an.bank_accounts[0].iban, "BE68539007547034");
    assert_eq!(an.assignments[0].schoolyear.as_deref(), Some("2023-24"));
    assert_eq!(an.assignments[0].end_date, Some(datetime(2024, 6, 30)));

    let bart = &employees[1];
    assert_eq!(bart.last_name, "Janssens");
    assert!(!bart.is_active);
    assert!(bart.addresses.is_empty());
    assert_eq!(bart.date_of_birth, None);

    Ok(())
}

#[tokio::test]
async fn get_employee() -> Result<(), Error> {
    let api = MockApi::start(vec![route(
        "/employees/0a7d2c51-83b4-4f0e-b2c9-5e6f7a8b9c01",
        StatusCode::OK,
        EMPLOYEE,
    )]);
    let personnel = PersonnelDirectory::with_base_url(processor(), api.base_url());
    let person_id = Uuid::parse_str("0a7d2c51-83b4-4f0e-b2c9-5e6f7a8b9c01").unwrap();

    let employee = personnel
        .get_employee(&institute(), person_id, Some(Schoolyear::new(2022)))
        .send()
        .await?;

    assert_eq!(
        api.received()[0].path_and_query,
        "/employees/0a7d2c51-83b4-4f0e-b2c9-5e6f7a8b9c01?schoolYear=2022"
    );
    assert_eq!(employee.person_id, person_id);
    assert_eq!(employee.internal_id, Some(20871));
    assert_eq!(employee.first_name, "Bart");
    assert_eq!(employee.emails[0].kind, None);

    Ok(())
}

#[tokio::test]
async fn get_own_fields() -> Result<(), Error> {
    let api = MockApi::start(vec![route("/employees/ownfields", StatusCode::OK, OWN_FIELDS)]);
    let personnel = PersonnelDirectory::with_base_url(processor(), api.base_url());

    let fields = personnel
        .get_own_fields(&institute(), Some(Schoolyear::new(2023)))
        .send()
        .await?;

    let received = api.received();
    assert_eq!(received[0].path_and_query, "/employees/ownfields?schoolYear=2023");
    assert_eq!(received[0].api_version, None);

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].person_id, person());
    assert_eq!(fields[0].name, "Fietsvergoeding");
    assert_eq!(fields[0].value.as_deref(), Some("ja"));
    assert_eq!(fields[0].data_type.as_deref(), Some("boolean"));
    assert_eq!(fields[0].section.as_deref(), Some("Vergoedingen"));
    assert_eq!(fields[1].value, None);

    Ok(())
}

#[tokio::test]
async fn get_interruptions() -> Result<(), Error> {
    let api = MockApi::start(vec![
        route("/employees/interruptions", StatusCode::OK, INTERRUPTIONS),
        route(
            format!("/employees/{PERSON_ID}/interruptions"),
            StatusCode::OK,
            INTERRUPTIONS,
        ),
    ]);
    let personnel = PersonnelDirectory::with_base_url(processor(), api.base_url());
    let schoolyear = Some(Schoolyear::new(2023));

    let all = personnel
        .get_interruptions(&institute(), schoolyear)
        .send()
        .await?;
    let own = personnel
        .get_interruptions_for_employee(&institute(), person(), schoolyear)
        .set_structure("312")
        .send()
        .await?;

    let received = api.received();
    assert_eq!(
        received[0].path_and_query,
        "/employees/interruptions?schoolYear=2023"
    );
    assert_eq!(
        received[1].path_and_query,
        format!("/employees/{PERSON_ID}/interruptions?schoolYear=2023&structure=312")
    );

    assert_eq!(all, own);
    let interruption = &all[0];
    assert_eq!(interruption.person_id, person());
    assert_eq!(interruption.code.as_deref(), Some("ZIEK"));
    assert_eq!(interruption.description.as_deref(), Some("Ziekteverlof"));
    assert_eq!(interruption.start_date, Some(datetime(2023, 11, 6)));
    assert_eq!(interruption.end_date, Some(datetime(2023, 11, 17)));
    assert_eq!(interruption.institute_number.as_deref(), Some("012345"));

    Ok(())
}

#[tokio::test]
async fn get_diplomas() -> Result<(), Error> {
    let api = MockApi::start(vec![
        route("/employees/diplomas", StatusCode::OK, DIPLOMAS),
        route(format!("/employees/{PERSON_ID}/diplomas"), StatusCode::OK, "[]"),
    ]);
    let personnel = PersonnelDirectory::with_base_url(processor(), api.base_url());

    let diplomas = personnel
        .get_diplomas(&institute(), Some(Schoolyear::new(2023)))
        .send()
        .await?;
    let none = personnel
        .get_diplomas_for_employee(&institute(), person(), Some(Schoolyear::new(2023)))
        .send()
        .await?;

    assert_eq!(diplomas.len(), 1);
    assert_eq!(diplomas[0].code.as_deref(), Some("MA-WIS"));
    assert_eq!(diplomas[0].level.as_deref(), Some("master"));
    assert_eq!(diplomas[0].date_obtained, Some(datetime(2007, 7, 2)));
    assert_eq!(diplomas[0].institution.as_deref(), Some("KU Leuven"));
    assert!(none.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_students() -> Result<(), Error> {
    let api = MockApi::start(vec![route("/1/students", StatusCode::OK, STUDENTS)]);
    let students = StudentsDirectory::with_base_url(processor().access_token("token"), api.base_url());

    let students = students
        .get_students(&institute(), Some(Schoolyear::new(2023)))
        .set_reference_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        .send()
        .await?;

    let received = api.received();
    assert_eq!(
        received[0].path_and_query,
        "/1/students?schoolYear=2023&refdate=2024-01-31"
    );
    assert_eq!(received[0].authorization.as_deref(), Some("Bearer token"));

    assert_eq!(students.len(), 1);
    let lotte = &students[0];
    assert_eq!(lotte.registration_number.as_deref(), Some("20230042"));
    assert_eq!(lotte.first_name, "Lotte");
    assert_eq!(lotte.date_of_birth, Some(datetime(2010, 5, 12)));
    assert_eq!(lotte.registrations.len(), 1);
    assert_eq!(lotte.registrations[0].class_code.as_deref(), Some("2A"));
    assert_eq!(lotte.registrations[0].end_date, None);

    Ok(())
}

#[tokio::test]
async fn empty_students_property_is_empty_result() -> Result<(), Error> {
    let api = MockApi::start(vec![route("/1/students", StatusCode::OK, r#"{"students":[]}"#)]);
    let students = StudentsDirectory::with_base_url(processor(), api.base_url())
        .get_students(&institute(), None)
        .send()
        .await?;

    assert!(students.is_empty());

    Ok(())
}

#[tokio::test]
async fn missing_students_property_is_mapping_error() {
    let api = MockApi::start(vec![route("/1/students", StatusCode::OK, r#"{"pupils":[]}"#)]);
    let error = StudentsDirectory::with_base_url(processor(), api.base_url())
        .get_students(&institute(), None)
        .send()
        .await
        .unwrap_err();

    assert!(error.is_mapping());
    assert!(matches!(error, Error::Mapping(MapError::MissingProperty(_))));
}

#[tokio::test]
async fn malformed_json_is_mapping_error() {
    let api = MockApi::start(vec![route("/employees", StatusCode::OK, "<html>oops</html>")]);
    let error = PersonnelDirectory::with_base_url(processor(), api.base_url())
        .get_employees(&institute(), None)
        .send()
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Mapping(MapError::InvalidJson(_))));
}

#[tokio::test]
async fn unsuccessful_status_is_transport_error() {
    let api = MockApi::start(vec![route(
        "/employees",
        StatusCode::UNAUTHORIZED,
        r#"{"message":"invalid token"}"#,
    )]);
    let error = PersonnelDirectory::with_base_url(processor(), api.base_url())
        .get_employees(&institute(), None)
        .send()
        .await
        .unwrap_err();

    assert!(error.is_transport());
    match error {
        Error::Transport(CallError::UnexpectedStatus { status, body }) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(body.contains("invalid token"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_api_is_transport_error() {
    // Bind and drop a listener to get a port nobody listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let error = PersonnelDirectory::with_base_url(processor(), BaseUrl::Raw(format!("http://{addr}")))
        .get_employees(&institute(), None)
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        Error::Transport(CallError::HttpRequestFailed(_))
    ));
}
