use clap::Parser;
use informat_lib::{
    personnel::PersonnelDirectory, students::StudentsDirectory, BaseUrl, CallProcessor,
    InstituteNumber, Schoolyear,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::options::{Command, DataFormat, Options};

mod options;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let args = Options::parse();
    setup_logging(args.verbose);

    let institute = InstituteNumber::new(&args.institute)?;
    let schoolyear = args
        .schoolyear
        .as_deref()
        .map(str::parse::<Schoolyear>)
        .transpose()?;

    let mut processor = CallProcessor::new();
    if let Some(token) = &args.token {
        processor = processor.access_token(token);
    }
    let base_url = |default: BaseUrl| {
        args.base_url
            .clone()
            .map(BaseUrl::Raw)
            .unwrap_or(default)
    };
    let personnel =
        PersonnelDirectory::with_base_url(processor.clone(), base_url(BaseUrl::Personnel));
    let students = StudentsDirectory::with_base_url(processor, base_url(BaseUrl::Students));

    debug!(command = ?args.command, %institute, "running command");
    let result = match args.command {
        Command::Employees { structure } => {
            let mut call = personnel.get_employees(&institute, schoolyear);
            if let Some(structure) = structure {
                call = call.set_structure(&structure);
            }
            render(&call.send().await?, &args.format, args.pretty)?
        }
        Command::Employee { person_id } => {
            let employee = personnel
                .get_employee(&institute, person_id, schoolyear)
                .send()
                .await?;
            render(&employee, &args.format, args.pretty)?
        }
        Command::OwnFields => {
            let fields = personnel
                .get_own_fields(&institute, schoolyear)
                .send()
                .await?;
            render(&fields, &args.format, args.pretty)?
        }
        Command::Interruptions { person, structure } => {
            let interruptions = match person {
                Some(person_id) => {
                    let mut call =
                        personnel.get_interruptions_for_employee(&institute, person_id, schoolyear);
                    if let Some(structure) = structure {
                        call = call.set_structure(&structure);
                    }
                    call.send().await?
                }
                None => {
                    let mut call = personnel.get_interruptions(&institute, schoolyear);
                    if let Some(structure) = structure {
                        call = call.set_structure(&structure);
                    }
                    call.send().await?
                }
            };
            render(&interruptions, &args.format, args.pretty)?
        }
        Command::Diplomas { person, structure } => {
            let diplomas = match person {
                Some(person_id) => {
                    let mut call =
                        personnel.get_diplomas_for_employee(&institute, person_id, schoolyear);
                    if let Some(structure) = structure {
                        call = call.set_structure(&structure);
                    }
                    call.send().await?
                }
                None => {
                    let mut call = personnel.get_diplomas(&institute, schoolyear);
                    if let Some(structure) = structure {
                        call = call.set_structure(&structure);
                    }
                    call.send().await?
                }
            };
            render(&diplomas, &args.format, args.pretty)?
        }
        Command::Students {
            refdate,
            changed_since,
        } => {
            let mut call = students.get_students(&institute, schoolyear);
            if let Some(date) = refdate {
                call = call.set_reference_date(date);
            }
            if let Some(date) = changed_since {
                call = call.set_changed_since(date);
            }
            render(&call.send().await?, &args.format, args.pretty)?
        }
    };
    println!("{result}");

    Ok(())
}

fn render<T: Serialize + ?Sized>(
    value: &T,
    format: &DataFormat,
    pretty: bool,
) -> Result<String, Error> {
    Ok(match format {
        DataFormat::Json => match pretty {
            true => serde_json::to_string_pretty(value)?,
            false => serde_json::to_string(value)?,
        },
    })
}

fn setup_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    CallFailed(#[from] informat_lib::Error),
    #[error(transparent)]
    InvalidId(#[from] informat_lib::ParseIdError),
    #[error(transparent)]
    JsonSerializeFailed(#[from] serde_json::Error),
}
