use chrono::{DateTime, FixedOffset, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Options {
    /// Institute number to query (e.g. 012345)
    #[arg(long, short)]
    pub institute: String,
    /// School year to query (e.g. 2023 or 2023-24), defaults to the current one
    #[arg(long, short)]
    pub schoolyear: Option<String>,
    /// Bearer token to authenticate with
    #[arg(long)]
    pub token: Option<String>,
    /// Base URL overriding the production API
    #[arg(long)]
    pub base_url: Option<String>,
    /// Format to output data
    #[arg(long, value_enum, default_value_t = DataFormat::Json)]
    pub format: DataFormat,
    /// Pretty print the output
    #[arg(long)]
    pub pretty: bool,
    /// Log requests and responses to stderr
    #[arg(long, short)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the employees of the institute
    Employees {
        /// Restrict to a structure (311 or 312)
        #[arg(long)]
        structure: Option<String>,
    },
    /// Show a single employee
    Employee { person_id: Uuid },
    /// List the custom fields of all employees
    OwnFields,
    /// List interruptions, of everyone or of a single employee
    Interruptions {
        #[arg(long)]
        person: Option<Uuid>,
        #[arg(long)]
        structure: Option<String>,
    },
    /// List diplomas, of everyone or of a single employee
    Diplomas {
        #[arg(long)]
        person: Option<Uuid>,
        #[arg(long)]
        structure: Option<String>,
    },
    /// List the students of the institute
    Students {
        /// Only students with a registration on this date (YYYY-MM-DD)
        #[arg(long)]
        refdate: Option<NaiveDate>,
        /// Only students changed since this moment (RFC 3339)
        #[arg(long, value_parser = parse_datetime)]
        changed_since: Option<DateTime<FixedOffset>>,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DataFormat {
    Json,
}

fn parse_datetime(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s)
}
