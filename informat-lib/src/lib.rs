//! Client for the Informat personnel and student APIs.
//!
//! A [`Directory`](Directory) hands out one call per API operation. Calls are configured with
//! fluent setters and consumed by `send`, which performs the request and maps the JSON response
//! onto the models in [`personnel`] and [`students`].
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use informat_lib::{personnel::PersonnelDirectory, CallProcessor, InstituteNumber, Schoolyear};
//!
//! let processor = CallProcessor::new().access_token("...");
//! let personnel = PersonnelDirectory::new(processor);
//! let employees = personnel
//!     .get_employees(&InstituteNumber::new("012345")?, Some(Schoolyear::new(2023)))
//!     .set_structure("311")
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod call;
mod directory;
mod ids;
pub mod mapper;
mod processor;
mod query;
mod url_builder;

pub mod personnel;
pub mod students;

pub use call::{Call, CallContext, HttpMethod};
pub use directory::Directory;
pub use ids::{InstituteNumber, ParseIdError, Schoolyear};
pub use mapper::MapError;
pub use processor::{CallError, CallProcessor, DefaultConnector};
pub use query::{HasQueryParams, QueryParams};
pub use url_builder::{BaseUrl, UrlBuilder};

/// Error returned when sending a call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] CallError),
    #[error(transparent)]
    Mapping(#[from] MapError),
}

impl Error {
    /// The request could not be exchanged or the API answered with a non-2xx status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The response arrived but its body could not be mapped.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Error::Mapping(_))
    }
}
