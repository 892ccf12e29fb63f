pub mod check;
pub mod connector;
pub mod error;
pub mod report;

pub use check::run_check;
pub use connector::{AzureConnector, Connector};
pub use error::{AbortError, SubTestFailure};
pub use report::{CheckReport, Outcome, SubTestReport};
