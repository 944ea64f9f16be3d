//! Transport-agnostic ingestion and reporting core.
//!
//! The domain owns the dataset layouts, record normalization rules, and the
//! chunked batch committer. Inbound adapters call it through the driving
//! port in [`ports`]; persistence is reached only through driven ports.

pub mod csv_source;
pub mod dataset;
pub mod error;
pub mod ingestion;
pub mod normalize;
pub mod ports;
pub mod records;

pub use self::dataset::DatasetKind;
pub use self::error::{Error, ErrorCode};
pub use self::ingestion::{IngestionReport, IngestionService};
pub use self::records::{NewDepartment, NewEmployee, NewJob, Record};
