//! Normalized records ready for persistence.
//!
//! Source CSV id columns are discarded; the store assigns identity.

use crate::domain::dataset::DatasetKind;

/// A department to insert. The name passes through unchanged, empty allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
}

/// A job to insert. The title passes through unchanged, empty allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
}

/// A hired employee to insert.
///
/// `hired_at` is opaque text: no date parsing happens at ingestion time.
/// `department_id`/`job_id` are never absent; unresolved references carry the
/// sentinel `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub hired_at: String,
    pub department_id: i32,
    pub job_id: i32,
}

/// One normalized record of any dataset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Department(NewDepartment),
    Job(NewJob),
    Employee(NewEmployee),
}

impl Record {
    /// Dataset kind this record belongs to.
    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Department(_) => DatasetKind::Department,
            Self::Job(_) => DatasetKind::Job,
            Self::Employee(_) => DatasetKind::Employee,
        }
    }
}
