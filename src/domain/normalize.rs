//! Row normalization: mapped string fields into typed records.
//!
//! All malformed employee reference fields are coerced, not rejected: an
//! empty or non-numeric `department_id`/`job_id` becomes the sentinel `0`
//! ("no matching row identified during ingestion"). This is deliberately
//! lossy. Names, titles, and `hired_at` pass through unchanged, including
//! empty strings; `hired_at` is not parsed or validated here.

use csv::StringRecord;

use crate::domain::dataset::DatasetKind;
use crate::domain::error::Error;
use crate::domain::records::{NewDepartment, NewEmployee, NewJob, Record};

// Positions within each dataset layout (the leading source id is discarded).
const NAME_FIELD: usize = 1;
const EMPLOYEE_HIRED_AT_FIELD: usize = 2;
const EMPLOYEE_DEPARTMENT_ID_FIELD: usize = 3;
const EMPLOYEE_JOB_ID_FIELD: usize = 4;

/// Convert one raw row into a typed record for its dataset.
///
/// Fails only when the row is shorter than the dataset layout; excess fields
/// are ignored.
pub fn normalize_row(kind: DatasetKind, row: &StringRecord) -> Result<Record, Error> {
    kind.check_arity(row.len())?;
    let field = |index: usize| row.get(index).unwrap_or_default();

    let record = match kind {
        DatasetKind::Department => Record::Department(NewDepartment {
            name: field(NAME_FIELD).to_owned(),
        }),
        DatasetKind::Job => Record::Job(NewJob {
            title: field(NAME_FIELD).to_owned(),
        }),
        DatasetKind::Employee => Record::Employee(NewEmployee {
            name: field(NAME_FIELD).to_owned(),
            hired_at: field(EMPLOYEE_HIRED_AT_FIELD).to_owned(),
            department_id: coerce_reference(field(EMPLOYEE_DEPARTMENT_ID_FIELD)),
            job_id: coerce_reference(field(EMPLOYEE_JOB_ID_FIELD)),
        }),
    };
    Ok(record)
}

/// Parse a foreign-key field, substituting the sentinel `0` for anything
/// that is not an integer.
fn coerce_reference(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}
