//! Dataset kinds, positional column layouts, and filename routing.
//!
//! Upload files carry no header row, so each dataset kind assigns a fixed
//! positional layout to incoming fields. The layouts, minimum arities, and
//! filename markers live in one data-driven table rather than per-dataset
//! code paths.

use crate::domain::error::Error;

/// One ingestable dataset. Determines column layout and normalization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Department,
    Job,
    Employee,
}

/// Positional layout of one dataset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetLayout {
    kind: DatasetKind,
    /// Filename substring that routes an upload to this dataset.
    filename_marker: &'static str,
    /// Positional headers assigned to headerless rows.
    columns: &'static [&'static str],
}

impl DatasetLayout {
    /// Positional headers for this dataset.
    pub const fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Minimum number of fields a row must carry.
    pub const fn arity(&self) -> usize {
        self.columns.len()
    }
}

const DEPARTMENT_LAYOUT: DatasetLayout = DatasetLayout {
    kind: DatasetKind::Department,
    filename_marker: "departments",
    columns: &["id", "department"],
};

const JOB_LAYOUT: DatasetLayout = DatasetLayout {
    kind: DatasetKind::Job,
    filename_marker: "jobs",
    columns: &["id", "job"],
};

const EMPLOYEE_LAYOUT: DatasetLayout = DatasetLayout {
    kind: DatasetKind::Employee,
    filename_marker: "employees",
    columns: &["id", "name", "hired_at", "department_id", "job_id"],
};

/// Routing table, in routing priority order.
const LAYOUTS: &[DatasetLayout] = &[DEPARTMENT_LAYOUT, JOB_LAYOUT, EMPLOYEE_LAYOUT];

impl DatasetKind {
    /// Layout describing this dataset's positional columns.
    pub const fn layout(self) -> &'static DatasetLayout {
        match self {
            Self::Department => &DEPARTMENT_LAYOUT,
            Self::Job => &JOB_LAYOUT,
            Self::Employee => &EMPLOYEE_LAYOUT,
        }
    }

    /// Route an uploaded filename to a dataset by substring match.
    ///
    /// Returns `None` when no marker matches; the caller decides how to
    /// surface an unrecognized upload.
    pub fn from_filename(name: &str) -> Option<Self> {
        LAYOUTS
            .iter()
            .find(|layout| name.contains(layout.filename_marker))
            .map(|layout| layout.kind)
    }

    /// Reject rows shorter than the layout. Excess fields are ignored.
    pub fn check_arity(self, field_count: usize) -> Result<(), Error> {
        let expected = self.layout().arity();
        if field_count < expected {
            return Err(Error::schema_mismatch(format!(
                "{self} row has {field_count} fields, expected at least {expected}"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Department => "department",
            Self::Job => "job",
            Self::Employee => "employee",
        };
        write!(f, "{name}")
    }
}
