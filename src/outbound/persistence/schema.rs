//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Departments referenced by `employee.department_id`.
    department (id) {
        /// Primary key assigned by the store.
        id -> Integer,
        /// Department name, taken verbatim from the upload. The SQL column
        /// shares the table's name, so the Rust side calls it `name`.
        #[sql_name = "department"]
        name -> Text,
    }
}

diesel::table! {
    /// Jobs referenced by `employee.job_id`.
    job (id) {
        /// Primary key assigned by the store.
        id -> Integer,
        /// Job title, taken verbatim from the upload. The SQL column shares
        /// the table's name, so the Rust side calls it `title`.
        #[sql_name = "job"]
        title -> Text,
    }
}

diesel::table! {
    /// Hired employees.
    employee (id) {
        /// Primary key assigned by the store.
        id -> Integer,
        /// Employee name, taken verbatim from the upload.
        name -> Text,
        /// Raw hire timestamp; interpreted only by report queries.
        hired_at -> Text,
        /// Referenced department, or the sentinel 0.
        department_id -> Integer,
        /// Referenced job, or the sentinel 0.
        job_id -> Integer,
    }
}

diesel::allow_tables_to_appear_in_same_query!(department, employee, job);
