//! Diesel row models for the hiring tables.
//!
//! Insertable rows borrow from domain records for the duration of one chunk
//! insert; report rows are loaded by name from the hand-written SQL and
//! converted into domain report records at the adapter boundary.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};

use crate::domain::ports::{DepartmentHires, QuarterlyHires};

use super::schema::{department, employee, job};

#[derive(Debug, Insertable)]
#[diesel(table_name = department)]
pub struct NewDepartmentRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = job)]
pub struct NewJobRow<'a> {
    pub title: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = employee)]
pub struct NewEmployeeRow<'a> {
    pub name: &'a str,
    pub hired_at: &'a str,
    pub department_id: i32,
    pub job_id: i32,
}

/// One row of the quarterly hires report query.
#[derive(Debug, QueryableByName)]
pub struct QuarterlyHiresRow {
    #[diesel(sql_type = Text)]
    pub department: String,
    #[diesel(sql_type = Text)]
    pub job: String,
    #[diesel(sql_type = BigInt)]
    pub q1: i64,
    #[diesel(sql_type = BigInt)]
    pub q2: i64,
    #[diesel(sql_type = BigInt)]
    pub q3: i64,
    #[diesel(sql_type = BigInt)]
    pub q4: i64,
}

impl From<QuarterlyHiresRow> for QuarterlyHires {
    fn from(row: QuarterlyHiresRow) -> Self {
        Self {
            department: row.department,
            job: row.job,
            q1: row.q1,
            q2: row.q2,
            q3: row.q3,
            q4: row.q4,
        }
    }
}

/// One row of the above-average departments report query.
#[derive(Debug, QueryableByName)]
pub struct DepartmentHiresRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub department: String,
    #[diesel(sql_type = BigInt)]
    pub hired: i64,
}

impl From<DepartmentHiresRow> for DepartmentHires {
    fn from(row: DepartmentHiresRow) -> Self {
        Self {
            id: row.id,
            department: row.department,
            hired: row.hired,
        }
    }
}
