//! Diesel-backed chunk persistence for the ingestion pipeline.
//!
//! Each call commits one chunk inside a single transaction: a constraint
//! violation rolls the whole chunk back and surfaces as an integrity
//! violation, leaving previously committed chunks untouched.

use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use tracing::debug;

use crate::domain::ports::{IngestionRepository, IngestionRepositoryError};
use crate::domain::records::Record;

use super::models::{NewDepartmentRow, NewEmployeeRow, NewJobRow};
use super::pool::{DbPool, PoolError};
use super::schema::{department, employee, job};

/// Diesel-backed implementation of the ingestion repository port.
#[derive(Clone)]
pub struct DieselIngestionRepository {
    pool: DbPool,
}

impl DieselIngestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> IngestionRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    IngestionRepositoryError::connection(message)
}

fn is_constraint_violation(kind: &DatabaseErrorKind) -> bool {
    matches!(
        kind,
        DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation
    )
}

fn map_insert_error(error: diesel::result::Error) -> IngestionRepositoryError {
    match &error {
        diesel::result::Error::DatabaseError(kind, info) if is_constraint_violation(kind) => {
            debug!(?kind, message = info.message(), "chunk insert rolled back");
            IngestionRepositoryError::integrity_violation(info.message())
        }
        _ => IngestionRepositoryError::query(error.to_string()),
    }
}

/// Insert one chunk within a transaction, preserving input order.
fn insert_chunk(
    conn: &mut SqliteConnection,
    records: &[Record],
) -> Result<usize, diesel::result::Error> {
    let mut departments = Vec::new();
    let mut jobs = Vec::new();
    let mut employees = Vec::new();

    for record in records {
        match record {
            Record::Department(row) => departments.push(NewDepartmentRow { name: &row.name }),
            Record::Job(row) => jobs.push(NewJobRow { title: &row.title }),
            Record::Employee(row) => employees.push(NewEmployeeRow {
                name: &row.name,
                hired_at: &row.hired_at,
                department_id: row.department_id,
                job_id: row.job_id,
            }),
        }
    }

    conn.transaction(|conn| {
        let mut inserted = 0;
        if !departments.is_empty() {
            inserted += diesel::insert_into(department::table)
                .values(&departments)
                .execute(conn)?;
        }
        if !jobs.is_empty() {
            inserted += diesel::insert_into(job::table).values(&jobs).execute(conn)?;
        }
        if !employees.is_empty() {
            inserted += diesel::insert_into(employee::table)
                .values(&employees)
                .execute(conn)?;
        }
        Ok(inserted)
    })
}

#[async_trait]
impl IngestionRepository for DieselIngestionRepository {
    async fn insert_records(
        &self,
        records: Vec<Record>,
    ) -> Result<usize, IngestionRepositoryError> {
        let pool = self.pool.clone();
        web::block(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            insert_chunk(&mut conn, &records).map_err(map_insert_error)
        })
        .await
        .map_err(|error| IngestionRepositoryError::query(format!("blocking insert failed: {error}")))?
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::records::{NewDepartment, NewEmployee, NewJob};
    use crate::outbound::persistence::migrations::run_startup_migrations;
    use crate::outbound::persistence::pool::PoolConfig;

    fn scratch_pool(dir: &tempfile::TempDir) -> DbPool {
        let url = dir.path().join("scratch.db").display().to_string();
        let pool = DbPool::new(PoolConfig::new(url)).expect("pool builds");
        let mut conn = pool.get().expect("connection");
        run_startup_migrations(&mut conn).expect("migrations apply");
        pool
    }

    #[test]
    fn constraint_violations_map_to_integrity_errors() {
        let error = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("UNIQUE constraint failed: employee.id".to_owned()),
        );
        assert_eq!(
            map_insert_error(error),
            IngestionRepositoryError::integrity_violation("UNIQUE constraint failed: employee.id")
        );
    }

    #[test]
    fn other_diesel_errors_map_to_query_errors() {
        let error = map_insert_error(diesel::result::Error::NotFound);
        assert!(matches!(error, IngestionRepositoryError::Query { .. }));
    }

    #[tokio::test]
    async fn chunks_persist_in_input_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repository = Arc::new(DieselIngestionRepository::new(scratch_pool(&dir)));

        let records = vec![
            Record::Department(NewDepartment {
                name: "Engineering".to_owned(),
            }),
            Record::Department(NewDepartment {
                name: "Sales".to_owned(),
            }),
            Record::Department(NewDepartment {
                name: String::new(),
            }),
        ];
        let written = repository
            .insert_records(records)
            .await
            .expect("chunk inserts");
        assert_eq!(written, 3);

        let mut conn = repository.pool.get().expect("connection");
        let rows: Vec<(i32, String)> = department::table
            .order(department::id.asc())
            .load(&mut conn)
            .expect("read back");
        let names: Vec<&str> = rows.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(names, ["Engineering", "Sales", ""]);
        // Generated ids ascend in input order.
        assert!(rows.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[tokio::test]
    async fn employee_rows_keep_sentinel_references_and_raw_timestamps() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repository = Arc::new(DieselIngestionRepository::new(scratch_pool(&dir)));

        let records = vec![
            Record::Job(NewJob {
                title: "Data Engineer".to_owned(),
            }),
            Record::Employee(NewEmployee {
                name: "Jane Doe".to_owned(),
                hired_at: "2021-05-10".to_owned(),
                department_id: 0,
                job_id: 3,
            }),
        ];
        repository
            .insert_records(records)
            .await
            .expect("chunk inserts");

        let mut conn = repository.pool.get().expect("connection");
        let row: (String, String, i32, i32) = employee::table
            .select((
                employee::name,
                employee::hired_at,
                employee::department_id,
                employee::job_id,
            ))
            .first(&mut conn)
            .expect("employee row");
        assert_eq!(
            row,
            ("Jane Doe".to_owned(), "2021-05-10".to_owned(), 0, 3)
        );
    }
}
