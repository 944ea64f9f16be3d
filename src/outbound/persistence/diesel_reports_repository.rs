//! Diesel-backed implementations of the canned hiring reports.
//!
//! Both reports are hand-written SQL over the hiring tables, executed through
//! `diesel::sql_query`. `hired_at` is stored as raw text and interpreted here
//! with SQLite date functions; rows whose timestamp the date functions cannot
//! read simply match no quarter or year.

use actix_web::web;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;

use crate::domain::ports::{
    DepartmentHires, HiringReports, QuarterlyHires, ReportsRepositoryError,
};

use super::models::{DepartmentHiresRow, QuarterlyHiresRow};
use super::pool::{DbPool, PoolError};

const QUARTERLY_HIRES_SQL: &str = r#"
SELECT department.department AS department,
       job.job AS job,
       COUNT(CASE WHEN CAST(strftime('%m', employee.hired_at) AS INTEGER) BETWEEN 1 AND 3 THEN 1 END) AS q1,
       COUNT(CASE WHEN CAST(strftime('%m', employee.hired_at) AS INTEGER) BETWEEN 4 AND 6 THEN 1 END) AS q2,
       COUNT(CASE WHEN CAST(strftime('%m', employee.hired_at) AS INTEGER) BETWEEN 7 AND 9 THEN 1 END) AS q3,
       COUNT(CASE WHEN CAST(strftime('%m', employee.hired_at) AS INTEGER) BETWEEN 10 AND 12 THEN 1 END) AS q4
FROM employee
INNER JOIN job ON employee.job_id = job.id
INNER JOIN department ON employee.department_id = department.id
WHERE strftime('%Y', employee.hired_at) = '2021'
GROUP BY department.id, job.id
ORDER BY department.department, job.job
"#;

const ABOVE_AVERAGE_DEPARTMENTS_SQL: &str = r#"
SELECT department.id AS id,
       department.department AS department,
       COUNT(employee.id) AS hired
FROM employee
INNER JOIN department ON employee.department_id = department.id
WHERE strftime('%Y', employee.hired_at) = '2021'
GROUP BY department.id, department.department
HAVING COUNT(employee.id) > (
    SELECT AVG(hired_in_department)
    FROM (
        SELECT COUNT(employee.id) AS hired_in_department
        FROM employee
        INNER JOIN department ON employee.department_id = department.id
        WHERE strftime('%Y', employee.hired_at) = '2021'
        GROUP BY department.id
    )
)
ORDER BY COUNT(employee.id) DESC
"#;

/// Diesel-backed implementation of the hiring reports port.
#[derive(Clone)]
pub struct DieselReportsRepository {
    pool: DbPool,
}

impl DieselReportsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReportsRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    ReportsRepositoryError::connection(message)
}

fn map_query_error(error: diesel::result::Error) -> ReportsRepositoryError {
    ReportsRepositoryError::query(error.to_string())
}

#[async_trait]
impl HiringReports for DieselReportsRepository {
    async fn quarterly_hires(&self) -> Result<Vec<QuarterlyHires>, ReportsRepositoryError> {
        let pool = self.pool.clone();
        let rows = web::block(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            sql_query(QUARTERLY_HIRES_SQL)
                .load::<QuarterlyHiresRow>(&mut conn)
                .map_err(map_query_error)
        })
        .await
        .map_err(|error| ReportsRepositoryError::query(format!("blocking query failed: {error}")))??;

        Ok(rows.into_iter().map(QuarterlyHires::from).collect())
    }

    async fn above_average_departments(
        &self,
    ) -> Result<Vec<DepartmentHires>, ReportsRepositoryError> {
        let pool = self.pool.clone();
        let rows = web::block(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            sql_query(ABOVE_AVERAGE_DEPARTMENTS_SQL)
                .load::<DepartmentHiresRow>(&mut conn)
                .map_err(map_query_error)
        })
        .await
        .map_err(|error| ReportsRepositoryError::query(format!("blocking query failed: {error}")))??;

        Ok(rows.into_iter().map(DepartmentHires::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::IngestionRepository;
    use crate::domain::records::{NewDepartment, NewEmployee, NewJob, Record};
    use crate::outbound::persistence::DieselIngestionRepository;
    use crate::outbound::persistence::migrations::run_startup_migrations;
    use crate::outbound::persistence::pool::PoolConfig;

    fn scratch_pool(dir: &tempfile::TempDir) -> DbPool {
        let url = dir.path().join("scratch.db").display().to_string();
        let pool = DbPool::new(PoolConfig::new(url)).expect("pool builds");
        let mut conn = pool.get().expect("connection");
        run_startup_migrations(&mut conn).expect("migrations apply");
        pool
    }

    fn employee(name: &str, hired_at: &str, department_id: i32, job_id: i32) -> Record {
        Record::Employee(NewEmployee {
            name: name.to_owned(),
            hired_at: hired_at.to_owned(),
            department_id,
            job_id,
        })
    }

    /// Departments Engineering (1) and Sales (2), jobs Developer (1) and
    /// Manager (2), with a spread of 2021 hires plus one 2020 row.
    async fn seed(pool: &DbPool) {
        let ingestion = Arc::new(DieselIngestionRepository::new(pool.clone()));
        ingestion
            .insert_records(vec![
                Record::Department(NewDepartment {
                    name: "Engineering".to_owned(),
                }),
                Record::Department(NewDepartment {
                    name: "Sales".to_owned(),
                }),
                Record::Job(NewJob {
                    title: "Developer".to_owned(),
                }),
                Record::Job(NewJob {
                    title: "Manager".to_owned(),
                }),
            ])
            .await
            .expect("reference rows insert");
        ingestion
            .insert_records(vec![
                employee("Ada", "2021-01-15T09:00:00Z", 1, 1),
                employee("Grace", "2021-02-02T10:30:00Z", 1, 1),
                employee("Edsger", "2021-05-10T08:00:00Z", 1, 1),
                employee("Barbara", "2021-11-07T02:48:42Z", 1, 2),
                employee("Alan", "2021-08-19T12:00:00Z", 2, 2),
                employee("Old Timer", "2020-03-03T12:00:00Z", 1, 1),
            ])
            .await
            .expect("employee rows insert");
    }

    #[tokio::test]
    async fn quarterly_hires_buckets_2021_rows_by_quarter() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = scratch_pool(&dir);
        seed(&pool).await;

        let rows = DieselReportsRepository::new(pool)
            .quarterly_hires()
            .await
            .expect("report runs");

        assert_eq!(
            rows,
            vec![
                QuarterlyHires {
                    department: "Engineering".to_owned(),
                    job: "Developer".to_owned(),
                    q1: 2,
                    q2: 1,
                    q3: 0,
                    q4: 0,
                },
                QuarterlyHires {
                    department: "Engineering".to_owned(),
                    job: "Manager".to_owned(),
                    q1: 0,
                    q2: 0,
                    q3: 0,
                    q4: 1,
                },
                QuarterlyHires {
                    department: "Sales".to_owned(),
                    job: "Manager".to_owned(),
                    q1: 0,
                    q2: 0,
                    q3: 1,
                    q4: 0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn quarterly_hires_is_empty_without_employees() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = scratch_pool(&dir);

        let rows = DieselReportsRepository::new(pool)
            .quarterly_hires()
            .await
            .expect("report runs");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn above_average_departments_excludes_departments_at_or_below_the_mean() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = scratch_pool(&dir);
        seed(&pool).await;

        // Engineering hired 4 in 2021, Sales 1; the mean is 2.5.
        let rows = DieselReportsRepository::new(pool)
            .above_average_departments()
            .await
            .expect("report runs");

        assert_eq!(
            rows,
            vec![DepartmentHires {
                id: 1,
                department: "Engineering".to_owned(),
                hired: 4,
            }]
        );
    }

    #[tokio::test]
    async fn employees_with_sentinel_references_drop_out_of_joined_reports() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = scratch_pool(&dir);
        let ingestion = Arc::new(DieselIngestionRepository::new(pool.clone()));
        ingestion
            .insert_records(vec![
                Record::Department(NewDepartment {
                    name: "Engineering".to_owned(),
                }),
                Record::Job(NewJob {
                    title: "Developer".to_owned(),
                }),
                employee("Unattached", "2021-04-01", 0, 0),
            ])
            .await
            .expect("rows insert");

        let rows = DieselReportsRepository::new(pool)
            .quarterly_hires()
            .await
            .expect("report runs");
        assert!(rows.is_empty());
    }
}
