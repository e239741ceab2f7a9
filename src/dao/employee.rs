use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::Pool;
use crate::models::employee::Employee;

const COLUMNS: &str = "id, name, dob, depid, salary";

/// Data-access contract for employees.
#[async_trait]
pub trait EmployeeDao: Send + Sync {
    /// Window of up to `amount` employees starting at offset `first`,
    /// ordered by ascending id. `depid == 0` spans all departments.
    async fn list(&self, first: i64, amount: i64, depid: i64)
        -> Result<Vec<Employee>, sqlx::Error>;

    /// `None` when no employee has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, sqlx::Error>;

    /// Insert and return the store-assigned id.
    async fn add_new(&self, empl: &Employee) -> Result<i64, sqlx::Error>;

    /// Whole-record replace keyed on id; `false` when no row matched.
    async fn update(&self, empl: &Employee) -> Result<bool, sqlx::Error>;

    /// `false` when no row existed.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Employees born exactly on `dob`.
    async fn search_by_dob(&self, dob: NaiveDate) -> Result<Vec<Employee>, sqlx::Error>;

    /// Employees with `dob1 <= dob <= dob2`. Inverted bounds yield an
    /// empty set.
    async fn search_by_dob_range(
        &self,
        dob1: NaiveDate,
        dob2: NaiveDate,
    ) -> Result<Vec<Employee>, sqlx::Error>;

    /// Count of employees; `depid == 0` counts all departments.
    async fn size(&self, depid: i64) -> Result<i64, sqlx::Error>;
}

pub struct SqliteEmployeeDao {
    pool: Pool,
}

impl SqliteEmployeeDao {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeDao for SqliteEmployeeDao {
    async fn list(
        &self,
        first: i64,
        amount: i64,
        depid: i64,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        if depid == 0 {
            sqlx::query_as::<_, Employee>(&format!(
                "SELECT {COLUMNS} FROM employees ORDER BY id LIMIT ? OFFSET ?"
            ))
            .bind(amount)
            .bind(first)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Employee>(&format!(
                "SELECT {COLUMNS} FROM employees WHERE depid = ? ORDER BY id LIMIT ? OFFSET ?"
            ))
            .bind(depid)
            .bind(amount)
            .bind(first)
            .fetch_all(&self.pool)
            .await
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employees WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn add_new(&self, empl: &Employee) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO employees (name, dob, depid, salary) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&empl.name)
        .bind(empl.dob)
        .bind(empl.depid)
        .bind(empl.salary)
        .fetch_one(&self.pool)
        .await
    }

    async fn update(&self, empl: &Employee) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE employees SET name = ?, dob = ?, depid = ?, salary = ? WHERE id = ?")
                .bind(&empl.name)
                .bind(empl.dob)
                .bind(empl.depid)
                .bind(empl.salary)
                .bind(empl.id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search_by_dob(&self, dob: NaiveDate) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE dob = ? ORDER BY id"
        ))
        .bind(dob)
        .fetch_all(&self.pool)
        .await
    }

    async fn search_by_dob_range(
        &self,
        dob1: NaiveDate,
        dob2: NaiveDate,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {COLUMNS} FROM employees WHERE dob BETWEEN ? AND ? ORDER BY id"
        ))
        .bind(dob1)
        .bind(dob2)
        .fetch_all(&self.pool)
        .await
    }

    async fn size(&self, depid: i64) -> Result<i64, sqlx::Error> {
        if depid == 0 {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
                .fetch_one(&self.pool)
                .await
        } else {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE depid = ?")
                .bind(depid)
                .fetch_one(&self.pool)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::department::{DepartmentDao, SqliteDepartmentDao};
    use crate::db;
    use crate::models::department::Department;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn empl(name: &str, dob: &str, depid: i64) -> Employee {
        Employee {
            id: None,
            name: name.to_string(),
            dob: date(dob),
            depid,
            salary: 1000.0,
        }
    }

    /// Pool with two departments seeded, since employees.depid carries a
    /// foreign key.
    async fn dao() -> SqliteEmployeeDao {
        let pool = db::create_pool("sqlite::memory:").await.unwrap();
        db::run_migrations(&pool).await.unwrap();
        let deps = SqliteDepartmentDao::new(pool.clone());
        for name in ["Sales", "Marketing"] {
            deps.add_new(&Department {
                id: None,
                name: name.to_string(),
            })
            .await
            .unwrap();
        }
        SqliteEmployeeDao::new(pool)
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let dao = dao().await;
        let record = empl("Alice", "2000-01-01", 1);
        let id = dao.add_new(&record).await.unwrap();
        let found = dao.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(
            found,
            Employee {
                id: Some(id),
                ..record
            }
        );
    }

    #[tokio::test]
    async fn update_then_get_returns_latest() {
        let dao = dao().await;
        let id = dao.add_new(&empl("Alice", "2000-01-01", 1)).await.unwrap();
        let mut updated = empl("Alice", "2000-01-02", 2);
        updated.id = Some(id);
        updated.salary = 2000.0;
        assert!(dao.update(&updated).await.unwrap());
        assert_eq!(dao.get_by_id(id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_returns_false() {
        let dao = dao().await;
        let mut ghost = empl("Ghost", "1990-06-15", 1);
        ghost.id = Some(404);
        assert!(!dao.update(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn delete_then_get_is_none() {
        let dao = dao().await;
        let id = dao.add_new(&empl("Alice", "2000-01-01", 1)).await.unwrap();
        assert!(dao.delete(id).await.unwrap());
        assert!(dao.get_by_id(id).await.unwrap().is_none());
        assert!(!dao.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn list_filters_by_department() {
        let dao = dao().await;
        dao.add_new(&empl("Alice", "2000-01-01", 1)).await.unwrap();
        dao.add_new(&empl("Bob", "2001-02-02", 2)).await.unwrap();
        dao.add_new(&empl("Carol", "2002-03-03", 1)).await.unwrap();

        let sales = dao.list(0, 10, 1).await.unwrap();
        assert_eq!(sales.len(), 2);
        assert!(sales.iter().all(|e| e.depid == 1));

        let all = dao.list(0, 10, 0).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn list_windows_by_ascending_id() {
        let dao = dao().await;
        for (name, dob) in [("A", "2000-01-01"), ("B", "2000-01-02"), ("C", "2000-01-03")] {
            dao.add_new(&empl(name, dob, 1)).await.unwrap();
        }
        let page = dao.list(1, 1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "B");
    }

    #[tokio::test]
    async fn search_exact_dob() {
        let dao = dao().await;
        dao.add_new(&empl("Alice", "1995-05-20", 1)).await.unwrap();
        dao.add_new(&empl("Bob", "1995-05-20", 2)).await.unwrap();
        dao.add_new(&empl("Carol", "1996-05-20", 1)).await.unwrap();

        let hits = dao.search_by_dob(date("1995-05-20")).await.unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn search_range_is_inclusive() {
        let dao = dao().await;
        dao.add_new(&empl("Eighties", "1989-12-31", 1)).await.unwrap();
        dao.add_new(&empl("Early", "1990-01-01", 1)).await.unwrap();
        dao.add_new(&empl("Mid", "1995-06-15", 2)).await.unwrap();
        dao.add_new(&empl("Late", "1999-12-31", 1)).await.unwrap();
        dao.add_new(&empl("Millennial", "2000-01-01", 2)).await.unwrap();

        let hits = dao
            .search_by_dob_range(date("1990-01-01"), date("1999-12-31"))
            .await
            .unwrap();
        let names: Vec<_> = hits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Early", "Mid", "Late"]);
    }

    #[tokio::test]
    async fn search_range_inverted_bounds_is_empty() {
        let dao = dao().await;
        dao.add_new(&empl("Alice", "1995-05-20", 1)).await.unwrap();
        let hits = dao
            .search_by_dob_range(date("1999-12-31"), date("1990-01-01"))
            .await
            .unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn size_scopes_by_department() {
        let dao = dao().await;
        dao.add_new(&empl("Alice", "2000-01-01", 1)).await.unwrap();
        dao.add_new(&empl("Bob", "2001-02-02", 2)).await.unwrap();
        dao.add_new(&empl("Carol", "2002-03-03", 1)).await.unwrap();

        assert_eq!(dao.size(0).await.unwrap(), 3);
        assert_eq!(dao.size(1).await.unwrap(), 2);
        assert_eq!(dao.size(2).await.unwrap(), 1);
    }
}
