use async_trait::async_trait;

use crate::db::Pool;
use crate::models::department::Department;

/// Data-access contract for departments.
#[async_trait]
pub trait DepartmentDao: Send + Sync {
    /// Window of up to `amount` departments starting at offset `first`,
    /// ordered by ascending id.
    async fn list(&self, first: i64, amount: i64) -> Result<Vec<Department>, sqlx::Error>;

    /// `None` when no department has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<Department>, sqlx::Error>;

    /// Insert and return the store-assigned id.
    async fn add_new(&self, dep: &Department) -> Result<i64, sqlx::Error>;

    /// Whole-record replace keyed on id; `false` when no row matched.
    async fn update(&self, dep: &Department) -> Result<bool, sqlx::Error>;

    /// `false` when no row existed.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    async fn size(&self) -> Result<i64, sqlx::Error>;
}

pub struct SqliteDepartmentDao {
    pool: Pool,
}

impl SqliteDepartmentDao {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentDao for SqliteDepartmentDao {
    async fn list(&self, first: i64, amount: i64) -> Result<Vec<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name FROM departments ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(amount)
        .bind(first)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Department>, sqlx::Error> {
        sqlx::query_as::<_, Department>("SELECT id, name FROM departments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn add_new(&self, dep: &Department) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("INSERT INTO departments (name) VALUES (?) RETURNING id")
            .bind(&dep.name)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, dep: &Department) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE departments SET name = ? WHERE id = ?")
            .bind(&dep.name)
            .bind(dep.id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn size(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
    }
}
