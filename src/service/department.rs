use std::sync::Arc;

use crate::dao::DepartmentDao;
use crate::models::department::Department;

/// Pass-through facade over the department DAO; keeps handlers decoupled
/// from the storage implementation.
#[derive(Clone)]
pub struct DepartmentService {
    dao: Arc<dyn DepartmentDao>,
}

impl DepartmentService {
    pub fn new(dao: Arc<dyn DepartmentDao>) -> Self {
        Self { dao }
    }

    pub async fn list(&self, first: i64, amount: i64) -> Result<Vec<Department>, sqlx::Error> {
        self.dao.list(first, amount).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Department>, sqlx::Error> {
        self.dao.get_by_id(id).await
    }

    pub async fn add_new(&self, dep: &Department) -> Result<i64, sqlx::Error> {
        self.dao.add_new(dep).await
    }

    pub async fn update(&self, dep: &Department) -> Result<bool, sqlx::Error> {
        self.dao.update(dep).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        self.dao.delete(id).await
    }

    pub async fn size(&self) -> Result<i64, sqlx::Error> {
        self.dao.size().await
    }
}
