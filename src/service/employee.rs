use std::sync::Arc;

use chrono::NaiveDate;

use crate::dao::EmployeeDao;
use crate::models::employee::Employee;

/// Pass-through facade over the employee DAO.
#[derive(Clone)]
pub struct EmployeeService {
    dao: Arc<dyn EmployeeDao>,
}

impl EmployeeService {
    pub fn new(dao: Arc<dyn EmployeeDao>) -> Self {
        Self { dao }
    }

    pub async fn list(
        &self,
        first: i64,
        amount: i64,
        depid: i64,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        self.dao.list(first, amount, depid).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>, sqlx::Error> {
        self.dao.get_by_id(id).await
    }

    pub async fn add_new(&self, empl: &Employee) -> Result<i64, sqlx::Error> {
        self.dao.add_new(empl).await
    }

    pub async fn update(&self, empl: &Employee) -> Result<bool, sqlx::Error> {
        self.dao.update(empl).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        self.dao.delete(id).await
    }

    pub async fn search_by_dob(&self, dob: NaiveDate) -> Result<Vec<Employee>, sqlx::Error> {
        self.dao.search_by_dob(dob).await
    }

    pub async fn search_by_dob_range(
        &self,
        dob1: NaiveDate,
        dob2: NaiveDate,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        self.dao.search_by_dob_range(dob1, dob2).await
    }

    pub async fn size(&self, depid: i64) -> Result<i64, sqlx::Error> {
        self.dao.size(depid).await
    }
}
