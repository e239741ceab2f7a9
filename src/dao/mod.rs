pub mod department;
pub mod employee;

pub use department::{DepartmentDao, SqliteDepartmentDao};
pub use employee::{EmployeeDao, SqliteEmployeeDao};
