//! Route literals for the data server.
//!
//! Handlers and tests reference these by name so the URI table lives in
//! one place.

pub const DEPARTMENT: &str = "/v1/department";
pub const DEPARTMENT_LIST: &str = "/v1/departments";
pub const DEPARTMENT_COUNT: &str = "/v1/departments/count";
pub const DEPARTMENT_DELETE: &str = "/v1/department/delete";

pub const EMPLOYEE: &str = "/v1/employee";
pub const EMPLOYEE_LIST: &str = "/v1/employees";
pub const EMPLOYEE_COUNT: &str = "/v1/employees/count";
pub const EMPLOYEE_DELETE: &str = "/v1/employee/delete";
pub const EMPLOYEE_SEARCH: &str = "/v1/employees/search";
