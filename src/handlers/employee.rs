use actix_web::{web, HttpResponse};
use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::dob::DobQuery;
use crate::models::employee::Employee;
use crate::service::EmployeeService;

#[derive(Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    id: i64,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    f: i64,
    #[serde(default = "default_page_size")]
    n: i64,
    #[serde(default = "default_department")]
    id: i64,
}

fn default_page_size() -> i64 {
    10
}

fn default_department() -> i64 {
    1
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    id: i64,
}

#[derive(Deserialize)]
pub struct UpdateQuery {
    #[serde(default, rename = "new")]
    is_new: bool,
}

/// Returns the requested employee, or JSON `null` when absent.
pub async fn get_employee_detail(
    service: web::Data<EmployeeService>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET for Employee with id={}", query.id);
    let empl = service.get_by_id(query.id).await?;
    Ok(HttpResponse::Ok().json(empl))
}

pub async fn get_employees_list(
    service: web::Data<EmployeeService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET for list of Employees from department with id={}", query.id);
    let empls = service.list(query.f, query.n, query.id).await?;
    Ok(HttpResponse::Ok().json(empls))
}

/// Main search entry point: one date bound means an exact date-of-birth
/// match, two bounds mean an inclusive range.
pub async fn get_search_list(
    service: web::Data<EmployeeService>,
    criteria: web::Json<DobQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("POST for list of Employees with dob criteria {:?}", criteria);
    let empls = match criteria.dob2 {
        None => service.search_by_dob(criteria.dob1).await?,
        Some(dob2) => service.search_by_dob_range(criteria.dob1, dob2).await?,
    };
    Ok(HttpResponse::Ok().json(empls))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET to delete Employee with id={}", query.id);
    let removed = service.delete(query.id).await?;
    Ok(HttpResponse::Ok().json(removed))
}

/// Adds an employee when `new=true`, otherwise updates the record
/// carried in the body. Returns the id either way.
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    query: web::Query<UpdateQuery>,
    empl: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    empl.validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let empl = empl.into_inner();

    if query.is_new {
        debug!("POST to add Employee");
        let id = service.add_new(&empl).await?;
        Ok(HttpResponse::Ok().json(id))
    } else {
        debug!("POST to update Employee with id={:?}", empl.id);
        service.update(&empl).await?;
        Ok(HttpResponse::Ok().json(empl.id))
    }
}

pub async fn get_employee_size(
    service: web::Data<EmployeeService>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET for Employees size from department with id={}", query.id);
    let size = service.size(query.id).await?;
    Ok(HttpResponse::Ok().json(size))
}
