use actix_web::{web, HttpResponse};
use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::department::Department;
use crate::service::DepartmentService;

#[derive(Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    id: i64,
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    f: i64,
    #[serde(default = "default_page_size")]
    n: i64,
}

fn default_page_size() -> i64 {
    10
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

/// Returns the requested department, or JSON `null` when absent.
pub async fn get_department_detail(
    service: web::Data<DepartmentService>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET for Department with id={}", query.id);
    let dep = service.get_by_id(query.id).await?;
    Ok(HttpResponse::Ok().json(dep))
}

pub async fn get_departments_list(
    service: web::Data<DepartmentService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET for list of Departments with window {}+{}", query.f, query.n);
    let deps = service.list(query.f, query.n).await?;
    Ok(HttpResponse::Ok().json(deps))
}

pub async fn delete_department(
    service: web::Data<DepartmentService>,
    query: web::Query<DeleteQuery>,
) -> Result<HttpResponse, AppError> {
    debug!("GET to delete Department with id={}", query.id);
    let removed = service.delete(query.id).await?;
    Ok(HttpResponse::Ok().json(removed))
}

/// Adds a department when `new=true`, otherwise updates the record
/// carried in the body. Returns the id either way.
pub async fn update_department(
    service: web::Data<DepartmentService>,
    query: web::Query<UpdateQuery>,
    dep: web::Json<Department>,
) -> Result<HttpResponse, AppError> {
    dep.validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let dep = dep.into_inner();

    if query.is_new {
        debug!("POST to add Department");
        let id = service.add_new(&dep).await?;
        Ok(HttpResponse::Ok().json(id))
    } else {
        debug!("POST to update Department with id={:?}", dep.id);
        service.update(&dep).await?;
        Ok(HttpResponse::Ok().json(dep.id))
    }
}

pub async fn get_department_size(
    service: web::Data<DepartmentService>,
) -> Result<HttpResponse, AppError> {
    debug!("GET for Departments size");
    let size = service.size().await?;
    Ok(HttpResponse::Ok().json(size))
}
