pub mod department;
pub mod employee;

use actix_web::web;

use crate::uri;

/// Explicit route table mapping method + path to handler. Shared by the
/// server entry point and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(uri::DEPARTMENT)
            .route(web::get().to(department::get_department_detail))
            .route(web::post().to(department::update_department)),
    )
    .service(web::resource(uri::DEPARTMENT_LIST).route(web::get().to(department::get_departments_list)))
    .service(web::resource(uri::DEPARTMENT_COUNT).route(web::get().to(department::get_department_size)))
    .service(web::resource(uri::DEPARTMENT_DELETE).route(web::get().to(department::delete_department)))
    .service(
        web::resource(uri::EMPLOYEE)
            .route(web::get().to(employee::get_employee_detail))
            .route(web::post().to(employee::update_employee)),
    )
    .service(web::resource(uri::EMPLOYEE_LIST).route(web::get().to(employee::get_employees_list)))
    .service(web::resource(uri::EMPLOYEE_COUNT).route(web::get().to(employee::get_employee_size)))
    .service(web::resource(uri::EMPLOYEE_DELETE).route(web::get().to(employee::delete_employee)))
    .service(web::resource(uri::EMPLOYEE_SEARCH).route(web::post().to(employee::get_search_list)));
}
