mod delete_company;
mod get_companies;
mod update_company;

use actix_web::web;
use delete_company::delete_company_controller;
use get_companies::get_companies_controller;
use update_company::update_company_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/company", web::get().to(get_companies_controller));
    cfg.route(
        "/company/{company_id}",
        web::put().to(update_company_controller),
    );
    cfg.route(
        "/company/{company_id}",
        web::delete().to(delete_company_controller),
    );
}
