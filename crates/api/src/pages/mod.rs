mod home;
pub mod partials;
mod register;

use actix_web::web;
use home::home_controller;
use register::register_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home_controller));
    cfg.route("/register", web::get().to(register_controller));
}
