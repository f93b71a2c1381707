mod get_users;

use actix_web::web;
use get_users::get_users_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user", web::get().to(get_users_controller));
}
