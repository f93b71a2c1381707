mod logout;

use actix_web::web;
use logout::logout_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/logout", web::post().to(logout_controller));
}
