mod get_reservation;
mod get_reservations;
mod search_reservations;

use actix_web::web;
use get_reservation::get_reservation_controller;
use get_reservations::get_reservations_controller;
use search_reservations::search_reservations_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reservation", web::get().to(get_reservations_controller));
    cfg.route(
        "/reservation/find",
        web::get().to(get_reservation_controller),
    );
    cfg.route(
        "/reservation/search",
        web::get().to(search_reservations_controller),
    );
}
