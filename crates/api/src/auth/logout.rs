use actix_web::{
    cookie::{time::OffsetDateTime, Cookie},
    HttpResponse,
};
use mpc_reservations_api_structs::logout::APIResponse;

/// Name of the client-held session cookie
pub const SESSION_COOKIE: &str = "mpc_session";

/// Clears the session cookie by overwriting it with one that expired at
/// the epoch. The session itself is not validated.
pub async fn logout_controller() -> HttpResponse {
    let expired = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .finish();

    HttpResponse::Ok()
        .cookie(expired)
        .json(APIResponse { success: true })
}
