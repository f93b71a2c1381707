mod auth;
mod company;
mod reservation;
mod status;
mod user;

pub mod dtos {
    pub use crate::company::dtos::*;
    pub use crate::reservation::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::auth::api::*;
pub use crate::company::api::*;
pub use crate::reservation::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
