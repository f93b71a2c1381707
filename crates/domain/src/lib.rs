mod company;
mod reservation;
mod shared;
mod user;

pub use company::Company;
pub use reservation::{Reservation, ReservationWithCompany};
pub use shared::entity::{Entity, ID};
pub use user::User;
