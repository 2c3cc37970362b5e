pub mod booking;
pub mod customer;
pub mod movie;
pub mod seat;
pub mod show;

pub use booking::{BookedSeat, Booking, Charges};
pub use customer::Customer;
pub use movie::Movie;
pub use seat::{Seat, SeatStatus, SeatType};
pub use show::Show;
