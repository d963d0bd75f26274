pub mod book;
pub mod types;

pub use book::ReservationBook;
pub use types::{
    BookableRestaurant, BookingRequest, Reservation, ReservationStatus, TimeSlot,
    confirmation_code,
};
