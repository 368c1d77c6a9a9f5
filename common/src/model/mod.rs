pub mod book;
pub mod period;
pub mod reservation;
pub mod room;
