//! Field state for the reservation entry form.
//!
//! The form only holds raw input strings; the meal period is never cached
//! here, it is derived from `time` at the point of use. The date field is
//! preset to the local calendar day and survives a submit so several
//! bookings for the same day can be entered in a row.

use crate::local_date;

pub struct ReservationForm {
    pub date: String,
    pub time: String,
    pub room_id: String,
    pub guests: String,
    pub name: String,
    pub contact: String,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self {
            date: local_date::today_iso(),
            time: String::new(),
            room_id: String::new(),
            guests: String::new(),
            name: String::new(),
            contact: String::new(),
        }
    }

    /// Clears everything except the date after a successful submit.
    pub fn reset_keeping_date(&mut self) {
        self.time.clear();
        self.room_id.clear();
        self.guests.clear();
        self.name.clear();
        self.contact.clear();
    }
}
