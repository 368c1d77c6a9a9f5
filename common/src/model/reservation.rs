use serde::{Deserialize, Serialize};

use crate::model::period::Period;
use crate::model::room;

/// One persisted booking record for a private dining room.
///
/// Field names are serialized in camelCase so the stored JSON stays
/// compatible with the layout already living under the storage key.
/// `room_name` is a denormalized copy of the catalog name captured at
/// creation time; it is not updated if the catalog ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub period: Period,
    pub room_id: String,
    pub room_name: String,
    pub guests: String,
    pub name: String,
    pub contact: String,
}

/// A reservation as it leaves the entry form: everything but the id,
/// which the book assigns on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub date: String,
    pub time: String,
    pub period: Period,
    pub room_id: String,
    pub room_name: String,
    pub guests: String,
    pub name: String,
    pub contact: String,
}

impl ReservationDraft {
    /// Builds a draft from raw form field values.
    ///
    /// Returns `None` when any required field (date, time, room, guests,
    /// name) is empty or when no period can be derived from the time.
    /// Contact stays optional. The room name is resolved against the
    /// catalog here, falling back to the generic label for an id the
    /// catalog does not know.
    pub fn new(
        date: String,
        time: String,
        room_id: String,
        guests: String,
        name: String,
        contact: String,
    ) -> Option<Self> {
        if date.is_empty()
            || time.is_empty()
            || room_id.is_empty()
            || guests.is_empty()
            || name.is_empty()
        {
            return None;
        }
        let period = Period::from_time(&time)?;
        let room_name = room::room_display_name(&room_id).to_string();
        Some(Self {
            date,
            time,
            period,
            room_id,
            room_name,
            guests,
            name,
            contact,
        })
    }
}
