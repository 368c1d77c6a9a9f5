use thiserror::Error;

use crate::model::reservation::{Reservation, ReservationDraft};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("malformed reservation data: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("could not serialize reservations: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// The canonical in-memory reservation collection.
///
/// Records are kept in insertion order; chronological ordering is a
/// presentation concern handled by [`crate::schedule`]. Records are never
/// edited in place: they are added through [`Book::add`] and removed
/// through [`Book::remove`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    reservations: Vec<Reservation>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reservations(reservations: Vec<Reservation>) -> Self {
        Self { reservations }
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Appends a new reservation and returns its assigned id.
    ///
    /// `now_ms` is the caller's wall clock in epoch milliseconds. Ids are
    /// normally the wall-clock value; if that value collides with (or runs
    /// behind) an existing id, the allocator bumps past the current
    /// maximum so ids stay unique even for additions within one
    /// millisecond.
    pub fn add(&mut self, draft: ReservationDraft, now_ms: i64) -> i64 {
        let id = self.allocate_id(now_ms);
        self.reservations.push(Reservation {
            id,
            date: draft.date,
            time: draft.time,
            period: draft.period,
            room_id: draft.room_id,
            room_name: draft.room_name,
            guests: draft.guests,
            name: draft.name,
            contact: draft.contact,
        });
        id
    }

    fn allocate_id(&self, now_ms: i64) -> i64 {
        match self.reservations.iter().map(|r| r.id).max() {
            Some(max) if now_ms <= max => max + 1,
            _ => now_ms,
        }
    }

    /// Removes the reservation with the given id. Returns `false` when no
    /// record matches, leaving the collection unchanged.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.reservations.iter().position(|r| r.id == id) {
            Some(index) => {
                self.reservations.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.reservations).map_err(StorageError::Serialize)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let reservations = serde_json::from_str(raw).map_err(StorageError::Deserialize)?;
        Ok(Self { reservations })
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, StorageError};
    use crate::model::reservation::ReservationDraft;

    fn sample_draft(name: &str) -> ReservationDraft {
        ReservationDraft::new(
            "2024-06-01".to_string(),
            "18:30".to_string(),
            "2".to_string(),
            "10".to_string(),
            name.to_string(),
            "139-0000-0000".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn add_appends_one_record_with_the_wall_clock_id() {
        let mut book = Book::new();
        let id = book.add(sample_draft("张先生"), 1_700_000_000_000);
        assert_eq!(book.len(), 1);
        assert_eq!(id, 1_700_000_000_000);
        assert_eq!(book.reservations()[0].room_name, "最快乐");
    }

    #[test]
    fn same_millisecond_additions_still_get_unique_ids() {
        let mut book = Book::new();
        let first = book.add(sample_draft("a"), 1_700_000_000_000);
        let second = book.add(sample_draft("b"), 1_700_000_000_000);
        let third = book.add(sample_draft("c"), 1_699_999_999_000);
        assert_eq!(first, 1_700_000_000_000);
        assert_eq!(second, 1_700_000_000_001);
        assert_eq!(third, 1_700_000_000_002);
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn remove_deletes_exactly_the_matching_record() {
        let mut book = Book::new();
        let keep = book.add(sample_draft("keep"), 1);
        let gone = book.add(sample_draft("gone"), 2);
        assert!(book.remove(gone));
        assert_eq!(book.len(), 1);
        assert_eq!(book.reservations()[0].id, keep);
    }

    #[test]
    fn remove_of_an_unknown_id_is_a_no_op() {
        let mut book = Book::new();
        book.add(sample_draft("only"), 1);
        assert!(!book.remove(99));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let mut book = Book::new();
        book.add(sample_draft("张先生"), 1_700_000_000_000);
        book.add(sample_draft("李女士"), 1_700_000_000_500);
        let raw = book.to_json().unwrap();
        let reloaded = Book::from_json(&raw).unwrap();
        assert_eq!(reloaded, book);
    }

    #[test]
    fn persisted_layout_uses_camel_case_and_chinese_period() {
        let mut book = Book::new();
        book.add(sample_draft("张先生"), 7);
        let raw = book.to_json().unwrap();
        assert!(raw.contains("\"roomId\":\"2\""));
        assert!(raw.contains("\"roomName\":\"最快乐\""));
        assert!(raw.contains("\"period\":\"晚餐\""));
    }

    #[test]
    fn malformed_json_is_a_deserialize_error() {
        let err = Book::from_json("not json").unwrap_err();
        assert!(matches!(err, StorageError::Deserialize(_)));
    }
}
