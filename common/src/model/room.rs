/// A private dining room from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: &'static str,
    pub name: &'static str,
    pub capacity: Option<&'static str>,
}

pub const ROOMS: [Room; 3] = [
    Room {
        id: "1",
        name: "最幸福",
        capacity: Some("10-12人"),
    },
    Room {
        id: "2",
        name: "最快乐",
        capacity: Some("8-10人"),
    },
    Room {
        id: "3",
        name: "最开心",
        capacity: Some("12-16人"),
    },
];

pub const UNKNOWN_ROOM_NAME: &str = "未知包厢";

pub fn find_room(id: &str) -> Option<&'static Room> {
    ROOMS.iter().find(|room| room.id == id)
}

/// Display name for a room id, falling back to a generic label when the id
/// is not in the catalog.
pub fn room_display_name(id: &str) -> &'static str {
    find_room(id).map(|room| room.name).unwrap_or(UNKNOWN_ROOM_NAME)
}

#[cfg(test)]
mod tests {
    use super::{find_room, room_display_name, ROOMS, UNKNOWN_ROOM_NAME};

    #[test]
    fn catalog_has_three_distinct_rooms() {
        assert_eq!(ROOMS.len(), 3);
        for room in &ROOMS {
            assert_eq!(find_room(room.id), Some(room));
        }
    }

    #[test]
    fn unknown_room_falls_back_to_generic_label() {
        assert_eq!(room_display_name("99"), UNKNOWN_ROOM_NAME);
        assert_eq!(room_display_name("2"), "最快乐");
    }
}
