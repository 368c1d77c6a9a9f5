#[derive(Clone)]
pub enum Msg {
    SetDate(String),
    SetTime(String),
    SelectRoom(String),
    SetGuests(String),
    SetName(String),
    SetContact(String),
    Submit,
}
