//! Update function for the reservation form.
//!
//! Field messages overwrite the corresponding input string. `Submit` runs
//! the whole validation through `ReservationDraft::new`: an incomplete
//! form raises a blocking alert and leaves everything untouched, a
//! complete one is handed to the parent via `on_add` and the fields reset
//! (keeping the date).

use common::model::reservation::ReservationDraft;
use yew::Context;

use super::messages::Msg;
use super::state::ReservationForm;

const INCOMPLETE_MESSAGE: &str = "⚠️ 请填写完整信息（日期、时间、包厢、人数、预订人）";

pub fn update(form: &mut ReservationForm, ctx: &Context<ReservationForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetDate(value) => {
            form.date = value;
            true
        }
        Msg::SetTime(value) => {
            form.time = value;
            true
        }
        Msg::SelectRoom(id) => {
            form.room_id = id;
            true
        }
        Msg::SetGuests(value) => {
            form.guests = value;
            true
        }
        Msg::SetName(value) => {
            form.name = value;
            true
        }
        Msg::SetContact(value) => {
            form.contact = value;
            true
        }
        Msg::Submit => {
            let draft = ReservationDraft::new(
                form.date.clone(),
                form.time.clone(),
                form.room_id.clone(),
                form.guests.clone(),
                form.name.clone(),
                form.contact.clone(),
            );
            match draft {
                Some(draft) => {
                    ctx.props().on_add.emit(draft);
                    form.reset_keeping_date();
                    true
                }
                None => {
                    alert(INCOMPLETE_MESSAGE);
                    false
                }
            }
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
