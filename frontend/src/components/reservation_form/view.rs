//! View rendering for the reservation form.
//!
//! Date and time sit on one row, followed by the live meal-period chip,
//! the three-button room picker, guest count and name, and the optional
//! contact line. All user-facing strings are in Chinese, matching the
//! rest of the booking-book UI.

use common::model::period::Period;
use common::model::room::ROOMS;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReservationForm;

pub fn view(form: &ReservationForm, ctx: &Context<ReservationForm>) -> Html {
    let link = ctx.link();
    html! {
        <div class="reservation-form">
            <h2>{"新增预定"}</h2>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <div class="field-row">
                    { field("日期", "date", &form.date, "", link.callback(|e| Msg::SetDate(input_value(e)))) }
                    { field("时间", "time", &form.time, "", link.callback(|e| Msg::SetTime(input_value(e)))) }
                </div>

                { period_chip(&form.time) }
                { room_picker(form, link) }

                <div class="field-row">
                    { field("人数", "number", &form.guests, "8", link.callback(|e| Msg::SetGuests(input_value(e)))) }
                    { field("预订人", "text", &form.name, "张先生/女士", link.callback(|e| Msg::SetName(input_value(e)))) }
                </div>
                { field("电话 / 备注", "text", &form.contact, "手机号或微信号 (选填)", link.callback(|e| Msg::SetContact(input_value(e)))) }

                <button type="submit" class="submit-button">{"确认预定"}</button>
            </form>
        </div>
    }
}

fn field(
    label: &'static str,
    input_type: &'static str,
    value: &str,
    placeholder: &'static str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input
                type={input_type}
                value={value.to_string()}
                placeholder={placeholder}
                {oninput}
            />
        </div>
    }
}

fn input_value(event: InputEvent) -> String {
    let input: HtmlInputElement = event.target_unchecked_into();
    input.value()
}

/// Live indicator of the meal period derived from the current time field.
fn period_chip(time: &str) -> Html {
    let (class, text) = match Period::from_time(time) {
        Some(Period::Lunch) => ("period-chip lunch", "☀️ 中餐时段"),
        Some(Period::Dinner) => ("period-chip dinner", "🌙 晚餐时段"),
        None => ("period-chip pending", "等待选择时间..."),
    };
    html! {
        <div class="period-indicator">
            <span class={class}>{ text }</span>
        </div>
    }
}

fn room_picker(form: &ReservationForm, link: &Scope<ReservationForm>) -> Html {
    html! {
        <div class="field">
            <label>{"选择包厢"}</label>
            <div class="room-picker">
                {
                    for ROOMS.iter().map(|room| {
                        let selected = form.room_id == room.id;
                        let class = if selected {
                            "room-button selected"
                        } else {
                            "room-button"
                        };
                        let id = room.id;
                        html! {
                            <button
                                type="button"
                                key={room.id}
                                class={class}
                                onclick={link.callback(move |_| Msg::SelectRoom(id.to_string()))}
                            >
                                {
                                    if selected {
                                        html! { <span class="room-check">{"✓"}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <span class="room-name">{ room.name }</span>
                                {
                                    match room.capacity {
                                        Some(capacity) => html! {
                                            <span class="room-capacity">{ capacity }</span>
                                        },
                                        None => html! {},
                                    }
                                }
                            </button>
                        }
                    })
                }
            </div>
        </div>
    }
}
