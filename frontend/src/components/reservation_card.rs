use common::model::period::Period;
use common::model::reservation::Reservation;
use common::schedule;
use web_sys::MouseEvent;
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ReservationCardProps {
    pub data: Reservation,
    pub view_mode: bool,
    /// Suppresses the per-card date chip when a date group header already
    /// sits above the card.
    #[prop_or_default]
    pub hide_date: bool,
    pub on_delete: Callback<i64>,
}

pub struct ReservationCard;

impl Component for ReservationCard {
    type Message = ();
    type Properties = ReservationCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReservationCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let data = &props.data;
        let period_class = match data.period {
            Period::Lunch => "lunch",
            Period::Dinner => "dinner",
        };
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let id = data.id;
            Callback::from(move |_: MouseEvent| on_delete.emit(id))
        };
        html! {
            <div class={format!("reservation-card {period_class}")}>
                {
                    if props.view_mode {
                        html! {}
                    } else {
                        html! {
                            <button class="delete-button" title="删除" onclick={on_delete}>
                                {"删除"}
                            </button>
                        }
                    }
                }
                <div class="card-header">
                    <h3 class="room-name">{ &data.room_name }</h3>
                    <div class={format!("time-badge {period_class}")}>
                        {
                            if props.hide_date {
                                html! {}
                            } else {
                                html! {
                                    <span class="badge-date">
                                        { schedule::short_date(&data.date) }
                                    </span>
                                }
                            }
                        }
                        <span>{ data.period.label() }</span>
                        <span class="badge-sep">{"|"}</span>
                        <span>{ &data.time }</span>
                    </div>
                </div>
                <div class="card-body">
                    <div class="guest-line">
                        <span class="guest-name">{ &data.name }</span>
                        <span class="guest-count">{ format!("{}人", data.guests) }</span>
                    </div>
                    <div class="contact-line">
                        {
                            if data.contact.is_empty() {
                                "无联系方式".to_string()
                            } else {
                                data.contact.clone()
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}
