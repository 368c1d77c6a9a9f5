use common::model::reservation::Reservation;
use common::schedule;
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::components::reservation_card::ReservationCard;
use crate::local_date;

#[derive(Properties, PartialEq)]
pub struct ReservationListProps {
    pub reservations: Vec<Reservation>,
    pub view_mode: bool,
    pub on_delete: Callback<i64>,
}

pub struct ReservationList;

impl Component for ReservationList {
    type Message = ();
    type Properties = ReservationListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReservationList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.reservations.is_empty() {
            return html! {
                <div class="empty-state">
                    <p>{"暂无预定，快去添加第一单吧"}</p>
                </div>
            };
        }

        let sorted = schedule::sort_chronologically(&props.reservations);
        let groups = schedule::group_by_date(&sorted);
        let today = local_date::today();

        html! {
            <div class="reservation-list">
                {
                    if props.view_mode {
                        html! {}
                    } else {
                        html! {
                            <div class="list-header">
                                <h3>{"最近预定列表"}</h3>
                                <span class="count-badge">
                                    { format!("{} 单", props.reservations.len()) }
                                </span>
                            </div>
                        }
                    }
                }
                {
                    for groups.into_iter().map(|(date, members)| {
                        let label = schedule::date_label(&date, today);
                        html! {
                            <div class="date-group" key={date}>
                                <div class="date-header">
                                    <h3>{ label }</h3>
                                </div>
                                <div class="date-group-cards">
                                    { for members.into_iter().map(|r| self.view_card(ctx, r)) }
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        }
    }
}

impl ReservationList {
    fn view_card(&self, ctx: &Context<Self>, reservation: Reservation) -> Html {
        let key = reservation.id;
        html! {
            <ReservationCard
                key={key}
                data={reservation}
                view_mode={ctx.props().view_mode}
                hide_date={true}
                on_delete={ctx.props().on_delete.clone()}
            />
        }
    }
}
