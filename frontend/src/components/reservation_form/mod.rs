//! Reservation entry form: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, and
//! view rendering.

use yew::{Component, Context, Html};

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ReservationFormProps;
pub use state::ReservationForm;

impl Component for ReservationForm {
    type Message = Msg;
    type Properties = ReservationFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ReservationForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
