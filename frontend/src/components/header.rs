use web_sys::MouseEvent;
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub view_mode: bool,
    pub on_toggle: Callback<MouseEvent>,
}

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = HeaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (button_class, button_label) = if props.view_mode {
            ("toggle-button editing", "返回编辑")
        } else {
            ("toggle-button capture", "截图模式")
        };
        html! {
            <header class="app-header">
                <h1>{"包厢预定簿"}</h1>
                <button class={button_class} onclick={props.on_toggle.clone()}>
                    { button_label }
                </button>
            </header>
        }
    }
}
