use crate::app::App;

mod app;
mod components;
mod local_date;
mod storage;

fn main() {
    yew::Renderer::<App>::new().render();
}
