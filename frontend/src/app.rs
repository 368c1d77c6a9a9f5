//! Root component, acting as the store for the reservation book.
//!
//! All state lives here: the canonical reservation collection, the view
//! mode flag, and the load guard. Every mutation flows through `update`,
//! which is the single place the persistence adapter is asked to save.
//! Deleting is two-phase: a `RequestDelete` message asks the user to
//! confirm, and only the confirmed `ConfirmDelete` command touches the
//! collection.

use common::model::book::Book;
use common::model::reservation::ReservationDraft;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::{html, Component, Context, Html};

use crate::components::header::Header;
use crate::components::reservation_form::ReservationForm;
use crate::components::reservation_list::ReservationList;
use crate::storage;

pub enum Msg {
    Loaded(Book),
    Add(ReservationDraft),
    RequestDelete(i64),
    ConfirmDelete(i64),
    ToggleViewMode,
}

pub struct App {
    book: Book,
    view_mode: bool,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            book: Book::new(),
            view_mode: false,
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(book) => {
                self.book = book;
                self.loaded = true;
                true
            }
            Msg::Add(draft) => {
                // The form is only rendered once loading finished, so an
                // add can never overwrite the stored list with a stale one.
                if !self.loaded {
                    return false;
                }
                self.book.add(draft, js_sys::Date::now() as i64);
                storage::save(&self.book);
                scroll_list_into_view();
                true
            }
            Msg::RequestDelete(id) => {
                if confirm("确定删除这条记录吗？") {
                    ctx.link().send_message(Msg::ConfirmDelete(id));
                }
                false
            }
            Msg::ConfirmDelete(id) => {
                if self.loaded && self.book.remove(id) {
                    storage::save(&self.book);
                    return true;
                }
                false
            }
            Msg::ToggleViewMode => {
                self.view_mode = !self.view_mode;
                if self.view_mode {
                    scroll_window_to_top();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.loaded {
            return html! {};
        }
        let link = ctx.link();
        let root_class = if self.view_mode {
            "app view-mode"
        } else {
            "app edit-mode"
        };
        html! {
            <div class={root_class}>
                <Header
                    view_mode={self.view_mode}
                    on_toggle={link.callback(|_: MouseEvent| Msg::ToggleViewMode)}
                />
                {
                    if self.view_mode {
                        html! {}
                    } else {
                        html! {
                            <div class="form-section">
                                <ReservationForm on_add={link.callback(Msg::Add)} />
                            </div>
                        }
                    }
                }
                <div id="reservation-list">
                    <ReservationList
                        reservations={self.book.reservations().to_vec()}
                        view_mode={self.view_mode}
                        on_delete={link.callback(Msg::RequestDelete)}
                    />
                </div>
                { self.view_footer() }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            ctx.link().send_message(Msg::Loaded(storage::load()));
        }
    }
}

impl App {
    /// Footer line shown only in view mode, stamping the generated sheet
    /// with the local date.
    fn view_footer(&self) -> Html {
        if !self.view_mode {
            return html! {};
        }
        let generated = js_sys::Date::new_0().to_locale_date_string("zh-CN", &JsValue::UNDEFINED);
        html! {
            <div class="view-footer">
                { format!("生成的预定单 • {}", String::from(generated)) }
            </div>
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Smooth-scrolls the list container into view after a new card renders.
/// A missing container is silently ignored.
fn scroll_list_into_view() {
    spawn_local(async {
        TimeoutFuture::new(50).await;
        if let Some(list) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("reservation-list"))
        {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            list.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
