use shared::AppRoute;
use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::footer::Footer;
use components::navbar::Navbar;
use hooks::use_presentation::{use_presentation_provider, PresentationContext};
use pages::connect_bank::ConnectBankPage;
use pages::home::HomePage;
use pages::review_money::ReviewMoneyPage;
use pages::send_money::SendMoneyPage;
use services::logging::Logger;

fn current_route() -> AppRoute {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| AppRoute::from_path(&path))
        .unwrap_or(AppRoute::Home)
}

fn push_history(route: AppRoute) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
                Logger::warn_with_component("router", &format!("pushState failed: {:?}", e));
            }
        }
        Err(e) => Logger::warn_with_component("router", &format!("History unavailable: {:?}", e)),
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[function_component(App)]
fn app() -> Html {
    let presentation = use_presentation_provider();
    let route = use_state(current_route);

    // Back and forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                gloo::events::EventListener::new(&window, "popstate", move |_| route.set(current_route()))
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: AppRoute| {
            push_history(next);
            route.set(next);
        })
    };

    let page = match *route {
        AppRoute::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        AppRoute::ConnectBank => html! { <ConnectBankPage on_navigate={on_navigate.clone()} /> },
        AppRoute::SendMoney => html! { <SendMoneyPage /> },
        AppRoute::ReviewMoney => html! { <ReviewMoneyPage /> },
    };

    html! {
        <ContextProvider<PresentationContext> context={presentation}>
            <div class="app">
                <Navbar current={*route} {on_navigate} />
                <main class="main-content">
                    {page}
                </main>
                <Footer />
            </div>
        </ContextProvider<PresentationContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
