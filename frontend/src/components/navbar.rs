use shared::{AppRoute, Language};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_presentation::use_presentation;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: AppRoute,
    pub on_navigate: Callback<AppRoute>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let presentation = use_presentation();

    let on_language_change = {
        let set_language = presentation.set_language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(language) = Language::from_code(&select.value()) {
                set_language.emit(language);
            }
        })
    };

    let on_elder_toggle = {
        let toggle = presentation.toggle_elder_mode.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let links = AppRoute::ALL.iter().map(|route| {
        let route = *route;
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(route);
            })
        };
        let class = classes!("nav-link", (route == props.current).then_some("active"));
        html! {
            <a href={route.path()} {class} {onclick}>{presentation.t(route.label_key())}</a>
        }
    });

    let elder_label = if presentation.elder_mode() {
        presentation.t("elderMode.disable")
    } else {
        presentation.t("elderMode.enable")
    };

    let brand_onclick = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(AppRoute::Home);
        })
    };

    html! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <a href="/" class="navbar-brand" onclick={brand_onclick}>
                    {"🛡️ "}{presentation.t("nav.brand")}
                </a>
                <div class="navbar-links">
                    {for links}
                </div>
                <div class="navbar-controls">
                    <label class="language-picker">
                        <span class="sr-only">{presentation.t("language.label")}</span>
                        <select onchange={on_language_change}>
                            {for Language::ALL.iter().map(|language| html! {
                                <option
                                    value={language.code()}
                                    selected={*language == presentation.settings.language}
                                >
                                    {language.native_name()}
                                </option>
                            })}
                        </select>
                    </label>
                    <button
                        type="button"
                        class={classes!("btn", "elder-toggle", presentation.elder_mode().then_some("active"))}
                        aria-pressed={presentation.elder_mode().to_string()}
                        title={presentation.t("elderMode.label")}
                        onclick={on_elder_toggle}
                    >
                        {"👓 "}{elder_label}
                    </button>
                </div>
            </div>
        </nav>
    }
}
