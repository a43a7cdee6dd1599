use shared::AppRoute;
use yew::prelude::*;

use crate::hooks::use_presentation::use_presentation;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<AppRoute>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let presentation = use_presentation();

    let go_to = |route: AppRoute| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route))
    };

    let features = [
        ("🎙️", "home.voiceTitle", "home.voiceDescription"),
        ("👓", "home.elderTitle", "home.elderDescription"),
        ("🛡️", "home.fraudTitle", "home.fraudDescription"),
    ];

    html! {
        <div class="page home-page">
            <section class="hero">
                <div class="container">
                    <h1 class={presentation.scaled("hero-title", "hero-title text-4xl")}>{presentation.t("home.title")}</h1>
                    <p class="hero-subtitle">{presentation.t("home.subtitle")}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary btn-lg" onclick={go_to(AppRoute::ConnectBank)}>
                            {presentation.t("home.connectCta")}
                        </button>
                        <button class="btn btn-outline btn-lg" onclick={go_to(AppRoute::SendMoney)}>
                            {presentation.t("home.sendCta")}
                        </button>
                    </div>
                    <div class="hero-badges">
                        <span class="badge">{"🔒 "}{presentation.t("home.securityBadge")}</span>
                        <span class="badge">{"👁️ "}{presentation.t("home.monitoringBadge")}</span>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="container">
                    <h2 class="section-title">{presentation.t("home.featuresTitle")}</h2>
                    <p class="section-subtitle">{presentation.t("home.featuresSubtitle")}</p>
                    <div class="feature-grid">
                        {for features.iter().map(|(icon, title, description)| html! {
                            <div class="card feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{presentation.t(title)}</h3>
                                <p>{presentation.t(description)}</p>
                            </div>
                        })}
                    </div>
                </div>
            </section>
        </div>
    }
}
