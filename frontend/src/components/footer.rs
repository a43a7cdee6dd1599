use yew::prelude::*;

use crate::hooks::use_presentation::use_presentation;

#[function_component(Footer)]
pub fn footer() -> Html {
    let presentation = use_presentation();

    html! {
        <footer class="footer">
            <div class="container">
                <p class="footer-brand">{"🛡️ "}{presentation.t("nav.brand")}</p>
                <p class="footer-tagline">{presentation.t("footer.tagline")}</p>
                <p class="footer-rights">{presentation.t("footer.rights")}</p>
            </div>
        </footer>
    }
}
