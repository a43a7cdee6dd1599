use shared::FraudAlertType;
use yew::prelude::*;

use crate::hooks::use_presentation::use_presentation;

#[derive(Properties, PartialEq)]
pub struct FraudAlertProps {
    pub alert: FraudAlertType,
    /// Shows the "proceed anyway" button when set
    #[prop_or_default]
    pub on_proceed: Option<Callback<()>>,
    #[prop_or_default]
    pub acknowledged: bool,
}

#[function_component(FraudAlert)]
pub fn fraud_alert(props: &FraudAlertProps) -> Html {
    let presentation = use_presentation();

    let proceed = match (&props.on_proceed, props.acknowledged) {
        (Some(on_proceed), false) => {
            let on_proceed = on_proceed.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_proceed.emit(()));
            html! {
                <button type="button" class="btn btn-warning" {onclick}>
                    {presentation.t("fraud.proceedAnyway")}
                </button>
            }
        }
        (_, true) => html! {
            <p class="fraud-alert-acknowledged">{presentation.t("fraud.acknowledged")}</p>
        },
        _ => html! {},
    };

    html! {
        <div class={classes!(props.alert.css_class(), presentation.scaled("text-base", "text-xl"))} role="alert">
            <h4 class="fraud-alert-title">{"⚠️ "}{presentation.t(props.alert.title_key())}</h4>
            <p class="fraud-alert-message">{presentation.t(props.alert.message_key())}</p>
            {proceed}
        </div>
    }
}
