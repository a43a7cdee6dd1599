use shared::{
    ConfirmationRequest, SafePayConfig, SendMoneyFlow, StaticFraudClassifier, SubmitOutcome, TransferField,
    TransferMethod,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::fraud_alert::FraudAlert;
use crate::components::voice_confirmation_modal::VoiceConfirmationModal;
use crate::hooks::use_presentation::use_presentation;
use crate::hooks::use_view_model::{use_view_model, ViewModel};
use crate::services::logging::Logger;

const COMPONENT: &str = "send-money";

fn on_field_input(
    flow: &ViewModel<SendMoneyFlow>,
    error_key: &UseStateHandle<Option<&'static str>>,
    field: TransferField,
) -> Callback<InputEvent> {
    let flow = flow.clone();
    let error_key = error_key.clone();
    Callback::from(move |e: InputEvent| {
        let value = match field {
            TransferField::Note => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            _ => e.target_unchecked_into::<HtmlInputElement>().value(),
        };
        error_key.set(None);
        flow.update(|f| f.update(field, &value));
    })
}

#[function_component(SendMoneyPage)]
pub fn send_money_page() -> Html {
    let presentation = use_presentation();
    let flow = use_view_model(SendMoneyFlow::new);
    let classifier = use_memo((), |_| {
        StaticFraudClassifier::new(SafePayConfig::default().large_amount_threshold)
    });
    let error_key = use_state(|| Option::<&'static str>::None);
    let confirmation = use_state(|| Option::<ConfirmationRequest>::None);
    let success_message = use_state(|| Option::<String>::None);

    let on_submit = {
        let flow = flow.clone();
        let classifier = classifier.clone();
        let error_key = error_key.clone();
        let confirmation = confirmation.clone();
        let success_message = success_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            success_message.set(None);
            match flow.update(|f| f.submit(&*classifier)) {
                SubmitOutcome::Invalid(error) => error_key.set(Some(error.message_key())),
                SubmitOutcome::Blocked(alert) => {
                    error_key.set(None);
                    Logger::warn_with_component(COMPONENT, &format!("Transfer held by fraud alert: {:?}", alert));
                }
                SubmitOutcome::AwaitingConfirmation => {
                    error_key.set(None);
                    let request = {
                        let f = flow.read();
                        ConfirmationRequest {
                            amount: f.form().amount.clone(),
                            recipient: f.form().recipient_name.clone(),
                        }
                    };
                    confirmation.set(Some(request));
                }
            }
        })
    };

    let on_proceed = {
        let flow = flow.clone();
        Callback::from(move |_: ()| flow.update(|f| f.acknowledge_alert()))
    };

    let on_confirm = {
        let flow = flow.clone();
        let confirmation = confirmation.clone();
        let success_message = success_message.clone();
        let presentation = presentation.clone();
        Callback::from(move |_: ConfirmationRequest| {
            confirmation.set(None);
            if let Some(receipt) = flow.update(|f| f.complete()) {
                Logger::info_with_component(COMPONENT, &format!("Transfer sent via {:?}", receipt.method));
                success_message.set(Some(presentation.t_with(
                    "success.message",
                    &[("amount", receipt.amount.as_str()), ("recipient", receipt.recipient_name.as_str())],
                )));
            }
        })
    };

    let on_cancel = {
        let flow = flow.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |_: ()| {
            confirmation.set(None);
            flow.update(|f| f.cancel_confirmation());
        })
    };

    let on_method = |method: TransferMethod| {
        let flow = flow.clone();
        let error_key = error_key.clone();
        Callback::from(move |_: Event| {
            error_key.set(None);
            flow.update(|f| f.set_method(method));
        })
    };

    let f = flow.read();
    let form = f.form();
    let amount_label = if form.amount.is_empty() { "0" } else { form.amount.as_str() };

    let address_fields = match form.method {
        TransferMethod::Upi => html! {
            <label class="form-field">
                <span>{presentation.t("upiId")}</span>
                <input
                    type="text"
                    value={form.upi_id.clone()}
                    placeholder="name@bank"
                    oninput={on_field_input(&flow, &error_key, TransferField::UpiId)}
                />
            </label>
        },
        TransferMethod::Account => html! {
            <>
                <label class="form-field">
                    <span>{presentation.t("accountNumber")}</span>
                    <input
                        type="text"
                        inputmode="numeric"
                        value={form.account_number.clone()}
                        oninput={on_field_input(&flow, &error_key, TransferField::AccountNumber)}
                    />
                </label>
                <label class="form-field">
                    <span>{presentation.t("ifscCode")}</span>
                    <input
                        type="text"
                        value={form.ifsc_code.clone()}
                        placeholder="SBIN0001234"
                        oninput={on_field_input(&flow, &error_key, TransferField::IfscCode)}
                    />
                </label>
            </>
        },
    };

    let alert = match f.fraud_alert() {
        Some(alert) => html! {
            <FraudAlert {alert} on_proceed={Some(on_proceed)} acknowledged={f.is_alert_acknowledged()} />
        },
        None => html! {},
    };

    html! {
        <div class="page send-money-page">
            <div class="container">
                <h1 class="page-title">{presentation.t("sendMoney.title")}</h1>
                <p class="page-subtitle">{presentation.t("sendMoney.subtitle")}</p>

                {if let Some(message) = (*success_message).clone() {
                    html! { <div class="success-banner" role="status">{"✅ "}{message}</div> }
                } else {
                    html! {}
                }}

                <form class={classes!("card", "transfer-form", presentation.scaled("text-base", "text-xl"))} onsubmit={on_submit}>
                    <h2>{presentation.t("transferDetails")}</h2>
                    <label class="form-field">
                        <span>{presentation.t("recipientName")}</span>
                        <input
                            type="text"
                            value={form.recipient_name.clone()}
                            oninput={on_field_input(&flow, &error_key, TransferField::RecipientName)}
                        />
                    </label>

                    <fieldset class="form-field method-picker">
                        <legend>{presentation.t("transferMethod")}</legend>
                        <label>
                            <input
                                type="radio"
                                name="method"
                                value={TransferMethod::Upi.as_str()}
                                checked={form.method == TransferMethod::Upi}
                                onchange={on_method(TransferMethod::Upi)}
                            />
                            {presentation.t("transferMethodUpi")}
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="method"
                                value={TransferMethod::Account.as_str()}
                                checked={form.method == TransferMethod::Account}
                                onchange={on_method(TransferMethod::Account)}
                            />
                            {presentation.t("transferMethodAccount")}
                        </label>
                    </fieldset>

                    {address_fields}

                    <label class="form-field">
                        <span>{presentation.t("amount")}</span>
                        <input
                            type="number"
                            min="1"
                            step="any"
                            value={form.amount.clone()}
                            oninput={on_field_input(&flow, &error_key, TransferField::Amount)}
                        />
                    </label>
                    <label class="form-field">
                        <span>{presentation.t("note")}</span>
                        <textarea
                            value={form.note.clone()}
                            oninput={on_field_input(&flow, &error_key, TransferField::Note)}
                        />
                    </label>

                    {if let Some(key) = *error_key {
                        html! { <p class="form-error" role="alert">{presentation.t(key)}</p> }
                    } else {
                        html! {}
                    }}

                    {alert}

                    <button type="submit" class="btn btn-primary btn-lg" disabled={f.is_awaiting_confirmation()}>
                        {presentation.t_with("sendButton", &[("amount", amount_label)])}
                    </button>
                </form>
            </div>

            <VoiceConfirmationModal
                request={(*confirmation).clone()}
                {on_confirm}
                {on_cancel}
            />
        </div>
    }
}
