use gloo::timers::callback::Timeout;
use shared::{
    AppRoute, BankField, ConnectBankWizard, MockBankDirectory, SafePayConfig, VerificationOutcome, WizardStep,
    SUPPORTED_BANKS,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_presentation::{use_presentation, PresentationContext};
use crate::hooks::use_view_model::{use_view_model, ViewModel};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct ConnectBankPageProps {
    pub on_navigate: Callback<AppRoute>,
}

fn on_field_input(wizard: &ViewModel<ConnectBankWizard>, field: BankField) -> Callback<InputEvent> {
    let wizard = wizard.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        wizard.update(|w| w.update(field, &input.value()));
    })
}

fn step_indicator(presentation: &PresentationContext, current: WizardStep) -> Html {
    html! {
        <ol class="wizard-steps">
            {for WizardStep::ALL.iter().map(|step| {
                let class = classes!(
                    "wizard-step",
                    (*step == current).then_some("active"),
                    (*step < current).then_some("done"),
                );
                let number = step.number().to_string();
                let title = presentation.t(step.title_key());
                html! {
                    <li {class}>
                        <span class="wizard-step-label">
                            {presentation.t_with("connectBank.stepLabel", &[("number", number.as_str()), ("title", title.as_str())])}
                        </span>
                        <span class="wizard-step-description">{presentation.t(step.description_key())}</span>
                    </li>
                }
            })}
        </ol>
    }
}

#[function_component(ConnectBankPage)]
pub fn connect_bank_page(props: &ConnectBankPageProps) -> Html {
    let presentation = use_presentation();
    let wizard = use_view_model(ConnectBankWizard::new);
    let error_key = use_state(|| Option::<&'static str>::None);
    let pending_lookup = use_mut_ref(|| Option::<Timeout>::None);
    let directory = use_memo((), |_| MockBankDirectory::default());

    // A lookup still waiting on its delay is cancelled with the page
    {
        let pending_lookup = pending_lookup.clone();
        use_effect_with((), move |_| move || drop(pending_lookup.borrow_mut().take()));
    }

    let on_bank_change = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            wizard.update(|w| w.update(BankField::BankName, &select.value()));
        })
    };

    let on_verify = {
        let wizard = wizard.clone();
        let error_key = error_key.clone();
        let pending_lookup = pending_lookup.clone();
        let directory = directory.clone();
        Callback::from(move |_: MouseEvent| match wizard.update(|w| w.begin_verification()) {
            Err(e) => error_key.set(Some(e.message_key())),
            Ok(()) => {
                error_key.set(None);
                let wizard = wizard.clone();
                let directory = directory.clone();
                let delay = SafePayConfig::default().verification_delay_ms;
                let timeout = Timeout::new(delay, move || {
                    let verified = wizard.update(|w| w.finish_verification(&*directory).is_verified());
                    if verified {
                        Logger::info_with_component("connect-bank", "Bank account verified");
                    } else {
                        Logger::info_with_component("connect-bank", "Bank account verification failed");
                    }
                });
                *pending_lookup.borrow_mut() = Some(timeout);
            }
        })
    };

    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            wizard.update(|w| w.next_step());
        })
    };

    let on_previous = {
        let wizard = wizard.clone();
        let error_key = error_key.clone();
        Callback::from(move |_: MouseEvent| {
            error_key.set(None);
            wizard.update(|w| w.previous_step());
        })
    };

    let on_start = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(AppRoute::SendMoney))
    };

    let w = wizard.read();
    let form = w.form();
    let step = w.step();

    let body = match step {
        WizardStep::Details => {
            let codes = directory.demo_ifsc_codes().join(", ");
            html! {
                <div class="wizard-body">
                    <label class="form-field">
                        <span>{presentation.t("connectBank.fields.bankName")}</span>
                        <select onchange={on_bank_change}>
                            <option value="" selected={form.bank_name.is_empty()}>
                                {presentation.t("connectBank.fields.bankPlaceholder")}
                            </option>
                            {for SUPPORTED_BANKS.iter().map(|bank| html! {
                                <option value={*bank} selected={form.bank_name == *bank}>{*bank}</option>
                            })}
                        </select>
                    </label>
                    <label class="form-field">
                        <span>{presentation.t("connectBank.fields.holderName")}</span>
                        <input
                            type="text"
                            value={form.account_holder_name.clone()}
                            placeholder={presentation.t("connectBank.fields.holderPlaceholder")}
                            oninput={on_field_input(&wizard, BankField::AccountHolderName)}
                        />
                    </label>
                    <label class="form-field">
                        <span>{presentation.t("connectBank.fields.accountNumber")}</span>
                        <input
                            type="password"
                            inputmode="numeric"
                            value={form.account_number.clone()}
                            placeholder={presentation.t("connectBank.fields.accountPlaceholder")}
                            oninput={on_field_input(&wizard, BankField::AccountNumber)}
                        />
                    </label>
                    <label class="form-field">
                        <span>{presentation.t("connectBank.fields.confirmAccountNumber")}</span>
                        <input
                            type="text"
                            inputmode="numeric"
                            value={form.confirm_account_number.clone()}
                            placeholder={presentation.t("connectBank.fields.confirmPlaceholder")}
                            oninput={on_field_input(&wizard, BankField::ConfirmAccountNumber)}
                        />
                    </label>
                    <label class="form-field">
                        <span>{presentation.t("connectBank.fields.ifscCode")}</span>
                        <input
                            type="text"
                            value={form.ifsc_code.clone()}
                            placeholder={presentation.t("connectBank.fields.ifscPlaceholder")}
                            oninput={on_field_input(&wizard, BankField::IfscCode)}
                        />
                        <small class="form-hint">{presentation.t_with("connectBank.fields.ifscHint", &[("codes", codes.as_str())])}</small>
                    </label>
                    {if w.is_verifying() {
                        html! {
                            <div class="wizard-status">
                                <p>{"⏳ "}{presentation.t("connectBank.verifying")}</p>
                                <dl class="review-details">
                                    <dt>{presentation.t("connectBank.accountHolder")}</dt>
                                    <dd>{&form.account_holder_name}</dd>
                                    <dt>{presentation.t("connectBank.accountNumberLabel")}</dt>
                                    <dd>{form.masked_account_number()}</dd>
                                </dl>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            }
        }
        WizardStep::Verification => {
            let result = match w.outcome() {
                Some(VerificationOutcome::Verified(account)) => html! {
                    <div class="verification-result success">
                        <h3>{"✅ "}{presentation.t("connectBank.verifiedTitle")}</h3>
                        <div class="card account-card">
                            <p class="account-bank">{&account.bank_name}</p>
                            <p class="account-branch">{&account.branch_name}</p>
                            <dl>
                                <dt>{presentation.t("connectBank.accountHolder")}</dt>
                                <dd>{&account.account_holder_name}</dd>
                                <dt>{presentation.t("connectBank.accountType")}</dt>
                                <dd>{&account.account_type}</dd>
                                <dt>{presentation.t("connectBank.availableBalance")}</dt>
                                <dd class="account-balance">{&account.balance}</dd>
                            </dl>
                        </div>
                    </div>
                },
                Some(VerificationOutcome::Failed(failure)) => html! {
                    <div class="verification-result failure" role="alert">
                        <h3>{"❌ "}{presentation.t("connectBank.failedTitle")}</h3>
                        <p>{presentation.t(failure.message_key())}</p>
                    </div>
                },
                None => html! {},
            };
            html! {
                <div class="wizard-body">
                    <h3>{presentation.t("connectBank.reviewTitle")}</h3>
                    <dl class="review-details">
                        <dt>{presentation.t("connectBank.fields.bankName")}</dt>
                        <dd>{&form.bank_name}</dd>
                        <dt>{presentation.t("connectBank.accountHolder")}</dt>
                        <dd>{&form.account_holder_name}</dd>
                        <dt>{presentation.t("connectBank.accountNumberLabel")}</dt>
                        <dd>{form.masked_account_number()}</dd>
                        <dt>{presentation.t("connectBank.fields.ifscCode")}</dt>
                        <dd>{&form.ifsc_code}</dd>
                    </dl>
                    {result}
                </div>
            }
        }
        WizardStep::Connected => html! {
            <div class="wizard-body">
                <div class="verification-result success">
                    <h3>{"🎉 "}{presentation.t("connectBank.connectedTitle")}</h3>
                    <p>{presentation.t("connectBank.connectedMessage")}</p>
                </div>
                <div class="card security-note">
                    <h4>{"🔒 "}{presentation.t("connectBank.securityTitle")}</h4>
                    <p>{presentation.t("connectBank.securityMessage")}</p>
                </div>
            </div>
        },
    };

    let primary = match step {
        WizardStep::Details => html! {
            <button class="btn btn-primary" disabled={!w.can_advance()} onclick={on_verify}>
                {if w.is_verifying() {
                    presentation.t("connectBank.verifyingButton")
                } else {
                    presentation.t("connectBank.verify")
                }}
            </button>
        },
        WizardStep::Verification => html! {
            <button class="btn btn-primary" disabled={!w.can_advance()} onclick={on_next}>
                {presentation.t("connectBank.next")}
            </button>
        },
        WizardStep::Connected => html! {
            <button class="btn btn-primary" onclick={on_start}>{presentation.t("connectBank.start")}</button>
        },
    };

    html! {
        <div class="page connect-bank-page">
            <div class="container">
                <h1 class="page-title">{presentation.t("connectBank.title")}</h1>
                <p class="page-subtitle">{presentation.t("connectBank.subtitle")}</p>
                {step_indicator(&presentation, step)}
                <div class={classes!("card", "wizard-card", presentation.scaled("text-base", "text-xl"))}>
                    {body}
                    {if let Some(key) = *error_key {
                        html! { <p class="form-error" role="alert">{presentation.t(key)}</p> }
                    } else {
                        html! {}
                    }}
                    <div class="wizard-buttons">
                        <button class="btn btn-secondary" disabled={!w.can_go_back()} onclick={on_previous}>
                            {presentation.t("connectBank.previous")}
                        </button>
                        {primary}
                    </div>
                </div>
            </div>
        </div>
    }
}
