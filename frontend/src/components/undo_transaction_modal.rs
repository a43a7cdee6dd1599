use shared::{format_inr, SafePayConfig, Transaction, UndoEvent, UndoTransactionFlow};
use yew::prelude::*;

use crate::hooks::use_presentation::use_presentation;
use crate::hooks::use_ticker::use_ticker;
use crate::hooks::use_view_model::use_view_model;

#[derive(Properties, PartialEq)]
pub struct UndoTransactionModalProps {
    /// Transaction offered for reversal; the modal is open while this is set
    pub transaction: Option<Transaction>,
    /// Receives the id of the transaction to reverse
    pub on_undo: Callback<String>,
    /// "Keep Transaction" or the countdown running out
    pub on_close: Callback<()>,
}

#[function_component(UndoTransactionModal)]
pub fn undo_transaction_modal(props: &UndoTransactionModalProps) -> Html {
    let presentation = use_presentation();
    let flow = use_view_model(|| UndoTransactionFlow::from_config(&SafePayConfig::default()));

    {
        let flow = flow.clone();
        let transaction_id = props.transaction.as_ref().map(|tx| tx.id.clone());
        use_effect_with(transaction_id, move |transaction_id| {
            match transaction_id {
                Some(id) => flow.update(|f| f.open(id)),
                None => flow.update(|f| f.keep()),
            }
            || ()
        });
    }

    let on_tick = {
        let flow = flow.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if flow.update(|f| f.tick()) == UndoEvent::AutoClosed {
                on_close.emit(());
            }
        })
    };
    use_ticker(flow.read().is_open(), on_tick);

    let on_keep = {
        let flow = flow.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            flow.update(|f| f.keep());
            on_close.emit(());
        })
    };

    let on_undo_now = {
        let flow = flow.clone();
        let on_undo = props.on_undo.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = flow.update(|f| f.undo_now()) {
                on_undo.emit(id);
            }
        })
    };

    let (open, remaining) = {
        let f = flow.read();
        (f.is_open(), f.remaining_secs())
    };
    let Some(transaction) = props.transaction.as_ref().filter(|_| open) else {
        return html! {};
    };

    let amount = format_inr(transaction.amount_value());
    let amount = amount.trim_start_matches('₹');
    let remaining = remaining.to_string();

    html! {
        <div class="modal-backdrop">
            <div class={classes!("modal", "undo-modal", presentation.elder_mode().then_some("modal-elder"))} role="dialog" aria-modal="true">
                <h3 class="modal-title">{"↩️ "}{presentation.t("undo.title")}</h3>
                <p class="undo-amount">{presentation.t_with("undo.description", &[("amount", amount)])}</p>
                <p class="undo-recipient">
                    {presentation.t_with("undo.recipient", &[("recipient", transaction.counterparty.as_str())])}
                </p>
                <p class="undo-explanation">{presentation.t("undo.explanation")}</p>
                <p class="countdown">{presentation.t_with("undo.countdown", &[("seconds", remaining.as_str())])}</p>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_keep}>
                        {presentation.t("undo.keep")}
                    </button>
                    <button type="button" class="btn btn-danger" onclick={on_undo_now}>
                        {presentation.t("undo.undoNow")}
                    </button>
                </div>
            </div>
        </div>
    }
}
