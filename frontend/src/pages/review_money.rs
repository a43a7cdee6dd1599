use gloo::timers::callback::Timeout;
use shared::domain::speech::PlaybackTracker;
use shared::{
    format_inr, SafePayConfig, SpeechError, TextToSpeechRequest, Transaction, TransactionFilter, TransactionLedger,
    TransactionQuery,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::undo_transaction_modal::UndoTransactionModal;
use crate::hooks::use_presentation::use_presentation;
use crate::hooks::use_speech::use_speech;
use crate::hooks::use_view_model::use_view_model;
use crate::services::logging::Logger;

const COMPONENT: &str = "review-money";

/// Which row is being read aloud, if any
#[derive(Clone, Default)]
struct ReadAloud {
    tracker: PlaybackTracker,
    transaction_id: Option<String>,
}

impl ReadAloud {
    fn is_reading(&self, id: &str) -> bool {
        self.tracker.state().is_active() && self.transaction_id.as_deref() == Some(id)
    }
}

#[function_component(ReviewMoneyPage)]
pub fn review_money_page() -> Html {
    let presentation = use_presentation();
    let ledger = use_view_model(TransactionLedger::with_sample_data);
    let reader = use_view_model(ReadAloud::default);
    let speech = use_speech();
    let query = use_state(TransactionQuery::default);
    let undo_target = use_state(|| Option::<Transaction>::None);
    let notice = use_state(|| Option::<String>::None);

    // "Recent" badges expire a while after the page opens
    {
        let ledger = ledger.clone();
        use_effect_with((), move |_| {
            let lifetime = SafePayConfig::default().recent_flag_lifetime_ms;
            let timeout = Timeout::new(lifetime, move || {
                let cleared = ledger.update(|l| l.clear_recent_flags());
                Logger::debug_with_component(COMPONENT, &format!("Cleared {} recent flags", cleared));
            });
            move || drop(timeout)
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(TransactionQuery {
                search: input.value(),
                ..(*query).clone()
            });
        })
    };

    let on_filter = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            query.set(TransactionQuery {
                filter: TransactionFilter::from_value(&select.value()),
                ..(*query).clone()
            });
        })
    };

    let on_undo = {
        let ledger = ledger.clone();
        let undo_target = undo_target.clone();
        let notice = notice.clone();
        let presentation = presentation.clone();
        Callback::from(move |id: String| {
            undo_target.set(None);
            match ledger.update(|l| l.undo(&id).map(|_| ())) {
                Ok(()) => notice.set(Some(presentation.t("undo.success"))),
                Err(e) => Logger::warn_with_component(COMPONENT, &e.to_string()),
            }
        })
    };

    let on_undo_close = {
        let undo_target = undo_target.clone();
        Callback::from(move |_: ()| undo_target.set(None))
    };

    let read_aloud = {
        let reader = reader.clone();
        let speech = speech.clone();
        let localizer = presentation.localizer();
        move |tx: &Transaction| {
            let reader = reader.clone();
            let speech = speech.clone();
            let tx = tx.clone();
            Callback::from(move |_: MouseEvent| {
                speech.stop();
                let ticket = reader.update(|r| {
                    r.transaction_id = Some(tx.id.clone());
                    r.tracker.begin()
                });
                let request = TextToSpeechRequest {
                    text: TransactionLedger::read_aloud_text(&tx, &localizer),
                    language: localizer.language().code().to_string(),
                };
                let accept = {
                    let reader = reader.clone();
                    move || reader.update(|r| r.tracker.audio_ready(ticket))
                };
                let on_done = {
                    let reader = reader.clone();
                    Callback::from(move |result: Result<(), SpeechError>| {
                        let live = reader.update(|r| r.tracker.finish(ticket));
                        if let (true, Err(e)) = (live, result) {
                            Logger::warn_with_component(COMPONENT, &format!("Read aloud failed: {}", e));
                        }
                    })
                };
                speech.speak(request, accept, on_done);
            })
        }
    };

    let l = ledger.read();
    let summary = l.summary();
    let rows = l.filtered(&query);
    let r = reader.read();

    let row_view = |tx: &&Transaction| {
        let tx: &Transaction = tx;
        let (heading, sign) = if tx.is_sent() {
            (presentation.t_with("review.to", &[("name", tx.counterparty.as_str())]), "-")
        } else {
            (presentation.t_with("review.from", &[("name", tx.counterparty.as_str())]), "+")
        };
        let date = tx.date.format("%d %b %Y").to_string();
        let time = tx.time.format("%H:%M").to_string();
        let undo_button = if tx.is_undoable() {
            let undo_target = undo_target.clone();
            let target = tx.clone();
            let onclick = Callback::from(move |_: MouseEvent| undo_target.set(Some(target.clone())));
            html! {
                <button class="btn btn-sm btn-danger" {onclick}>{"↩️ "}{presentation.t("review.undo")}</button>
            }
        } else {
            html! {}
        };
        let reading = r.is_reading(&tx.id);

        html! {
            <li key={tx.id.clone()} class={classes!("transaction-row", tx.is_fraudulent.then_some("fraudulent"))}>
                <div class="transaction-main">
                    <div class="transaction-heading">
                        <span class="transaction-counterparty">{heading}</span>
                        {if tx.is_fraudulent {
                            html! { <span class="badge badge-danger">{"⚠️ "}{presentation.t("review.fraudBadge")}</span> }
                        } else {
                            html! {}
                        }}
                        {if tx.is_recent {
                            html! { <span class="badge badge-info">{presentation.t("review.recentBadge")}</span> }
                        } else {
                            html! {}
                        }}
                    </div>
                    <p class="transaction-meta">
                        {presentation.t_with("review.at", &[("date", date.as_str()), ("time", time.as_str())])}
                        {" · "}{tx.method.label()}
                    </p>
                    {match &tx.note {
                        Some(note) => html! { <p class="transaction-note">{presentation.t_with("review.noteLabel", &[("note", note.as_str())])}</p> },
                        None => html! {},
                    }}
                    {if tx.is_fraudulent {
                        html! {
                            <div class="fraud-alert danger">
                                <strong>{presentation.t("review.suspiciousTitle")}</strong>
                                <p>{presentation.t("review.suspiciousMessage")}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
                <div class="transaction-side">
                    <span class={classes!("transaction-amount", if tx.is_sent() { "sent" } else { "received" })}>
                        {sign}{format_inr(tx.amount_value())}
                    </span>
                    <span class={classes!("status", tx.status.label_key().rsplit('.').next())}>
                        {presentation.t(tx.status.label_key())}
                    </span>
                    <div class="transaction-actions">
                        <button
                            class={classes!("btn", "btn-sm", "btn-outline", reading.then_some("active"))}
                            title={presentation.t("review.readAloud")}
                            onclick={read_aloud(tx)}
                        >
                            {if reading { "🔊" } else { "🔈" }}
                        </button>
                        {undo_button}
                    </div>
                </div>
            </li>
        }
    };

    let list = if rows.is_empty() {
        html! { <p class="empty-state">{presentation.t("review.empty")}</p> }
    } else {
        html! { <ul class="transaction-list">{for rows.iter().map(row_view)}</ul> }
    };

    html! {
        <div class="page review-money-page">
            <div class="container">
                <h1 class="page-title">{presentation.t("review.title")}</h1>
                <p class="page-subtitle">{presentation.t("review.subtitle")}</p>

                {if let Some(message) = (*notice).clone() {
                    html! { <div class="success-banner" role="status">{"✅ "}{message}</div> }
                } else {
                    html! {}
                }}

                <div class="summary-grid">
                    <div class="card summary-card">
                        <span class="summary-label">{presentation.t("review.totalSent")}</span>
                        <span class="summary-value sent">{format_inr(summary.total_sent)}</span>
                    </div>
                    <div class="card summary-card">
                        <span class="summary-label">{presentation.t("review.totalReceived")}</span>
                        <span class="summary-value received">{format_inr(summary.total_received)}</span>
                    </div>
                    <div class="card summary-card">
                        <span class="summary-label">{presentation.t("review.fraudAlerts")}</span>
                        <span class="summary-value fraud">{summary.fraud_count}</span>
                    </div>
                </div>

                {if summary.fraud_count > 0 {
                    html! {
                        <div class="fraud-alert danger" role="alert">
                            <h4>{"⚠️ "}{presentation.t("review.suspiciousTitle")}</h4>
                            <p>{presentation.t("review.suspiciousMessage")}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class={classes!("card", "transaction-history", presentation.scaled("text-base", "text-xl"))}>
                    <div class="history-header">
                        <h2>{presentation.t("review.historyTitle")}</h2>
                        <div class="history-controls">
                            <input
                                type="search"
                                value={query.search.clone()}
                                placeholder={presentation.t("review.searchPlaceholder")}
                                oninput={on_search}
                            />
                            <select onchange={on_filter}>
                                {for TransactionFilter::ALL.iter().map(|filter| html! {
                                    <option value={filter.as_str()} selected={*filter == query.filter}>
                                        {presentation.t(filter.label_key())}
                                    </option>
                                })}
                            </select>
                        </div>
                    </div>
                    {list}
                </div>
            </div>

            <UndoTransactionModal
                transaction={(*undo_target).clone()}
                {on_undo}
                on_close={on_undo_close}
            />
        </div>
    }
}
