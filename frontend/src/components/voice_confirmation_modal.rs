use shared::{ConfirmationRequest, PlaybackTicket, SafePayConfig, SpeechError, VoiceConfirmation, VoiceEvent};
use yew::prelude::*;

use crate::hooks::use_presentation::use_presentation;
use crate::hooks::use_speech::use_speech;
use crate::hooks::use_ticker::use_ticker;
use crate::hooks::use_view_model::use_view_model;
use crate::services::logging::Logger;

const COMPONENT: &str = "voice-confirmation";

#[derive(Properties, PartialEq)]
pub struct VoiceConfirmationModalProps {
    /// The modal is open while this is set
    pub request: Option<ConfirmationRequest>,
    pub on_confirm: Callback<ConfirmationRequest>,
    /// Cancel button, or the countdown running out
    pub on_cancel: Callback<()>,
}

#[function_component(VoiceConfirmationModal)]
pub fn voice_confirmation_modal(props: &VoiceConfirmationModalProps) -> Html {
    let presentation = use_presentation();
    let speech = use_speech();
    let dialog = use_view_model(|| VoiceConfirmation::from_config(&SafePayConfig::default()));

    // Fetch and play the confirmation sentence for one playback ticket
    let play = {
        let dialog = dialog.clone();
        let speech = speech.clone();
        let localizer = presentation.localizer();
        Callback::from(move |ticket: PlaybackTicket| {
            let Some(request) = dialog.read().speech_request(&localizer) else {
                return;
            };
            let accept = {
                let dialog = dialog.clone();
                move || dialog.update(|d| d.audio_ready(ticket))
            };
            let on_done = {
                let dialog = dialog.clone();
                Callback::from(move |result: Result<(), SpeechError>| match result {
                    Ok(()) => {
                        dialog.update(|d| d.playback_finished(ticket));
                    }
                    Err(e) => {
                        if dialog.update(|d| d.playback_failed(ticket)) {
                            Logger::warn_with_component(COMPONENT, &format!("Confirmation audio failed: {}", e));
                        }
                    }
                })
            };
            speech.speak(request, accept, on_done);
        })
    };

    {
        let dialog = dialog.clone();
        let speech = speech.clone();
        let play = play.clone();
        use_effect_with(props.request.clone(), move |request| {
            match request {
                Some(request) => {
                    let ticket = dialog.update(|d| d.open(request.clone()));
                    play.emit(ticket);
                }
                None => {
                    dialog.update(|d| d.cancel());
                    speech.stop();
                }
            }
            || ()
        });
    }

    let on_tick = {
        let dialog = dialog.clone();
        let speech = speech.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| {
            if dialog.update(|d| d.tick()) == VoiceEvent::AutoClosed {
                speech.stop();
                on_cancel.emit(());
            }
        })
    };
    use_ticker(dialog.read().is_open(), on_tick);

    let on_cancel_click = {
        let dialog = dialog.clone();
        let speech = speech.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            dialog.update(|d| d.cancel());
            speech.stop();
            on_cancel.emit(());
        })
    };

    let on_replay_click = {
        let dialog = dialog.clone();
        let speech = speech.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(ticket) = dialog.update(|d| d.replay()) {
                speech.stop();
                play.emit(ticket);
            }
        })
    };

    let on_confirm_click = {
        let dialog = dialog.clone();
        let speech = speech.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(request) = dialog.update(|d| d.confirm()) {
                speech.stop();
                on_confirm.emit(request);
            }
        })
    };

    let (request, remaining, playing) = {
        let d = dialog.read();
        (d.request().cloned(), d.remaining_secs(), d.is_playing())
    };
    let Some(request) = request else {
        return html! {};
    };

    let remaining = remaining.to_string();

    html! {
        <div class="modal-backdrop">
            <div class={classes!("modal", "voice-modal", presentation.elder_mode().then_some("modal-elder"))} role="dialog" aria-modal="true">
                <h3 class="modal-title">{"🎙️ "}{presentation.t("voice.title")}</h3>
                <div class="voice-summary">
                    <p class="voice-amount">{presentation.t_with("voice.sentTo", &[("amount", request.amount.as_str())])}</p>
                    <p class="voice-recipient">{&request.recipient}</p>
                </div>
                {if playing {
                    html! { <p class="voice-playing">{"🔊 "}{presentation.t("voice.playing")}</p> }
                } else {
                    html! {}
                }}
                <p class="voice-prompt">{presentation.t("voice.prompt")}</p>
                <p class="countdown">{presentation.t_with("voice.autoCancel", &[("seconds", remaining.as_str())])}</p>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {presentation.t("voice.cancel")}
                    </button>
                    <button type="button" class="btn btn-outline" onclick={on_replay_click}>
                        {if playing { presentation.t("voice.replaying") } else { presentation.t("voice.replay") }}
                    </button>
                    <button type="button" class="btn btn-primary" onclick={on_confirm_click}>
                        {presentation.t("voice.confirm")}
                    </button>
                </div>
            </div>
        </div>
    }
}
