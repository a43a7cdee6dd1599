use std::rc::Rc;

use shared::{SpeechError, SpeechSynthesizer, TextToSpeechRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::audio::AudioPlayer;

/// Text-to-speech for one component: fetch through the backend, play one clip at a time
#[derive(Clone)]
pub struct Speech {
    synthesizer: Rc<dyn SpeechSynthesizer>,
    player: AudioPlayer,
}

impl Speech {
    pub fn new(synthesizer: Rc<dyn SpeechSynthesizer>) -> Self {
        Self {
            synthesizer,
            player: AudioPlayer::default(),
        }
    }

    /// Fetch audio for `request` and play it if `accept` still agrees once it
    /// arrives. `on_done` reports the end of playback or any failure; a clip
    /// that `accept` turned down reports nothing.
    pub fn speak(
        &self,
        request: TextToSpeechRequest,
        accept: impl FnOnce() -> bool + 'static,
        on_done: Callback<Result<(), SpeechError>>,
    ) {
        let synthesizer = self.synthesizer.clone();
        let player = self.player.clone();
        spawn_local(async move {
            match synthesizer.synthesize(&request).await {
                Ok(audio) => {
                    if accept() {
                        if let Err(e) = player.play(&audio, on_done.clone()) {
                            on_done.emit(Err(e));
                        }
                    }
                }
                Err(e) => on_done.emit(Err(e)),
            }
        });
    }

    pub fn stop(&self) {
        self.player.stop();
    }
}

/// Speech bound to the backend API; audio stops when the component unmounts
#[hook]
pub fn use_speech() -> Speech {
    let speech = use_memo((), |_| Speech::new(Rc::new(ApiClient::new())));

    {
        let speech = speech.clone();
        use_effect_with((), move |_| move || speech.stop());
    }

    (*speech).clone()
}
