use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::file::{Blob, ObjectUrl};
use shared::SpeechError;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::Callback;

struct ActiveAudio {
    element: HtmlAudioElement,
    // keeps the blob URL alive while the element plays it
    _url: ObjectUrl,
    _listeners: [EventListener; 2],
}

impl Drop for ActiveAudio {
    fn drop(&mut self) {
        let _ = self.element.pause();
    }
}

/// Plays one clip at a time; starting a clip stops the previous one
#[derive(Clone, Default)]
pub struct AudioPlayer {
    current: Rc<RefCell<Option<ActiveAudio>>>,
}

impl AudioPlayer {
    /// Start playing WAV bytes. `on_done` fires when the clip ends or fails;
    /// a clip stopped early may still report an aborted play, so callers
    /// match reports against their playback ticket.
    pub fn play(&self, bytes: &[u8], on_done: Callback<Result<(), SpeechError>>) -> Result<(), SpeechError> {
        self.stop();

        let url = ObjectUrl::from(Blob::new_with_options(bytes, Some("audio/wav")));
        let element = HtmlAudioElement::new_with_src(&url)
            .map_err(|e| SpeechError::Playback(format!("{:?}", e)))?;

        let ended = {
            let on_done = on_done.clone();
            EventListener::once(&element, "ended", move |_| on_done.emit(Ok(())))
        };
        let failed = {
            let on_done = on_done.clone();
            EventListener::once(&element, "error", move |_| {
                on_done.emit(Err(SpeechError::Playback("audio could not be decoded".to_string())))
            })
        };

        let promise = element
            .play()
            .map_err(|e| SpeechError::Playback(format!("{:?}", e)))?;
        // autoplay policies reject the play() promise instead of firing "error"
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                on_done.emit(Err(SpeechError::Playback(format!("{:?}", e))));
            }
        });

        *self.current.borrow_mut() = Some(ActiveAudio {
            element,
            _url: url,
            _listeners: [ended, failed],
        });
        Ok(())
    }

    pub fn stop(&self) {
        self.current.borrow_mut().take();
    }
}
