//! Voice confirmation dialog.
//!
//! Opening the dialog speaks a localized confirmation sentence and starts a
//! countdown. When the countdown runs out the dialog closes as a cancel;
//! a transfer is only ever confirmed by an explicit `confirm`.

use crate::domain::countdown::{Countdown, CountdownEvent, ExpiryPolicy};
use crate::domain::localization::Localizer;
use crate::domain::speech::{Playback, PlaybackTicket, PlaybackTracker};
use crate::{SafePayConfig, TextToSpeechRequest};

/// The transfer waiting for confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationRequest {
    pub amount: String,
    pub recipient: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceEvent {
    /// Seconds left before auto-cancel
    Counting(u32),
    /// Countdown ran out and the dialog closed without confirming
    AutoClosed,
    /// Countdown ran out and the dialog stays open
    HeldOpen,
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoiceConfirmation {
    request: Option<ConfirmationRequest>,
    countdown: Countdown,
    playback: PlaybackTracker,
}

impl VoiceConfirmation {
    pub fn new(countdown_secs: u32) -> Self {
        Self::with_policy(countdown_secs, ExpiryPolicy::AutoClose)
    }

    pub fn with_policy(countdown_secs: u32, policy: ExpiryPolicy) -> Self {
        Self {
            request: None,
            countdown: Countdown::new(countdown_secs, policy),
            playback: PlaybackTracker::default(),
        }
    }

    pub fn from_config(config: &SafePayConfig) -> Self {
        Self::new(config.voice_countdown_secs)
    }

    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    pub fn request(&self) -> Option<&ConfirmationRequest> {
        self.request.as_ref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn playback(&self) -> Playback {
        self.playback.state()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.state().is_active()
    }

    /// Open for a transfer; returns the ticket of the first playback
    pub fn open(&mut self, request: ConfirmationRequest) -> PlaybackTicket {
        log::info!("Voice confirmation opened for {} to {}", request.amount, request.recipient);
        self.request = Some(request);
        self.countdown.start();
        self.playback.begin()
    }

    /// Restart playback, superseding the one in flight. None while closed.
    pub fn replay(&mut self) -> Option<PlaybackTicket> {
        if self.is_open() {
            Some(self.playback.begin())
        } else {
            None
        }
    }

    /// True when the fetched audio is for the live playback and should be played
    pub fn audio_ready(&mut self, ticket: PlaybackTicket) -> bool {
        self.is_open() && self.playback.audio_ready(ticket)
    }

    pub fn playback_finished(&mut self, ticket: PlaybackTicket) -> bool {
        self.playback.finish(ticket)
    }

    /// Fetch or playback failed: back to not playing, dialog stays open
    pub fn playback_failed(&mut self, ticket: PlaybackTicket) -> bool {
        let live = self.playback.finish(ticket);
        if live {
            log::warn!("Voice confirmation audio failed, dialog stays open");
        }
        live
    }

    pub fn cancel(&mut self) {
        if self.request.take().is_some() {
            log::info!("Voice confirmation cancelled");
        }
        self.close();
    }

    /// Confirm the pending transfer and close
    pub fn confirm(&mut self) -> Option<ConfirmationRequest> {
        let request = self.request.take();
        self.close();
        request
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> VoiceEvent {
        if !self.is_open() {
            return VoiceEvent::Idle;
        }
        match self.countdown.tick() {
            CountdownEvent::Tick(remaining) => VoiceEvent::Counting(remaining),
            CountdownEvent::Expired(ExpiryPolicy::AutoClose) => {
                log::info!("Voice confirmation timed out");
                self.request = None;
                self.close();
                VoiceEvent::AutoClosed
            }
            CountdownEvent::Expired(ExpiryPolicy::HoldOpen) => VoiceEvent::HeldOpen,
            CountdownEvent::Idle => VoiceEvent::Idle,
        }
    }

    /// Sentence spoken for the pending transfer
    pub fn spoken_sentence(&self, localizer: &Localizer) -> Option<String> {
        self.request.as_ref().map(|request| {
            localizer.t_with(
                "voice.confirmation",
                &[("amount", request.amount.as_str()), ("recipient", request.recipient.as_str())],
            )
        })
    }

    /// Request body for the speech endpoint
    pub fn speech_request(&self, localizer: &Localizer) -> Option<TextToSpeechRequest> {
        self.spoken_sentence(localizer).map(|text| TextToSpeechRequest {
            text,
            language: localizer.language().code().to_string(),
        })
    }

    fn close(&mut self) {
        self.countdown.stop();
        self.playback.stop();
    }
}
