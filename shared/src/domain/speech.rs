//! Text-to-speech collaborator.

use async_trait::async_trait;
use thiserror::Error;

use crate::TextToSpeechRequest;

/// Path of the synthesis endpoint, relative to the API base URL
pub const TEXT_TO_SPEECH_PATH: &str = "/api/text-to-speech";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("network error: {0}")]
    Network(String),
    #[error("speech service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("speech service returned no audio")]
    EmptyAudio,
    #[error("audio playback failed: {0}")]
    Playback(String),
}

/// Turns a sentence into playable audio bytes.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait SpeechSynthesizer {
    async fn synthesize(&self, request: &TextToSpeechRequest) -> Result<Vec<u8>, SpeechError>;
}

/// Identifies one synthesis-and-playback attempt.
///
/// Every new attempt gets a fresh ticket; results carrying an older ticket
/// are stale and must be discarded, so replays never stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackTicket(u64);

impl PlaybackTicket {
    pub fn first() -> Self {
        PlaybackTicket(1)
    }

    pub fn next(&self) -> Self {
        PlaybackTicket(self.0.wrapping_add(1))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Playback state of a speaking dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Idle,
    Fetching(PlaybackTicket),
    Playing(PlaybackTicket),
}

impl Playback {
    pub fn ticket(&self) -> Option<PlaybackTicket> {
        match self {
            Playback::Idle => None,
            Playback::Fetching(ticket) | Playback::Playing(ticket) => Some(*ticket),
        }
    }

    /// Fetching counts as playing for the UI: the replay button shows "Playing..."
    pub fn is_active(&self) -> bool {
        !matches!(self, Playback::Idle)
    }
}

/// Tracks the single live playback of one dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackTracker {
    state: Playback,
    last_issued: Option<PlaybackTicket>,
}

impl PlaybackTracker {
    pub fn state(&self) -> Playback {
        self.state
    }

    /// Start a new attempt, superseding whatever was live
    pub fn begin(&mut self) -> PlaybackTicket {
        let ticket = self
            .last_issued
            .map(|ticket| ticket.next())
            .unwrap_or_else(PlaybackTicket::first);
        self.last_issued = Some(ticket);
        self.state = Playback::Fetching(ticket);
        ticket
    }

    /// Audio arrived; true when it belongs to the live attempt and should play
    pub fn audio_ready(&mut self, ticket: PlaybackTicket) -> bool {
        if self.state == Playback::Fetching(ticket) {
            self.state = Playback::Playing(ticket);
            true
        } else {
            false
        }
    }

    /// Playback ended or failed; stale tickets are ignored
    pub fn finish(&mut self, ticket: PlaybackTicket) -> bool {
        if self.state.ticket() == Some(ticket) {
            self.state = Playback::Idle;
            true
        } else {
            false
        }
    }

    /// Drop the live attempt so any late result is stale
    pub fn stop(&mut self) {
        self.state = Playback::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_issues_increasing_tickets() {
        let mut tracker = PlaybackTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(second > first);
        assert_eq!(tracker.state(), Playback::Fetching(second));
    }

    #[test]
    fn test_stale_audio_is_rejected() {
        let mut tracker = PlaybackTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.audio_ready(first));
        assert!(tracker.audio_ready(second));
        assert_eq!(tracker.state(), Playback::Playing(second));
        assert!(!tracker.finish(first));
        assert!(tracker.finish(second));
        assert_eq!(tracker.state(), Playback::Idle);
    }

    #[test]
    fn test_stop_invalidates_live_ticket() {
        let mut tracker = PlaybackTracker::default();
        let ticket = tracker.begin();
        tracker.stop();
        assert!(!tracker.audio_ready(ticket));
        assert!(!tracker.state().is_active());
    }

    #[test]
    fn test_speech_error_display() {
        let error = SpeechError::Status {
            status: 400,
            message: "Unsupported language: fr".to_string(),
        };
        assert_eq!(error.to_string(), "speech service returned 400: Unsupported language: fr");
    }
}
