//! Request lifecycle and the surface the presentation layer renders from.

use tracing::{info, warn};

use crate::composer::{TextComposer, SPECIAL_CHARACTERS};
use crate::config::SynthesisConfig;
use crate::synthesis::{AudioOutput, SynthesisClient};
use crate::Result;

/// The single-slot request state.
///
/// Keeping the audio and the error message inside the variants makes the
/// "at most one result" invariant structural: entering [`InFlight`]
/// (and therefore any later result) drops whatever the previous attempt
/// left behind.
///
/// [`InFlight`]: RequestState::InFlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    InFlight,
    Succeeded(AudioOutput),
    Failed(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

/// One user session: draft text, request state and the endpoint client.
///
/// Constructed at session start, dropped at session end; there is no
/// ambient global state.
pub struct SynthesisSession {
    composer: TextComposer,
    state: RequestState,
    client: SynthesisClient,
}

impl SynthesisSession {
    pub fn new(config: &SynthesisConfig) -> Result<Self> {
        Ok(Self {
            composer: TextComposer::new(),
            state: RequestState::Idle,
            client: SynthesisClient::from_config(config)?,
        })
    }

    // -- write surface ----------------------------------------------------

    /// Insert one character at the end of the draft.
    pub fn append(&mut self, ch: char) {
        self.composer.append(ch);
    }

    /// Overwrite the draft with a direct edit.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.composer.replace(text);
    }

    /// Run one synthesis attempt for the current draft.
    ///
    /// A call while a request is already in flight does nothing; the state
    /// itself is the mutual exclusion, and at most one request is ever
    /// outstanding. The attempt always settles into `Succeeded` or `Failed`.
    /// Faults are stored as messages, never propagated and never retried.
    pub async fn submit(&mut self) {
        if !self.begin_submission() {
            return;
        }

        self.state = match self.client.synthesize(self.composer.text()).await {
            Ok(audio) => {
                info!(bytes = audio.bytes().len(), "synthesis succeeded");
                RequestState::Succeeded(audio)
            }
            Err(err) => {
                warn!(error = %err, "synthesis failed");
                RequestState::Failed(err.to_string())
            }
        };
    }

    /// Clear previous results and enter `InFlight`. Returns `false` when a
    /// request is already outstanding.
    fn begin_submission(&mut self) -> bool {
        if self.state.is_in_flight() {
            warn!("submit ignored: a synthesis request is already in flight");
            return false;
        }
        self.state = RequestState::InFlight;
        true
    }

    // -- read surface ------------------------------------------------------

    pub fn draft_text(&self) -> &str {
        self.composer.text()
    }

    pub fn special_characters(&self) -> &'static [char] {
        &SPECIAL_CHARACTERS
    }

    /// `true` while a request is outstanding; the caller disables
    /// re-submission on this flag.
    pub fn is_submitting(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn audio(&self) -> Option<&AudioOutput> {
        match &self.state {
            RequestState::Succeeded(audio) => Some(audio),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Label for the submission control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Please wait..."
        } else {
            "Generate audio"
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::DEFAULT_DRAFT_TEXT;

    fn session_with_unreachable_endpoint() -> SynthesisSession {
        let config = SynthesisConfig::new("http://127.0.0.1:9");
        SynthesisSession::new(&config).expect("build session")
    }

    #[test]
    fn fresh_session_surface() {
        let session = session_with_unreachable_endpoint();
        assert_eq!(session.draft_text(), DEFAULT_DRAFT_TEXT);
        assert_eq!(session.special_characters(), &SPECIAL_CHARACTERS);
        assert!(!session.is_submitting());
        assert!(session.audio().is_none());
        assert!(session.error_message().is_none());
        assert_eq!(session.submit_label(), "Generate audio");
        assert_eq!(*session.state(), RequestState::Idle);
    }

    #[test]
    fn composer_operations_pass_through() {
        let mut session = session_with_unreachable_endpoint();
        session.replace("Kia orana");
        session.append('ā');
        assert_eq!(session.draft_text(), "Kia oranaā");
    }

    #[test]
    fn beginning_a_submission_clears_a_previous_success() {
        let mut session = session_with_unreachable_endpoint();
        session.state = RequestState::Succeeded(AudioOutput::new(vec![0x52, 0x49, 0x46, 0x46]));

        assert!(session.begin_submission());
        assert!(session.is_submitting());
        assert!(session.audio().is_none());
        assert!(session.error_message().is_none());
        assert_eq!(session.submit_label(), "Please wait...");
    }

    #[test]
    fn beginning_a_submission_clears_a_previous_failure() {
        let mut session = session_with_unreachable_endpoint();
        session.state = RequestState::Failed("HTTP Error 500".to_string());

        assert!(session.begin_submission());
        assert!(session.audio().is_none());
        assert!(session.error_message().is_none());
    }

    #[test]
    fn beginning_a_submission_is_refused_while_in_flight() {
        let mut session = session_with_unreachable_endpoint();
        session.state = RequestState::InFlight;

        assert!(!session.begin_submission());
        assert!(session.is_submitting());
    }

    #[tokio::test]
    async fn submit_while_in_flight_dispatches_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;

        let config = SynthesisConfig::new(server.url());
        let mut session = SynthesisSession::new(&config).expect("build session");
        session.state = RequestState::InFlight;

        session.submit().await;

        mock.assert_async().await;
        assert!(session.is_submitting());
    }
}
