//! # cim-tts
//!
//! Client library for the hosted Cook Islands Māori (ꞌAvaiki Nui)
//! text-to-speech service.
//!
//! The service itself is an external HTTP collaborator: it receives a JSON
//! body `{"text": ...}` and answers with WAV audio bytes. This crate owns
//! everything on the near side of that call:
//!
//! - **Text composition**: [`TextComposer`] holds the draft text pending
//!   synthesis and the fixed set of insertable diacritic characters
//!   ([`SPECIAL_CHARACTERS`]) the language needs.
//! - **Request lifecycle**: [`SynthesisSession`] drives a single-slot
//!   [`RequestState`] (idle, in flight, succeeded, failed) around exactly one
//!   outstanding request at a time, with an exhaustive failure
//!   classification. A submission always settles; it never propagates a
//!   fault past the session boundary.
//! - **Presentation surface**: every value a front end renders (draft text,
//!   in-progress flag, audio bytes, error message, button label) is read
//!   from the session, so the UI never caches its own copy of the state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cim_tts::{SynthesisConfig, SynthesisSession};
//!
//! #[tokio::main]
//! async fn main() -> cim_tts::Result<()> {
//!     let config = SynthesisConfig::from_env()?;
//!     let mut session = SynthesisSession::new(&config)?;
//!
//!     session.replace("Kia orana");
//!     session.submit().await;
//!
//!     match session.error_message() {
//!         None => {
//!             let audio = session.audio().expect("settled without error");
//!             println!("synthesized {} bytes", audio.bytes().len());
//!         }
//!         Some(message) => eprintln!("{message}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod about;
pub mod composer;
pub mod config;
mod error;
pub mod session;
pub mod synthesis;

pub use composer::{TextComposer, DEFAULT_DRAFT_TEXT, SPECIAL_CHARACTERS};
pub use config::SynthesisConfig;
pub use error::{Error, Result};
pub use session::{RequestState, SynthesisSession};
pub use synthesis::{AudioOutput, SynthesisClient, SynthesisClientBuilder};
