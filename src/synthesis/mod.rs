//! Synthesis endpoint client: turns draft text into WAV audio via the hosted
//! inference service.

mod client;
mod types;

pub use client::{SynthesisClient, SynthesisClientBuilder};
pub use types::{AudioOutput, AUDIO_MIME_TYPE, DOWNLOAD_FILE_NAME};
