//! Project information for the presentation layer's about surface.

pub const PROJECT_TITLE: &str = "Cook Islands Māori TTS";

pub const MODEL_DESCRIPTION: &str = "A FastSpeech2 text-to-speech model transforms text in Cook Islands \
     Māori into a synthetically generated voice recording.";

/// Paper describing the model.
pub const PAPER_TITLE: &str = "Development of Community-Oriented Text-to-Speech Models for Māori \
     ꞌAvaiki Nui (Cook Islands Māori)";
pub const PAPER_URL: &str = "https://aclanthology.org/2024.lrec-main.432/";

pub const CREDITS: &str = "The model was developed by Jesyn James, Sally Akevai Nicholas, Rolando \
     Coto-Solano, and students from University of Auckland, as part of a \
     larger project by Sally Akevai Nicholas to document the Cook Islands \
     Māori language.";
