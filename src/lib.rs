//! Client library for the audio-summarization backend.
//!
//! Exposes the [`AudioClient`] interface with two interchangeable
//! implementations: [`RemoteAudioClient`] talks to the HTTP service,
//! [`MockAudioClient`] answers with canned data after a simulated delay.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{AudioClient, AudioClientFactory, MockAudioClient, RemoteAudioClient};
pub use config::ClientConfig;
pub use error::AudioClientError;
pub use types::{AudioProcessingResult, SelectionResult, Sentence};
