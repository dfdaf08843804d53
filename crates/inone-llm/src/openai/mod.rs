mod client;

pub use client::{OpenAIClient, DEFAULT_GENERATION_MODEL, DEFAULT_SUMMARY_MODEL};
