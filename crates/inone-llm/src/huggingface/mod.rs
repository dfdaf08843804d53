mod client;

pub use client::{HuggingFaceClient, DEFAULT_GENERATION_MODEL, DEFAULT_SUMMARY_MODEL};
