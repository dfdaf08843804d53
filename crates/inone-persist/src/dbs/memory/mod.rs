mod client;

pub use client::InMemoryPersistenceClient;
