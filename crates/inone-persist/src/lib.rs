pub mod models;
pub mod dbs;
pub mod error;
pub mod trait_client;

pub use models::{AutoReply, NewAutoReply, ChatSummary, NewChatSummary};
pub use trait_client::PersistenceClient;
pub use error::{PersistError, Result};
pub use dbs::memory::InMemoryPersistenceClient;

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoPersistenceClient;
