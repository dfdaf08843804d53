pub mod auto_reply;
pub mod chat_summary;

pub use auto_reply::MongoAutoReplyRepository;
pub use chat_summary::MongoChatSummaryRepository;
