use inone_persist::{InMemoryPersistenceClient, NewAutoReply, NewChatSummary, PersistenceClient};

fn replies(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_save_assigns_distinct_ids() {
    let store = InMemoryPersistenceClient::new();

    let first = store
        .save_auto_reply(NewAutoReply::new("u1", "m1", "Hi", replies(&["a", "b", "c"])))
        .await
        .unwrap();
    let second = store
        .save_auto_reply(NewAutoReply::new("u1", "m1", "Hi", replies(&["d", "e", "f"])))
        .await
        .unwrap();

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_get_filters_by_message_id() {
    let store = InMemoryPersistenceClient::new();

    store
        .save_auto_reply(NewAutoReply::new("u1", "m1", "Hi", replies(&["a"])))
        .await
        .unwrap();
    store
        .save_auto_reply(NewAutoReply::new("u2", "m2", "Yo", replies(&["b"])))
        .await
        .unwrap();

    let found = store.get_auto_replies("m1").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user_id, "u1");

    assert!(store.get_auto_replies("missing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let store = InMemoryPersistenceClient::new();

    let saved = store
        .save_auto_reply(NewAutoReply::new("u1", "m1", "Hi", replies(&["a"])))
        .await
        .unwrap();
    store
        .save_auto_reply(NewAutoReply::new("u1", "m1", "Hi", replies(&["b"])))
        .await
        .unwrap();

    assert_eq!(store.delete_auto_reply(&saved.id).await.unwrap(), 1);
    assert_eq!(store.delete_auto_reply(&saved.id).await.unwrap(), 0);
    assert_eq!(store.auto_replies().await.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_store_untouched() {
    let store = InMemoryPersistenceClient::new();
    store
        .save_auto_reply(NewAutoReply::new("u1", "m1", "Hi", replies(&["a"])))
        .await
        .unwrap();

    assert_eq!(store.delete_auto_reply("never-created").await.unwrap(), 0);
    assert_eq!(store.auto_replies().await.len(), 1);
}

#[tokio::test]
async fn test_save_chat_summary_keeps_fields() {
    let store = InMemoryPersistenceClient::new();

    let saved = store
        .save_chat_summary(
            NewChatSummary::new("c1", "u1", "full text", "summary")
                .with_keywords(replies(&["launch"])),
        )
        .await
        .unwrap();

    let stored = store.chat_summaries().await;
    assert_eq!(stored, vec![saved]);
    assert_eq!(stored[0].keywords, vec!["launch".to_string()]);
    assert!(store.ping().await.is_ok());
}
