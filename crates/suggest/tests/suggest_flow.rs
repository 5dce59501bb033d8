use fixlore_memory::{FixData, Issue, MemoryStore};
use fixlore_suggest::SuggestionEngine;
use tempfile::TempDir;

fn issue(title: &str, body: &str) -> Issue {
    Issue {
        title: title.to_string(),
        body: body.to_string(),
        labels: vec!["bug".to_string()],
    }
}

#[tokio::test]
async fn suggestions_survive_a_store_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = MemoryStore::open(dir.path()).await;
        store
            .learn_from_fix(
                issue("Login times out under load", "connection pool exhausted"),
                vec!["pool.cs".into()],
                FixData {
                    patterns_found: vec!["pool-size".into()],
                    strategy: Some("raise-limit".into()),
                    changes: Default::default(),
                },
                true,
            )
            .await
            .unwrap();
    }

    let store = MemoryStore::open(dir.path()).await;
    let engine = SuggestionEngine::default();
    let set = engine
        .suggest(
            &store,
            &issue("Login times out under load", "connection pool exhausted"),
            &["other.cs".to_string()],
        )
        .expect("reloaded history should still rank");

    assert_eq!(set.file_suggestions[0].file_type, ".cs");
    assert!(set.pattern_suggestions.iter().any(|p| p.pattern == "pool-size"));
    assert!(set.strategy_suggestions.iter().any(|s| s.strategy == "raise-limit"));
}
