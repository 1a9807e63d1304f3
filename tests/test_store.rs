mod common;

use openrag::domain::ports::document_store::DocumentStore;
use openrag::infrastructure::memory::store::MemoryStore;

#[tokio::test]
async fn test_add_and_keyword_query_limit() {
    let rag = common::setup();
    rag.add_document("doc one").await.unwrap();
    rag.add_document("doc two").await.unwrap();
    rag.add_document("doc three").await.unwrap();

    let results = rag.keyword_search("doc", 2).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| r.text.to_lowercase().contains("doc")));
}

#[tokio::test]
async fn test_keyword_query_is_case_insensitive() {
    let rag = common::setup();
    rag.add_document("RAG retrieves context before generation")
        .await
        .unwrap();

    let results = rag.keyword_search("rag", 3).unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_empty_keyword_returns_nothing() {
    let rag = common::setup();
    rag.add_document("some document").await.unwrap();

    assert!(rag.keyword_search("", 5).unwrap().is_empty());
    assert!(rag.keyword_search("   ", 5).unwrap().is_empty());
}

#[tokio::test]
async fn test_zero_limit_returns_nothing() {
    let rag = common::setup();
    rag.add_document("doc").await.unwrap();
    assert!(rag.keyword_search("doc", 0).unwrap().is_empty());
}

#[tokio::test]
async fn test_unmatched_keyword_returns_nothing() {
    let rag = common::setup();
    rag.add_document("doc one").await.unwrap();
    assert!(rag.keyword_search("no-such-keyword", 5).unwrap().is_empty());
}

#[test]
fn test_frequency_outranks_position() {
    let store = MemoryStore::new();
    store
        .insert("a cat sat with another cat", vec![])
        .unwrap();
    store.insert("cat first but only once", vec![]).unwrap();

    let results = store.keyword_query("cat", 5).unwrap();
    assert_eq!(results.len(), 2);
    // Two hits beat an earlier single hit
    assert_eq!(results[0].text, "a cat sat with another cat");
}

#[test]
fn test_earlier_occurrence_breaks_frequency_tie() {
    let store = MemoryStore::new();
    store
        .insert("somewhere in here a needle hides", vec![])
        .unwrap();
    store.insert("needle right at the front", vec![]).unwrap();

    let results = store.keyword_query("needle", 5).unwrap();
    assert_eq!(results[0].text, "needle right at the front");
}

#[test]
fn test_shorter_document_breaks_position_tie() {
    let store = MemoryStore::new();
    store
        .insert("needle in a much longer document overall", vec![])
        .unwrap();
    store.insert("needle in short", vec![]).unwrap();

    let results = store.keyword_query("needle", 5).unwrap();
    assert_eq!(results[0].text, "needle in short");
}

#[test]
fn test_full_ties_keep_insertion_order() {
    let store = MemoryStore::new();
    let first = store.insert("twin doc", vec![]).unwrap();
    let second = store.insert("twin doc", vec![]).unwrap();

    let results = store.keyword_query("twin", 5).unwrap();
    assert_eq!(results[0].id, first);
    assert_eq!(results[1].id, second);
}

#[tokio::test]
async fn test_vector_query_orders_by_score() {
    let rag = common::setup();
    rag.add_document("doc one").await.unwrap();
    rag.add_document("doc two").await.unwrap();
    rag.add_document("doc three").await.unwrap();

    let results = rag.semantic_search("doc", 2).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].score >= results[1].score);
}

#[tokio::test]
async fn test_vector_query_self_similarity() {
    let rag = common::setup();
    rag.add_document("the quick brown fox").await.unwrap();
    rag.add_document("entirely unrelated text").await.unwrap();

    let results = rag
        .semantic_search("the quick brown fox", 2)
        .await
        .unwrap();
    // Identical text embeds to the identical unit vector
    assert_eq!(results[0].text, "the quick brown fox");
    assert!((results[0].score - 1.0).abs() < 1e-4);
}

#[test]
fn test_dimension_mismatch_is_skipped() {
    let store = MemoryStore::new();
    store.insert("well formed", vec![1.0, 0.0, 0.0]).unwrap();
    let bad_id = store.insert("bad vector", vec![0.1, 0.2]).unwrap();

    let results = store.vector_query(&[1.0, 0.0, 0.0], 5).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results.iter().all(|r| r.id != bad_id));
}

#[test]
fn test_degenerate_query_vector_returns_nothing() {
    let store = MemoryStore::new();
    store.insert("anything", vec![0.5, 0.5]).unwrap();

    assert!(store.vector_query(&[], 5).unwrap().is_empty());
    assert!(store.vector_query(&[f32::NAN, 0.0], 5).unwrap().is_empty());
    assert!(store
        .vector_query(&[f32::INFINITY, 0.0], 5)
        .unwrap()
        .is_empty());
}

#[test]
fn test_scores_round_to_six_decimals() {
    let store = MemoryStore::new();
    store.insert("target", vec![0.6, 0.8]).unwrap();

    let results = store.vector_query(&[0.123_456_78, 0.987_654_3], 1).unwrap();
    let score = results[0].score;
    assert_eq!(score, (score * 1e6).round() / 1e6);
}

#[tokio::test]
async fn test_clear_empties_the_corpus() {
    let rag = common::setup();
    rag.add_document("doc").await.unwrap();
    assert_eq!(rag.document_count().unwrap(), 1);

    rag.clear_documents().unwrap();
    assert_eq!(rag.document_count().unwrap(), 0);
    assert!(rag.keyword_search("doc", 5).unwrap().is_empty());
}

#[tokio::test]
async fn test_add_rejects_empty_text() {
    let rag = common::setup();
    assert!(rag.add_document("   ").await.is_err());
}
