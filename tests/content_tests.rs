//! Content pipeline tests: CSV text to deck pool to dealt cards.

use flashtable::content::{load_records_or_empty, parse_records, CardRecord, DeckPool};
use flashtable::rng::TableRng;

#[test]
fn test_canonical_example_row() {
    let records = parse_records("id,sideA,sideB,notes\n1,Hello,World,note");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0], CardRecord::new("1", "Hello", "World", "note"));
}

#[test]
fn test_zero_data_lines() {
    assert!(parse_records("id,sideA,sideB,notes").is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let text = "id,sideA,sideB,notes\r\n1,Hello,World,note\r\n2,a,b,c";

    let first = parse_records(text);
    let second = parse_records(text);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_pool_drains_in_order_and_then_stays_empty() {
    let records = parse_records("id,sideA,sideB,notes\n1,a,b,\n2,c,d,\n3,e,f,");
    let mut pool = DeckPool::new(records);

    // Unshuffled pool pops from the end.
    assert_eq!(pool.draw_next().unwrap().id, "3");
    assert_eq!(pool.draw_next().unwrap().id, "2");
    assert_eq!(pool.draw_next().unwrap().id, "1");

    for _ in 0..5 {
        assert_eq!(pool.draw_next(), None);
    }
}

#[test]
fn test_shuffle_then_drain_is_a_permutation() {
    let text = (1..=20).fold(String::from("id,sideA,sideB,notes"), |mut acc, i| {
        acc.push_str(&format!("\n{i},front,back,"));
        acc
    });

    let mut pool = DeckPool::new(parse_records(&text));
    let mut rng = TableRng::new(42);
    pool.shuffle(&mut rng);

    let mut ids: Vec<String> = std::iter::from_fn(|| pool.draw_next())
        .map(|r| r.id)
        .collect();

    assert_eq!(ids.len(), 20);
    ids.sort_by_key(|id| id.parse::<u32>().unwrap());
    let expected: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_missing_file_degrades_to_empty_pool() {
    let records = load_records_or_empty("/no/such/content.csv");
    let mut pool = DeckPool::new(records);

    assert!(pool.is_empty());
    assert_eq!(pool.draw_next(), None);
}
