use bucket_table::Table;

#[test]
fn put_get_update_remove_scenario() {
    let table: Table<&str, i32> = Table::with_capacity(16);

    table.put("one", 1);
    table.put("two", 2);
    assert_eq!(table.get("one"), Some(1));
    assert_eq!(table.get("two"), Some(2));
    assert_eq!(table.get("three"), None);

    table.put("one", 11);
    assert_eq!(table.get("one"), Some(11));

    assert!(table.remove("one"));
    assert_eq!(table.get("one"), None);
    assert!(!table.remove("one"));
    assert_eq!(table.len(), 1);
}

#[test]
fn get_after_put_returns_value() {
    let table: Table<u64, String> = Table::new();
    for i in 0..1_000u64 {
        table.put(i, format!("v{}", i));
        assert_eq!(table.get(&i), Some(format!("v{}", i)));
    }
    assert_eq!(table.len(), 1_000);
}

#[test]
fn repeated_put_keeps_one_entry() {
    let table: Table<String, u32> = Table::with_capacity(2);
    table.put("k".to_string(), 1);
    table.put("k".to_string(), 2);
    table.put("k".to_string(), 3);
    assert_eq!(table.get("k"), Some(3));
    assert_eq!(table.len(), 1);
}

#[test]
fn remove_reports_prior_presence() {
    let table: Table<u32, u32> = Table::with_capacity(3);
    for i in (0..30).step_by(2) {
        table.put(i, i);
    }
    for i in 0..30 {
        assert_eq!(table.remove(&i), i % 2 == 0);
        assert!(!table.remove(&i));
        assert_eq!(table.get(&i), None);
    }
    assert!(table.is_empty());
}

#[test]
fn single_shard_behaves_like_a_map() {
    let table: Table<u32, u32> = Table::with_capacity(1);
    for i in 0..200 {
        table.put(i, i * 3);
    }
    assert_eq!(table.shard_lens(), vec![200]);
    for i in (0..200).step_by(7) {
        assert_eq!(table.get(&i), Some(i * 3));
    }
}
