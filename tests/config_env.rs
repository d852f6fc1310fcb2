use bucket_table::{TableConfig, TableError, CAPACITY_ENV, DEFAULT_CAPACITY};

// one test per binary: the environment is process-global
#[test]
fn capacity_from_environment() {
    std::env::remove_var(CAPACITY_ENV);
    assert_eq!(TableConfig::from_env().unwrap().capacity, DEFAULT_CAPACITY);

    std::env::set_var(CAPACITY_ENV, "32");
    let table = TableConfig::from_env().unwrap().build::<u32, u32>().unwrap();
    assert_eq!(table.capacity(), 32);

    std::env::set_var(CAPACITY_ENV, "0");
    assert_eq!(TableConfig::from_env(), Err(TableError::ZeroCapacity));

    std::env::set_var(CAPACITY_ENV, "many");
    assert!(matches!(
        TableConfig::from_env(),
        Err(TableError::InvalidConfig(_))
    ));

    std::env::remove_var(CAPACITY_ENV);
}
