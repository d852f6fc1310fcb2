//! A concurrent key-value table split into independently locked buckets.
//!
//! Every key is routed to exactly one bucket by its hash, and each bucket
//! guards its own entries with a mutex, so threads touching keys in
//! different buckets never contend.
//!
//! ```
//! use bucket_table::Table;
//!
//! let table = Table::new();
//! table.put("one", 1);
//! assert_eq!(table.get("one"), Some(1));
//! assert!(table.remove("one"));
//! assert_eq!(table.get("one"), None);
//! ```

macro_rules! vec_no_clone {
    ( $val:expr; $n:expr ) => {{
        let result: Vec<_> = std::iter::repeat_with(|| $val).take($n).collect();
        result
    }};
}

mod config;
mod entry;
mod error;
mod shard;
mod table;

pub use config::{TableConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
pub use error::TableError;
pub use table::Table;
