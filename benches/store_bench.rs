//! Benchmarks for FolioDB store operations

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use foliodb::{Config, Store};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct User {
    name: String,
    age: u32,
    contact: String,
    company: String,
}

fn user(i: usize) -> User {
    User {
        name: format!("user-{}", i),
        age: 20 + (i % 50) as u32,
        contact: format!("+2547{:08}", i),
        company: "IFAware Technologies".to_string(),
    }
}

fn open_store(sync_writes: bool) -> (TempDir, Store) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .root_dir(temp_dir.path())
        .sync_writes(sync_writes)
        .build();
    let store = Store::open(config).unwrap();
    (temp_dir, store)
}

fn store_benchmarks(c: &mut Criterion) {
    // Single record overwrite, with and without fsync
    for sync in [false, true] {
        let (_temp, store) = open_store(sync);
        let record = user(1);
        c.bench_function(&format!("write_overwrite(sync={})", sync), |b| {
            b.iter(|| store.write("users", "John", black_box(&record)).unwrap())
        });
    }

    // Point reads
    {
        let (_temp, store) = open_store(false);
        store.write("users", "John", &user(1)).unwrap();
        c.bench_function("read", |b| {
            b.iter(|| store.read::<User>("users", black_box("John")).unwrap())
        });
    }

    // Listing a 100-record collection
    {
        let (_temp, store) = open_store(false);
        for i in 0..100 {
            store.write("users", &format!("u{}", i), &user(i)).unwrap();
        }
        c.bench_function("read_all_as(100)", |b| {
            b.iter(|| store.read_all_as::<User>("users").unwrap())
        });
    }

    // Write then delete a fresh resource
    {
        let (_temp, store) = open_store(false);
        let record = user(0);
        let mut n = 0usize;
        c.bench_function("write_delete", |b| {
            b.iter_batched(
                || {
                    n += 1;
                    format!("r{}", n)
                },
                |name| {
                    store.write("churn", &name, &record).unwrap();
                    store.delete("churn", &name).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
