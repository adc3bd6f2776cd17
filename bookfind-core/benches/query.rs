//! Request building benchmarks

use bookfind_core::{
    Action, CatalogRequest, Category, Copyright, FilterValue, Language, QueryStore, SortOrder,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn full_store() -> QueryStore {
    let mut store = QueryStore::new();
    store.apply(Action::SetSearch("the adventures of sherlock holmes".to_string()));
    for &lang in Language::ALL {
        store.toggle_language(lang);
    }
    for &flag in Copyright::ALL {
        store.toggle_copyright(flag);
    }
    for &category in Category::ALL {
        store.toggle_category(category);
    }
    store.set_sort(SortOrder::Descending);
    store
}

fn query_benchmark(c: &mut Criterion) {
    let empty = QueryStore::new();
    c.bench_function("request_default_state", |b| {
        b.iter(|| CatalogRequest::from_state(std::hint::black_box(empty.state())).query_string())
    });

    let full = full_store();
    c.bench_function("request_every_filter", |b| {
        b.iter(|| CatalogRequest::from_state(std::hint::black_box(full.state())).query_string())
    });
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
