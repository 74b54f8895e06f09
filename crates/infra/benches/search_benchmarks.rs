use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use catalog_category::{Category, CategoryFakeBuilder, CategorySearchParams};
use catalog_core::SearchProps;
use catalog_infra::{CategoryInMemoryRepository, CategorySearchPolicy};

fn categories(count: usize) -> Vec<Category> {
    CategoryFakeBuilder::the_categories(count)
        .with_name_factory(|i| format!("category {i}"))
        .build_many()
        .unwrap_or_default()
}

fn params(filter: Option<&str>, sort: Option<&str>) -> CategorySearchParams {
    CategorySearchParams::new(SearchProps {
        page: Some(2),
        per_page: Some(20),
        sort: sort.map(str::to_string),
        sort_dir: Some("desc".to_string()),
        filter: filter.map(str::to_string),
    })
}

fn bench_search_pipeline(c: &mut Criterion) {
    let repo = CategoryInMemoryRepository::new(CategorySearchPolicy);
    let mut group = c.benchmark_group("category_search");

    for size in [100usize, 1_000, 10_000] {
        let items = categories(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("default_sort", size), &items, |b, items| {
            let params = params(None, None);
            b.iter(|| black_box(repo.run_search(items.clone(), &params)));
        });

        group.bench_with_input(BenchmarkId::new("filter_and_sort_by_name", size), &items, |b, items| {
            let params = params(Some("category 1"), Some("name"));
            b.iter(|| black_box(repo.run_search(items.clone(), &params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search_pipeline);
criterion_main!(benches);
