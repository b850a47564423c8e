use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use tallybook_core::Money;
use tallybook_reports::{InMemorySaleRepository, Sale, SaleRepository, SalesReportService};

const CUSTOMERS: [&str; 4] = ["Carlos", "Santiago", "Ana", "Luz"];
const PRODUCTS: [&str; 3] = ["Teclado", "Mouse", "Monitor"];

fn seeded_service(size: usize) -> SalesReportService<InMemorySaleRepository> {
    let repo = InMemorySaleRepository::new();
    let day = NaiveDate::from_ymd_opt(2025, 10, 14).expect("valid date");
    for i in 0..size {
        let sale = Sale::new(
            format!("V-{i:06}"),
            CUSTOMERS[i % CUSTOMERS.len()],
            PRODUCTS[i % PRODUCTS.len()],
            (i % 5) as i64 + 1,
            Money::new(1_250 + (i as i64 % 700), 2),
            day,
        );
        repo.register(sale).expect("in-memory register");
    }
    SalesReportService::new(repo)
}

/// Linear-scan aggregation cost as the sales log grows.
fn bench_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales_totals");

    for size in [100usize, 1_000, 10_000] {
        let svc = seeded_service(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("grand_total", size), &size, |b, _| {
            b.iter(|| black_box(svc.grand_total().expect("grand total")))
        });

        group.bench_with_input(BenchmarkId::new("total_for_customer", size), &size, |b, _| {
            b.iter(|| black_box(svc.total_for_customer(black_box("Carlos")).expect("customer total")))
        });

        group.bench_with_input(BenchmarkId::new("total_for_product", size), &size, |b, _| {
            b.iter(|| black_box(svc.total_for_product(black_box("Mouse")).expect("product total")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_totals);
criterion_main!(benches);
