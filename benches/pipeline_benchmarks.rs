//! Performance benchmarks for the payroll pipeline.
//!
//! Runs the pipeline against an in-memory workspace so the numbers measure
//! filtering, record parsing and request building rather than the network:
//! - Full run over 10, 100 and 500 accepted shifts
//! - De-duplication against a payroll database with existing rows
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use shift_payroll::notion::{
    MemoryWorkspace, Page, date_value, number_value, relation_value, status_value, title_value,
};
use shift_payroll::payroll::{JobContext, filter_handled_employees, run};

const SHIFTS: &str = "shifts";
const PAYROLL: &str = "payroll";
const STAFF_PER_SHIFT: usize = 4;

fn shift_date(index: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(index as i64)
}

/// Creates a workspace with `shift_count` accepted shifts, each staffed by
/// four of twenty employees.
fn create_workspace(shift_count: usize) -> MemoryWorkspace {
    let workspace = MemoryWorkspace::new();
    for e in 0..20 {
        workspace.insert_page(
            None,
            Page::new(format!("emp_{}", e))
                .with_property("Name", title_value(&format!("Employee {}", e)))
                .with_property("Rate", number_value(Decimal::new(100 + e as i64 * 5, 0))),
        );
    }
    for s in 0..shift_count {
        let staff: Vec<String> = (0..STAFF_PER_SHIFT)
            .map(|k| format!("emp_{}", (s + k) % 20))
            .collect();
        workspace.insert_page(
            Some(SHIFTS),
            Page::new(format!("shift_{}", s))
                .with_property("Name", title_value("Shift"))
                .with_property("Status", status_value("Accepted"))
                .with_property("Date", date_value(shift_date(s)))
                .with_property("On-shift staff", relation_value(&staff)),
        );
    }
    workspace
}

fn bench_full_run(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ctx = JobContext::new(SHIFTS, PAYROLL);
    let mut group = c.benchmark_group("full_run");

    for shift_count in [10usize, 100, 500] {
        group.throughput(Throughput::Elements(shift_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(shift_count),
            &shift_count,
            |b, &count| {
                b.iter_batched(
                    || create_workspace(count),
                    |workspace| {
                        rt.block_on(async {
                            black_box(run(&workspace, &ctx).await.unwrap());
                        })
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ctx = JobContext::new(SHIFTS, PAYROLL);
    let workspace = create_workspace(200);
    rt.block_on(async {
        run(&workspace, &ctx).await.unwrap();
    });
    let staff: Vec<String> = (0..20).map(|e| format!("emp_{}", e)).collect();

    c.bench_function("dedup_against_800_rows", |b| {
        b.to_async(&rt).iter(|| async {
            black_box(
                filter_handled_employees(&workspace, &ctx, shift_date(50), &staff)
                    .await
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_full_run, bench_dedup);
criterion_main!(benches);
