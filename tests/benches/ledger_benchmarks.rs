//! # Gas Tracking Benchmarks
//!
//! | Path | What grows |
//! |------|-----------|
//! | `track_contract_gas_usage` | calls already recorded in the block (whole-record rewrite) |
//! | `merge_left_over` | denoms held by a reward address |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gas_tracking::prelude::*;
use std::time::Duration;

fn bench_contract_gas_usage(c: &mut Criterion) {
    let mut group = c.benchmark_group("track-contract-gas-usage");
    group.measurement_time(Duration::from_secs(5));

    let keeper = GasTrackingKeeper::new(GasTrackingConfig::default());

    for recorded in [10u64, 100, 1_000] {
        let mut store = InMemoryKVStore::new();
        {
            let mut ctx = ExecutionContext::new(2, &mut store);
            keeper
                .track_new_block(&mut ctx, BlockGasTracking::new())
                .unwrap();
            keeper.track_new_tx(&mut ctx, vec![], u64::MAX).unwrap();
            for i in 0..recorded {
                keeper
                    .track_contract_gas_usage(
                        &mut ctx,
                        "contract-a",
                        i,
                        ContractOperation::Execution,
                        true,
                    )
                    .unwrap();
            }
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("append_call", recorded),
            &recorded,
            |b, _| {
                b.iter_batched(
                    || store.clone(),
                    |mut scratch| {
                        let mut ctx = ExecutionContext::new(2, &mut scratch);
                        black_box(keeper.track_contract_gas_usage(
                            &mut ctx,
                            "contract-b",
                            42_000,
                            ContractOperation::Execution,
                            true,
                        ))
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_merge_left_over(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge-left-over");

    for denoms in [1usize, 8, 64] {
        let existing = LeftOverRewardEntry {
            contract_rewards: DecCoins::from_unsorted(
                (0..denoms)
                    .map(|i| DecCoin::new(format!("denom{i:03}"), Dec::parse("0.75").unwrap()))
                    .collect(),
            )
            .unwrap(),
        };
        let rewards: Vec<DecCoin> = (0..denoms)
            .rev()
            .map(|i| DecCoin::new(format!("denom{i:03}"), Dec::parse("9.5").unwrap()))
            .collect();

        group.throughput(Throughput::Elements(denoms as u64));
        group.bench_with_input(BenchmarkId::new("merge", denoms), &denoms, |b, _| {
            b.iter(|| {
                black_box(merge_left_over(
                    Some(existing.clone()),
                    rewards.clone(),
                    10,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contract_gas_usage, bench_merge_left_over);
criterion_main!(benches);
