use cachesim::{Address, Cache, EvictionPolicy, PolicyKind, Simulator, Workload};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const ACCESSES: usize = 4096;
const CAPACITIES: [usize; 3] = [8, 64, 256];

/// Skewed synthetic trace: a hot set of 32 addresses gets ~3/4 of the accesses.
fn synthetic_workload() -> Workload {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..ACCESSES)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let r = state >> 33;
            let id = if r % 4 == 0 { r % 1024 } else { r % 32 };
            Address::new(format!("0x{:04x}", id)).unwrap()
        })
        .collect()
}

fn bench_cache_access(c: &mut Criterion) {
    let workload = synthetic_workload();
    let mut group = c.benchmark_group("cache_access");

    for kind in PolicyKind::ALL {
        for capacity in CAPACITIES {
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), capacity),
                &capacity,
                |b, &capacity| {
                    b.iter(|| {
                        let mut cache = Cache::new(kind, capacity).unwrap();
                        for addr in &workload {
                            black_box(cache.access(addr));
                        }
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_detailed_simulation(c: &mut Criterion) {
    let workload = synthetic_workload();

    for kind in PolicyKind::ALL {
        c.bench_function(&format!("simulate_detailed_{}", kind), |b| {
            b.iter(|| {
                let mut sim = Simulator::new(kind, 64, true).unwrap();
                black_box(sim.run(&workload, |_| {}))
            })
        });
    }
}

criterion_group!(benches, bench_cache_access, bench_detailed_simulation);
criterion_main!(benches);
