use crate::adder::add;
use crate::binding::{bound_class, short_name, ADD_METHOD, LIBRARY_NAME};
use rayon::prelude::*;

#[test]
fn test_add_scenarios() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(0, 0), 0);
    assert_eq!(add(-5, 5), 0);
    assert_eq!(add(2147483647, 1), -2147483648);
}

#[test]
fn test_add_matches_widened_sum() {
    // Where the i64 sum fits in i32 the result must be exact.
    let samples = [-1_000_000, -4096, -1, 0, 1, 99, 65535, 1_000_000];
    for &x in &samples {
        for &y in &samples {
            assert_eq!(add(x, y) as i64, x as i64 + y as i64);
        }
    }
}

#[test]
fn test_add_concurrent_calls() {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(8)
        .build()
        .unwrap();

    let mismatches: usize = pool.install(|| {
        (-50_000i32..50_000)
            .into_par_iter()
            .filter(|&x| add(x, -x) != 0 || add(x, 1) != x + 1)
            .count()
    });

    assert_eq!(mismatches, 0);
}

#[test]
fn test_concurrent_results_are_deterministic() {
    let inputs: Vec<(i32, i32)> = (0..10_000).map(|i| (i * 7919, -i * 31)).collect();

    let serial: Vec<i32> = inputs.iter().map(|&(x, y)| add(x, y)).collect();
    let parallel: Vec<i32> = inputs.par_iter().map(|&(x, y)| add(x, y)).collect();

    assert_eq!(serial, parallel);
}

#[test]
fn test_library_exports_add_symbol() {
    let class = bound_class().unwrap();
    assert_eq!(LIBRARY_NAME, "picoapp");
    assert_eq!(
        short_name(&class, ADD_METHOD),
        "Java_com_example_picoapp_MainActivity_add"
    );
}
