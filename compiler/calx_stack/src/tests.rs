use super::*;

#[test]
fn shallow_recursion() {
    fn product(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n <= 1 { 1 } else { n * product(n - 1) })
    }

    assert_eq!(product(10), 3_628_800);
}

#[test]
fn deep_recursion_does_not_overflow() {
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    // Well past what an 8MB main-thread stack survives without growth.
    assert_eq!(depth(100_000), 100_000);
}

#[test]
fn passes_results_through() {
    let result: Result<f64, &str> = ensure_sufficient_stack(|| Ok(1.5));
    assert_eq!(result, Ok(1.5));
}
