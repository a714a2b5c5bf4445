use crate::FibError;

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INDEX: i64 = 93;

/// Computes the n-th Fibonacci number by naive double recursion.
///
/// `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n - 1) + fib(n - 2)`.
/// Negative indices are rejected with [`FibError::InvalidIndex`] and indices
/// past [`MAX_INDEX`] with [`FibError::Overflow`].
pub fn compute(n: i64) -> Result<u64, FibError> {
    let index = check_index(n)?;
    tracing::debug!(index, "evaluating");
    Ok(fib(index))
}

fn check_index(n: i64) -> Result<u32, FibError> {
    if n < 0 {
        return Err(FibError::InvalidIndex(n));
    }
    if n > MAX_INDEX {
        return Err(FibError::Overflow(n));
    }
    // 0..=MAX_INDEX always fits
    Ok(n as u32)
}

// Only called with n <= MAX_INDEX, where every partial sum fits in a u64.
fn fib(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fib(n - 1) + fib(n - 2)
}
