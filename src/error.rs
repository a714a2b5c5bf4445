use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("invalid index {0}: Fibonacci is only defined for n >= 0")]
    InvalidIndex(i64),
    #[error("fib({0}) does not fit in u64 (largest supported index is {max})", max = crate::MAX_INDEX)]
    Overflow(i64),
}
