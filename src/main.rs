use eyre::Result;

const N: i64 = 10;

fn main() -> Result<()> {
    fib_eval::init_tracing("warn");

    let result = fib_eval::compute(N)?;
    println!("Fibonacci of {N} is: {result}");
    Ok(())
}
