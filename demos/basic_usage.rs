// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// evaluator's tracing output alongside the printed values.

use auto_numeric::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Auto Numeric Example ===\n");

    // Construct from various primitive types
    let readings = [
        ("u8", NumericValue::from(42u8)),
        ("i16", NumericValue::from(-32768i16)),
        ("u16", NumericValue::from(65535u16)),
        ("i32", NumericValue::from(42i32)),
        ("u32", NumericValue::from(42u32)),
        ("i64", NumericValue::from(42i64)),
        ("f32", NumericValue::from(3.14f32)),
        ("f64", NumericValue::from(3.14f64)),
    ];

    println!("Values created from various numeric types:");
    for (name, value) in &readings {
        println!("  {:<4} {:?} -> {}", name, value.kind(), value);
    }

    // Arithmetic
    let evaluator = EvaluatorBuilder::new().logging().build().unwrap();
    let a = NumericValue::from(10);
    let b = NumericValue::from(3.14);

    println!("\nArithmetic operations:");
    println!("  a = {}", a);
    println!("  b = {}", b);
    for operation in [
        Operation::Add(a, b),
        Operation::Subtract(a, b),
        Operation::Multiply(a, b),
        Operation::Divide(a, b),
    ] {
        match evaluator.evaluate(operation) {
            Ok(value) => println!("  {} = {}", operation, evaluator.render(&value)),
            Err(err) => println!("  {} failed: {}", operation, err),
        }
    }

    // Comparisons
    println!("\nComparison operations:");
    println!("  a == b: {}", a == b);
    println!("  a != b: {}", a != b);
    println!("  a <  b: {}", a < b);
    println!("  a >  b: {}", a > b);
    println!("  a <= b: {}", a <= b);
    println!("  a >= b: {}", a >= b);

    // Math functions
    println!("\nOther operations:");
    for operation in [Operation::Abs(a), Operation::Sqrt(a), Operation::Pow(a, b)] {
        if let Ok(value) = evaluator.evaluate(operation) {
            println!("  {} = {}", operation, value);
        }
    }

    // Error handling
    println!("\nError handling:");
    for operation in [
        Operation::Divide(a, NumericValue::from(0)),
        Operation::Sqrt(NumericValue::from(-1)),
        Operation::Add(NumericValue::from(i64::MAX), NumericValue::from(1)),
    ] {
        if let Err(err) = evaluator.evaluate(operation) {
            println!("  Caught error: {}", err);
        }
    }

    println!(
        "\nEvaluated {} operations, {} failed",
        evaluator.evaluated_count(),
        evaluator.failed_count()
    );
}
