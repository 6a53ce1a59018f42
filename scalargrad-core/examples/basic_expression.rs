//! # Evaluating Scalar Expressions
//!
//! Builds a few expressions from two leaves and prints each node, then
//! differentiates the last one.
//!
//! Run with:
//! `cargo run --example basic_expression`
//! (set `RUST_LOG=debug` to see the backward pass log)

use scalargrad_core::Value;

fn main() {
    env_logger::init();
    println!("Hello from scalargrad!");

    let a = Value::new(2.0);
    let b = Value::new(3.0);

    println!("a = {:?}", a);
    println!("b = {:?}", b);

    let c = &a + &b;
    println!("a + b = {:?}", c);

    let d = &a * &b;
    println!("a * b = {:?}", d);

    let e = a.pow(3.0);
    println!("a ** 3 = {:?}", e);

    let f = &a / &b;
    println!("a / b = {:?}", f);

    let g = &a - &b;
    println!("a - b = {:?}", g);

    let h = (&a * &b + &c) / &a;
    println!("(a * b + c) / a = {:?}", h);

    h.backward();
    println!("\nAfter h.backward():");
    println!("dh/da = {}", a.grad());
    println!("dh/db = {}", b.grad());
}
