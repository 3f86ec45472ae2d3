//! Walks through each construct in `fp-idioms`, printing what it computes.
//!
//! Run with `RUST_LOG=fp_idioms=debug` to also see which fallible steps ran and which
//! Fibonacci terms were computed.

use fp_idioms::curry::{add, compute_tip, mult};
use fp_idioms::maybe::{chain, Maybe};
use fp_idioms::shape::Shape;
use fp_idioms::steps::{divide, double_value, square_root};
use fp_idioms::{
    inc_list_mapped, sum_list, sum_list_fold, sum_list_tail, FallibleNumber, FibonacciCache,
};
use tracing::info;

fn show(label: &str, result: FallibleNumber) {
    match result {
        Some(value) => println!("  {:<32} {}", label, value),
        None => println!("  {:<32} no value", label),
    }
}

fn shapes() {
    println!("areas:");
    let shapes = [
        Shape::Circle { radius: 2.0 },
        Shape::Square { side: 12.5 },
        Shape::Rectangle {
            length: 4.6,
            width: 7.2,
        },
        Shape::Ellipse {
            axis_1: 8.2,
            axis_2: 4.3,
        },
        Shape::Cylinder {
            radius: 3.1,
            height: 8.8,
        },
    ];
    for shape in shapes {
        println!("  {:<32} {:.3}", shape.kind().name(), shape.area());
    }
}

fn pipelines() {
    println!("maybe chains:");
    show("10 / 0 -> sqrt", divide(10.0, 0.0).then_try(square_root));
    show("-10 / 5 -> sqrt", divide(-10.0, 5.0).then_try(square_root));

    let root_then_double = chain(square_root, double_value);
    show("10 / 5 -> sqrt -> double", divide(10.0, 5.0).then_try(&root_then_double));
}

fn fibonacci() {
    println!("fibonacci:");
    let mut cache = FibonacciCache::new();
    println!("  {:<32} {}", "F(10)", cache.get(10));
    println!("  {:<32} {}", "F(4), already cached", cache.get(4));
    println!("  {:<32} {}", "cached terms", cache.len());
    let first: Vec<u64> = cache.iter().take(15).collect();
    println!("  {:<32} {:?}", "first fifteen", first);
}

fn lists() {
    println!("lists:");
    let xs = [-3, 2, 5];
    println!("  {:<32} {}", "structural recursion", sum_list(&xs));
    println!("  {:<32} {}", "tail recursion", sum_list_tail(&xs));
    println!("  {:<32} {}", "fold", sum_list_fold(&xs));
    println!("  {:<32} {:?}", "incremented", inc_list_mapped(&xs));
}

fn currying() {
    println!("currying:");
    let inc = add(1.0);
    let triple = mult(3.0);
    let high_tip = compute_tip(20.0);
    println!("  {:<32} {}", "inc(7.7)", inc(7.7));
    println!("  {:<32} {}", "triple(2.5)", triple(2.5));
    println!("  {:<32} {:.2}", "20% tip on 45.00", high_tip(45.0));
}

fn main() {
    fp_idioms::init_tracing();
    info!("starting tour");

    shapes();
    pipelines();
    fibonacci();
    lists();
    currying();
}
