#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(elided_lifetimes_in_paths)]

use std::process;

mod random;

use tally_core::{BigNumber, TallyError, CHUNK_BASE};

const RANDOM_CASES: usize = 5;

fn print_case(case: usize, a: &BigNumber, b: &BigNumber) {
    let sum = a + b;
    println!("[test #{case}]");
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b == {sum}");
}

fn run() -> Result<(), TallyError> {
    for case in 1..=RANDOM_CASES {
        let a = random::big_number()?;
        let b = random::big_number()?;
        print_case(case, &a, &b);
    }

    // adding two empty values
    let sum = &BigNumber::new() + &BigNumber::new();
    println!("[test #{}]", RANDOM_CASES + 1);
    println!("0 + 0 == {sum}");

    // a carry across the chunk boundary
    let mut one = BigNumber::new();
    one.push_chunk(1)?;
    let mut largest_chunk = BigNumber::new();
    largest_chunk.push_chunk(CHUNK_BASE - 1)?;
    let sum = &one + &largest_chunk;
    println!("[test #{}]", RANDOM_CASES + 2);
    println!("1 + {} == {sum}", CHUNK_BASE - 1);

    Ok(())
}

fn real_main() -> i32 {
    match run() {
        Ok(()) => 0,
        Err(msg) => {
            eprintln!("Error: {msg}");
            1
        }
    }
}

fn main() {
    process::exit(real_main())
}
