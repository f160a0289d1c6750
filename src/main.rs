use itertools::Itertools;

use sequence::{new_seq, seq_from, Sequence};

fn main() {
    let mut primes = seq_from(&[2, 3, 5]);
    primes.push(7);
    println!("primes: {}", primes.iter().join(", "));

    let empty: Sequence<u8> = new_seq();
    println!("empty len: {}", empty.len());
}
