// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walks through the `BigUint` surface: construction, carries across the
//! digit boundary, the three multiplication algorithms, division and the
//! modular combinators.
//!
//! # Examples
//!
//! cargo run --example arithmetic

use bignumtools::biguint::{gcd, lcm, mod_mul, BigUint, BASE};

fn print(label: &str, value: &BigUint) {
    println!("{label}: {} <--> {}", value.to_base10_string(), value.to_pipe_string());
}

fn main() {
    // Increments across the digit boundary.
    let mut a = BigUint::zero();
    print("a", &a);
    for _ in 0..BASE - 1 {
        a.increment();
    }
    print("a incremented BASE - 1 times", &a);
    a.increment();
    print("a incremented once more", &a);
    a.decrement().expect("a is positive");
    print("a decremented", &a);

    let b = BigUint::from_base10_str("123456789").expect("valid decimal");
    print("b", &b);
    print("b - b", &(&b - &b));
    println!();

    // The three multiplication algorithms agree.
    let c = BigUint::from_base10_str("987654321").expect("valid decimal");
    print("c", &c);
    print("b * c (schoolbook)", &b.mul_schoolbook(&c));
    print("b * c (karatsuba)", &b.mul_karatsuba(&c));
    print("b * c (fft)", &b.mul_fft(&c));
    print("c squared", &c.square());
    print("2^64", &BigUint::two().pow_by(64).expect("non-zero base"));
    println!();

    // Division and the modular combinators.
    let (quotient, remainder) = (&b * &c).div_rem(&c).expect("c is not zero");
    print("b * c / c", &quotient);
    print("b * c % c", &remainder);

    let modulus = BigUint::from_base10_str("10000").expect("valid decimal");
    let product = mod_mul(&b, &c, &modulus).expect("modulus is above one");
    print("b * c mod 10000", &product);

    print("gcd(b, c)", &gcd(&b, &c));
    print("lcm(b, c)", &lcm(&b, &c));
}
