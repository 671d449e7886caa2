//! Compares random candidate patterns against a target register and tallies
//! how often they match exactly, partially or not at all.

use flag_register::{FlagRegister, Match, compare_registers};
use rand::prelude::*;

fn main() {
    println!("=== Pattern Matching ===\n");

    let mut target = FlagRegister::<u8>::new();
    target.set_flag(0);
    target.set_flag(2);
    println!("Target: {}\n", target.binary());

    // The fixed cases first.
    let cases: [(u8, u8); 4] = [
        (0b0000_0000, 0b0000_0000),
        (0b0000_0101, 0b0000_0101),
        (0b0000_0101, 0b0000_0011),
        (0b0000_0101, 0b0000_1010),
    ];
    for (a, b) in cases {
        let a = FlagRegister::from_raw(a);
        let b = FlagRegister::from_raw(b);
        let result = compare_registers(&a, &b);
        println!("  {a} vs {b} -> {result:?} (code {})", result.code());
    }
    println!();

    // A narrow random source (low nibble only) so exact hits actually occur.
    let mut rng = StdRng::seed_from_u64(42);
    let (mut exact, mut partial, mut disjoint) = (0u32, 0u32, 0u32);
    for round in 0..32 {
        let candidate = FlagRegister::<u8>::from_raw(rng.random::<u8>() & 0x0F);
        let result = compare_registers(&target, &candidate);
        match result {
            Match::Exact => exact += 1,
            Match::Partial => partial += 1,
            Match::Disjoint => disjoint += 1,
        }
        if result == Match::Exact {
            println!("  round {round:>2}: {candidate} matched exactly");
        }
    }

    println!("\nExact: {exact}, Partial: {partial}, Disjoint: {disjoint}");
}
