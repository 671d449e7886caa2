//! Drives a simulated bank of eight LEDs from a `FlagRegister<u8>`.
//!
//! Flag `i` is LED `i`. Each frame is "written to the pins" by printing the
//! register, MSB first, so the leftmost character is LED 7.

use flag_register::FlagRegister;
use rand::prelude::*;

const LED_COUNT: usize = 8;

fn main() {
    println!("=== LED Patterns ===\n");

    let mut leds = FlagRegister::<u8>::new();

    chaser(&mut leds);
    bounce(&mut leds);
    sparkle(&mut leds);
    blink_all(&mut leds);
}

fn show(label: &str, leds: &FlagRegister<u8>) {
    // '*' for a lit LED reads better on a terminal than '1'.
    let frame: String = leds
        .binary()
        .to_string()
        .chars()
        .map(|c| if c == '1' { '*' } else { '.' })
        .collect();
    println!("  {label:<8} [{frame}]  0x{:02X}", leds.raw_flags());
}

fn chaser(leds: &mut FlagRegister<u8>) {
    println!("Chaser: one LED walks up the bank");
    for i in 0..LED_COUNT {
        leds.clear_all_flags();
        leds.set_flag(i);
        show("step", leds);
    }
    println!();
}

fn bounce(leds: &mut FlagRegister<u8>) {
    println!("Bounce: a two-LED block runs out and back using whole-word loads");
    let mut block: u8 = 0b0000_0011;
    for _ in 0..LED_COUNT - 2 {
        leds.set_flags(block);
        show("out", leds);
        block <<= 1;
    }
    for _ in 0..LED_COUNT - 2 {
        leds.set_flags(block);
        show("back", leds);
        block >>= 1;
    }
    println!();
}

fn sparkle(leds: &mut FlagRegister<u8>) {
    println!("Sparkle: random LEDs toggle");
    let mut rng = StdRng::seed_from_u64(7);
    leds.clear_all_flags();
    for _ in 0..10 {
        leds.toggle_flag(rng.random_range(0..LED_COUNT));
        show("toggle", leds);
    }
    println!("  {} of {} lit\n", leds.count_set(), leds.capacity());
}

fn blink_all(leds: &mut FlagRegister<u8>) {
    println!("Blink: whole bank on and off, with the inverse view");
    for _ in 0..2 {
        leds.set_all_flags();
        show("on", leds);
        leds.clear_all_flags();
        show("off", leds);
    }
    leds.set_flag(0);
    println!("  plain    {}", leds.to_binary_string());
    println!("  inverse  {}", leds.to_inverse_binary_string());
}
