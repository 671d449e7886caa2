//! A traffic light simulator. Each state is one flag in a `FlagRegister<u8>`
//! and exactly one state flag is set at any time. A millisecond clock drives
//! the transitions.

use std::time::{Duration, Instant};

use flag_register::FlagRegister;

const RED: usize = 0;
const GREEN: usize = 1;
const YELLOW: usize = 2;
// Not a state: raised when a pedestrian presses the crossing button.
const WALK_REQUEST: usize = 7;

const STATE_MASK: u8 = 0b0000_0111;

struct Light {
    flags: FlagRegister<u8>,
    entered_ms: u64,
}

impl Light {
    fn new() -> Self {
        let mut flags = FlagRegister::new();
        flags.set_flag(RED);
        Self {
            flags,
            entered_ms: 0,
        }
    }

    fn state(&self) -> usize {
        // Only one state flag is ever set.
        FlagRegister::<u8>::from_raw(self.flags.raw_flags() & STATE_MASK)
            .iter_set()
            .next()
            .unwrap_or(RED)
    }

    fn dwell_ms(&self) -> u64 {
        match self.state() {
            GREEN if self.flags.check_flag(WALK_REQUEST) => 40,
            GREEN => 120,
            YELLOW => 30,
            _ => 80,
        }
    }

    fn enter(&mut self, next: usize, now_ms: u64) {
        let state = self.state();
        self.flags.clear_flag(state);
        self.flags.set_flag(next);
        self.entered_ms = now_ms;
        if next == RED {
            self.flags.clear_flag(WALK_REQUEST);
        }
    }

    fn tick(&mut self, now_ms: u64) -> bool {
        if now_ms - self.entered_ms < self.dwell_ms() {
            return false;
        }
        let next = match self.state() {
            RED => GREEN,
            GREEN => YELLOW,
            _ => RED,
        };
        self.enter(next, now_ms);
        true
    }
}

fn name(state: usize) -> &'static str {
    match state {
        RED => "RED",
        GREEN => "GREEN",
        YELLOW => "YELLOW",
        _ => "?",
    }
}

fn main() {
    println!("=== Traffic Light ===\n");

    let start = Instant::now();
    let millis = || start.elapsed().as_millis() as u64;

    let mut light = Light::new();
    println!("  {:>5} ms  {:<6} {}", 0, name(light.state()), light.flags);

    let mut transitions = 0;
    while transitions < 7 {
        let now = millis();
        if now > 150 && !light.flags.check_flag(WALK_REQUEST) && transitions < 4 {
            light.flags.set_flag(WALK_REQUEST);
            println!("  {now:>5} ms  walk button pressed");
        }
        if light.tick(now) {
            transitions += 1;
            println!("  {now:>5} ms  {:<6} {}", name(light.state()), light.flags);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}
