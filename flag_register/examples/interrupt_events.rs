//! A producer thread stands in for an interrupt handler and raises event
//! flags in a `static SharedFlagRegister<u16>`. The foreground loop drains
//! them with `take()` so that no event is lost or handled twice.

use std::thread;
use std::time::Duration;

use flag_register::SharedFlagRegister;
use rand::prelude::*;

const BUTTON: usize = 0;
const TIMER: usize = 1;
const UART_RX: usize = 2;
const SHUTDOWN: usize = 15;

static EVENTS: SharedFlagRegister<u16> = SharedFlagRegister::<u16>::new();

fn isr(rng: &mut StdRng) {
    // Only single-flag writes happen here.
    match rng.random_range(0..3) {
        0 => EVENTS.set_flag(BUTTON),
        1 => EVENTS.set_flag(TIMER),
        _ => EVENTS.set_flag(UART_RX),
    }
}

fn main() {
    println!("=== Interrupt Events ===\n");

    let producer = thread::spawn(|| {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..40 {
            isr(&mut rng);
            thread::sleep(Duration::from_millis(rng.random_range(1..5)));
        }
        EVENTS.set_flag(SHUTDOWN);
    });

    let mut handled = [0u32; 3];
    loop {
        let pending = EVENTS.take();
        if pending.is_empty() {
            thread::sleep(Duration::from_millis(3));
            continue;
        }

        println!("  pending {}", pending.binary());
        for event in pending.iter_set() {
            match event {
                BUTTON | TIMER | UART_RX => handled[event] += 1,
                _ => {}
            }
        }

        if pending.check_flag(SHUTDOWN) {
            break;
        }
    }

    if producer.join().is_err() {
        eprintln!("producer thread panicked");
    }

    println!(
        "\nHandled button: {}, timer: {}, uart: {}",
        handled[BUTTON], handled[TIMER], handled[UART_RX]
    );
}
