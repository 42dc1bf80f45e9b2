//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Declarative configuration with `fsm_config!`
//! - Stepping back through history with undo
//!
//! Run with: cargo run --example traffic_light

use rewind::{fsm_config, Fsm, FsmError};

fn main() -> Result<(), FsmError> {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = Fsm::new(fsm_config! {
        initial: red,
        red { next => green },
        green { next => yellow },
        yellow { next => red },
    })?;

    println!("Initial state: {}\n", light.current_state());

    println!("Cycling through the lights:");
    for _ in 0..4 {
        let from = light.current_state().clone();
        let to = light.trigger("next")?;
        println!("  {from} -> {to}");
    }

    println!("\nHistory: {:?}", light.history().path());

    println!("\nStepping back:");
    while light.undo() {
        println!("  back to {}", light.current_state());
    }

    println!("\nStates that respond to 'next': {:?}", light.states(Some("next")));
    println!("\n=== Example Complete ===");
    Ok(())
}
