//! Document Review Workflow
//!
//! This example loads a workflow from JSON and walks through the
//! undo/redo rules, including the ones that tend to surprise.
//!
//! Key concepts:
//! - JSON configuration with declaration order preserved
//! - Handling `NoTransition` and `UnknownState` errors
//! - Single-slot redo that re-appends on every call
//! - `reset` versus `clear_history`
//!
//! Run with: cargo run --example document_review

use rewind::{Fsm, FsmError};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } },
        "archived": {}
    }
}"#;

fn main() -> Result<(), FsmError> {
    println!("=== Document Review Workflow ===\n");

    let mut doc = Fsm::from_json(WORKFLOW)?;
    println!("Declared states: {:?}", doc.states(None));
    println!("Can be rejected from: {:?}\n", doc.states(Some("reject")));

    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("After submit + approve: {}", doc.current_state());

    match doc.trigger("submit") {
        Err(err @ FsmError::NoTransition { .. }) => println!("Rejected: {err}"),
        other => println!("Unexpected: {other:?}"),
    }
    if let Err(err) = doc.change_state("deleted") {
        println!("Rejected: {err}");
    }

    println!("\nUndo once:");
    doc.undo();
    println!("  state {}, history {:?}", doc.current_state(), doc.history().path());

    println!("Redo twice (the undone state is appended each time):");
    doc.redo();
    doc.redo();
    println!("  state {}, history {:?}", doc.current_state(), doc.history().path());

    println!("\nReset keeps history:");
    doc.reset();
    println!("  state {}, history {:?}", doc.current_state(), doc.history().path());

    println!("Clear history keeps the current state:");
    doc.change_state("archived")?;
    doc.clear_history();
    println!("  state {}, history {:?}", doc.current_state(), doc.history().path());
    println!("  sink state: {}", doc.is_sink());

    println!("\n=== Example Complete ===");
    Ok(())
}
