//! # Catalog Example
//!
//! Loads the built-in widget catalog and prints a summary of every
//! descriptor: name, label, property count, and default trigger event.
//!
//! Run with: `cargo run --example catalog`

use blueprint::widgets;

fn main() {
    let registry = widgets::catalog().expect("built-in catalog is valid");
    println!("{} widgets registered\n", registry.len());

    for descriptor in registry.iter() {
        let default_event = descriptor
            .trigger_events()
            .default_event()
            .map(|event| event.name())
            .unwrap_or("-");
        println!(
            "{:<14} {:<36} {:>2} properties  default event: {}",
            descriptor.name(),
            descriptor.label().get("fr"),
            descriptor.property_count(),
            default_event,
        );
    }
}
