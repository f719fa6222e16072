//! Runs every section of the basics tour in order.
//!
//! Run with: cargo run --bin basics-tour
//! Set `RUST_LOG=debug` (or `trace`) to see the tracing events on stderr.

use anyhow::{Context, Result};
use basics::{section_1, section_2, section_3, section_4, section_5};
use tracing::info;

fn main() -> Result<()> {
    basics_common::telemetry::init().context("Failed to set tracing subscriber")?;

    println!("=== Basics Tour ===");

    let sections: [(&str, fn()); 5] = [
        ("math", section_1::demonstrate_math),
        ("closures", section_2::demonstrate_closures),
        ("higher-order", section_3::demonstrate_higher_order),
        ("process", section_4::demonstrate_process),
        ("pointers", section_5::demonstrate_pointers),
    ];

    for (name, demonstrate) in sections {
        info!(section = name, "running section");
        demonstrate();
    }

    Ok(())
}
