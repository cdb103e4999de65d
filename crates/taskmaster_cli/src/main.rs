//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskmaster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskmaster_core::db::migrations::latest_version;
use taskmaster_core::open_store_in_memory;

fn main() {
    println!("taskmaster_core version={}", taskmaster_core::core_version());
    match open_store_in_memory() {
        Ok(_store) => println!(
            "taskmaster_core store=ok schema_version={}",
            latest_version()
        ),
        Err(err) => println!("taskmaster_core store=error error={err}"),
    }
}
