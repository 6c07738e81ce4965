//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `scrawl_core` linkage and
//!   storage bootstrap.
//! - Keep output deterministic for quick local sanity checks.

use scrawl_core::db::migrations::latest_version;
use scrawl_core::db::open_db_in_memory;

fn main() {
    println!("scrawl_core version={}", scrawl_core::core_version());

    match open_db_in_memory() {
        Ok(_conn) => println!("scrawl_core schema_version={}", latest_version()),
        Err(err) => {
            eprintln!("storage bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
