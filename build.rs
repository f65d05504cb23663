//! Build script for the food diary
//!
//! Increments build number on each recompilation and embeds build metadata.

use std::fs;
use std::path::Path;

fn main() {
    // A new build number only when sources change
    println!("cargo:rerun-if-changed=src");

    // Counter lives next to Cargo.toml
    let build_number_path = Path::new("build_number.txt");

    // Missing or garbled counter restarts at 0
    let current_build: u64 = if build_number_path.exists() {
        fs::read_to_string(build_number_path)
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse()
            .unwrap_or(0)
    } else {
        0
    };

    let new_build = current_build + 1;

    // Persist for the next build
    fs::write(build_number_path, new_build.to_string())
        .expect("Failed to write build number file");

    // UTC, second precision
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    // Read back by src/build_info.rs through option_env!
    println!("cargo:rustc-env=FOOD_DIARY_BUILD_NUMBER={}", new_build);
    println!("cargo:rustc-env=FOOD_DIARY_BUILD_TIMESTAMP={}", timestamp);

    println!("cargo:warning=Food Diary build #{} at {}", new_build, timestamp);
}
