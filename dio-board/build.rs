//! Build script for dio-board
//!
//! - Validates dio.toml at compile time
//! - Generates the static channel table (`channels.rs` in OUT_DIR)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[path = "build/channels.rs"]
mod channels;

use channels::{format_error_lines, render, validate_channels};

fn main() {
    println!("cargo:rerun-if-changed=dio.toml");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/channels.rs");

    let config = load_config(Path::new("dio.toml"));
    let channels = match validate_channels(&config) {
        Ok(channels) => channels,
        Err(errors) => report_errors(&errors),
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out_dir.join("channels.rs"), render(&channels))
        .expect("failed to write channels.rs");

    println!(
        "cargo:warning=dio.toml validated successfully ({} channels)",
        channels.len()
    );
}

/// Read and parse dio.toml
fn load_config(path: &Path) -> toml::Value {
    if !path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: dio.toml not found!                                      ║\n\
            ║                                                                  ║\n\
            ║  The board requires a dio.toml channel table.                    ║\n\
            ║  Please create one in the dio-board directory.                   ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read dio.toml                                  ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in dio.toml                          ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    }
}

/// Panic with every collected problem
fn report_errors(errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid channel configuration in dio.toml                ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
