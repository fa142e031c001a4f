//! Build script for tickwork-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections and keys the firmware's config parser accepts
const SCHEMA: &[(&str, &[&str])] = &[
    ("debounce", &["settle_ms", "release_hold_ms"]),
    ("scheduler", &["status_interval_ms"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml against the runtime config schema
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");
    if !config_path.exists() {
        fail("board.toml not found", &["The firmware embeds board.toml next to Cargo.toml."]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read board.toml", &[&e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let message = e.to_string();
            let lines: Vec<&str> = message.lines().collect();
            fail("Invalid TOML syntax in board.toml", &lines);
        }
    };

    let errors = check_schema(&config);
    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Invalid board.toml", &lines);
    }

    println!("cargo:warning=board.toml validated successfully");
}

fn check_schema(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = config.as_table() else {
        errors.push("top level must be a table".to_string());
        return errors;
    };

    for (section, value) in root {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| *name == section.as_str()) else {
            errors.push(format!("unknown section [{}]", section));
            continue;
        };
        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
                continue;
            }
            match value.as_integer() {
                Some(ms) if (0..=u32::MAX as i64).contains(&ms) => {}
                Some(_) => errors.push(format!("[{}] {} must fit in u32", section, key)),
                None => errors.push(format!("[{}] {} must be an integer", section, key)),
            }
        }
    }

    let hold = config
        .get("debounce")
        .and_then(|d| d.get("release_hold_ms"))
        .and_then(toml::Value::as_integer);
    if hold == Some(0) {
        errors.push("[debounce] release_hold_ms must be greater than 0".to_string());
    }

    errors
}

/// Abort the build with a boxed message
fn fail(title: &str, lines: &[&str]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
