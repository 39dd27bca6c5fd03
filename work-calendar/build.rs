use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::DeflateEncoder;
use flate2::Compression;
use rustc_version::{version_meta, Channel};

/// Data file used when `PRODUCTION_CALENDAR_PATH` is not set.
const DEFAULT_CALENDAR_PATH: &str = "work-calendar/data/production-calendar.json";

fn detect_build_channel() {
    let channel = match version_meta().unwrap().channel {
        Channel::Stable => "CHANNEL_STABLE",
        Channel::Beta => "CHANNEL_BETA",
        Channel::Nightly => "CHANNEL_NIGHTLY",
        Channel::Dev => "CHANNEL_DEV",
    };

    println!("cargo:rustc-cfg={}", channel)
}

fn generate_production_calendar(out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let in_path = env::var("PRODUCTION_CALENDAR_PATH")
        .unwrap_or_else(|_| DEFAULT_CALENDAR_PATH.to_string());

    // The fetch step writes `{}` when it has no data at all, anything else
    // must be an object keyed by year.
    let data: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(&in_path)?))?;

    let Some(years) = data.as_object() else {
        return Err(format!("{in_path}: expected an object keyed by year").into());
    };

    for (year, content) in years {
        if year.parse::<i32>().is_err() {
            println!("cargo::warning={in_path}: `{year}` is not a year");
        }

        if !content.get("months").is_some_and(serde_json::Value::is_array) {
            println!("cargo::warning={in_path}: no months listed for {year}");
        }
    }

    let out_path = out_dir.join("production_calendar.bin");

    let mut output = DeflateEncoder::new(
        BufWriter::new(File::create(&out_path)?),
        Compression::best(),
    );

    output.write_all(serde_json::to_string(&data)?.as_bytes())?;
    output.finish()?;

    println!("cargo::rerun-if-changed={in_path}");
    println!("cargo::rerun-if-env-changed=PRODUCTION_CALENDAR_PATH");

    println!(
        "cargo::rustc-env=PRODUCTION_CALENDAR_FILE={}",
        out_path.display()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir: PathBuf = env::var_os("OUT_DIR")
        .expect("cargo build didn't specify an `OUT_DIR` variable")
        .into();

    generate_production_calendar(&out_dir)?;
    detect_build_channel();
    println!("cargo::rerun-if-changed=work-calendar/build.rs");
    Ok(())
}
