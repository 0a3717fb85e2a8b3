//! Build script for pathtree-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and navigate trees of delimited paths")
        .long_about(
            "Command-line tool for turning flat lists of delimited paths into navigable trees",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("PATHTREE_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("tree")
                .about("Render the tree built from a list of paths")
                .long_about("Render the tree of a path list as a text outline, JSON, or YAML"),
            Command::new("list")
                .about("List tree nodes")
                .long_about("List tree nodes as a table, JSON, CSV, or TSV"),
            Command::new("select")
                .about("Resolve a query to a node")
                .long_about("Resolve an absolute or relative query and print the node's path"),
            Command::new("breadcrumbs")
                .about("Print the breadcrumb pathway to a node")
                .long_about("Print the ancestors of a node from the root down"),
            Command::new("rows")
                .about("Group id/parentId rows into a nested tree")
                .long_about("Read a JSON array of flat rows and nest children under parents"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathtree configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("pathtree.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
