//! Build script for cfgtree-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("cfgtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build and query hierarchical configuration trees")
        .long_about(
            "Build a configuration tree from PATH=VALUE assignments and run one query against it",
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
            Arg::new("sep")
                .long("sep")
                .help("Path separator (empty to disable splitting)")
                .value_name("SEP")
                .global(true)
                .default_value(".")
                .env("CFGTREE_PATH_SEP"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .help("Store VALUE at PATH before running the command (repeatable)")
                .value_name("PATH=VALUE")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("get")
                .about("Read a value from the tree")
                .long_about("Read one node, as stored or through a typed getter"),
            Command::new("count")
                .about("Count the children of a node")
                .long_about("Count the fields of a dict or the slots of an array, holes included"),
            Command::new("fields")
                .about("List the field names of a dict")
                .long_about("Print the field names of a dict node, sorted, one per line"),
            Command::new("keys")
                .about("List the paths of all leaves")
                .long_about("Print the full path of every leaf below a node, sorted"),
            Command::new("path")
                .about("Show the absolute path of a node")
                .long_about("Look up a node and print the path rebuilt from its parent links"),
            Command::new("dump")
                .about("Print the tree")
                .long_about("Render the tree or a subtree as YAML, JSON, or flat lines"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cfgtree.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
