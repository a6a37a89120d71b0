//! Build script to generate the embedded puzzle corpus
//!
//! Reads `Category|PHRASE` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle_list(
        "data/puzzles.txt",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLES",
        "Built-in puzzles as (category, phrase) pairs",
    );

    // Rebuild if the corpus changes
    println!("cargo:rerun-if-changed=data/puzzles.txt");
}

fn generate_puzzle_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split_once('|')
                .map(|(category, phrase)| (category.trim(), phrase.trim()))
                .unwrap_or_else(|| panic!("Malformed corpus line in {input_path}: {line}"))
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle corpus").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (category, phrase) in entries {
        writeln!(output, "    ({category:?}, {phrase:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
