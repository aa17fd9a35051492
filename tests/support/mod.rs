use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for airnet
pub fn airnet() -> Command {
    cargo_bin_cmd!("airnet")
}

/// Write a network description into `dir` and return its path
pub fn write_network(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("network.toml");
    fs::write(&path, content).expect("failed to write network file");
    path
}

/// Two disconnected pairs of airports
pub const SPLIT_NETWORK: &str = r#"
airports = ["BOS", "ORD", "SEA", "PDX"]

routes = [
    { from = "BOS", to = "ORD", distance = 867 },
    { from = "SEA", to = "PDX", distance = 129 },
]
"#;
