use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use erpstore_codegen::{api_docs_url, render_api_module, render_index_module, ERP_SERVICES};

const CONTRACT_SUFFIX: &str = ".swagger.json";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let workspace_root = workspace_root()?;

    match args.first().map(String::as_str) {
        Some("codegen") => {
            let check_mode = args.iter().any(|arg| arg == "--check");
            codegen(&workspace_root, check_mode)
        }
        Some("fetch-contracts") => {
            let gateway = flag_value(&args, "--gateway").unwrap_or("http://erp-gateway");
            fetch_contracts(&workspace_root, gateway)
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn workspace_root() -> Result<PathBuf> {
    Ok(PathBuf::from(
        std::env::var("CARGO_MANIFEST_DIR")
            .context("CARGO_MANIFEST_DIR not set")?
            .trim_end_matches("\\xtask")
            .trim_end_matches("/xtask"),
    ))
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|at| args.get(at + 1))
        .map(String::as_str)
}

fn contract_paths(contracts_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(contracts_dir)
        .with_context(|| format!("failed reading {}", contracts_dir.display()))?
    {
        let path = entry?.path();
        let is_contract = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(CONTRACT_SUFFIX));
        if is_contract {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn codegen(workspace_root: &Path, check_mode: bool) -> Result<()> {
    let contracts_dir = workspace_root.join("contracts");
    let generated_dir = workspace_root.join("crates/erpstore_erp_api/src/generated");

    let mut modules = Vec::new();
    for path in contract_paths(&contracts_dir)? {
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        let module = render_api_module(&source)
            .with_context(|| format!("failed rendering {}", path.display()))?;
        modules.push(module);
    }

    let mut expected: Vec<(PathBuf, String)> = modules
        .iter()
        .map(|module| {
            (
                generated_dir.join(format!("{}.rs", module.module_name)),
                module.source.clone(),
            )
        })
        .collect();
    expected.push((generated_dir.join("mod.rs"), render_index_module(&modules)));

    let keep: BTreeSet<&Path> = expected.iter().map(|(path, _)| path.as_path()).collect();
    let stale = stale_files(&generated_dir, &keep)?;

    if check_mode {
        for (path, rendered) in &expected {
            let existing = std::fs::read_to_string(path)
                .with_context(|| format!("failed reading {}", path.display()))?;
            if normalize_newlines(&existing) != normalize_newlines(rendered) {
                bail!(
                    "generated client drift detected: run `cargo xtask codegen` to refresh {}",
                    path.display()
                );
            }
        }
        if let Some(path) = stale.first() {
            bail!(
                "stale generated client {}: run `cargo xtask codegen` to remove it",
                path.display()
            );
        }
        println!("codegen check passed");
        return Ok(());
    }

    std::fs::create_dir_all(&generated_dir)
        .with_context(|| format!("failed creating {}", generated_dir.display()))?;
    for (path, rendered) in &expected {
        std::fs::write(path, rendered)
            .with_context(|| format!("failed writing {}", path.display()))?;
        println!("generated {}", path.display());
    }
    for path in stale {
        std::fs::remove_file(&path)
            .with_context(|| format!("failed removing {}", path.display()))?;
        println!("removed {}", path.display());
    }
    Ok(())
}

fn stale_files(generated_dir: &Path, keep: &BTreeSet<&Path>) -> Result<Vec<PathBuf>> {
    if !generated_dir.exists() {
        return Ok(Vec::new());
    }
    let mut stale = Vec::new();
    for entry in std::fs::read_dir(generated_dir)
        .with_context(|| format!("failed reading {}", generated_dir.display()))?
    {
        let path = entry?.path();
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        if is_rust && !keep.contains(path.as_path()) {
            stale.push(path);
        }
    }
    stale.sort();
    Ok(stale)
}

fn fetch_contracts(workspace_root: &Path, gateway: &str) -> Result<()> {
    let contracts_dir = workspace_root.join("contracts");
    std::fs::create_dir_all(&contracts_dir)
        .with_context(|| format!("failed creating {}", contracts_dir.display()))?;

    let client = reqwest::blocking::Client::new();
    for service in ERP_SERVICES {
        let url = api_docs_url(gateway, service);
        let document: serde_json::Value = client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .with_context(|| format!("failed fetching {url}"))?;

        let path = contracts_dir.join(format!("{service}{CONTRACT_SUFFIX}"));
        let mut pretty = serde_json::to_string_pretty(&document)?;
        pretty.push('\n');
        std::fs::write(&path, pretty)
            .with_context(|| format!("failed writing {}", path.display()))?;
        println!("fetched {} -> {}", url, path.display());
    }
    Ok(())
}

fn normalize_newlines(input: &str) -> String {
    input
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
}

fn print_usage() {
    eprintln!("Usage: cargo xtask codegen [--check]");
    eprintln!("       cargo xtask fetch-contracts [--gateway <url>]");
}
