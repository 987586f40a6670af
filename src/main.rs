use anyhow::{Context, Result};
use clap::Parser;
use perf_hotspot::{annotate, cli::Cli, report};
use std::fs;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Fatal before any subprocess work: nothing to analyze without the input
    if !args.input.exists() {
        anyhow::bail!("input file '{}' not found", args.input.display());
    }

    fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            args.output.display()
        )
    })?;

    println!(
        "[*] Analyzing '{}' to find the top {} functions...",
        args.input.display(),
        args.top
    );
    let symbols = report::scan_hot_functions(&args.input, args.top)?;

    if symbols.is_empty() {
        eprintln!("[!] Warning: could not parse any function names from the perf report.");
        eprintln!("    Please check the contents of '{}'.", args.input.display());
        println!("[-] No functions to analyze. Exiting.");
        return Ok(());
    }

    println!(
        "[*] Found top {} functions: {}",
        symbols.len(),
        symbols.join(", ")
    );

    let mut annotated = 0usize;
    let mut failed = 0usize;
    for symbol in &symbols {
        println!("[*] Generating annotation for '{symbol}'...");
        match annotate::annotate_symbol(&args.input, symbol, &args.output) {
            Ok(path) => {
                println!("    -> saved to '{}'", path.display());
                annotated += 1;
            }
            // Non-fatal: one bad symbol must not block the rest
            Err(err) => {
                eprintln!("[!] Error annotating function '{symbol}': {err}");
                failed += 1;
            }
        }
    }

    println!("[+] Analysis complete: {annotated} annotated, {failed} failed.");
    Ok(())
}
