//! Annotator: persist `perf annotate` output for one symbol
//!
//! Each call spawns one `perf annotate` subprocess and, on success, writes
//! its stdout verbatim to a single file in the output directory. Failures
//! carry the tool's stderr and are expected to be non-fatal to the caller.

use crate::perf;
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "annotate_";
const FILE_SUFFIX: &str = ".txt";

/// Output file path for a symbol's annotation: `<dir>/annotate_<symbol>.txt`.
///
/// The symbol is embedded as printed by perf, without sanitization; a symbol
/// containing a path separator produces a path outside `output_dir`.
pub fn annotation_path(output_dir: &Path, symbol: &str) -> PathBuf {
    output_dir.join(format!("{FILE_PREFIX}{symbol}{FILE_SUFFIX}"))
}

/// Request a detailed annotation for `symbol` and write it to the output
/// directory, overwriting any previous file. Returns the file path written.
pub fn annotate_symbol(input: &Path, symbol: &str, output_dir: &Path) -> perf::Result<PathBuf> {
    let annotation = perf::annotate_stdout(input, symbol)?;
    let path = annotation_path(output_dir, symbol);
    fs::write(&path, annotation)?;
    tracing::debug!(symbol, path = %path.display(), "wrote annotation");
    Ok(path)
}
