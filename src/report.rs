//! Report Scanner: extract the hottest symbols from `perf report` output
//!
//! `perf report --stdio` prints a human-readable table with a header row
//! containing "Overhead" and "Symbol" columns, then one data row per symbol
//! with a leading percentage and a trailing symbol name. Everything before
//! the header is noise and must be ignored even if it looks like a data row.

use crate::perf;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Data row: leading percentage, arbitrary columns, trailing symbol token.
const DATA_ROW_PATTERN: &str = r"^\s*\d+\.\d+%.*\s+([\w.:<>~@]+)\s*$";

fn data_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATA_ROW_PATTERN).expect("data-row pattern is valid"))
}

/// Scan the given perf.data file and return up to `limit` hottest symbol
/// names in descending-overhead order. An empty result is not an error.
pub fn scan_hot_functions(input: &Path, limit: usize) -> perf::Result<Vec<String>> {
    let stdout = perf::report_stdout(input)?;
    Ok(parse_hot_functions(&stdout, limit))
}

/// Parse `perf report --stdio` text into an ordered list of symbol names.
///
/// Lines are ignored until a header containing both "Overhead" and "Symbol"
/// is seen (the header itself is discarded). Matching rows after that point
/// contribute their trailing symbol token unless it contains `]`, which
/// typically indicates a non-userspace bracket-annotated entry. Scanning
/// stops as soon as `limit` symbols are accepted.
pub fn parse_hot_functions(report: &str, limit: usize) -> Vec<String> {
    let mut symbols = Vec::new();
    if limit == 0 {
        return symbols;
    }

    let pattern = data_row_regex();
    let mut header_found = false;
    for line in report.lines() {
        if !header_found {
            header_found = line.contains("Overhead") && line.contains("Symbol");
            continue;
        }

        if let Some(captures) = pattern.captures(line) {
            let symbol = &captures[1];
            if !symbol.contains(']') {
                symbols.push(symbol.to_string());
            }
            if symbols.len() >= limit {
                break;
            }
        }
    }

    tracing::debug!(count = symbols.len(), limit, "parsed report symbols");
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPORT: &str = "\
# To display the perf.data header info, please use --header/--header-only options.
#
# Samples: 12K of event 'cycles'
# Overhead  Command  Shared Object  Symbol
# ........  .......  .............  ......
#
    45.20%  bench    bench          [.] hot_func
    12.10%  bench    bench          [.] other_func
     8.33%  bench    libc.so.6      [.] memcpy@plt
     1.02%  bench    bench          [.] gc::World::tick
";

    #[test]
    fn test_returns_symbols_in_report_order() {
        let symbols = parse_hot_functions(SAMPLE_REPORT, 10);
        assert_eq!(
            symbols,
            ["hot_func", "other_func", "memcpy@plt", "gc::World::tick"]
        );
    }

    #[test]
    fn test_truncates_at_limit() {
        assert_eq!(parse_hot_functions(SAMPLE_REPORT, 1), ["hot_func"]);
        assert_eq!(
            parse_hot_functions(SAMPLE_REPORT, 2),
            ["hot_func", "other_func"]
        );
    }

    #[test]
    fn test_limit_zero_yields_nothing() {
        assert!(parse_hot_functions(SAMPLE_REPORT, 0).is_empty());
    }

    #[test]
    fn test_two_row_scenario() {
        let report = "# Overhead  Symbol\n  45.20%    hot_func\n  12.10%    other_func\n";
        assert_eq!(parse_hot_functions(report, 1), ["hot_func"]);
        assert_eq!(parse_hot_functions(report, 5), ["hot_func", "other_func"]);
    }

    #[test]
    fn test_rows_before_header_are_ignored() {
        let report = "  99.99%  sneaky_func\n# Overhead  Symbol\n  45.20%  hot_func\n";
        assert_eq!(parse_hot_functions(report, 5), ["hot_func"]);
    }

    #[test]
    fn test_header_line_itself_is_not_data() {
        let report = "# Overhead  Symbol\n";
        assert!(parse_hot_functions(report, 5).is_empty());
    }

    #[test]
    fn test_no_header_means_no_symbols() {
        let report = "  45.20%  hot_func\n  12.10%  other_func\n";
        assert!(parse_hot_functions(report, 5).is_empty());
    }

    #[test]
    fn test_bracketed_symbols_are_excluded() {
        let report = "\
# Overhead  Symbol
  45.20%  swapper  [kernel.kallsyms]
  12.10%  bench    hot_func
";
        assert_eq!(parse_hot_functions(report, 5), ["hot_func"]);
    }

    #[test]
    fn test_noise_lines_between_rows_are_skipped() {
        let report = "\
# Overhead  Symbol
  45.20%  hot_func

no percentage here
  12.10%  other_func
";
        assert_eq!(parse_hot_functions(report, 5), ["hot_func", "other_func"]);
    }

    #[test]
    fn test_symbol_token_character_class() {
        let report = "# Overhead  Symbol\n  45.20%  std::vec::Vec<u8>::push\n   1.00%  ~Widget\n";
        assert_eq!(
            parse_hot_functions(report, 5),
            ["std::vec::Vec<u8>::push", "~Widget"]
        );
    }

    #[test]
    fn test_empty_report() {
        assert!(parse_hot_functions("", 5).is_empty());
    }
}
