//! Whole-file transformation of a dependency listing.

use crate::parse::{prerequisites, LineStart};
use crate::Error;
use std::fs;
use std::path::Path;

/// Sentinel written as the first output line.
///
/// Finding it in the input means the file has already been processed;
/// the comparison is byte-exact, terminator included.
pub const MARKER: &str = "# Updated by depfix\n";

/// Expand dependency file content.
///
/// The result is the marker line, the input reproduced verbatim, and one
/// empty rule per prerequisite in order of appearance, duplicates retained.
///
/// Returns `None` if the content already contains the marker line.
pub fn expand(content: &str) -> Option<String> {
    let mut out = String::with_capacity(MARKER.len() + 2 * content.len());
    out.push_str(MARKER);

    let mut deps = Vec::new();
    let mut start = LineStart::Target;
    for line in content.split_inclusive('\n') {
        if line == MARKER {
            return None;
        }
        out.push_str(line);
        deps.extend(prerequisites(line, start));
        start = LineStart::after(line);
    }

    // a blank line parses to a single empty name,
    // which would turn into a nameless ":" rule
    deps.retain(|dep| !dep.is_empty());
    log::info!("Add {} empty rules", deps.len());

    for dep in &deps {
        out.push_str(dep);
        out.push_str(":\n");
    }
    Some(out)
}

/// Rewrite the dependency file at `input` into `output`.
///
/// The input is read to completion before the output is opened,
/// so rewriting a file in place cannot truncate unread data.
pub fn fixup(input: &Path, output: &Path) -> Result<(), Error> {
    if !input.exists() {
        return Err(Error::NotFound(input.to_path_buf()));
    }

    let content = fs::read_to_string(input)?;
    let out = expand(&content).ok_or_else(|| Error::AlreadyProcessed(input.to_path_buf()))?;

    log::debug!("Write {} bytes to {}", out.len(), output.display());
    fs::write(output, out)?;
    Ok(())
}
