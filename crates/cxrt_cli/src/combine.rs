//! `cxhash combine`: fingerprint files independently, then merge in order.

use std::fs;
use std::io::Write;
use std::path::Path;

use cxrt_hash::PolyHashState;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::output::DigestReport;
use crate::{CombineArgs, GlobalArgs};

/// Exit code reported when `--check` finds a disagreement.
pub const CHECK_FAILED: i32 = 2;

/// Runs `cxhash combine`.
///
/// Each file is read and hashed on the rayon pool without reference to the others.
/// The per-file states are then combined in argument order and the seeded result
/// is printed. Returns 0, or [`CHECK_FAILED`] if `--check` disagrees.
pub fn run(
    args: &CombineArgs,
    global: &GlobalArgs,
    out: &mut dyn Write,
) -> Result<i32, Box<dyn std::error::Error>> {
    let chunk_size = global.config.parallel.chunk_size;

    let leaves = args
        .files
        .par_iter()
        .map(|path| hash_file(path, chunk_size))
        .collect::<Result<Vec<_>, String>>()?;
    info!("hashed {} files independently", leaves.len());

    let content: PolyHashState = leaves.iter().copied().collect();
    let combined = PolyHashState::new().combine(&content);

    let line = DigestReport::poly(&combined).render(global.format(args.format))?;
    writeln!(out, "{line}")?;

    if args.check {
        let buffers = args
            .files
            .iter()
            .map(|path| read_file(path))
            .collect::<Result<Vec<_>, String>>()?;
        return Ok(check_concatenation(&combined, &buffers));
    }

    Ok(0)
}

/// Hashes `buffers` joined end to end in a single pass and compares the seeded
/// result with `combined`. Returns 0 on agreement, [`CHECK_FAILED`] otherwise.
fn check_concatenation(combined: &PolyHashState, buffers: &[Vec<u8>]) -> i32 {
    let rehashed = PolyHashState::new().combine(&PolyHashState::of_bytes(&buffers.concat()));
    if rehashed != *combined {
        warn!(
            combined = %combined.fingerprint(),
            rehashed = %rehashed.fingerprint(),
            "combined state disagrees with rehashed concatenation"
        );
        return CHECK_FAILED;
    }
    info!("combined state matches rehashed concatenation");
    0
}

fn read_file(path: &Path) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("cannot read '{}': {e}", path.display()))
}

fn hash_file(path: &Path, chunk_size: usize) -> Result<PolyHashState, String> {
    let bytes = read_file(path)?;
    Ok(cxrt_hash::hash_chunked(&bytes, chunk_size))
}
