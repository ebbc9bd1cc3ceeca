//! `cxhash digest` and `cxhash each`.

use std::fs;
use std::io::Write;

use tracing::info;

use crate::output::Accumulator;
use crate::{DigestArgs, EachArgs, GlobalArgs};

/// Runs `cxhash digest`: files, then texts, then integers, into one accumulator.
///
/// Returns exit code 0 on success.
pub fn run_digest(
    args: &DigestArgs,
    global: &GlobalArgs,
    out: &mut dyn Write,
) -> Result<i32, Box<dyn std::error::Error>> {
    let algorithm = global.algorithm(args.hash.algo);
    let chunk_size = global.config.parallel.chunk_size;
    let mut acc = Accumulator::new(algorithm);

    for path in &args.files {
        let bytes = fs::read(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
        info!("folding {} ({} bytes)", path.display(), bytes.len());
        acc.add_bytes(&bytes, chunk_size);
    }
    for text in &args.texts {
        acc.add_bytes(text.as_bytes(), chunk_size);
    }
    for &value in &args.ints {
        acc.add_integer(value as u64);
    }

    let line = acc.report().render(global.format(args.hash.format))?;
    writeln!(out, "{line}")?;
    Ok(0)
}

/// Runs `cxhash each`: one labelled digest per file, in argument order.
///
/// Returns exit code 0 on success.
pub fn run_each(
    args: &EachArgs,
    global: &GlobalArgs,
    out: &mut dyn Write,
) -> Result<i32, Box<dyn std::error::Error>> {
    let algorithm = global.algorithm(args.hash.algo);
    let format = global.format(args.hash.format);
    let chunk_size = global.config.parallel.chunk_size;

    for path in &args.files {
        let bytes = fs::read(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
        let mut acc = Accumulator::new(algorithm);
        acc.add_bytes(&bytes, chunk_size);

        let report = acc.report().with_input(path.display().to_string());
        writeln!(out, "{}", report.render(format)?)?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlgoArg, FormatArg, HashOptions};
    use cxrt_config::ToolConfig;
    use cxrt_hash::{whole_string_hash, FnvHasher, PolyHashState};
    use std::path::PathBuf;

    fn global() -> GlobalArgs {
        GlobalArgs {
            config: ToolConfig::default(),
        }
    }

    fn options(algo: AlgoArg, format: FormatArg) -> HashOptions {
        HashOptions {
            algo: Some(algo),
            format: Some(format),
        }
    }

    fn run_to_string(args: &DigestArgs) -> String {
        let mut out = Vec::new();
        let code = run_digest(args, &global(), &mut out).unwrap();
        assert_eq!(code, 0);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn digest_of_text_matches_library() {
        let args = DigestArgs {
            files: vec![],
            texts: vec!["abc".to_string()],
            ints: vec![],
            hash: options(AlgoArg::Poly, FormatArg::Decimal),
        };
        assert_eq!(run_to_string(&args), format!("{}\n", whole_string_hash(b"abc")));
    }

    #[test]
    fn digest_folds_files_then_texts_then_ints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "file-part").unwrap();

        let args = DigestArgs {
            files: vec![path],
            texts: vec!["text-part".to_string()],
            ints: vec![-1],
            hash: options(AlgoArg::Fnv, FormatArg::Hex),
        };

        let mut expected = FnvHasher::new();
        expected.add_bytes(b"file-part");
        expected.add_bytes(b"text-part");
        expected.add_signed(-1);
        assert_eq!(run_to_string(&args), format!("{}\n", expected.hex_digest()));
    }

    #[test]
    fn digest_missing_file_errors() {
        let args = DigestArgs {
            files: vec![PathBuf::from("/nonexistent/input.bin")],
            texts: vec![],
            ints: vec![],
            hash: HashOptions {
                algo: None,
                format: None,
            },
        };
        let mut out = Vec::new();
        let err = run_digest(&args, &global(), &mut out).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
        assert!(out.is_empty());
    }

    #[test]
    fn each_prints_one_line_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();

        let args = EachArgs {
            files: vec![a.clone(), b.clone()],
            hash: options(AlgoArg::Poly, FormatArg::Hex),
        };
        let mut out = Vec::new();
        run_each(&args, &global(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        let expected_a = PolyHashState::new().combine(&PolyHashState::of_bytes(b"alpha"));
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!("{}  {}", expected_a.hex_digest(), a.display())
        );
        assert!(lines[1].ends_with(&b.display().to_string()));
    }
}
