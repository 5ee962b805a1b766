//! DAWG compile command
//!
//! Writes the loaded lexicon as forward and, optionally, reversed DAWG
//! files so later runs can skip parsing the word list.

use crate::WordEngine;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One written file
pub struct CompiledFile {
    pub path: PathBuf,
    pub reverse: bool,
    pub bytes: usize,
}

/// Result of compiling the lexicon
pub struct CompileResult {
    pub words: usize,
    pub files: Vec<CompiledFile>,
    pub duration: Duration,
}

/// Write the lexicon to `output`, and its reverse to `reverse_output`
///
/// # Errors
///
/// Returns an error if a graph is too large for the format or a file can't
/// be written.
pub fn compile_lexicon(
    engine: &WordEngine,
    output: &Path,
    reverse_output: Option<&Path>,
) -> Result<CompileResult> {
    let start = Instant::now();
    let mut files = Vec::new();

    let targets = std::iter::once((output, false)).chain(reverse_output.map(|p| (p, true)));
    for (path, reverse) in targets {
        engine.graph().write_dawg_file(path, reverse)?;
        files.push(CompiledFile {
            path: path.to_path_buf(),
            reverse,
            bytes: engine.graph().to_dawg_bytes(reverse)?.len(),
        });
    }

    Ok(CompileResult {
        words: engine.word_count(),
        files,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn compile_and_reload() {
        let mut engine = WordEngine::default();
        for word in ["CAT", "CATS", "DOG", "DOGS"] {
            engine.add_word(word);
        }
        let dir = TempDir::new().unwrap();
        let forward = dir.path().join("lex.dawg");
        let reverse = dir.path().join("lex-r.dawg");

        let result = compile_lexicon(&engine, &forward, Some(reverse.as_path())).unwrap();
        assert_eq!(result.words, 4);
        assert_eq!(result.files.len(), 2);
        assert!(result.files[1].reverse);
        assert_eq!(
            std::fs::metadata(&forward).unwrap().len() as usize,
            result.files[0].bytes
        );

        let mut reloaded = WordEngine::default();
        reloaded.import_dawg_file(&forward, "LEX", false).unwrap();
        reloaded.import_dawg_file(&reverse, "LEX", true).unwrap();
        assert_eq!(reloaded.graph().words(), engine.graph().words());
    }
}
