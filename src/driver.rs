use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::{
    corpus::CorpusDocument,
    gloss_index::{build_gloss_index, GlossIndex},
    utility::json::{read_json, write_json_pretty},
};

pub static CORPUS_FILE_SUFFIX: &str = ".json";

#[derive(Debug, Clone, Default)]
pub struct Options {
    // 集計だけしてファイルは書き換えない
    pub dry_run: bool,
}

// sentence, word は "sentences" / "words" 配列中の位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub sentence: usize,
    pub word: usize,
    pub parts: String,
    pub gloss: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sent#{} word#{} morpheme mismatch: parts='{}' gloss='{}'",
            self.sentence, self.word, self.parts, self.gloss
        )
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DocumentReport {
    pub updated: usize,
    pub mismatches: Vec<Mismatch>,
}

// 値が変わった ana だけ数える (2 回目は 0 件)
pub fn annotate_document(root: &mut Value) -> DocumentReport {
    let mut report = DocumentReport::default();

    let mut document = CorpusDocument::new(root);
    for (si, mut sentence) in document.sentences_mut() {
        if !sentence.is_primary_language() {
            continue;
        }

        for (wi, mut word) in sentence.words_mut() {
            // ana[0] 以外は対象外
            let Some(mut analysis) = word.first_analysis_mut() else {
                continue;
            };

            match build_gloss_index(analysis.parts(), analysis.gloss()) {
                GlossIndex::Annotation(index) => {
                    if analysis.set_gloss_index(&index) {
                        report.updated += 1;
                    }
                }
                GlossIndex::Mismatch => {
                    report.mismatches.push(Mismatch {
                        sentence: si,
                        word: wi,
                        parts: analysis.parts().unwrap_or_default().to_owned(),
                        gloss: analysis.gloss().unwrap_or_default().to_owned(),
                    });
                }
                GlossIndex::NoOp => {}
            }
        }
    }

    report
}

#[derive(Debug)]
pub enum FileOutcome {
    Updated(usize),
    Unchanged,
    Unreadable(anyhow::Error),
    Unwritable(anyhow::Error),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub dry_run: bool,
    pub mismatches: Vec<Mismatch>,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn file_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    pub fn updated(&self) -> usize {
        match self.outcome {
            FileOutcome::Updated(n) => n,
            _ => 0,
        }
    }

    pub fn warnings(&self) -> usize {
        let failed = match self.outcome {
            FileOutcome::Unreadable(_) | FileOutcome::Unwritable(_) => 1,
            FileOutcome::Updated(_) | FileOutcome::Unchanged => 0,
        };
        self.mismatches.len() + failed
    }

    pub fn console_lines(&self) -> Vec<String> {
        let name = self.file_name();

        let mut lines: Vec<String> = self
            .mismatches
            .iter()
            .map(|mismatch| format!("[WARN] {}: {}", name, mismatch))
            .collect();

        lines.push(match &self.outcome {
            FileOutcome::Updated(n) if self.dry_run => {
                format!("[OK] {}: would update {} ana item(s)", name, n)
            }
            FileOutcome::Updated(n) => format!("[OK] {}: updated {} ana item(s)", name, n),
            FileOutcome::Unchanged => format!("[OK] {}: no changes", name),
            FileOutcome::Unreadable(e) => format!("[WARN] {}: cannot read JSON ({:#})", name, e),
            FileOutcome::Unwritable(e) => format!("[WARN] {}: cannot write JSON ({:#})", name, e),
        });

        lines
    }
}

// 失敗は FileReport に載せて返し，実行は止めない
pub fn process_file(path: &Path, options: &Options) -> FileReport {
    let mut report = FileReport {
        path: path.to_owned(),
        dry_run: options.dry_run,
        mismatches: Vec::new(),
        outcome: FileOutcome::Unchanged,
    };

    let mut root = match read_json(path) {
        Ok(root) => root,
        Err(e) => {
            report.outcome = FileOutcome::Unreadable(e);
            return report;
        }
    };

    let DocumentReport {
        updated,
        mismatches,
    } = annotate_document(&mut root);
    report.mismatches = mismatches;

    if updated == 0 {
        return report;
    }

    report.outcome = if options.dry_run {
        FileOutcome::Updated(updated)
    } else {
        match write_json_pretty(path, &root) {
            Ok(()) => FileOutcome::Updated(updated),
            Err(e) => FileOutcome::Unwritable(e),
        }
    };

    report
}

// dir 直下で名前が "*.json" のもの (ドットファイル・ディレクトリも含む)
// ディレクトリは読めないので process_file で Unreadable になる
pub fn find_corpus_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
        // ".json" のような名前も拾う
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(CORPUS_FILE_SUFFIX)
        {
            paths.push(entry.path());
        }
    }
    paths.sort();

    Ok(paths)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub warnings: usize,
}

impl RunSummary {
    pub fn add(&mut self, report: &FileReport) {
        self.updated += report.updated();
        self.warnings += report.warnings();
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DONE] total updated ana items: {}; warnings: {}",
            self.updated, self.warnings
        )
    }
}

pub fn no_corpus_files_message(corpus_path: Option<&Path>) -> String {
    match corpus_path {
        Some(path) => format!("[ERROR] No {} files found in {}.", CORPUS_FILE_SUFFIX, path.display()),
        None => format!("[ERROR] No {} files found in the current directory.", CORPUS_FILE_SUFFIX),
    }
}
