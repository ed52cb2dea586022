use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{env, path::PathBuf};

use selkup_gloss_index::driver::{
    find_corpus_files, no_corpus_files_message, process_file, Options, RunSummary,
};

struct Args {
    corpus_path: Option<String>,
    dry_run: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("n", "dry-run", "report changes without rewriting files");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: selkup-gloss-index [options] [DIR]"));
        return Ok(None);
    }

    if 1 < matches.free.len() {
        bail!("Too many arguments: {:?}", matches.free);
    }

    Ok(Some(Args {
        corpus_path: matches.free.get(0).cloned(),
        dry_run: matches.opt_present("n"),
    }))
}

fn main() -> Result<()> {
    let Some(args) = get_args()? else {
        return Ok(());
    };

    let corpus_path = PathBuf::from(args.corpus_path.as_deref().unwrap_or("."));
    let options = Options {
        dry_run: args.dry_run,
    };

    let paths = find_corpus_files(&corpus_path)?;
    if paths.is_empty() {
        let shown = args.corpus_path.as_ref().map(|_| corpus_path.as_path());
        println!("{}", no_corpus_files_message(shown));
        return Ok(());
    }

    let mut summary = RunSummary::default();

    let pb = create_progress_bar(paths.len() as u64);
    for path in &paths {
        let report = process_file(path, &options);

        // 非端末でも消えないように suspend 経由で出力する
        pb.suspend(|| {
            for line in report.console_lines() {
                println!("{}", line);
            }
        });

        summary.add(&report);
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!("{}", summary);

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
