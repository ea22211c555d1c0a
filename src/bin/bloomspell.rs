//! Check sentences against a word-per-line vocabulary file.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use bloomspell::{vocab, Config, SpellChecker};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Flag words that are not in a vocabulary.
#[derive(Parser, Debug)]
#[command(name = "bloomspell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Flag words that are not in a vocabulary")]
struct Args {
    /// Vocabulary file, one word per line
    #[arg(long, env = "BLOOMSPELL_VOCAB")]
    vocab: PathBuf,

    /// Target false positive rate
    #[arg(long, default_value_t = bloomspell::bloom::DEFAULT_FALSE_POSITIVE_RATE)]
    fp_rate: f64,

    /// Fixed filter size in bytes, instead of sizing from the vocabulary
    #[arg(long)]
    size_bytes: Option<usize>,

    /// Only print tokens that are not in the vocabulary
    #[arg(long)]
    misspelled: bool,

    /// Print filter parameters to stderr before checking
    #[arg(long)]
    stats: bool,

    /// Verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Sentences to check. Reads lines from stdin when empty.
    sentences: Vec<String>,
}

impl Args {
    fn config(&self) -> Config {
        let config = Config::default().with_false_positive_rate(self.fp_rate);

        match self.size_bytes {
            Some(nbytes) => config.with_size_bytes(nbytes),
            None => config,
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let words = vocab::load(&args.vocab)
        .with_context(|| format!("failed to read vocabulary {}", args.vocab.display()))?;
    let nwords = words.len();
    let spell = SpellChecker::with_config(words, &args.config())?;
    let set = spell.membership();

    // Auto-sized filters land close to the target; only a fixed size can
    // overshoot by much.
    if spell.false_positive_rate() > 2. * args.fp_rate {
        warn!(
            words = nwords,
            nbits = set.bits(),
            expected = spell.false_positive_rate(),
            target = args.fp_rate,
            "Filter is too small for the vocabulary"
        );
    }
    if args.stats {
        eprintln!(
            "m={} k={} n={} fp_rate={:.6}",
            set.bits(),
            set.hashes(),
            set.len(),
            spell.false_positive_rate()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.sentences.is_empty() {
        for line in io::stdin().lock().lines() {
            report(&spell, &line?, args.misspelled, &mut out)?;
        }
    } else {
        for sentence in &args.sentences {
            report(&spell, sentence, args.misspelled, &mut out)?;
        }
    }
    Ok(())
}

fn report(
    spell: &SpellChecker,
    sentence: &str,
    misspelled_only: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    if misspelled_only {
        for token in spell.misspelled(sentence) {
            writeln!(out, "{token}")?;
        }
    } else {
        for (token, known) in spell.spell_check(sentence) {
            writeln!(out, "{token}\t{}", if known { "ok" } else { "unknown" })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(sentence: &str, misspelled_only: bool) -> String {
        let spell = SpellChecker::from_vocabulary(["hello", "world"]).unwrap();
        let mut out = Vec::new();

        report(&spell, sentence, misspelled_only, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_all_tokens() {
        assert_eq!(
            output("  hello wrold\tworld ", false),
            "hello\tok\nwrold\tunknown\nworld\tok\n"
        );
    }

    #[test]
    fn test_report_misspelled_only() {
        assert_eq!(output("hello wrold world", true), "wrold\n");
    }

    #[test]
    fn test_report_empty_sentence() {
        assert_eq!(output("", false), "");
        assert_eq!(output("   ", true), "");
    }
}
