use std::collections::HashSet;
use std::io::Write;
use std::iter;
use std::sync::Arc;
use std::thread;

use bloomspell::{vocab, Config, Error, SpellChecker};

fn word(rng: &fastrand::Rng) -> String {
    let len = rng.usize(3..12);
    iter::repeat_with(|| rng.lowercase()).take(len).collect()
}

fn vocabulary(rng: &fastrand::Rng, size: usize) -> Vec<String> {
    let words: HashSet<String> = iter::repeat_with(|| word(rng)).take(size).collect();
    words.into_iter().collect()
}

#[test]
fn test_every_vocabulary_word_is_known() {
    let rng = fastrand::Rng::new();

    for size in [1, 2, 17, 500, 5000] {
        let words = vocabulary(&rng, size);
        let spell = SpellChecker::from_vocabulary(&words).unwrap();

        for w in &words {
            assert_eq!(spell.spell_check(w), vec![(w.as_str(), true)]);
        }
        let sentence = words.join(" ");
        assert!(spell.misspelled(&sentence).is_empty());
    }
}

#[test]
fn test_tokens_match_whitespace_split() {
    let rng = fastrand::Rng::new();
    let spell = SpellChecker::from_vocabulary(vocabulary(&rng, 100)).unwrap();
    let separators = [" ", "  ", "\t", "\n", " \r\n "];

    for _ in 0..100 {
        let mut sentence = String::new();
        let mut expected = Vec::new();

        for _ in 0..rng.usize(0..10) {
            sentence.push_str(separators[rng.usize(..separators.len())]);
            let w = word(&rng);
            sentence.push_str(&w);
            expected.push(w);
        }
        sentence.push_str(separators[rng.usize(..separators.len())]);

        let tokens: Vec<&str> = spell
            .spell_check(&sentence)
            .into_iter()
            .map(|(token, _)| token)
            .collect();
        assert_eq!(tokens, expected);
    }
}

#[test]
fn test_repeated_queries_agree() {
    let rng = fastrand::Rng::new();
    let words = vocabulary(&rng, 1000);
    let a = SpellChecker::from_vocabulary(&words).unwrap();
    let b = SpellChecker::from_vocabulary(words.iter().rev()).unwrap();

    assert_eq!(a.membership(), b.membership());

    for _ in 0..1000 {
        let probe = word(&rng);
        let first = a.contains(&probe);

        assert_eq!(first, a.contains(&probe));
        assert_eq!(first, b.contains(&probe));
    }
}

#[test]
fn test_observed_false_positive_rate() {
    let rng = fastrand::Rng::with_seed(1);
    let words = vocabulary(&rng, 10_000);
    let members: HashSet<&str> = words.iter().map(String::as_str).collect();
    let spell = SpellChecker::from_vocabulary(&words).unwrap();

    let mut tries = 0;
    let mut false_positives = 0;
    while tries < 100_000 {
        let probe: String = iter::repeat_with(|| rng.alphanumeric()).take(16).collect();
        if members.contains(probe.as_str()) {
            continue;
        }
        tries += 1;
        if spell.contains(&probe) {
            false_positives += 1;
        }
    }
    let observed = false_positives as f64 / tries as f64;

    assert!(
        (observed - spell.false_positive_rate()).abs() < 0.005,
        "observed {} vs expected {}",
        observed,
        spell.false_positive_rate()
    );
}

#[test]
fn test_concurrent_readers() {
    let spell = Arc::new(SpellChecker::from_vocabulary(["hello", "world"]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let spell = Arc::clone(&spell);
            thread::spawn(move || spell.spell_check("hello wrold world"))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            vec![("hello", true), ("wrold", false), ("world", true)]
        );
    }
}

#[test]
fn test_load_vocabulary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hello").unwrap();
    writeln!(file, "world").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  rust  ").unwrap();

    let words = vocab::load(file.path()).unwrap();
    assert_eq!(words, vec!["hello", "world", "rust"]);

    let spell = SpellChecker::from_vocabulary(words).unwrap();
    assert_eq!(spell.misspelled("hello rust wrold"), vec!["wrold"]);
}

#[test]
fn test_empty_vocabulary_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let words = vocab::load(file.path()).unwrap();

    assert!(matches!(
        SpellChecker::from_vocabulary(words),
        Err(Error::EmptyVocabulary)
    ));
}

#[test]
fn test_fixed_size_config() {
    let rng = fastrand::Rng::new();
    let words = vocabulary(&rng, 2000);
    let config = Config::default().with_size_bytes(64 * 1024);
    let spell = SpellChecker::with_config(&words, &config).unwrap();

    assert_eq!(spell.membership().bits(), 64 * 1024 * 8);
    assert!(words.iter().all(|w| spell.contains(w)));
    assert!(spell.false_positive_rate() < 0.001);
}
