//! A simple example showing the use of a spell checker.
use bloomspell::SpellChecker;

fn main() -> Result<(), bloomspell::Error> {
    let spell = SpellChecker::from_vocabulary(["the", "quick", "brown", "fox"])?;

    for (token, known) in spell.spell_check("the qiuck brown fox") {
        println!("{token}: {}", if known { "ok" } else { "unknown" });
    }
    println!("misspelled: {:?}", spell.misspelled("teh quick brown fox"));

    Ok(())
}
