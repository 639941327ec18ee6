//! Lexicon-driven part-of-speech tagging and shallow dependency labels

use crate::Lexicon;
use docket_domain::{Dependency, PartOfSpeech, Token};

/// Tag the words of one sentence
pub(crate) fn tag(lexicon: &Lexicon, words: &[String]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::with_capacity(words.len());

    for (index, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        let lemma = lexicon.lemma(&lower);
        let previous = tokens
            .iter()
            .rev()
            .find(|t: &&Token| t.pos != PartOfSpeech::Punctuation);
        let sentence_initial = previous.is_none();
        let clause_start = tokens
            .last()
            .is_none_or(|t| t.pos == PartOfSpeech::Punctuation);

        let pos = classify(
            lexicon,
            word,
            &lower,
            &lemma,
            previous,
            Position {
                sentence_initial,
                clause_start,
            },
        );
        tokens.push(Token {
            text: word.clone(),
            lemma,
            pos,
            dep: Dependency::Other,
            index,
        });
    }

    label_dependencies(&mut tokens);
    tokens
}

#[derive(Clone, Copy)]
struct Position {
    sentence_initial: bool,
    clause_start: bool,
}

fn classify(
    lexicon: &Lexicon,
    word: &str,
    lower: &str,
    lemma: &str,
    previous: Option<&Token>,
    position: Position,
) -> PartOfSpeech {
    if !word.chars().any(char::is_alphanumeric) {
        return PartOfSpeech::Punctuation;
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return PartOfSpeech::Numeral;
    }
    if lexicon.is_determiner(lower) {
        return PartOfSpeech::Determiner;
    }
    if lexicon.is_pronoun(lower) {
        return PartOfSpeech::Pronoun;
    }
    if lexicon.is_auxiliary(lower) {
        return PartOfSpeech::Auxiliary;
    }
    // "to" before a verb is an infinitive marker, which the verb check handles
    if lexicon.is_adposition(lower) {
        return PartOfSpeech::Adposition;
    }
    if lexicon.is_conjunction(lower) {
        return PartOfSpeech::Conjunction;
    }
    if lexicon.is_verb_lemma(lemma)
        && (position.clause_start || verb_position(previous, lower != lemma))
    {
        return PartOfSpeech::Verb;
    }
    if lexicon.is_adverb(lower) {
        return PartOfSpeech::Adverb;
    }
    if lexicon.is_adjective(lower) {
        return PartOfSpeech::Adjective;
    }
    if !position.sentence_initial && word.starts_with(char::is_uppercase) {
        return PartOfSpeech::ProperNoun;
    }
    PartOfSpeech::Noun
}

/// A known verb form is nominal after a determiner, adjective, numeral or
/// (non-infinitive) preposition. After a common noun only an inflected
/// form counts ("the manager reviews" but not "the bug report").
fn verb_position(previous: Option<&Token>, inflected: bool) -> bool {
    match previous {
        None => true,
        Some(prev) => match prev.pos {
            PartOfSpeech::Determiner | PartOfSpeech::Adjective | PartOfSpeech::Numeral => false,
            PartOfSpeech::Adposition => prev.lemma == "to",
            PartOfSpeech::Noun => inflected,
            _ => true,
        },
    }
}

fn is_nominal(pos: PartOfSpeech) -> bool {
    matches!(
        pos,
        PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Pronoun
    )
}

/// Root is the first verb (or the first nominal when there is none).
/// Subject is the closest nominal before the root; direct object is the
/// first nominal after it within the same clause.
fn label_dependencies(tokens: &mut [Token]) {
    let root = tokens
        .iter()
        .position(Token::is_verb)
        .or_else(|| tokens.iter().position(|t| is_nominal(t.pos)));

    let Some(root) = root else {
        return;
    };
    tokens[root].dep = Dependency::Root;

    if let Some(subject) = tokens[..root].iter().rposition(|t| is_nominal(t.pos)) {
        tokens[subject].dep = Dependency::Subject;
    }

    if !tokens[root].is_verb() {
        return;
    }

    for token in tokens[root + 1..].iter_mut() {
        match token.pos {
            PartOfSpeech::Determiner | PartOfSpeech::Adjective | PartOfSpeech::Numeral => {}
            PartOfSpeech::Adverb => {}
            pos if is_nominal(pos) => {
                token.dep = Dependency::DirectObject;
                break;
            }
            _ => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn tag_text(text: &str) -> Vec<Token> {
        tag(&Lexicon::builtin(), &tokenize(text))
    }

    fn pos_of(tokens: &[Token], text: &str) -> PartOfSpeech {
        tokens
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.pos)
            .unwrap_or(PartOfSpeech::Other)
    }

    #[test]
    fn test_subject_verb_object() {
        let tokens = tag_text("We need to review the budget");
        assert_eq!(pos_of(&tokens, "We"), PartOfSpeech::Pronoun);
        assert_eq!(pos_of(&tokens, "need"), PartOfSpeech::Verb);
        assert_eq!(pos_of(&tokens, "review"), PartOfSpeech::Verb);
        assert_eq!(tokens[0].dep, Dependency::Subject);
        assert_eq!(tokens[1].dep, Dependency::Root);
    }

    #[test]
    fn test_verb_form_after_determiner_is_noun() {
        let tokens = tag_text("Send the report to Alice");
        assert_eq!(pos_of(&tokens, "report"), PartOfSpeech::Noun);
        assert_eq!(pos_of(&tokens, "Alice"), PartOfSpeech::ProperNoun);
        assert_eq!(tokens[2].dep, Dependency::DirectObject);
    }

    #[test]
    fn test_modal_then_verb() {
        let tokens = tag_text("Someone should update the docs");
        assert_eq!(pos_of(&tokens, "should"), PartOfSpeech::Auxiliary);
        assert_eq!(pos_of(&tokens, "update"), PartOfSpeech::Verb);
        assert_eq!(tokens[2].dep, Dependency::Root);
    }

    #[test]
    fn test_noun_then_inflected_verb() {
        let tokens = tag_text("The manager reviews the bug report");
        assert_eq!(pos_of(&tokens, "reviews"), PartOfSpeech::Verb);
        assert_eq!(pos_of(&tokens, "report"), PartOfSpeech::Noun);
        assert_eq!(tokens[1].dep, Dependency::Subject);
        assert_eq!(tokens[2].dep, Dependency::Root);
    }

    #[test]
    fn test_verb_after_colon_starts_clause() {
        let tokens = tag_text("Task 1: Fix login bug");
        assert_eq!(pos_of(&tokens, "Task"), PartOfSpeech::Noun);
        assert_eq!(pos_of(&tokens, "Fix"), PartOfSpeech::Verb);
        assert_eq!(tokens[3].dep, Dependency::Root);
    }

    #[test]
    fn test_numbers_and_punctuation() {
        let tokens = tag_text("Estimate: 8 hours.");
        assert_eq!(pos_of(&tokens, ":"), PartOfSpeech::Punctuation);
        assert_eq!(pos_of(&tokens, "8"), PartOfSpeech::Numeral);
        assert_eq!(pos_of(&tokens, "Estimate"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_no_verb_root_is_nominal() {
        let tokens = tag_text("Budget overview");
        assert!(tokens.iter().all(|t| !t.is_verb()));
        assert_eq!(tokens[0].dep, Dependency::Root);
    }
}
