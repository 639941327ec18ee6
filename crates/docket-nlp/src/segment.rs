//! Sentence segmentation and word tokenization

const ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "etc.", "vs.", "mr.", "mrs.", "ms.", "dr.", "approx.", "no.",
];

/// Split text into trimmed sentences
///
/// Boundaries are sentence terminators followed by whitespace, blank lines,
/// and the start of any line that opens with a list marker. A bare list
/// marker such as `1.` never ends a sentence on its own.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for block in blocks(text) {
        split_block(&block, &mut sentences);
    }
    sentences
}

/// Group lines into paragraphs and list items
fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || starts_with_list_marker(trimmed) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            if trimmed.is_empty() {
                continue;
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(trimmed);
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn split_block(block: &str, out: &mut Vec<String>) {
    let mut start = 0;
    let mut chars = block.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            Some((_, next)) => next.is_whitespace(),
            None => false,
        };
        if !at_boundary {
            continue;
        }

        let end = i + c.len_utf8();
        let candidate = block[start..end].trim();
        if is_bare_marker(candidate) || ends_with_abbreviation(candidate) {
            continue;
        }
        if !candidate.is_empty() {
            out.push(candidate.to_string());
        }
        start = end;
    }

    let rest = block[start..].trim();
    if !rest.is_empty() {
        out.push(rest.to_string());
    }
}

/// Numbered (`1.` / `2)`) or bullet (`-`, `*`, `+`, `•`) marker followed by a space
pub(crate) fn starts_with_list_marker(line: &str) -> bool {
    let mut chars = line.chars();
    match chars.next() {
        Some('-' | '*' | '+' | '•') => chars.next().is_some_and(char::is_whitespace),
        Some(c) if c.is_ascii_digit() => {
            let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
            let mut rest = rest.chars();
            matches!(rest.next(), Some('.' | ')')) && rest.next().is_some_and(char::is_whitespace)
        }
        _ => false,
    }
}

fn is_bare_marker(candidate: &str) -> bool {
    match candidate.strip_suffix(['.', ')']) {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn ends_with_abbreviation(candidate: &str) -> bool {
    let last = candidate
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .to_lowercase();
    ABBREVIATIONS.contains(&last.as_str())
}

/// Split a sentence into word and punctuation tokens
///
/// Words are runs of alphanumerics; an apostrophe, hyphen, slash or
/// period between two alphanumerics stays inside the word (`don't`,
/// `follow-up`, `12/31/2024`, `v1.2`). Every other non-space character is
/// its own token.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let chars: Vec<char> = sentence.chars().collect();
    let mut tokens = Vec::new();
    let mut word = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            word.push(c);
            continue;
        }

        let joins = matches!(c, '\'' | '-' | '/' | '.')
            && !word.is_empty()
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        if joins {
            word.push(c);
            continue;
        }

        if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
        if !c.is_whitespace() {
            tokens.push(c.to_string());
        }
    }

    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_terminators() {
        let sentences = split_sentences("Write the report. Send it to Bob! Done?");
        assert_eq!(sentences, vec!["Write the report.", "Send it to Bob!", "Done?"]);
    }

    #[test]
    fn test_split_keeps_decimal_and_abbreviation() {
        let sentences = split_sentences("Upgrade to v1.2 e.g. the LTS build. Then test.");
        assert_eq!(
            sentences,
            vec!["Upgrade to v1.2 e.g. the LTS build.", "Then test."]
        );
    }

    #[test]
    fn test_list_items_are_separate_sentences() {
        let text = "Tasks for today:\n1. Write the report\n2. Review the report";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec!["Tasks for today:", "1. Write the report", "2. Review the report"]
        );
    }

    #[test]
    fn test_bullets_and_blank_lines() {
        let text = "Intro line\ncontinues here\n\n- first\n* second";
        let sentences = split_sentences(text);
        assert_eq!(
            sentences,
            vec!["Intro line continues here", "- first", "* second"]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n\n ").is_empty());
    }

    #[test]
    fn test_list_marker_detection() {
        assert!(starts_with_list_marker("1. Write"));
        assert!(starts_with_list_marker("12) Write"));
        assert!(starts_with_list_marker("• Write"));
        assert!(!starts_with_list_marker("1.5 hours"));
        assert!(!starts_with_list_marker("-dash"));
        assert!(!starts_with_list_marker("Write"));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Don't forget the follow-up, due 12/31/2024."),
            vec!["Don't", "forget", "the", "follow-up", ",", "due", "12/31/2024", "."]
        );
    }
}
