//! Word lists used by the tagger
//!
//! Closed-class words (determiners, pronouns, prepositions, ...) are fixed.
//! The verb list is open: it starts from a built-in set of action verbs and
//! can be extended from a file.

use crate::NlpError;
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_VERBS: &[&str] = &[
    "add", "analyze", "approve", "archive", "arrange", "assign", "audit", "backup", "book",
    "build", "buy", "calculate", "call", "cancel", "change", "check", "clean", "close",
    "collect", "compile", "complete", "configure", "confirm", "contact", "convert",
    "coordinate", "create", "debug", "define", "delete", "deliver", "deploy", "design",
    "develop", "discuss", "do", "document", "download", "draft", "edit", "email", "enable",
    "ensure", "estimate", "evaluate", "finalize", "finish", "fix", "follow", "gather",
    "generate", "get", "give", "handle", "have", "hire", "identify", "implement", "improve",
    "inform", "inspect", "install", "integrate", "investigate", "launch", "make", "measure",
    "meet", "merge", "migrate", "modify", "monitor", "move", "need", "notify", "onboard",
    "open", "optimize", "order", "organize", "pay", "plan", "prepare", "present", "print",
    "prioritize", "provide", "publish", "read", "refactor", "release", "remind", "remove",
    "rename", "replace", "report", "request", "research", "resolve", "restore", "review",
    "rewrite", "run", "schedule", "send", "set", "setup", "share", "ship", "sign", "start",
    "stop", "submit", "summarize", "take", "test", "track", "train", "translate", "update",
    "upgrade", "upload", "use", "validate", "verify", "write",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "all", "any", "some",
    "no", "my", "your", "his", "her", "its", "our", "their",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "someone",
    "everyone", "anyone", "who", "what", "which",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "will", "would", "shall",
    "should", "can", "could", "may", "might", "must", "does", "did",
];

const ADPOSITIONS: &[&str] = &[
    "to", "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "about",
    "before", "after", "until", "during", "within", "without", "over", "under", "per", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "then", "because", "while", "when", "once",
];

const ADVERBS: &[&str] = &[
    "also", "asap", "again", "already", "not", "now", "soon", "still", "today", "tomorrow",
    "very", "please",
];

const ADJECTIVES: &[&str] = &[
    "new", "old", "high", "low", "critical", "urgent", "important", "minor", "optional",
    "final", "next", "last", "first", "main", "quick", "small", "large",
];

/// Closed and open word classes consulted during tagging
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: HashSet<String>,
}

impl Lexicon {
    /// The built-in lexicon
    pub fn builtin() -> Self {
        Self {
            verbs: BUILTIN_VERBS.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// Add a verb (base form); returns false if it was already known
    pub fn add_verb(&mut self, verb: &str) -> bool {
        self.verbs.insert(verb.trim().to_lowercase())
    }

    /// Load extra verbs from a file, one per line
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, NlpError> {
        let content = std::fs::read_to_string(path).map_err(|source| NlpError::LexiconRead {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if entries.is_empty() {
            return Err(NlpError::EmptyLexicon(path.to_path_buf()));
        }

        Ok(entries.into_iter().filter(|v| self.add_verb(v)).count())
    }

    /// Number of known verbs
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    /// Whether a lower-cased base form is a known verb
    pub fn is_verb_lemma(&self, lemma: &str) -> bool {
        self.verbs.contains(lemma)
    }

    /// Reduce a lower-cased word to its base form
    ///
    /// Inflected forms are only reduced when the result is a known verb,
    /// so nouns are returned unchanged apart from a plural `-s`.
    pub fn lemma(&self, lower: &str) -> String {
        if self.verbs.contains(lower) {
            return lower.to_string();
        }

        for candidate in verb_stems(lower) {
            if self.verbs.contains(&candidate) {
                return candidate;
            }
        }

        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return lower[..lower.len() - 1].to_string();
        }
        lower.to_string()
    }

    pub(crate) fn is_determiner(&self, lower: &str) -> bool {
        DETERMINERS.contains(&lower)
    }

    pub(crate) fn is_pronoun(&self, lower: &str) -> bool {
        PRONOUNS.contains(&lower)
    }

    pub(crate) fn is_auxiliary(&self, lower: &str) -> bool {
        AUXILIARIES.contains(&lower)
    }

    pub(crate) fn is_adposition(&self, lower: &str) -> bool {
        ADPOSITIONS.contains(&lower)
    }

    pub(crate) fn is_conjunction(&self, lower: &str) -> bool {
        CONJUNCTIONS.contains(&lower)
    }

    pub(crate) fn is_adverb(&self, lower: &str) -> bool {
        ADVERBS.contains(&lower) || (lower.len() > 4 && lower.ends_with("ly"))
    }

    pub(crate) fn is_adjective(&self, lower: &str) -> bool {
        ADJECTIVES.contains(&lower)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Candidate base forms for an inflected verb, most specific first
fn verb_stems(lower: &str) -> Vec<String> {
    let mut stems = Vec::new();

    if let Some(stem) = lower.strip_suffix("ing") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        if let Some(undoubled) = strip_doubled(stem) {
            stems.push(undoubled);
        }
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        if let Some(undoubled) = strip_doubled(stem) {
            stems.push(undoubled);
        }
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix('s') {
        stems.push(stem.to_string());
    }

    stems.retain(|s| s.len() >= 2);
    stems
}

/// "planned" -> "plan", "running" -> "run"
fn strip_doubled(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && last.is_ascii_alphabetic()).then(|| stem[..stem.len() - 1].to_string())
}
