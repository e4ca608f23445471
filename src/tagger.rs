//! Deterministic rule-based part-of-speech tagger.
//!
//! The text pipeline only needs to tell nouns from adjectives after
//! stopword removal, so a lexicon of common review adjectives plus suffix
//! rules covers the ground a model-based tagger would. Tags use the Penn
//! Treebank vocabulary so the configurable tag-class sets read naturally.

/// Common adjectives seen in plot blurbs and reviews. Tokens reach the
/// tagger lowercased and alphabetic.
const ADJECTIVE_LEXICON: &[&str] = &[
    "absurd", "awful", "bad", "big", "bland", "bleak", "bold", "boring", "brutal", "campy",
    "cheap", "clever", "cold", "crazy", "dark", "deep", "dull", "dumb", "earnest", "empty",
    "fake", "fast", "fine", "flat", "fresh", "fun", "funny", "gentle", "grim", "gritty", "happy",
    "hard", "heavy", "high", "hollow", "honest", "intense", "lean", "light", "long", "loud",
    "low", "mad", "mean", "messy", "moody", "new", "nice", "odd", "old", "poor", "pure",
    "quiet", "quirky", "raw", "real", "rich", "sad", "shallow", "sharp", "short", "silly",
    "sleek", "slick", "slow", "small", "smart", "soft", "solid", "stale", "strange", "strong",
    "stylish", "subtle", "tense", "terrible", "thin", "tight", "true", "uneven", "violent",
    "warm", "weak", "weird", "wild", "wrong", "young",
];

/// Nouns the suffix rules would otherwise misclassify.
const NOUN_LEXICON: &[&str] = &[
    "beginning", "building", "detective", "ending", "evening", "feeling", "killing", "meaning",
    "morning", "motive", "narrative", "objective", "painting", "perspective", "wedding",
];

const JJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ish", "ic", "al", "ary",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "ism", "dom", "ist",
];

pub fn pos_tag(tokens: &[String]) -> Vec<(String, &'static str)> {
    tokens
        .iter()
        .map(|t| (t.clone(), tag_token(t)))
        .collect()
}

pub fn tag_token(token: &str) -> &'static str {
    if token.is_empty() {
        return "NN";
    }
    if token.chars().next().is_some_and(|c| c.is_uppercase()) {
        return if is_plural(token) { "NNPS" } else { "NNP" };
    }

    match token {
        "better" | "worse" | "lesser" => return "JJR",
        "worst" | "least" => return "JJS",
        _ => {}
    }
    if in_lexicon(token) {
        return "JJ";
    }
    if NOUN_LEXICON.binary_search(&token).is_ok() {
        return "NN";
    }
    if let Some(stem) = strip_degree_suffix(token, "est") {
        if in_lexicon(&stem) {
            return "JJS";
        }
    }
    if let Some(stem) = strip_degree_suffix(token, "er") {
        if in_lexicon(&stem) {
            return "JJR";
        }
    }

    if JJ_SUFFIXES.iter().any(|s| ends_with_suffix(token, s)) {
        return "JJ";
    }
    if ends_with_suffix(token, "ly") {
        return "RB";
    }
    if ends_with_suffix(token, "ing") {
        return "VBG";
    }
    if ends_with_suffix(token, "ed") {
        return "VBN";
    }
    if NOUN_SUFFIXES.iter().any(|s| ends_with_suffix(token, s)) {
        return "NN";
    }
    if NOUN_SUFFIXES
        .iter()
        .any(|s| token.len() > s.len() + 1 && token.ends_with(&format!("{s}s")))
    {
        return "NNS";
    }
    if is_plural(token) {
        return "NNS";
    }
    "NN"
}

fn in_lexicon(token: &str) -> bool {
    ADJECTIVE_LEXICON.binary_search(&token).is_ok()
}

/// Strips a comparative/superlative ending, undoing the usual spelling
/// changes: "funnier" -> "funny", "bigger" -> "big", "nicer" -> "nice".
fn strip_degree_suffix(token: &str, suffix: &str) -> Option<String> {
    let stem = token.strip_suffix(suffix)?;
    if stem.len() < 2 {
        return None;
    }
    if let Some(y_stem) = stem.strip_suffix('i') {
        return Some(format!("{y_stem}y"));
    }
    let bytes = stem.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == bytes[bytes.len() - 2] {
        return Some(stem[..stem.len() - 1].to_string());
    }
    if in_lexicon(&format!("{stem}e")) {
        return Some(format!("{stem}e"));
    }
    Some(stem.to_string())
}

fn ends_with_suffix(token: &str, suffix: &str) -> bool {
    token.len() > suffix.len() + 1 && token.ends_with(suffix)
}

fn is_plural(token: &str) -> bool {
    let lower = token.to_lowercase();
    lower.len() > 2
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
}

#[cfg(test)]
mod tests {
    use super::{tag_token, ADJECTIVE_LEXICON, NOUN_LEXICON};

    #[test]
    fn lexicons_are_sorted_for_binary_search() {
        let mut sorted = ADJECTIVE_LEXICON.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ADJECTIVE_LEXICON);

        let mut sorted = NOUN_LEXICON.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, NOUN_LEXICON);
    }

    #[test]
    fn nouns_and_plurals() {
        assert_eq!(tag_token("heist"), "NN");
        assert_eq!(tag_token("cops"), "NNS");
        assert_eq!(tag_token("redemption"), "NN");
        assert_eq!(tag_token("actress"), "NN");
        // Lexicon exceptions the suffix rules would get wrong.
        assert_eq!(tag_token("detective"), "NN");
        assert_eq!(tag_token("wedding"), "NN");
    }

    #[test]
    fn adjectives_by_lexicon_and_suffix() {
        assert_eq!(tag_token("dark"), "JJ");
        assert_eq!(tag_token("suspenseful"), "JJ");
        assert_eq!(tag_token("chaotic"), "JJ");
        assert_eq!(tag_token("funnier"), "JJR");
        assert_eq!(tag_token("darkest"), "JJS");
        assert_eq!(tag_token("worst"), "JJS");
    }

    #[test]
    fn non_noun_non_adjective_classes() {
        assert_eq!(tag_token("slowly"), "RB");
        assert_eq!(tag_token("running"), "VBG");
        assert_eq!(tag_token("haunted"), "VBN");
    }

    #[test]
    fn capitalized_tokens_are_proper_nouns() {
        assert_eq!(tag_token("Vegas"), "NNPS");
        assert_eq!(tag_token("Memphis"), "NNP");
    }
}
