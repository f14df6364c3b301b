use log::debug;

/// English number words, indexed by their value.
pub const NUMBER_WORDS: [&str; 21] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
];

// Applied in order, before any character stripping.
const OPERATOR_PHRASES: [(&str, &str); 4] = [
    ("multiplied by", "*"),
    ("divided by", "/"),
    ("plus", "+"),
    ("minus", "-"),
];

/// Looks up the value of a lowercase number word.
pub fn number_word_value(word: &str) -> Option<u32> {
    NUMBER_WORDS
        .iter()
        .position(|candidate| *candidate == word)
        .map(|value| value as u32)
}

/// Rewrites free-form text into a plain infix expression.
///
/// Lowercases, turns operator phrases into symbols, strips everything that
/// is not a letter, digit, operator, parenthesis or whitespace, trims, and
/// finally replaces whole-word number words with their digits. Letters that
/// are not number words are left in place for the tokenizer.
pub fn normalize(input: &str) -> String {
    let mut text = input.to_lowercase();

    for (phrase, symbol) in OPERATOR_PHRASES {
        if text.contains(phrase) {
            text = text.replace(phrase, symbol);
        }
    }

    let stripped: String = text.chars().filter(|c| is_allowed(*c)).collect();
    let normalized = replace_number_words(stripped.trim());

    debug!("Normalized {:?} -> {:?}", input, normalized);
    normalized
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
        || is_separator(c)
}

pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Single pass over alphanumeric runs; a run is replaced only when it is
/// exactly a number word.
fn replace_number_words(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(is_word_char) {
        output.push_str(&rest[..start]);

        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !is_word_char(c))
            .unwrap_or(tail.len());
        let word = &tail[..end];

        match number_word_value(word) {
            Some(value) => output.push_str(&value.to_string()),
            None => output.push_str(word),
        }
        rest = &tail[end..];
    }

    output.push_str(rest);
    output
}
