use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiters that break the phonetic text into phrases. Each occurrence is
/// kept as its own token, like a split-with-capture.
static DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,!?\s]").unwrap());

const PITCH: &str = "0.5st";

/// Wraps phonetic text in an SSML document, one `<prosody>` element per
/// non-whitespace token.
///
/// Tokens that trim to empty (whitespace and the empty slots between
/// adjacent delimiters) pass through unmodified; everything else, including
/// punctuation, is wrapped. The final join inserts one space at every token
/// boundary, so original whitespace is partially normalized rather than
/// preserved verbatim. Downstream consumers rely on this exact shape.
pub fn wrap_ssml(phonetic: &str) -> String {
    let tokens = split_with_delimiters(phonetic);

    let wrapped: Vec<String> = tokens
        .into_iter()
        .map(|token| {
            let trimmed = token.trim();
            if trimmed.is_empty() {
                token.to_string()
            } else {
                format!("<prosody pitch=\"{PITCH}\">{trimmed}</prosody>")
            }
        })
        .collect();

    format!("<speak>{}</speak>", wrapped.join(" "))
}

/// Splits `text` on [`DELIMITERS`], keeping each delimiter as a token and
/// keeping the (possibly empty) content slices between them.
fn split_with_delimiters(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in DELIMITERS.find_iter(text) {
        tokens.push(&text[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.push(&text[last..]);

    tokens
}
