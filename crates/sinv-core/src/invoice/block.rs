//! Keyword-anchored block capture over extracted lines.

use regex::Regex;

/// A set of literal keywords matched case-insensitively at the start of a line.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pattern: Regex,
}

impl KeywordSet {
    /// Compile a keyword set. Keywords are matched literally.
    ///
    /// Fails only if the combined pattern exceeds the regex size limit.
    pub fn new<I, S>(keywords: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternation = keywords
            .into_iter()
            .map(|k| regex::escape(k.as_ref()))
            .collect::<Vec<_>>();
        // An empty set must never match
        let source = if alternation.is_empty() {
            r"[^\s\S]".to_string()
        } else {
            format!("(?i)^(?:{})", alternation.join("|"))
        };

        Ok(Self {
            pattern: Regex::new(&source)?,
        })
    }

    /// Whether the line begins with any keyword, ignoring case.
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Capture the lines between the first start-keyword line and the next
/// stop-keyword line, newline-joined and trimmed.
///
/// Start and stop lines are excluded. A line that matches a start keyword
/// while already capturing is skipped and capture continues. Only the first
/// block is returned; with no stop line the block runs to the last line.
pub fn capture_block<S: AsRef<str>>(lines: &[S], start: &KeywordSet, stop: &KeywordSet) -> String {
    let mut block: Vec<&str> = Vec::new();
    let mut capturing = false;

    for line in lines {
        let line = line.as_ref();
        if start.matches(line) {
            capturing = true;
            continue;
        }
        if capturing {
            if stop.matches(line) {
                break;
            }
            block.push(line);
        }
    }

    block.join("\n").trim().to_string()
}
