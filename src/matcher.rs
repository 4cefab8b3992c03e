use regex::RegexBuilder;

use crate::error::PatternError;

/// Returns the lines of `text` that contain a match for `pattern`.
///
/// `flags` uses the JavaScript single-letter convention. Supported letters:
///
/// - `i` — case-insensitive
/// - `m` — `^`/`$` match at line boundaries
/// - `s` — `.` matches newlines
/// - `u` — accepted for compatibility; matching is always Unicode-aware
/// - `g` — accepted for compatibility; every line is tested independently,
///   so global state has no effect here
///
/// Any other letter, or the same letter twice, fails compilation.
///
/// Lines are split on `\n` only; a trailing newline therefore produces a
/// final empty line that is tested like any other. A line matches if the
/// pattern is found anywhere in it (anchor explicitly with `^`/`$` to match
/// whole lines). Matching lines are returned whole and in input order, with
/// duplicates and empty lines preserved.
///
/// On a compile failure no matching is attempted; the text is unprocessed,
/// which is not the same as having zero matches.
pub fn match_lines(pattern: &str, flags: &str, text: &str) -> Result<Vec<String>, PatternError> {
    let mut builder = RegexBuilder::new(pattern);
    let mut seen = Vec::new();

    for flag in flags.chars() {
        if seen.contains(&flag) {
            return Err(PatternError::new(format!("duplicate flag '{}'", flag)));
        }
        seen.push(flag);
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'u' | 'g' => {}
            other => {
                return Err(PatternError::new(format!("unsupported flag '{}'", other)));
            }
        }
    }

    let regex = builder.build()?;

    Ok(text
        .split('\n')
        .filter(|line| regex.is_match(line))
        .map(str::to_string)
        .collect())
}
