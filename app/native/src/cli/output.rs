//! CLI output formatting.

use colored::Colorize;

/// Prints a JSON value pretty-printed with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json));
}

/// Returns `json` with ANSI colors applied to keys, strings and scalars.
///
/// The input is expected to be valid JSON; the output has the same text
/// once color codes are stripped.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut token = String::new();
    let mut brackets: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escape_next = false;
    let mut is_key = false;
    let mut expect_value = false;

    for ch in json.chars() {
        if in_string {
            token.push(ch);
            if escape_next {
                escape_next = false;
            } else if ch == '\\' {
                escape_next = true;
            } else if ch == '"' {
                let colored = if is_key { token.cyan() } else { token.green() };
                out.push_str(&colored.to_string());
                token.clear();
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                push_scalar(&mut out, &mut token);
                token.push(ch);
                in_string = true;
                is_key = !expect_value;
                expect_value = false;
            }
            ':' => {
                push_scalar(&mut out, &mut token);
                out.push(ch);
                expect_value = true;
            }
            '{' | '[' => {
                push_scalar(&mut out, &mut token);
                out.push(ch);
                brackets.push(ch);
                expect_value = ch == '[';
            }
            '}' | ']' => {
                push_scalar(&mut out, &mut token);
                out.push(ch);
                brackets.pop();
                expect_value = false;
            }
            ',' => {
                push_scalar(&mut out, &mut token);
                out.push(ch);
                // Array elements are values, object entries start with a key
                expect_value = brackets.last() == Some(&'[');
            }
            _ => token.push(ch),
        }
    }

    push_scalar(&mut out, &mut token);
    out
}

/// Appends a pending scalar token, coloring numbers, booleans and null.
fn push_scalar(out: &mut String, token: &mut String) {
    if token.is_empty() {
        return;
    }

    let start = token.find(|c: char| !c.is_whitespace()).unwrap_or(token.len());
    let end = token.rfind(|c: char| !c.is_whitespace()).map_or(start, |i| i + 1);
    let (prefix, rest) = token.split_at(start);
    let (value, suffix) = rest.split_at(end - start);

    out.push_str(prefix);
    if matches!(value, "true" | "false" | "null") {
        out.push_str(&value.magenta().to_string());
    } else if value.parse::<f64>().is_ok() {
        out.push_str(&value.yellow().to_string());
    } else {
        out.push_str(value);
    }
    out.push_str(suffix);

    token.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Removes ANSI color sequences.
    fn strip_ansi(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut chars = text.chars();

        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(ch);
            }
        }

        result
    }

    fn plain(json: &str) -> String { strip_ansi(&highlight_json(json)) }

    #[test]
    fn test_highlight_preserves_text() {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "kural_no": "1330",
            "adhikarm_english": "The Pleasures of \"Temporary\" Variance",
            "count": 2,
            "lines": ["a, b", "c: d"],
            "empty": null,
            "ok": true
        }))
        .unwrap();

        assert_eq!(plain(&json), json);
    }

    #[test]
    fn test_highlight_colors_keys_and_values() {
        colored::control::set_override(true);
        let out = highlight_json(r#"{"kural_no": "1330", "n": 7, "ok": false, "fonts": ["a.ttf"]}"#);
        let key = "\"kural_no\"".cyan().to_string();
        let text = "\"1330\"".green().to_string();
        let number = "7".yellow().to_string();
        let boolean = "false".magenta().to_string();
        let element = "\"a.ttf\"".green().to_string();
        colored::control::unset_override();

        assert!(out.contains(&key));
        assert!(out.contains(&text));
        assert!(out.contains(&number));
        assert!(out.contains(&boolean));
        assert!(out.contains(&element));
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\u{1b}[36mkey\u{1b}[0m"), "key");
    }
}
