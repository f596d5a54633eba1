use serde_json::Value;

/// Values substituted into a reminder template.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    pub name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
}

/// Renders template content stored in HubDB.
///
/// HubDB keeps the text escaped, so literal `\n` and `\"` are unescaped
/// first; then every `${name}`, `${date}` and `${time}` is replaced in a
/// single pass, so inserted values are never scanned for tokens themselves.
/// Values are inserted verbatim. Missing or non-string content renders as
/// `""`.
pub fn render(content: Option<&Value>, sub: &Substitution<'_>) -> String {
    match content {
        Some(Value::String(text)) => render_str(text, sub),
        other => {
            tracing::warn!(content = ?other, "template content is invalid");
            String::new()
        }
    }
}

pub fn render_str(text: &str, sub: &Substitution<'_>) -> String {
    let unescaped = text.replace("\\n", "\n").replace("\\\"", "\"");
    let tokens = [("${name}", sub.name), ("${date}", sub.date), ("${time}", sub.time)];

    let mut out = String::with_capacity(unescaped.len());
    let mut rest = unescaped.as_str();
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tokens.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push_str("${");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}
