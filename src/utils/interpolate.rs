use serde_json::{Map, Value};

/// Replaces every literal `{key}` token in `message` with the stringified
/// context value for `key`. Single pass, no recursion: substituted values are
/// never rescanned, and placeholders without a context entry stay literal.
pub fn interpolate(message: &str, context: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let replaced = tail[1..].find('}').and_then(|offset| {
            let key = &tail[1..1 + offset];
            context.get(key).map(|value| (offset, value))
        });

        match replaced {
            Some((offset, value)) => {
                out.push_str(&render(value));
                rest = &tail[offset + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn render(value: &Value) -> String {
    match value {
        // strings render bare, without the JSON quoting
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        scalar => scalar.to_string(),
    }
}
