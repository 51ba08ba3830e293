//! Turns library source text into a C string-literal constant.
//
//  Output shape, one quoted segment per source line:
//
//      libSource =
//      "class IO {\n"
//      "  static print(obj) {\n"
//      ...
//      "}\n";
//
//  Escapes applied inside a segment:
//
//      \      ->  \\
//      "      ->  \"
//      \r\n   ->  \n   (line end, closes the segment)
//      \n     ->  \n   (line end, closes the segment)
//      \r     ->  \r   (only when not part of a line end)
//
//  Everything else is copied through untouched.

/// Escape `text` and wrap it as `<name> =\n<segments>;`.
pub fn escape(name: &str, text: &str) -> String {
    format!("{name} =\n{};", literal(text))
}

/// The quoted segments alone, joined by newlines.
///
/// Empty input gives `""` so the constant stays a valid C expression.
pub fn literal(text: &str) -> String {
    if text.is_empty() {
        return "\"\"".into();
    }

    let segments: Vec<String> = text.split_inclusive('\n').map(segment).collect();
    segments.join("\n")
}

fn segment(line: &str) -> String {
    let (body, terminated) = match line.strip_suffix('\n') {
        Some(rest) => (rest.strip_suffix('\r').unwrap_or(rest), true),
        None => (line, false),
    };

    let mut out = String::with_capacity(body.len() + 4);
    out.push('"');
    for c in body.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    if terminated {
        out.push_str("\\n");
    }
    out.push('"');
    out
}
