//! Number formatting for SVG attribute values.
//!
//! Coordinates and configuration numbers are written with JavaScript
//! `Number#toString` semantics: whole numbers carry no `.0` suffix,
//! fractions use the shortest round-trippable decimal, and `-0` prints
//! as `0`. Rust's `Display` for `f64` disagrees on exponent notation,
//! negative zero, and non-finite values, so `ryu-js` is used instead.

/// Format `v` the way JavaScript would stringify it.
#[must_use]
pub fn js_number(v: f64) -> String {
    let mut out = String::new();
    push_js_number(&mut out, v);
    out
}

/// Append `v`, formatted the way JavaScript would stringify it.
pub fn push_js_number(out: &mut String, v: f64) {
    let mut buf = ryu_js::Buffer::new();
    if v.is_nan() {
        out.push_str("NaN");
    } else if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        // -0 compares equal to 0.
        let v = if v == 0.0 { 0.0 } else { v };
        out.push_str(buf.format_finite(v));
    }
}

/// Escape the XML special characters in an attribute value.
///
/// Handles `&` (must be first), `<`, `>`, `"`, and `'`.
pub fn push_xml_escaped(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
}

/// Append a space-separated SVG path command: `cmd x y ...`.
pub(crate) fn push_command(out: &mut String, cmd: char, coords: &[f64]) {
    out.push(cmd);
    for &c in coords {
        out.push(' ');
        push_js_number(out, c);
    }
}

/// Write `cmd x y ...` to a fresh string.
pub(crate) fn command(cmd: char, coords: &[f64]) -> String {
    let mut out = String::new();
    push_command(&mut out, cmd, coords);
    out
}
