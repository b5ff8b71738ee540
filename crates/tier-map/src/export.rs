/// Escapes `<`, `>` and `&` as JSON unicode escapes so the text can be placed
/// verbatim inside a `<script>` element.
///
/// Only valid for JSON text: the escapes are interpreted again by any JSON
/// parser, so the decoded value is unchanged.
pub fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    out
}
