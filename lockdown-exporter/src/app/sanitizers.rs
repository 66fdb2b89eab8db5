use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Characters disallowed in HTML
static HTML_DISALLOWED_CHARS: LazyLock<HashSet<char>> =
    LazyLock::new(|| HashSet::from(['>', '<', '"', '\'', '`', '&']));

/// Escapes HTML special characters in the input string.
pub fn sanitize_html(input: &str) -> Cow<'_, str> {
    for (idx, c) in input.char_indices() {
        if HTML_DISALLOWED_CHARS.contains(&c) {
            let mut res = String::from(&input[..idx]);
            input[idx..].chars().for_each(|c| match c {
                '<' => res.push_str("&lt;"),
                '>' => res.push_str("&gt;"),
                '"' => res.push_str("&quot;"),
                '\'' => res.push_str("&apos;"),
                '`' => res.push_str("&grave;"),
                '&' => res.push_str("&amp;"),
                _ => res.push(c),
            });
            return Cow::Owned(res);
        }
    }
    Cow::Borrowed(input)
}
