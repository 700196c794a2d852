/// Renders `text` as a Rust string literal, escapes included.
pub fn quote(text: &str) -> String {
    format!("{:?}", text)
}

/// Unquotes a double-quoted tag value with Rust string literal rules, so
/// `\t`, `\x41` and `\u{..}` escapes and literal tabs or newlines are accepted.
/// Returns `None` when the literal is malformed.
pub fn unquote(literal: &str) -> Option<String> {
    syn::parse_str::<syn::LitStr>(literal)
        .ok()
        .filter(|lit| lit.suffix().is_empty())
        .map(|lit| lit.value())
}

/// Lowercases a CamelCase type name and separates its words with `_`.
///
/// A run of capitals is one word, so `HTTPStatus` and `HttpStatus` map to the
/// same `http_status`; callers that derive names from it must check for clashes.
pub fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut chars = name.chars().peekable();
    let mut prev: Option<char> = None;
    while let Some(c) = chars.next() {
        if c.is_uppercase() {
            let starts_word = match prev {
                Some('_') | None => false,
                Some(p) => !p.is_uppercase() || chars.peek().is_some_and(|next| next.is_lowercase()),
            };
            if starts_word {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
        prev = Some(c);
    }
    snake
}

/// Strict and reserved keywords; none of them may name a type or module.
pub const KEYWORDS: [&str; 51] = [
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else",
    "enum", "extern", "false", "fn", "for", "if", "impl",
    "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static",
    "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while",
    "abstract", "become", "box", "do", "final", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

pub fn is_rust_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}
