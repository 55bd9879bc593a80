const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while",
];

/// Collapses a contract title into one word: the character following a
/// dot, dash, brace or whitespace run is upper-cased and the separator
/// dropped (`"ERP Privilege api"` -> `"ERPPrivilegeApi"`).
pub fn normalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut upper_next = false;
    for c in title.trim().chars() {
        if matches!(c, '.' | '-' | '{' | '}') || c.is_whitespace() {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `findAllPrivilegesUsingPOST` -> `find_all_privileges_using_post`.
pub fn snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_end_matches('_').to_string()
}

/// `erp_privilege_api` -> `ErpPrivilegeApi`.
pub fn pascal_case(input: &str) -> String {
    snake_case(input)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// A snake_case identifier safe to use as a Rust binding.
pub fn ident(input: &str) -> String {
    let name = snake_case(input);
    if name.is_empty() {
        return "value".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("p_{name}");
    }
    if RUST_KEYWORDS.contains(&name.as_str()) {
        return format!("{name}_");
    }
    name
}
