//! String casing helpers

/// Upper-case the first character of `text`, leaving the rest untouched.
///
/// Characters without an upper-case form (digits, punctuation, already
/// capitalized letters) pass through unchanged. If the upper-case form of the
/// first character spans several characters (`'ß'` becomes `"SS"`), the whole
/// mapping is used.
///
/// # Example
///
/// ```rust
/// use toolkit_core::utils::capitalize;
///
/// assert_eq!(capitalize("click me"), "Click me");
/// assert_eq!(capitalize(""), "");
/// assert_eq!(capitalize("42 apples"), "42 apples");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
