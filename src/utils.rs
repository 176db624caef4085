pub fn from_non_empty_or_default<R, F: Fn(String) -> R>(
    s: Option<String>,
    default: R,
    from_non_empty: F,
) -> R {
    if let Some(s) = s {
        if !s.trim().is_empty() {
            return from_non_empty(s);
        }
    }
    default
}
