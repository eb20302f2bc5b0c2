/// Trim a free-text cell: drops BOM / zero-width characters and collapses
/// inner whitespace runs. Case is preserved.
pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
