/// Expand common typographic ligatures found in PDF text.
///
/// Extractors report ligated glyphs as single code points; registry scans
/// and downstream text search expect their ASCII expansions.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}
