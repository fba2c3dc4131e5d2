/// Transpose text by splitting it into consecutive rows of `width`
/// characters and reading the rows back out column by column.
///
/// No padding is applied, so the last row may be shorter than `width`.
/// A column simply stops contributing once no row has a character at
/// that position, which makes the output an exact permutation of the
/// input: same length, same characters. Width is clamped to the text
/// length; empty text comes back empty.
pub fn transpose_rows(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    if n == 0 {
        return String::new();
    }
    let width = width.clamp(1, n);

    let rows: Vec<&[char]> = chars.chunks(width).collect();
    let mut out = String::with_capacity(n);
    for column in 0..width {
        for row in &rows {
            if let Some(&c) = row.get(column) {
                out.push(c);
            }
        }
    }
    out
}
