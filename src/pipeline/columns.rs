/// Filler used to pad the text up to a whole number of rows
pub const PAD_CHAR: char = 'X';

/// Transpose text by writing it into `width` columns round-robin and
/// reading the columns back out in order.
///
/// The character at index k lands in column k mod width, so column c is
/// the subsequence of characters at indices congruent to c. The text is
/// first padded with 'X' to the next multiple of the effective width,
/// making the output the smallest such multiple of the width that fits
/// the input. Width is clamped to the text length; empty text comes back
/// empty.
pub fn transpose_columns(text: &str, width: usize) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    if n == 0 {
        return String::new();
    }
    let width = width.clamp(1, n);

    let pad = (width - n % width) % width;
    chars.extend(std::iter::repeat(PAD_CHAR).take(pad));

    let mut out = String::with_capacity(chars.len());
    for column in 0..width {
        out.extend(chars.iter().skip(column).step_by(width));
    }
    out
}
