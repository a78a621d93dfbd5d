use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Column count used when the caller does not pick one
pub const DEFAULT_COLS: usize = 4;

/// Placeholder written in place of spaces and used to pad the grid
pub const PAD: char = '_';

/// Encrypt by writing the text into a `cols` wide grid row by row and reading
/// it back column by column
///
/// Spaces are replaced with [`PAD`] first, and the text is padded with [`PAD`]
/// up to a whole number of rows. A literal pad character in the plaintext is
/// indistinguishable from the sentinel afterwards, so such inputs do not
/// round-trip exactly. Zero columns leave the text unchanged.
pub fn encrypt(text: &str, cols: usize) -> String {
    if cols == 0 {
        return String::from(text);
    }

    let mut grid: Vec<char> = text
        .chars()
        .map(|c| if c == ' ' { PAD } else { c })
        .collect();
    while grid.len() % cols != 0 {
        grid.push(PAD);
    }

    let rows = grid.len() / cols;
    let mut res = String::with_capacity(text.len() + cols);
    for col in 0..cols {
        for row in 0..rows {
            res.push(grid[row * cols + col]);
        }
    }

    res
}

/// Decrypt text produced by `encrypt` with the same column count: write the
/// letters back column by column, read row by row
///
/// Empty input, zero columns, or a length that is no multiple of `cols` cannot
/// come out of `encrypt`, so such input is returned unchanged. Pad characters
/// are kept; whether they were spaces or padding is for the caller to decide.
pub fn decrypt(text: &str, cols: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if cols == 0 || chars.is_empty() || chars.len() % cols != 0 {
        return String::from(text);
    }

    let rows = chars.len() / cols;
    let mut grid = vec![PAD; chars.len()];
    let mut i = 0;
    for col in 0..cols {
        for row in 0..rows {
            grid[row * cols + col] = chars[i];
            i += 1;
        }
    }

    grid.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_known_grids() {
        assert_eq!(encrypt("TESTTEXT", 4), "TTEESXTT");
        assert_eq!(decrypt("TTEESXTT", 4), "TESTTEXT");
        assert_eq!(encrypt("АБВГДЕ", 3), "АГБДВЕ");
        assert_eq!(decrypt("АГБДВЕ", 3), "АБВГДЕ");
    }

    #[test]
    fn check_spaces_and_padding() {
        assert_eq!(encrypt("ПРИВЕТ МИР", 4), "ПЕИРТРИ__ВМ_");
        assert_eq!(decrypt("ПЕИРТРИ__ВМ_", 4), "ПРИВЕТ_МИР__");
    }

    #[test]
    fn check_single_column_is_identity() {
        assert_eq!(encrypt("ГОРА", 1), "ГОРА");
        assert_eq!(decrypt("ГОРА", 1), "ГОРА");
    }

    #[test]
    fn check_degenerate_inputs() {
        assert_eq!(encrypt("", 4), "");
        assert_eq!(decrypt("", 4), "");
        assert_eq!(encrypt("АБВГ", 0), "АБВГ");
        assert_eq!(decrypt("АБВГ", 0), "АБВГ");
        // five letters cannot fill four columns evenly
        assert_eq!(decrypt("АБВГД", 4), "АБВГД");
    }

    #[test]
    fn check_wide_grid_pads_to_one_row() {
        assert_eq!(encrypt("АБВ", 5), "АБВ__");
        assert_eq!(decrypt("АБВ__", 5), "АБВ__");
    }
}
