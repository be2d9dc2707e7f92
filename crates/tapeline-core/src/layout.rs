//! Padding layout for tape cell sequences.
//!
//! A tape is widened to a minimum length by alternately appending and
//! prepending blank cells. The append always comes first, so an odd deficit
//! leaves one more blank cell on the trailing end than on the leading end.
//! Every prepend shifts the head right by one so it keeps pointing at the
//! same logical cell.

use log::trace;

/// Content of a cell inserted by padding.
pub const BLANK_CELL: &str = "";

/// Append one blank cell if the sequence is shorter than `minimum_length`.
///
/// Returns `true` if a cell was appended.
pub fn append_if_needed(cells: &mut Vec<String>, minimum_length: usize) -> bool {
    if cells.len() >= minimum_length {
        return false;
    }
    cells.push(BLANK_CELL.to_string());
    true
}

/// Prepend one blank cell and shift `pointer_index` if the sequence is shorter
/// than `minimum_length`.
///
/// Returns `true` if a cell was prepended.
pub fn prepend_and_shift_if_needed(
    cells: &mut Vec<String>,
    pointer_index: &mut usize,
    minimum_length: usize,
) -> bool {
    if cells.len() >= minimum_length {
        return false;
    }
    cells.insert(0, BLANK_CELL.to_string());
    *pointer_index += 1;
    true
}

/// Pad `cells` with blank cells until it holds at least `minimum_length` cells.
///
/// Returns the padded cells together with the pointer index adjusted for the
/// cells prepended on the left. If `cells` is already long enough both inputs
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use tapeline_core::layout::pad_sequence;
///
/// let (cells, pointer) = pad_sequence(Vec::new(), 0, 3);
/// assert_eq!(cells, vec!["", "", ""]);
/// assert_eq!(pointer, 1);
/// ```
pub fn pad_sequence(
    mut cells: Vec<String>,
    mut pointer_index: usize,
    minimum_length: usize,
) -> (Vec<String>, usize) {
    let original_len = cells.len();

    while cells.len() < minimum_length {
        append_if_needed(&mut cells, minimum_length);
        prepend_and_shift_if_needed(&mut cells, &mut pointer_index, minimum_length);
    }

    trace!(
        original_len,
        padded_len = cells.len(),
        pointer_index;
        "Padded tape cells"
    );

    (cells, pointer_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_append_if_needed() {
        let mut seq = cells(&["a"]);
        assert!(append_if_needed(&mut seq, 2));
        assert_eq!(seq, cells(&["a", ""]));
        assert!(!append_if_needed(&mut seq, 2));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_prepend_and_shift_if_needed() {
        let mut seq = cells(&["a"]);
        let mut pointer = 0;
        assert!(prepend_and_shift_if_needed(&mut seq, &mut pointer, 2));
        assert_eq!(seq, cells(&["", "a"]));
        assert_eq!(pointer, 1);

        assert!(!prepend_and_shift_if_needed(&mut seq, &mut pointer, 2));
        assert_eq!(pointer, 1);
    }

    #[test]
    fn test_scenario_single_append_reaches_floor() {
        let input = cells(&[
            "*", "-", "4", "5", ",", "0b255", ",", "NULL", ",", "(", "2", ";", "3", ";", "[",
            "4", ";", "5", "]", ")",
        ]);
        assert_eq!(input.len(), 20);

        let (padded, pointer) = pad_sequence(input.clone(), 19, 21);

        assert_eq!(padded.len(), 21);
        assert_eq!(pointer, 19);
        assert_eq!(&padded[..20], &input[..]);
        assert_eq!(padded[20], "");
    }

    #[test]
    fn test_scenario_empty_tape_alternates() {
        let (padded, pointer) = pad_sequence(Vec::new(), 0, 3);
        assert_eq!(padded, cells(&["", "", ""]));
        assert_eq!(pointer, 1);
    }

    #[test]
    fn test_scenario_already_at_floor_is_noop() {
        let (padded, pointer) = pad_sequence(cells(&["A", "B"]), 0, 2);
        assert_eq!(padded, cells(&["A", "B"]));
        assert_eq!(pointer, 0);
    }

    #[test]
    fn test_odd_deficit_favours_trailing_end() {
        let (padded, pointer) = pad_sequence(cells(&["x"]), 0, 6);
        // 5 blanks: 3 trailing, 2 leading
        assert_eq!(padded, cells(&["", "", "x", "", "", ""]));
        assert_eq!(pointer, 2);
    }

    #[test]
    fn test_even_deficit_is_symmetric() {
        let (padded, pointer) = pad_sequence(cells(&["x", "y"]), 1, 6);
        assert_eq!(padded, cells(&["", "", "x", "y", "", ""]));
        assert_eq!(pointer, 3);
    }

    #[test]
    fn test_zero_minimum_length() {
        let (padded, pointer) = pad_sequence(Vec::new(), 0, 0);
        assert!(padded.is_empty());
        assert_eq!(pointer, 0);
    }
}
