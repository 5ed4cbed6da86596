use crate::diagnostic::Diagnostic;
use crate::location::Location;

/// Prefixes a rule name with the registry namespace of this linter.
pub fn namespace(rule: &str) -> String {
    format!("scss/{rule}")
}

pub fn find_new_lines(source: &str) -> Vec<usize> {
    source
        .match_indices('\n')
        .map(|x| x.0)
        .collect::<Vec<usize>>()
}

pub fn find_row_col(start: usize, loc_new_lines: &[usize]) -> (usize, usize) {
    let new_lines_before = loc_new_lines
        .iter()
        .filter(|x| *x <= &start)
        .collect::<Vec<&usize>>();
    let n_new_lines = new_lines_before.len();
    let last_new_line = match new_lines_before.last() {
        Some(x) => **x,
        None => 0_usize,
    };

    let col: usize = start - last_new_line;
    let row: usize = n_new_lines + 1;
    (row, col)
}

pub fn compute_lints_location(
    diagnostics: Vec<Diagnostic>,
    loc_new_lines: &[usize],
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            let loc = find_row_col(diagnostic.range.start, loc_new_lines);
            diagnostic.location = Some(Location::new(loc.0, loc.1));
            diagnostic
        })
        .collect()
}

/// Byte offset and text of the extension following the final `.` of the
/// last path segment. `None` when the segment has no dot or only a leading
/// dot (dotfiles have no extension).
pub fn extname(path: &str) -> Option<(usize, &str)> {
    let base_start = path.rfind('/').map_or(0, |i| i + 1);
    let basename = &path[base_start..];
    let dot = basename.rfind('.')?;
    if dot == 0 {
        return None;
    }
    let ext_start = base_start + dot + 1;
    Some((ext_start, &path[ext_start..]))
}
