use crate::artifacts::diff::diff_algorithm::Edit;

/// Number of unchanged lines kept around each run of changes.
const HUNK_CONTEXT: usize = 3;

/// A contiguous slice of an edit script, padded with context, ready to be
/// rendered under a `@@ -<range> +<range> @@` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_start: usize,
    b_start: usize,
    a_lines: usize,
    b_lines: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Group an edit script into hunks.
    ///
    /// Runs of changes closer than twice the context width share a hunk;
    /// a script with no changes produces no hunks at all.
    pub fn filter(edits: Vec<Edit<T>>) -> Vec<Hunk<T>> {
        // annotate each edit with the 1-based (a, b) cursor it sits at
        let mut annotated = Vec::with_capacity(edits.len());
        let (mut a_line, mut b_line) = (1usize, 1usize);
        for edit in edits {
            annotated.push((a_line, b_line, edit));
            match annotated.last().map(|(_, _, edit)| edit) {
                Some(Edit::Equal { .. }) => {
                    a_line += 1;
                    b_line += 1;
                }
                Some(Edit::Delete { .. }) => a_line += 1,
                Some(Edit::Insert { .. }) => b_line += 1,
                None => unreachable!(),
            }
        }

        let changed: Vec<usize> = annotated
            .iter()
            .enumerate()
            .filter(|(_, (_, _, edit))| !matches!(edit, Edit::Equal { .. }))
            .map(|(idx, _)| idx)
            .collect();

        let Some((&first, rest)) = changed.split_first() else {
            return Vec::new();
        };

        let clamp = |idx: usize| {
            (
                idx.saturating_sub(HUNK_CONTEXT),
                (idx + HUNK_CONTEXT).min(annotated.len() - 1),
            )
        };

        let mut ranges = Vec::new();
        let (mut lo, mut hi) = clamp(first);
        for &idx in rest {
            let (next_lo, next_hi) = clamp(idx);
            if next_lo <= hi + 1 {
                hi = next_hi;
            } else {
                ranges.push((lo, hi));
                (lo, hi) = (next_lo, next_hi);
            }
        }
        ranges.push((lo, hi));

        ranges
            .into_iter()
            .map(|(lo, hi)| Self::build(&annotated[lo..=hi]))
            .collect()
    }

    fn build(annotated: &[(usize, usize, Edit<T>)]) -> Hunk<T> {
        let has_a = |edit: &Edit<T>| !matches!(edit, Edit::Insert { .. });
        let has_b = |edit: &Edit<T>| !matches!(edit, Edit::Delete { .. });

        let a_lines = annotated.iter().filter(|(_, _, edit)| has_a(edit)).count();
        let b_lines = annotated.iter().filter(|(_, _, edit)| has_b(edit)).count();

        // a hunk with no lines on one side anchors to that side's cursor
        let a_start = annotated
            .iter()
            .find(|(_, _, edit)| has_a(edit))
            .map_or(annotated[0].0, |(a_line, _, _)| *a_line);
        let b_start = annotated
            .iter()
            .find(|(_, _, edit)| has_b(edit))
            .map_or(annotated[0].1, |(_, b_line, _)| *b_line);

        Hunk {
            a_start,
            b_start,
            a_lines,
            b_lines,
            edits: annotated.iter().map(|(_, _, edit)| edit.clone()).collect(),
        }
    }

    /// The `@@ -<range> +<range> @@` header line.
    ///
    /// Single-line ranges omit the count and empty ranges anchor to the
    /// line just before them, matching the usual unified-diff conventions.
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            Self::format_range(self.a_start, self.a_lines),
            Self::format_range(self.b_start, self.b_lines)
        )
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    fn format_range(start: usize, lines: usize) -> String {
        match lines {
            0 => format!("{},0", start.saturating_sub(1)),
            1 => format!("{start}"),
            _ => format!("{start},{lines}"),
        }
    }
}
