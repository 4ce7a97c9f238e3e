//! Queries over a parsed change log.
//!
//! All functions are pure: they borrow the change log and never mutate it.

use super::model::{LineChange, LineKind, LineRange, LineRanges, Modification};

/// Return only the added lines, in diff order.
pub fn added_only(changes: &[LineChange]) -> Vec<&LineChange> {
    of_kind(changes, LineKind::Added)
}

/// Return only the removed lines, in diff order.
pub fn removed_only(changes: &[LineChange]) -> Vec<&LineChange> {
    of_kind(changes, LineKind::Removed)
}

fn of_kind(changes: &[LineChange], kind: LineKind) -> Vec<&LineChange> {
    changes.iter().filter(|c| c.kind == kind).collect()
}

/// Pair each removed line that is directly followed by an added line.
///
/// This is positional only. The two lines are not compared, and any
/// unchanged line in between prevents a pair.
pub fn pair_modifications(changes: &[LineChange]) -> Vec<Modification<'_>> {
    changes
        .windows(2)
        .filter_map(|pair| match pair {
            [removed, added] if removed.is_removed() && added.is_added() => {
                Some(Modification { removed, added })
            }
            _ => None,
        })
        .collect()
}

/// Collapse consecutive changed line numbers into inclusive ranges.
///
/// Added lines contribute their new-file numbers and removed lines their
/// old-file numbers; the two kinds are tracked independently. Ranges are
/// returned in the order they are encountered.
pub fn compact_ranges(changes: &[LineChange]) -> LineRanges {
    let mut added = RangeBuilder::default();
    let mut removed = RangeBuilder::default();

    for change in changes {
        match (change.kind, change.old_line, change.new_line) {
            (LineKind::Added, _, Some(line)) => added.push(line),
            (LineKind::Removed, Some(line), _) => removed.push(line),
            _ => {}
        }
    }

    LineRanges {
        added: added.finish(),
        removed: removed.finish(),
    }
}

#[derive(Default)]
struct RangeBuilder {
    ranges: Vec<LineRange>,
    current: Option<LineRange>,
}

impl RangeBuilder {
    fn push(&mut self, line: usize) {
        match &mut self.current {
            Some(range) if range.end.checked_add(1) == Some(line) => range.end = line,
            current => {
                if let Some(done) = current.replace(LineRange::new(line, line)) {
                    self.ranges.push(done);
                }
            }
        }
    }

    fn finish(mut self) -> Vec<LineRange> {
        self.ranges.extend(self.current.take());
        self.ranges
    }
}
