use derive_new::new;

/// A single step of an edit path, as walked by the differencers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Equal,
    Delete,
    Insert,
}

/// A contiguous block of edits between two sequences
///
/// `before_pos`/`after_pos` are the start indices in the before and after
/// sequences. Everything between two consecutive changes is identical on both
/// sides (under the equality the script was computed with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Change {
    pub before_pos: usize,
    pub after_pos: usize,
    pub delete_count: usize,
    pub insert_count: usize,
}

impl Change {
    pub fn is_deletion(&self) -> bool {
        self.insert_count == 0 && self.delete_count > 0
    }

    pub fn before_end(&self) -> usize {
        self.before_pos + self.delete_count
    }

    pub fn after_end(&self) -> usize {
        self.after_pos + self.insert_count
    }

    pub fn cost(&self) -> usize {
        self.delete_count + self.insert_count
    }
}

pub type EditScript = Vec<Change>;

/// Compress an edit path into change blocks
///
/// Consecutive non-equal edits form one change; an `Equal` edit closes the
/// block being accumulated.
pub fn changes_from_edits(edits: &[Edit]) -> EditScript {
    let mut script = Vec::new();
    let (mut x, mut y) = (0, 0);
    let mut current: Option<Change> = None;

    for edit in edits {
        match edit {
            Edit::Equal => {
                if let Some(change) = current.take() {
                    script.push(change);
                }
                x += 1;
                y += 1;
            }
            Edit::Delete => {
                current.get_or_insert(Change::new(x, y, 0, 0)).delete_count += 1;
                x += 1;
            }
            Edit::Insert => {
                current.get_or_insert(Change::new(x, y, 0, 0)).insert_count += 1;
                y += 1;
            }
        }
    }

    if let Some(change) = current {
        script.push(change);
    }

    script
}
