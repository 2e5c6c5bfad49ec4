use crate::artifacts::diff::change::{Change, EditScript};

/// Merge changes separated by an unchanged run shorter than `granularity`
///
/// Minimal scripts over prose or code tend to alternate one-element matches
/// and changes around a multi-element edit; merging turns those into one
/// span. The script must be sorted, as produced by the differencers. A
/// granularity of 0 or 1 leaves the script untouched.
pub fn merge(granularity: usize, script: &[Change]) -> EditScript {
    let mut merged: EditScript = Vec::with_capacity(script.len());

    for change in script {
        match merged.last_mut() {
            Some(prev) if change.after_pos - prev.after_end() < granularity => {
                prev.delete_count = change.before_end() - prev.before_pos;
                prev.insert_count = change.after_end() - prev.after_pos;
            }
            _ => merged.push(*change),
        }
    }

    merged
}
