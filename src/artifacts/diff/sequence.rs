use crate::artifacts::diff::bisect::LinearMyersDiff;
use crate::artifacts::diff::change::{Edit, EditScript, changes_from_edits};
use crate::artifacts::diff::equality::Equality;
use crate::artifacts::diff::myers::MyersDiff;
use std::iter;

/// Combined length above which the linear-space search is used
pub const GREEDY_LIMIT: usize = 1024;

pub trait DiffAlgorithm {
    /// The shortest edit path, one step per consumed element
    fn edits(&self) -> Vec<Edit>;

    fn diff(&self) -> EditScript {
        changes_from_edits(&self.edits())
    }
}

/// Compute a minimal edit script between `a` and `b` under `eq`
///
/// Common prefix and suffix are stripped first; the remainder goes to the
/// trace-keeping Myers search when short and to the linear-space one
/// otherwise.
pub fn diff<T, E>(a: &[T], b: &[T], eq: &E) -> EditScript
where
    E: Equality<T> + ?Sized,
{
    let prefix = a
        .iter()
        .zip(b)
        .take_while(|(x, y)| eq.equal(*x, *y))
        .count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| eq.equal(*x, *y))
        .count();

    let a_mid = &a[prefix..a.len() - suffix];
    let b_mid = &b[prefix..b.len() - suffix];

    let inner = if a_mid.len() + b_mid.len() <= GREEDY_LIMIT {
        MyersDiff::new(a_mid, b_mid, eq).edits()
    } else {
        LinearMyersDiff::new(a_mid, b_mid, eq).edits()
    };

    let edits = iter::repeat_n(Edit::Equal, prefix)
        .chain(inner)
        .chain(iter::repeat_n(Edit::Equal, suffix))
        .collect::<Vec<_>>();

    changes_from_edits(&edits)
}
