use crate::artifacts::diff::change::Edit;
use crate::artifacts::diff::equality::Equality;
use crate::artifacts::diff::sequence::DiffAlgorithm;
use derive_new::new;
use std::iter;

/// Linear-space Myers diff
///
/// Runs the greedy search from both ends at once until the forward and
/// reverse frontiers overlap, splits the problem at the meeting point and
/// recurses on both halves. Only two frontier vectors are alive at a time.
#[derive(new)]
pub struct LinearMyersDiff<'d, T, E: ?Sized> {
    a: &'d [T],
    b: &'d [T],
    eq: &'d E,
}

impl<'d, T, E> LinearMyersDiff<'d, T, E>
where
    E: Equality<T> + ?Sized,
{
    fn diff_range(&self, a: (usize, usize), b: (usize, usize), edits: &mut Vec<Edit>) {
        let ((mut a_lo, mut a_hi), (mut b_lo, mut b_hi)) = (a, b);

        while a_lo < a_hi && b_lo < b_hi && self.eq.equal(&self.a[a_lo], &self.b[b_lo]) {
            edits.push(Edit::Equal);
            a_lo += 1;
            b_lo += 1;
        }

        let mut suffix = 0;
        while a_lo < a_hi && b_lo < b_hi && self.eq.equal(&self.a[a_hi - 1], &self.b[b_hi - 1]) {
            a_hi -= 1;
            b_hi -= 1;
            suffix += 1;
        }

        if a_lo == a_hi {
            edits.extend(iter::repeat_n(Edit::Insert, b_hi - b_lo));
        } else if b_lo == b_hi {
            edits.extend(iter::repeat_n(Edit::Delete, a_hi - a_lo));
        } else if let Some((x, y)) = self.middle((a_lo, a_hi), (b_lo, b_hi)) {
            self.diff_range((a_lo, x), (b_lo, y), edits);
            self.diff_range((x, a_hi), (y, b_hi), edits);
        } else {
            edits.extend(iter::repeat_n(Edit::Delete, a_hi - a_lo));
            edits.extend(iter::repeat_n(Edit::Insert, b_hi - b_lo));
        }

        edits.extend(iter::repeat_n(Edit::Equal, suffix));
    }

    /// Find a point on a shortest edit path where both searches meet
    ///
    /// Returns absolute indices into `a` and `b`. The ranges must be
    /// non-empty and must not share a common prefix or suffix.
    fn middle(&self, a: (usize, usize), b: (usize, usize)) -> Option<(usize, usize)> {
        let (a_lo, b_lo) = (a.0, b.0);
        let n = (a.1 - a.0) as isize;
        let m = (b.1 - b.0) as isize;

        let max_d = (n + m + 1) / 2;
        let offset = max_d;
        let len = (2 * max_d + 2) as usize;

        let mut forward = vec![-1isize; len];
        let mut reverse = vec![-1isize; len];
        forward[(offset + 1) as usize] = 0;
        reverse[(offset + 1) as usize] = 0;

        let delta = n - m;
        // with an odd delta the forward search is the one that detects overlap
        let front = delta % 2 != 0;

        let (mut k1_start, mut k1_end) = (0, 0);
        let (mut k2_start, mut k2_end) = (0, 0);

        let at = |x: isize, y: isize| (a_lo + x as usize, b_lo + y as usize);

        for d in 0..max_d {
            for k1 in ((-d + k1_start)..=(d - k1_end)).step_by(2) {
                let idx = (offset + k1) as usize;
                let mut x1 = if k1 == -d || (k1 != d && forward[idx - 1] < forward[idx + 1]) {
                    forward[idx + 1]
                } else {
                    forward[idx - 1] + 1
                };
                let mut y1 = x1 - k1;

                while x1 < n
                    && y1 < m
                    && self
                        .eq
                        .equal(&self.a[a_lo + x1 as usize], &self.b[b_lo + y1 as usize])
                {
                    x1 += 1;
                    y1 += 1;
                }
                forward[idx] = x1;

                if x1 > n {
                    // ran off the right edge
                    k1_end += 2;
                } else if y1 > m {
                    // ran off the bottom edge
                    k1_start += 2;
                } else if front {
                    let k2_idx = offset + delta - k1;
                    if k2_idx >= 0 && (k2_idx as usize) < len && reverse[k2_idx as usize] != -1 {
                        let x2 = n - reverse[k2_idx as usize];
                        if x1 >= x2 {
                            return Some(at(x1, y1));
                        }
                    }
                }
            }

            for k2 in ((-d + k2_start)..=(d - k2_end)).step_by(2) {
                let idx = (offset + k2) as usize;
                let mut x2 = if k2 == -d || (k2 != d && reverse[idx - 1] < reverse[idx + 1]) {
                    reverse[idx + 1]
                } else {
                    reverse[idx - 1] + 1
                };
                let mut y2 = x2 - k2;

                while x2 < n
                    && y2 < m
                    && self.eq.equal(
                        &self.a[a_lo + (n - x2 - 1) as usize],
                        &self.b[b_lo + (m - y2 - 1) as usize],
                    )
                {
                    x2 += 1;
                    y2 += 1;
                }
                reverse[idx] = x2;

                if x2 > n {
                    k2_end += 2;
                } else if y2 > m {
                    k2_start += 2;
                } else if !front {
                    let k1_idx = offset + delta - k2;
                    if k1_idx >= 0 && (k1_idx as usize) < len && forward[k1_idx as usize] != -1 {
                        let x1 = forward[k1_idx as usize];
                        let y1 = offset + x1 - k1_idx;
                        if x1 >= n - x2 {
                            return Some(at(x1, y1));
                        }
                    }
                }
            }
        }

        None
    }
}

impl<'d, T, E> DiffAlgorithm for LinearMyersDiff<'d, T, E>
where
    E: Equality<T> + ?Sized,
{
    fn edits(&self) -> Vec<Edit> {
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));
        self.diff_range((0, self.a.len()), (0, self.b.len()), &mut edits);
        edits
    }
}
