use crate::artifacts::diff::change::Edit;
use crate::artifacts::diff::equality::Equality;
use crate::artifacts::diff::sequence::DiffAlgorithm;
use derive_new::new;

/// Greedy forward Myers diff that keeps the full trace for backtracking
///
/// Memory grows with `D * (N + M)`, so this is only used for short inputs;
/// see [`crate::artifacts::diff::bisect::LinearMyersDiff`] for the
/// linear-space variant.
#[derive(new)]
pub struct MyersDiff<'d, T, E: ?Sized> {
    a: &'d [T],
    b: &'d [T],
    eq: &'d E,
}

impl<'d, T, E> MyersDiff<'d, T, E>
where
    E: Equality<T> + ?Sized,
{
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1, an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.eq.equal(&self.a[x as usize], &self.b[y as usize]) {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Vec<Edit> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = x + y;
        let mut edits = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset + k_del) as usize] + 1 > v[(offset + k_ins) as usize] {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edits.push(Edit::Equal);
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edits.push(if x == prev_x {
                    Edit::Insert
                } else {
                    Edit::Delete
                });
            }

            (x, y) = (prev_x, prev_y);
        }

        edits.reverse();
        edits
    }
}

impl<'d, T, E> DiffAlgorithm for MyersDiff<'d, T, E>
where
    E: Equality<T> + ?Sized,
{
    fn edits(&self) -> Vec<Edit> {
        if self.a.is_empty() && self.b.is_empty() {
            return Vec::new();
        }

        self.backtrack()
    }
}
