/// Lazily yields every ordering of a fixed-size array.
///
/// Orderings come out lexicographically by *position*: the indices into the
/// original array are permuted in ascending order, so the first item is the
/// input itself and the last is the input reversed, regardless of how the
/// values themselves compare.
#[derive(Clone, Debug)]
pub struct Permutations<T, const N: usize> {
    values: [T; N],
    indices: [usize; N],
    done: bool,
}

pub fn permutations<T: Copy, const N: usize>(values: [T; N]) -> Permutations<T, N> {
    let mut indices = [0; N];
    for (i, idx) in indices.iter_mut().enumerate() {
        *idx = i;
    }

    Permutations {
        values,
        indices,
        done: false,
    }
}

/// Steps `p` to its lexicographic successor, returning `false` once `p` was
/// already the last (descending) permutation.
fn next_permutation(p: &mut [usize]) -> bool {
    let pivot = match p.windows(2).rposition(|w| w[0] < w[1]) {
        Some(pivot) => pivot,
        None => return false,
    };

    // there's always one, p[pivot + 1] is bigger
    let successor = p.iter().rposition(|&x| x > p[pivot]).unwrap_or(pivot + 1);
    p.swap(pivot, successor);
    p[pivot + 1..].reverse();

    true
}

impl<T: Copy, const N: usize> Iterator for Permutations<T, N> {
    type Item = [T; N];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut item = self.values;
        for (slot, &idx) in item.iter_mut().zip(self.indices.iter()) {
            *slot = self.values[idx];
        }

        self.done = !next_permutation(&mut self.indices);
        Some(item)
    }
}

impl<T: Copy, const N: usize> std::iter::FusedIterator for Permutations<T, N> {}
