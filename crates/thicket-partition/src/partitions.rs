//! Lazy enumeration of set partitions into exactly `k` blocks.
//!
//! The order follows the classic recurrence on the first element `e` of the
//! sequence and the rest `R`:
//!
//! - **Absorb**: for every partition of `R` into `k` blocks, and for every
//!   block of it, put `e` at the front of that block;
//! - **Isolate**: for every partition of `R` into `k - 1` blocks, put the
//!   singleton `{e}` in front.
//!
//! with the base cases `k == 1` (one block holding everything) and
//! `|elements| == k` (all singletons). The number of partitions produced is
//! the Stirling number of the second kind `S(n, k)`.
//!
//! [`Partitions`] walks that recursion tree without recursing: it keeps one
//! frame per consumed element, and advancing works like an odometer whose
//! least significant digit is the block index chosen for the first element.

use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// The frame's element joins block `j` of the inner partition.
    Absorb(usize),
    /// The frame's element forms its own block.
    Isolate,
    /// Base case: all remaining elements in one block.
    Whole,
    /// Base case: every remaining element alone.
    Singletons,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    k: usize,
    step: Step,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// Iterator over every partition of a sequence into exactly `k` non-empty
/// blocks.
///
/// Each item is a `Vec` of `k` blocks; blocks keep the elements' relative
/// order. Only O(n) state is held between items.
///
/// Edge cases: `k == 0` yields one empty partition for an empty sequence and
/// nothing otherwise; `k` larger than the sequence yields nothing.
#[derive(Clone, Debug)]
pub struct Partitions<'a, T> {
    elements: &'a [T],
    k: usize,
    frames: Vec<Frame>,
    state: State,
}

impl<'a, T: Clone> Partitions<'a, T> {
    /// Enumerate the partitions of `elements` into `k` blocks.
    pub fn new(elements: &'a [T], k: usize) -> Self {
        Self {
            elements,
            k,
            frames: Vec::with_capacity(elements.len()),
            state: State::Fresh,
        }
    }

    /// Total number of partitions this iterator yields from the start, or
    /// `None` if it does not fit in a `u128`.
    pub fn total(&self) -> Option<u128> {
        stirling2(self.elements.len(), self.k)
    }

    fn start(&mut self) -> bool {
        if self.k == 0 {
            return self.elements.is_empty();
        }
        self.descend(0, self.k)
    }

    /// Push the first chain of frames enumerating the elements from
    /// `start` into `k` blocks.
    fn descend(&mut self, start: usize, k: usize) -> bool {
        let n = self.elements.len();
        if k == 0 || k > n - start {
            return false;
        }
        let mut at = start;
        loop {
            if k == 1 {
                self.frames.push(Frame { k, step: Step::Whole });
                return true;
            }
            if n - at == k {
                self.frames.push(Frame {
                    k,
                    step: Step::Singletons,
                });
                return true;
            }
            self.frames.push(Frame {
                k,
                step: Step::Absorb(0),
            });
            at += 1;
        }
    }

    /// Reset every absorbing frame before `d` to its first block.
    fn rewind_outer(&mut self, d: usize) {
        for f in &mut self.frames[..d] {
            if let Step::Absorb(_) = f.step {
                f.step = Step::Absorb(0);
            }
        }
    }

    fn advance(&mut self) -> bool {
        if self.frames.is_empty() {
            return false;
        }

        // Find the outermost frame that can move to its next block.
        let mut d = 0;
        loop {
            let f = self.frames[d];
            match f.step {
                Step::Absorb(j) if j + 1 < f.k => {
                    self.frames[d].step = Step::Absorb(j + 1);
                    self.rewind_outer(d);
                    return true;
                }
                Step::Absorb(_) | Step::Isolate => d += 1,
                Step::Whole | Step::Singletons => break,
            }
        }

        // The innermost chain is exhausted: switch the nearest absorbing
        // frame to isolating its element.
        while d > 0 {
            d -= 1;
            if let Step::Absorb(_) = self.frames[d].step {
                let k = self.frames[d].k;
                self.frames.truncate(d + 1);
                if self.descend(d + 1, k - 1) {
                    self.frames[d].step = Step::Isolate;
                    self.rewind_outer(d);
                    return true;
                }
            }
        }
        false
    }

    /// Block indices of the current partition.
    fn current(&self) -> Vec<Vec<usize>> {
        let n = self.elements.len();
        let Some(last) = self.frames.last() else {
            return Vec::new();
        };
        let s = self.frames.len() - 1;
        let mut blocks: Vec<Vec<usize>> = if last.step == Step::Whole {
            vec![(s..n).collect()]
        } else {
            (s..n).map(|i| vec![i]).collect()
        };
        for d in (0..s).rev() {
            match self.frames[d].step {
                Step::Absorb(j) => blocks[j].insert(0, d),
                Step::Isolate => blocks.insert(0, vec![d]),
                Step::Whole | Step::Singletons => {}
            }
        }
        blocks
    }
}

impl<T: Clone> Iterator for Partitions<'_, T> {
    type Item = Vec<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let ok = match self.state {
            State::Fresh => self.start(),
            State::Running => self.advance(),
            State::Done => return None,
        };
        if !ok {
            self.state = State::Done;
            self.frames.clear();
            return None;
        }
        self.state = State::Running;
        let blocks = self
            .current()
            .into_iter()
            .map(|b| b.into_iter().map(|i| self.elements[i].clone()).collect())
            .collect();
        Some(blocks)
    }
}

impl<T: Clone> FusedIterator for Partitions<'_, T> {}

/// Stirling number of the second kind `S(n, k)`: the number of ways to
/// partition `n` labelled elements into `k` non-empty unlabelled blocks.
///
/// Returns `None` when an intermediate value of the recurrence overflows
/// `u128`.
pub fn stirling2(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    // row[j] = S(i, j) for the current i.
    let mut row = vec![0u128; k + 1];
    row[0] = 1;
    for i in 1..=n {
        for j in (1..=k.min(i)).rev() {
            row[j] = (j as u128)
                .checked_mul(row[j])?
                .checked_add(row[j - 1])?;
        }
        row[0] = 0;
    }
    Some(row[k])
}
