//! Worker-pool variant of one search round.
//!
//! Workers pull `(sequence number, candidate)` pairs from a shared
//! [`Partitions`] iterator and test them independently. A candidate that is
//! accepted, or whose test fails with an oracle error, becomes a stop
//! point: nothing with a higher sequence number is handed out, and tests
//! already running for such candidates are abandoned. Candidates below the
//! stop point are still decided, so the round ends with whichever outcome
//! has the lowest sequence number, which is exactly what the sequential
//! search reports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use thicket_core::IndexGraph;
use thicket_planar::PlanaritySource;

use crate::cancel::CancelToken;
use crate::error::ThicknessError;
use crate::partitioner::all_planar;
use crate::partitions::Partitions;

/// Sequence number meaning "nothing decided yet".
const NO_STOP: usize = usize::MAX;

struct Shared<'a> {
    source: Mutex<(usize, Partitions<'a, usize>)>,
    /// Lowest sequence number that was accepted or failed.
    stop: AtomicUsize,
    found: Mutex<Option<(usize, Vec<Vec<usize>>)>>,
    failure: Mutex<Option<(usize, ThicknessError)>>,
}

impl Shared<'_> {
    /// Hand out the next candidate, unless it could no longer win.
    fn next_candidate(&self) -> Option<(usize, Vec<Vec<usize>>)> {
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        let seq = source.0;
        if seq > self.stop.load(Ordering::Acquire) {
            return None;
        }
        let candidate = source.1.next()?;
        source.0 += 1;
        Some((seq, candidate))
    }

    fn accept(&self, seq: usize, candidate: Vec<Vec<usize>>) {
        let mut found = self.found.lock().unwrap_or_else(PoisonError::into_inner);
        if found.as_ref().is_none_or(|(s, _)| seq < *s) {
            *found = Some((seq, candidate));
            self.stop.fetch_min(seq, Ordering::AcqRel);
        }
    }

    fn fail(&self, seq: usize, e: ThicknessError) {
        let mut failure = self.failure.lock().unwrap_or_else(PoisonError::into_inner);
        if failure.as_ref().is_none_or(|(s, _)| seq < *s) {
            *failure = Some((seq, e));
            self.stop.fetch_min(seq, Ordering::AcqRel);
        }
    }

    /// The outcome with the lowest sequence number.
    fn into_outcome(self) -> Result<Option<Vec<Vec<usize>>>, ThicknessError> {
        let found = self.found.into_inner().unwrap_or_else(PoisonError::into_inner);
        let failure = self.failure.into_inner().unwrap_or_else(PoisonError::into_inner);
        match (found, failure) {
            (Some((accepted, candidate)), Some((failed, _))) if accepted < failed => {
                Ok(Some(candidate))
            }
            (_, Some((_, e))) => Err(e),
            (found, None) => Ok(found.map(|(_, candidate)| candidate)),
        }
    }
}

/// Parallel counterpart of the sequential round: same answer, `threads`
/// workers.
pub(crate) fn search_round<P: PlanaritySource + Sync>(
    oracle: &P,
    topology: &IndexGraph,
    ids: &[usize],
    k: usize,
    threads: usize,
    cancel: &CancelToken,
) -> Result<Option<Vec<Vec<usize>>>, ThicknessError> {
    let shared = Shared {
        source: Mutex::new((0, Partitions::new(ids, k))),
        stop: AtomicUsize::new(NO_STOP),
        found: Mutex::new(None),
        failure: Mutex::new(None),
    };

    log::debug!("k={}: testing candidates on {} workers", k, threads);

    thread::scope(|s| {
        for _ in 0..threads {
            s.spawn(|| worker(oracle, topology, &shared, cancel));
        }
    });

    cancel.check()?;
    shared.into_outcome()
}

fn worker<P: PlanaritySource + Sync>(
    oracle: &P,
    topology: &IndexGraph,
    shared: &Shared<'_>,
    cancel: &CancelToken,
) {
    loop {
        if cancel.is_cancelled() {
            return;
        }
        let Some((seq, candidate)) = shared.next_candidate() else {
            return;
        };
        let abandon = || cancel.is_cancelled() || shared.stop.load(Ordering::Acquire) < seq;
        match all_planar(oracle, topology, &candidate, abandon) {
            Ok(Some(true)) => shared.accept(seq, candidate),
            Ok(Some(false)) | Ok(None) => {}
            Err(e) => shared.fail(seq, e),
        }
    }
}
