//! Benchmark scheduler.
//!
//! Fans the registered subjects out onto a dedicated worker pool, one task
//! per subject, and fans the outcomes back in through a channel. Outcomes are
//! stored by subject index so the returned order always matches the
//! registry, whatever order the tasks finish in.
//!
//! Each task runs under `catch_unwind`: a panicking algorithm becomes a
//! `Crashed` outcome. When a timeout is configured, subjects that have not
//! reported by the deadline become `TimedOut` outcomes and their workers are
//! abandoned. In sequential mode the deadline applies to each subject in
//! turn.

use crate::config::HarnessConfig;
use crate::fixtures::BenchmarkInputs;
use crate::registry::BenchmarkSubject;
use crate::utils::trial::TrialOutcome;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Stack size for worker threads. Quick sort on reverse-ordered input
/// recurses once per element.
pub const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Run every subject and return one outcome per subject, in subject order.
///
/// Blocks until all subjects have reported or `config.timeout` elapses.
/// With `config.sequential` the subjects run one after another, each on a
/// fresh single worker with its own deadline, so a stalled subject does not
/// keep the later ones from starting.
pub fn run_benchmarks(
    subjects: &[Arc<dyn BenchmarkSubject>],
    inputs: Arc<BenchmarkInputs>,
    config: &HarnessConfig,
) -> Vec<TrialOutcome> {
    if subjects.is_empty() {
        return Vec::new();
    }

    if config.sequential {
        subjects
            .iter()
            .enumerate()
            .flat_map(|(index, subject)| {
                run_batch(std::slice::from_ref(subject), index, &inputs, config)
            })
            .collect()
    } else {
        run_batch(subjects, 0, &inputs, config)
    }
}

fn build_pool(workers: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(workers)
        .stack_size(WORKER_STACK_SIZE)
        .thread_name(|i| format!("bench-worker-{}", i))
        .build()
}

/// Run `subjects` concurrently on a pool with one worker each and a single
/// deadline. `first_index` is the registry position of `subjects[0]`.
fn run_batch(
    subjects: &[Arc<dyn BenchmarkSubject>],
    first_index: usize,
    inputs: &Arc<BenchmarkInputs>,
    config: &HarnessConfig,
) -> Vec<TrialOutcome> {
    let pool = match build_pool(subjects.len()) {
        Ok(pool) => pool,
        Err(e) => {
            warn!(error = %e, "failed to build worker pool, running on the calling thread");
            return run_inline(subjects, first_index, inputs, config);
        }
    };

    let started = Instant::now();
    let (tx, rx) = crossbeam_channel::unbounded();

    for (slot, subject) in subjects.iter().enumerate() {
        let index = first_index + slot;
        let subject = Arc::clone(subject);
        let inputs = Arc::clone(inputs);
        let config = config.clone();
        let tx = tx.clone();

        debug!(subject = subject.name(), index, "dispatching benchmark");
        pool.spawn(move || {
            let seed = subject_seed(config.seed, index);
            let outcome = run_isolated(subject.as_ref(), &inputs, &config, seed);
            // The receiver is gone once the deadline has passed
            let _ = tx.send((slot, outcome));
        });
    }
    drop(tx);

    let mut slots: Vec<Option<TrialOutcome>> = (0..subjects.len()).map(|_| None).collect();
    let timed_out = join_outcomes(&rx, &mut slots, config.timeout, started);
    let waited = started.elapsed();

    slots
        .into_iter()
        .zip(subjects)
        .map(|(slot, subject)| {
            slot.unwrap_or_else(|| {
                if timed_out {
                    warn!(subject = subject.name(), ?waited, "benchmark timed out");
                    TrialOutcome::timed_out(subject.name(), subject.kind(), waited)
                } else {
                    error!(subject = subject.name(), "worker exited without reporting");
                    TrialOutcome::crashed(
                        subject.name(),
                        subject.kind(),
                        "worker exited without reporting".to_string(),
                        waited,
                    )
                }
            })
        })
        .collect()
}

/// Fill `slots` from the channel. Returns true if the deadline was reached
/// with outcomes still pending.
///
/// A timeout too large to add to `started` waits without a deadline.
fn join_outcomes(
    rx: &Receiver<(usize, TrialOutcome)>,
    slots: &mut [Option<TrialOutcome>],
    timeout: Option<Duration>,
    started: Instant,
) -> bool {
    let deadline = timeout.and_then(|t| started.checked_add(t));
    let mut pending = slots.len();

    while pending > 0 {
        let received = match deadline {
            Some(deadline) => rx.recv_deadline(deadline),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok((slot, outcome)) => {
                slots[slot] = Some(outcome);
                pending -= 1;
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(pending, "deadline reached before all benchmarks reported");
                return true;
            }
            Err(RecvTimeoutError::Disconnected) => return false,
        }
    }

    false
}

/// Fallback when no pool can be built: run each subject on this thread.
///
/// There is no worker to abandon here, so `config.timeout` is not enforced.
fn run_inline(
    subjects: &[Arc<dyn BenchmarkSubject>],
    first_index: usize,
    inputs: &BenchmarkInputs,
    config: &HarnessConfig,
) -> Vec<TrialOutcome> {
    if let Some(timeout) = config.timeout {
        warn!(?timeout, "deadline is not enforced on the calling thread");
    }

    subjects
        .iter()
        .enumerate()
        .map(|(slot, subject)| {
            let seed = subject_seed(config.seed, first_index + slot);
            run_isolated(subject.as_ref(), inputs, config, seed)
        })
        .collect()
}

/// Run one subject, converting a panic into a `Crashed` outcome
fn run_isolated(
    subject: &dyn BenchmarkSubject,
    inputs: &BenchmarkInputs,
    config: &HarnessConfig,
    seed: Option<u64>,
) -> TrialOutcome {
    let started = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| subject.run(inputs, config, seed)));

    match result {
        Ok(outcome) => {
            if outcome.success() {
                info!(
                    trials = outcome.trials,
                    total = ?outcome.total,
                    "{}",
                    outcome.message()
                );
            } else {
                warn!(failed_trial = outcome.trials, "{}", outcome.message());
            }
            outcome
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            let outcome =
                TrialOutcome::crashed(subject.name(), subject.kind(), message, started.elapsed());
            error!("{}", outcome.message());
            outcome
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Distinct per-subject seed so the two searches do not share a target
fn subject_seed(seed: Option<u64>, index: usize) -> Option<u64> {
    seed.map(|s| s.wrapping_add(index as u64))
}
