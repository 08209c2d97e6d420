//==============================================================================
// Benchmark harness: heap strategy vs hash-table strategy
//==============================================================================

use std::collections::VecDeque;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::aggregate::tag_averages;
use crate::record::RecordStore;
use crate::selection::SelectedTagSet;
use crate::topk::top_k_by_ratio;

pub const DEFAULT_RUNS: usize = 3;

/// Measures how long a task takes.
///
/// The harness only ever sees durations through this trait, so tests can
/// script them instead of reading the wall clock.
pub trait Stopwatch {
    fn time(&mut self, task: &mut dyn FnMut()) -> Duration;
}

/// Wall-clock stopwatch backed by [`Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Stopwatch for WallClock {
    fn time(&mut self, task: &mut dyn FnMut()) -> Duration {
        let start = Instant::now();
        task();
        start.elapsed()
    }
}

/// Stopwatch that runs the task but reports pre-recorded durations.
/// Reports zero once the script is exhausted.
#[derive(Debug, Default, Clone)]
pub struct ScriptedStopwatch {
    durations: VecDeque<Duration>,
}

impl ScriptedStopwatch {
    pub fn new(durations: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            durations: durations.into_iter().collect(),
        }
    }

    pub fn from_millis(millis: impl IntoIterator<Item = u64>) -> Self {
        Self::new(millis.into_iter().map(Duration::from_millis))
    }
}

impl Stopwatch for ScriptedStopwatch {
    fn time(&mut self, task: &mut dyn FnMut()) -> Duration {
        task();
        self.durations.pop_front().unwrap_or(Duration::ZERO)
    }
}

/// Which strategy had the lower mean duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HeapFaster,
    HashTableFaster,
    Tie,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::HeapFaster => write!(f, "heap faster"),
            Verdict::HashTableFaster => write!(f, "hash table faster"),
            Verdict::Tie => write!(f, "tie"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunTiming {
    pub heap: Duration,
    pub hash: Duration,
}

impl RunTiming {
    pub fn heap_ms(&self) -> f64 {
        as_millis_f64(self.heap)
    }

    pub fn hash_ms(&self) -> f64 {
        as_millis_f64(self.hash)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub runs: Vec<RunTiming>,
    pub avg_heap_ms: f64,
    pub avg_hash_ms: f64,
    pub verdict: Verdict,
}

fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

/// Average per-run timings and pick the faster strategy
/// Role: Pure comparison logic, independent of any clock
pub fn summarize(runs: Vec<RunTiming>) -> BenchmarkReport {
    let avg_heap_ms = mean(runs.iter().map(RunTiming::heap_ms));
    let avg_hash_ms = mean(runs.iter().map(RunTiming::hash_ms));

    let verdict = if avg_heap_ms < avg_hash_ms {
        Verdict::HeapFaster
    } else if avg_hash_ms < avg_heap_ms {
        Verdict::HashTableFaster
    } else {
        Verdict::Tie
    };

    BenchmarkReport {
        runs,
        avg_heap_ms,
        avg_hash_ms,
        verdict,
    }
}

/// Time both strategies `runs` times on the same input
/// Role: Alternate heap and hash runs, results are discarded unseen
pub fn run_benchmark<S: Stopwatch + ?Sized>(
    store: &RecordStore,
    selection: &SelectedTagSet,
    top_k: usize,
    runs: usize,
    stopwatch: &mut S,
) -> BenchmarkReport {
    let mut timings = Vec::with_capacity(runs);

    for run in 1..=runs {
        let heap = stopwatch.time(&mut || {
            black_box(top_k_by_ratio(store, selection, top_k));
        });
        let hash = stopwatch.time(&mut || {
            black_box(tag_averages(store, selection));
        });
        log::debug!("Benchmark run {run}: heap {heap:?}, hash table {hash:?}");
        timings.push(RunTiming { heap, hash });
    }

    summarize(timings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VideoRecord;

    fn timing(heap_ms: u64, hash_ms: u64) -> RunTiming {
        RunTiming {
            heap: Duration::from_millis(heap_ms),
            hash: Duration::from_millis(hash_ms),
        }
    }

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            VideoRecord::new("a", vec!["music".into()], 10.0, 1.0),
            VideoRecord::new("b", vec!["gaming".into()], 10.0, 2.0),
        ])
    }

    #[test]
    fn test_summarize_hash_faster() {
        let report = summarize(vec![timing(10, 8), timing(12, 9), timing(11, 7)]);

        assert_eq!(report.avg_heap_ms, 11.0);
        assert_eq!(report.avg_hash_ms, 8.0);
        assert_eq!(report.verdict, Verdict::HashTableFaster);
        assert_eq!(report.verdict.to_string(), "hash table faster");
    }

    #[test]
    fn test_summarize_heap_faster() {
        let report = summarize(vec![timing(3, 5), timing(4, 5)]);
        assert_eq!(report.verdict, Verdict::HeapFaster);
    }

    #[test]
    fn test_summarize_equal_means_tie() {
        let report = summarize(vec![timing(4, 5), timing(6, 5)]);
        assert_eq!(report.verdict, Verdict::Tie);
    }

    #[test]
    fn test_summarize_no_runs() {
        let report = summarize(Vec::new());
        assert_eq!(report.avg_heap_ms, 0.0);
        assert_eq!(report.verdict, Verdict::Tie);
    }

    #[test]
    fn test_run_benchmark_alternates_heap_and_hash() {
        let selection = SelectedTagSet::from_tags(["music"]).unwrap();
        let mut stopwatch = ScriptedStopwatch::from_millis([10, 8, 12, 9, 11, 7]);

        let report = run_benchmark(&sample_store(), &selection, 10, DEFAULT_RUNS, &mut stopwatch);

        assert_eq!(report.runs.len(), 3);
        assert_eq!(report.runs[1], timing(12, 9));
        assert_eq!(report.avg_heap_ms, 11.0);
        assert_eq!(report.avg_hash_ms, 8.0);
        assert_eq!(report.verdict, Verdict::HashTableFaster);
    }

    #[test]
    fn test_scripted_stopwatch_runs_the_task() {
        let mut calls = 0;
        let mut stopwatch = ScriptedStopwatch::default();
        let elapsed = stopwatch.time(&mut || calls += 1);

        assert_eq!(calls, 1);
        assert_eq!(elapsed, Duration::ZERO);
    }

    #[test]
    fn test_wall_clock_measures_something() {
        let selection = SelectedTagSet::from_tags(["music"]).unwrap();
        let report = run_benchmark(&sample_store(), &selection, 10, 2, &mut WallClock);

        assert_eq!(report.runs.len(), 2);
        assert!(report.avg_heap_ms >= 0.0);
        assert!(report.avg_hash_ms >= 0.0);
    }
}
