//! Tag ratio analyzer.
//!
//! Loads trending-video CSV exports, derives a like/view ratio for every
//! video and answers tag queries with two competing strategies:
//! a max-heap top-k selection and a hash-table per-tag average.
//! The [`bench`] module times both on the same input.

pub mod aggregate;
pub mod bench;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod menu;
pub mod record;
pub mod report;
pub mod selection;
pub mod session;
pub mod topk;

pub use aggregate::{tag_averages, TagAverage, TagStats};
pub use bench::{run_benchmark, summarize, BenchmarkReport, RunTiming, Stopwatch, Verdict};
pub use config::{Config, CsvLayout};
pub use error::{AnalyzerError, Result, RowError};
pub use record::{RecordStore, VideoRecord};
pub use selection::{tag_matches, SelectedTagSet};
pub use session::Session;
pub use topk::{top_k_by_ratio, RankedVideo, DEFAULT_TOP_K};
