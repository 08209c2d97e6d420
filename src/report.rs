// =============================================================================
// Console rendering of query and benchmark results
// =============================================================================

use std::io::{self, Write};

use colored::Colorize;

use crate::aggregate::TagAverage;
use crate::bench::{BenchmarkReport, Verdict};
use crate::ingest::DatasetSummary;
use crate::topk::RankedVideo;

pub fn write_load_summary<W: Write>(
    out: &mut W,
    datasets: &[DatasetSummary],
    total: usize,
    min_expected: usize,
) -> io::Result<()> {
    for dataset in datasets {
        writeln!(out, "Loading: {} ...", dataset.file_name)?;
        writeln!(out, "  -> Loaded {} videos.", dataset.records)?;
    }
    writeln!(out, "\nTotal videos loaded from all datasets: {}", total.to_string().bold())?;

    if total < min_expected {
        writeln!(
            out,
            "{} Combined dataset has only {total} videos.",
            "Warning:".yellow().bold()
        )?;
        writeln!(out, "Try adding more CSVs to the data folder.")?;
    }
    Ok(())
}

pub fn write_top_k<W: Write>(out: &mut W, ranked: &[RankedVideo], k: usize) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("Top {k} videos by like/view ratio for selected tags:").bold()
    )?;
    if ranked.is_empty() {
        writeln!(out, "No videos matched the selected tags.")?;
        return Ok(());
    }
    for video in ranked {
        writeln!(out, "{}. {} (ratio: {:.6})", video.rank, video.title, video.ratio)?;
    }
    Ok(())
}

pub fn write_tag_averages<W: Write>(out: &mut W, averages: &[TagAverage]) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        "Average like/view ratio for each selected tag:".bold()
    )?;
    for average in averages {
        match average.stats {
            Some(stats) => writeln!(
                out,
                " - {}: {:.6} ({} matches)",
                average.tag.cyan(),
                stats.mean,
                stats.count
            )?,
            None => writeln!(out, "Tag '{}' not found.", average.tag)?,
        }
    }
    Ok(())
}

pub fn write_benchmark<W: Write>(out: &mut W, report: &BenchmarkReport) -> io::Result<()> {
    writeln!(out, "\n{}", "Benchmark: heap vs hash table".bold())?;
    for (index, run) in report.runs.iter().enumerate() {
        writeln!(
            out,
            "Run {}: heap {:.3} ms | hash table {:.3} ms",
            index + 1,
            run.heap_ms(),
            run.hash_ms()
        )?;
    }
    writeln!(out, "Average heap: {:.3} ms", report.avg_heap_ms)?;
    writeln!(out, "Average hash table: {:.3} ms", report.avg_hash_ms)?;

    let verdict = report.verdict.to_string();
    let verdict = match report.verdict {
        Verdict::Tie => verdict.yellow(),
        Verdict::HeapFaster | Verdict::HashTableFaster => verdict.green(),
    };
    writeln!(out, "Result: {}", verdict.bold())
}
