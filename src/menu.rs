//! Interactive menu loop.
//!
//! Reads choices line by line from any `BufRead` and renders to any `Write`,
//! so the whole dialogue can be driven from a test with in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::bench::Stopwatch;
use crate::config::Config;
use crate::error::AnalyzerError;
use crate::report;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    SelectTags,
    ChooseStructure,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Heap,
    HashTable,
    Compare,
}

pub struct Menu<'a, R, W, S: ?Sized> {
    input: R,
    output: W,
    config: &'a Config,
    stopwatch: &'a mut S,
}

impl<'a, R, W, S> Menu<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: Stopwatch + ?Sized,
{
    pub fn new(input: R, output: W, config: &'a Config, stopwatch: &'a mut S) -> Self {
        Self {
            input,
            output,
            config,
            stopwatch,
        }
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Run until the user exits or input ends
    /// Role: Dispatch menu choices against the session
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt(
                "\n1. Select tag(s)\n2. Choose data structure (Heap / Hash Table)\n3. Exit\n> ",
            )?
            else {
                break;
            };

            let choice = match line.trim() {
                "1" => MainChoice::SelectTags,
                "2" => MainChoice::ChooseStructure,
                "3" => MainChoice::Exit,
                other => {
                    log::debug!("Unrecognised menu input: {other:?}");
                    writeln!(self.output, "Invalid input.")?;
                    continue;
                }
            };

            match choice {
                MainChoice::SelectTags => {
                    let Some(tags) =
                        self.prompt("Enter tags separated by commas (e.g., music,gaming): ")?
                    else {
                        break;
                    };
                    let count = session.select_tags(&tags);
                    log::info!("Selected {count} tag(s)");
                    writeln!(self.output, "Tags selected.")?;
                }
                MainChoice::ChooseStructure => {
                    let Some(line) = self.prompt(
                        "Choose data structure:\n1. Heap\n2. Hash Table\n3. Compare both (benchmark)\n> ",
                    )?
                    else {
                        break;
                    };
                    let strategy = match line.trim() {
                        "1" => Some(Strategy::Heap),
                        "2" => Some(Strategy::HashTable),
                        "3" => Some(Strategy::Compare),
                        _ => None,
                    };

                    if session.selection().is_none() {
                        writeln!(self.output, "Select tags first.")?;
                        continue;
                    }
                    match strategy {
                        Some(strategy) => self.analyze(session, strategy)?,
                        None => writeln!(self.output, "Invalid choice.")?,
                    }
                }
                MainChoice::Exit => break,
            }
        }

        writeln!(self.output, "Exiting... Goodbye!")?;
        self.output.flush()
    }

    fn analyze(&mut self, session: &Session, strategy: Strategy) -> io::Result<()> {
        let top_k = self.config.top_k;
        let outcome = match strategy {
            Strategy::Heap => session
                .top_k(top_k)
                .map(|ranked| report::write_top_k(&mut self.output, &ranked, top_k)),
            Strategy::HashTable => session
                .tag_averages()
                .map(|averages| report::write_tag_averages(&mut self.output, &averages)),
            Strategy::Compare => session
                .benchmark(top_k, self.config.benchmark_runs, &mut *self.stopwatch)
                .map(|bench_report| report::write_benchmark(&mut self.output, &bench_report)),
        };

        match outcome {
            Ok(written) => written,
            Err(AnalyzerError::EmptySelection) => writeln!(self.output, "Select tags first."),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }
}
