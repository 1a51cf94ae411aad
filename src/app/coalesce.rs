//! Line coalescing pipeline
//!
//! Input sources are spread round-robin over a fixed number of scoped producer
//! threads, all feeding one [`ConcurrentUniqueQueue`]. Once every producer has
//! finished, the queue is drained and written out in admission order.

use crate::app::cli::config::Settings;
use crate::core::styles::StyleRole;
use crate::queue::api::{ConcurrentUniqueQueue, QueueStats};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::thread;

#[derive(Debug, thiserror::Error)]
pub enum CoalesceError {
    #[error("Failed to read input {source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output: {source}")]
    Output {
        #[from]
        source: io::Error,
    },
}

/// Result type for coalescing operations
pub type CoalesceResult<T> = Result<T, CoalesceError>;

/// Where a producer reads lines from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map command-line paths to sources; no paths means stdin.
    ///
    /// Stdin is a single stream, so only the first `-` becomes a source.
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }
        let mut stdin_taken = false;
        paths
            .iter()
            .filter_map(|path| {
                if path.as_os_str() != "-" {
                    Some(InputSource::File(path.clone()))
                } else if stdin_taken {
                    log::warn!("Ignoring repeated '-': stdin is read once");
                    None
                } else {
                    stdin_taken = true;
                    Some(InputSource::Stdin)
                }
            })
            .collect()
    }

    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

/// Per-line normalisation applied before a line is offered to the queue
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFilter {
    pub trim: bool,
    pub ignore_blank: bool,
}

impl LineFilter {
    pub fn apply(&self, line: String) -> Option<String> {
        let line = if self.trim {
            line.trim().to_string()
        } else {
            line
        };
        if self.ignore_blank && line.trim().is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

/// Coalesces lines from many sources into a single duplicate-free stream
#[derive(Debug)]
pub struct Coalescer {
    queue: ConcurrentUniqueQueue<String>,
    workers: usize,
    filter: LineFilter,
}

impl Coalescer {
    pub fn new(settings: &Settings) -> Self {
        Self::with_options(
            settings.workers,
            settings.capacity,
            LineFilter {
                trim: settings.trim,
                ignore_blank: settings.ignore_blank,
            },
        )
    }

    pub fn with_options(workers: usize, capacity: usize, filter: LineFilter) -> Self {
        Self {
            queue: ConcurrentUniqueQueue::with_capacity(capacity),
            workers: workers.max(1),
            filter,
        }
    }

    pub fn queue(&self) -> &ConcurrentUniqueQueue<String> {
        &self.queue
    }

    pub fn stats(&self) -> QueueStats {
        self.queue.stats()
    }

    /// Read every source concurrently into the queue.
    ///
    /// Each source is read by exactly one thread, so its line order carries
    /// over into admission order. All producers run to completion; the first
    /// error encountered is returned.
    pub fn ingest(&self, sources: &[InputSource]) -> CoalesceResult<()> {
        let producer_count = self.workers.min(sources.len());
        if producer_count == 0 {
            return Ok(());
        }

        let mut groups: Vec<Vec<&InputSource>> = vec![Vec::new(); producer_count];
        for (index, source) in sources.iter().enumerate() {
            groups[index % producer_count].push(source);
        }

        log::info!(
            "Coalescing {} source(s) with {} producer thread(s)",
            sources.len(),
            producer_count
        );

        let results: Vec<CoalesceResult<()>> = thread::scope(|scope| {
            let handles: Vec<_> = groups
                .iter()
                .map(|group| scope.spawn(move || self.ingest_group(group)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        results.into_iter().collect()
    }

    fn ingest_group(&self, group: &[&InputSource]) -> CoalesceResult<()> {
        let mut first_error = None;
        for source in group {
            let outcome = source
                .open()
                .and_then(|reader| self.ingest_reader(reader))
                .map_err(|source_err| CoalesceError::Input {
                    source_name: source.name(),
                    source: source_err,
                });
            match outcome {
                Ok(admitted) => log::debug!("{}: {} line(s) admitted", source.name(), admitted),
                Err(e) => {
                    log::warn!("{}", e);
                    first_error.get_or_insert(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Offer every line of `reader` to the queue, returning how many were admitted
    pub fn ingest_reader<R: BufRead>(&self, reader: R) -> io::Result<usize> {
        let mut admitted = 0;
        for line in reader.lines() {
            if let Some(line) = self.filter.apply(line?) {
                if self.queue.enqueue(line) {
                    admitted += 1;
                }
            }
        }
        Ok(admitted)
    }

    /// Drain the queue into `writer`, one element per line, in FIFO order
    pub fn write_to<W: Write>(&self, mut writer: W) -> CoalesceResult<usize> {
        let items = self.queue.drain_all();
        for item in &items {
            writeln!(writer, "{}", item)?;
        }
        writer.flush()?;
        Ok(items.len())
    }
}

/// One-line summary of queue statistics for the terminal
pub fn format_stats(stats: &QueueStats, color: bool) -> String {
    format!(
        "{} {}  {} {}  {} {}",
        StyleRole::Label.paint("admitted", color),
        StyleRole::Count.paint(&stats.admitted.to_string(), color),
        StyleRole::Label.paint("duplicates", color),
        StyleRole::Rejected.paint(&stats.rejected.to_string(), color),
        StyleRole::Label.paint("coalesced", color),
        StyleRole::Value.paint(&format!("{:.1}%", stats.coalesce_ratio() * 100.0), color),
    )
}
