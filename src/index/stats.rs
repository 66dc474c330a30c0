use crate::index::snapshot::IndexSnapshot;
use crate::index::types::BuildStats;
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

/// Machine-readable form of the `stats` output
#[derive(Serialize)]
struct StatsReport<'a> {
    root: &'a Path,
    #[serde(flatten)]
    stats: &'a BuildStats,
    lines: usize,
    by_extension: Vec<(String, usize)>,
}

/// One-line build summary printed after every build
pub fn build_summary(stats: &BuildStats) -> String {
    let mut line = format!(
        "Indexed {} files in {:.2} seconds.",
        stats.files_indexed,
        stats.elapsed_seconds()
    );
    if stats.files_skipped > 0 {
        line.push_str(&format!(" ({} files could not be read)", stats.files_skipped));
    }
    line
}

/// Display index statistics
pub fn show_stats(snapshot: &IndexSnapshot) {
    let stats = snapshot.stats();

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Root path:        {}", snapshot.root().display());
    println!("Files indexed:    {}", stats.files_indexed);
    println!("Files skipped:    {}", stats.files_skipped);
    println!("Distinct terms:   {}", stats.terms);
    println!("Postings:         {}", stats.postings);
    println!("Build time:       {:.2}s", stats.elapsed_seconds());

    println!("Lines stored:     {}", total_lines(snapshot));

    let by_ext = count_by_extension(snapshot);
    if !by_ext.is_empty() {
        println!();
        println!("Files by extension:");
        for (ext, count) in by_ext.iter().take(15) {
            println!("  {:15} {}", ext, count);
        }
        if by_ext.len() > 15 {
            println!("  ... and {} more", by_ext.len() - 15);
        }
    }
}

/// Print the statistics of `snapshot` as a JSON object
pub fn print_stats_json<W: Write>(out: &mut W, snapshot: &IndexSnapshot) -> io::Result<()> {
    let report = StatsReport {
        root: snapshot.root(),
        stats: snapshot.stats(),
        lines: total_lines(snapshot),
        by_extension: count_by_extension(snapshot),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn total_lines(snapshot: &IndexSnapshot) -> usize {
    snapshot.store().iter().map(|(_, d)| d.line_count()).sum()
}

/// Document count per extension, most common first
fn count_by_extension(snapshot: &IndexSnapshot) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for (_, doc) in snapshot.store().iter() {
        let ext = doc
            .path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_else(|| "(none)".to_string());
        *counts.entry(ext).or_insert(0) += 1;
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
