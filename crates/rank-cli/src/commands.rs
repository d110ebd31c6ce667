//! Subcommand implementations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use rank_ingest::{IngestOptions, read_scored_csv};
use rank_model::{ClassCount, ColumnRole, RankingSummary};
use rank_output::write_scored_csv;
use rank_transform::{ScoredFrame, generate_prediction_ranking, infer_scored_frame};

use crate::cli::{InspectArgs, RankArgs};

/// Run the `rank` subcommand: ingest, infer, rank, write.
pub fn run_rank(args: &RankArgs) -> Result<RankingSummary> {
    let options = IngestOptions::default().with_skip_rows(args.skip_rows);
    let df = read_scored_csv(&args.input, &options)?;
    let mut frame = infer_scored_frame(df)?;
    for line in frame.describe() {
        tracing::debug!("{line}");
    }

    let requested = args.ranks as usize;
    let outcome = generate_prediction_ranking(&mut frame, requested, !args.keep_old_confidences)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_scored_csv(&frame, &output)?;

    let summary = RankingSummary {
        input: args.input.clone(),
        output,
        rows: outcome.rows,
        classes: outcome.classes,
        requested_ranks: requested,
        effective_ranks: outcome.effective_ranks,
        removed_old_confidences: !args.keep_old_confidences,
        rank_one_counts: rank_one_distribution(&frame)?,
    };
    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&summary).context("serialize run summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("write summary json: {}", path.display()))?;
    }
    Ok(summary)
}

/// Run the `inspect` subcommand: ingest and infer only.
pub fn run_inspect(args: &InspectArgs) -> Result<ScoredFrame> {
    let options = IngestOptions::default().with_skip_rows(args.skip_rows);
    let df = read_scored_csv(&args.input, &options)?;
    let frame = infer_scored_frame(df)?;
    Ok(frame)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("ranked");
    input.with_file_name(format!("{stem}_ranked.csv"))
}

/// Rows per class at rank 1, in mapping order.
fn rank_one_distribution(frame: &ScoredFrame) -> Result<Vec<ClassCount>> {
    let Some(meta) = frame
        .columns()
        .iter()
        .find(|meta| meta.role == ColumnRole::RankedLabel(1))
    else {
        return Ok(Vec::new());
    };
    let Some(mapping) = meta.mapping.as_ref() else {
        return Ok(Vec::new());
    };
    let indices = frame.data().column(&meta.name)?.u32()?;
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for index in indices.into_iter().flatten() {
        *counts.entry(index).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .filter_map(|(index, rows)| {
            mapping.label_of(index).map(|class| ClassCount {
                class: class.to_string(),
                rows,
            })
        })
        .collect())
}
