//! The record-to-scene pipeline.
//!
//! Streams query result lines, sizes the gradient from the first data
//! record, filters low-density records, and assembles one styled polygon per
//! surviving record. The document is serialized only after the full input is
//! consumed, so a failing run never emits a partial overlay.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use grid_ref::{cell_extent, mgrs};
use kml_scene::document::SceneDocument;
use kml_scene::gradient::{GradientSpec, GradientTable};
use kml_scene::writer::write_kml;
use overlay_common::error::{OverlayError, OverlayResult};

use crate::config::VizConfig;
use crate::input::parse_record;

/// Counters reported after a successful run.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunSummary {
    /// Data records parsed (header lines excluded).
    pub records: usize,
    /// Records rendered as polygons.
    pub rendered: usize,
    /// Records dropped by the density threshold.
    pub filtered: usize,
    /// Size of the gradient table.
    pub gradient_steps: usize,
}

/// Gradient table plus the document it styles, created together on the
/// first data record.
struct Assembler {
    gradient: GradientTable,
    document: SceneDocument,
}

/// Run the full pipeline: read `input`, write the KML overlay to `out`.
pub fn run<R: BufRead, W: Write>(input: R, config: &VizConfig, out: W) -> OverlayResult<RunSummary> {
    let spec = GradientSpec {
        start: config.gradient_start,
        end: config.gradient_end,
        fill_alpha: config.fill_alpha,
    };

    let mut assembler: Option<Assembler> = None;
    let mut summary = RunSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if index < config.header_lines {
            debug!(line_number, "skipping header line");
            continue;
        }

        let record = parse_record(&line, line_number)?;
        summary.records += 1;

        // The first data record sizes the gradient, whether or not it
        // survives the filter below.
        let assembler = match assembler.as_mut() {
            Some(assembler) => assembler,
            None => {
                let gradient = GradientTable::build(record.density, &spec)?;
                info!(
                    steps = gradient.len(),
                    max_density = record.density,
                    "sized gradient from first record"
                );
                let document = SceneDocument::new(
                    "mgrs-doc",
                    "Cells",
                    "MGRS cells matching query",
                    &gradient,
                );
                assembler.insert(Assembler { gradient, document })
            }
        };

        if record.density <= config.threshold {
            summary.filtered += 1;
            debug!(
                line_number,
                grid_ref = %record.grid_ref,
                density = record.density,
                "record at or below threshold, skipped"
            );
            continue;
        }

        let step = assembler.gradient.style_for(record.density)?;
        let sw = mgrs::decode(&record.grid_ref)?;
        let extent = cell_extent(sw, config.cell_offset_m);

        assembler.document.push_cell(
            format!("mgrs-{}", line_number),
            record.grid_ref.clone(),
            format!("{} {}", record.grid_ref, record.density),
            &extent,
            config.altitude_m,
            &step.id,
        );
        summary.rendered += 1;
    }

    let Assembler { gradient, document } = assembler.ok_or(OverlayError::EmptyInput)?;
    summary.gradient_steps = gradient.len();

    info!(
        records = summary.records,
        rendered = summary.rendered,
        filtered = summary.filtered,
        "scene assembled, serializing"
    );
    write_kml(&document.into_kml(), out)?;

    Ok(summary)
}
