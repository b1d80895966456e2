use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use brandmap_model::{
    BrandMapSummary, FormRouteRecord, GenericVocabulary, NormalizationOptions,
    NormalizedIngredient, VaccineComponentSet,
};
use brandmap_normalization::NormalizationEngine;
use brandmap_standards::{VOCABULARY_ENV, load_vocabulary_or_empty};
use tracing::{debug, info, info_span};

use brandmap_cli::catalog::{default_output_path, read_catalog, write_brand_map};
use brandmap_cli::summary::{form_table, split_table, vaccine_table};

use crate::cli::{BuildArgs, FlipArgs, FormArgs, SplitArgs, VaccineArgs};

/// Result of `brandmap build`.
pub struct BuildResult {
    pub output: PathBuf,
    pub summary: BrandMapSummary,
}

fn engine_with_vocabulary(path: Option<&Path>) -> NormalizationEngine {
    NormalizationEngine::new(load_vocabulary_or_empty(path))
}

/// Embedded tables only; these commands never consult the vocabulary.
fn tables_engine() -> NormalizationEngine {
    NormalizationEngine::new(GenericVocabulary::empty())
}

pub fn run_build(args: &BuildArgs) -> Result<BuildResult> {
    let span = info_span!("build", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = NormalizationOptions::new()
        .with_flip_detection(!args.no_flip)
        .with_dedupe(!args.no_dedupe)
        .with_canonical_form_output(!args.raw_forms)
        .with_generic_synonyms(args.resolve_synonyms);
    let engine = engine_with_vocabulary(args.vocabulary.as_deref()).with_options(options);

    let rows = read_catalog(&args.input)?;
    info!(rows = rows.len(), "catalog read");

    let map = engine.build_brand_map(rows);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(chrono::Local::now().date_naive()));
    write_brand_map(&output, &map.rows)?;

    info!(
        rows = map.summary.rows_written,
        flipped = map.summary.rows_flipped,
        duplicates = map.summary.duplicates_dropped,
        duration_ms = start.elapsed().as_millis(),
        output = %output.display(),
        "brand map built"
    );
    Ok(BuildResult {
        output,
        summary: map.summary,
    })
}

pub fn run_split(args: &SplitArgs) -> Result<()> {
    let _guard = info_span!("split", texts = args.texts.len()).entered();
    let engine = tables_engine();
    let ingredients: Vec<NormalizedIngredient> =
        args.texts.iter().map(|text| engine.split(text)).collect();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ingredients).context("serialize ingredients")?
        );
    } else {
        println!("{}", split_table(&ingredients));
    }
    Ok(())
}

pub fn run_form(args: &FormArgs) -> Result<()> {
    let _guard = info_span!("form", forms = args.forms.len()).entered();
    let engine = tables_engine();
    let records: Vec<FormRouteRecord> = args
        .forms
        .iter()
        .map(|form| engine.classify_form(form))
        .collect();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).context("serialize form records")?
        );
    } else {
        println!("{}", form_table(&records));
    }
    Ok(())
}

pub fn run_vaccine(args: &VaccineArgs) -> Result<()> {
    let _guard = info_span!("vaccine").entered();
    let engine = tables_engine();
    let mut found = engine.match_vaccine_text(&args.text);
    if !found.is_match()
        && let Some(components) = engine.expand_acronym(&args.text)
    {
        debug!(text = %args.text, "resolved as bare acronym");
        found.acronym = engine.acronym_for(&components);
        found.components = Some(VaccineComponentSet::new(components));
    }
    let name = engine.normalize_vaccine_name(&args.text);
    println!("{}", vaccine_table(&found, name.as_ref()));
    Ok(())
}

/// Prints the verdict and returns whether the pair is swapped.
pub fn run_flip(args: &FlipArgs) -> Result<bool> {
    let _guard = info_span!("flip").entered();
    let engine = engine_with_vocabulary(args.vocabulary.as_deref());
    if engine.matcher().vocabulary().is_empty() {
        anyhow::bail!(
            "flip detection needs a generic vocabulary (--vocabulary or {VOCABULARY_ENV})"
        );
    }
    let flipped = engine.is_flip(&args.brand, &args.generic);
    if flipped {
        println!(
            "flipped: brand {:?} is a generic name; swap to brand {:?}, generic {:?}",
            args.brand, args.generic, args.brand
        );
    } else {
        println!("not flipped");
    }
    Ok(flipped)
}
