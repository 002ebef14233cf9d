//! # Generate Subcommand
//!
//! Reads the OSCAL catalog and the four baseline profiles, runs the
//! enrichment engine, and writes the output document. Invalid
//! configuration (an unrecognized minimum-baseline value) is rejected by
//! clap before any file is touched.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};

use ncsb_core::{BaselineTier, Timestamp};
use ncsb_engine::{
    assemble, report_orphan_baselines, BaselineSet, BaselineSets, MinBaseline, RuleConfig,
};
use ncsb_oscal::{parse_catalog, parse_profile};

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the SP 800-53 Rev. 5 OSCAL catalog JSON.
    #[arg(long, default_value = "NIST_SP-800-53_rev5_catalog.json")]
    pub catalog: PathBuf,

    /// Path to the Low baseline OSCAL profile JSON.
    #[arg(long, default_value = "NIST_SP-800-53_rev5_LOW-baseline_profile.json")]
    pub baseline_low: PathBuf,

    /// Path to the Moderate baseline OSCAL profile JSON.
    #[arg(long, default_value = "NIST_SP-800-53_rev5_MODERATE-baseline_profile.json")]
    pub baseline_moderate: PathBuf,

    /// Path to the High baseline OSCAL profile JSON.
    #[arg(long, default_value = "NIST_SP-800-53_rev5_HIGH-baseline_profile.json")]
    pub baseline_high: PathBuf,

    /// Path to the Privacy baseline OSCAL profile JSON.
    #[arg(long, default_value = "NIST_SP-800-53_rev5_PRIVACY-baseline_profile.json")]
    pub baseline_privacy: PathBuf,

    /// Minimum baseline tier for the non-negotiable flag.
    #[arg(long, value_enum, default_value_t = MinBaselineArg::Moderate)]
    pub non_negotiable_min_baseline: MinBaselineArg,

    /// Output path for the enriched catalog JSON.
    #[arg(long, default_value = "nist80053r5_full_catalog_enriched.json")]
    pub out: PathBuf,
}

/// The two valid non-negotiable thresholds, as a clap value enum so any
/// other value is a usage error before processing starts.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinBaselineArg {
    /// Controls in Moderate or High are non-negotiable.
    Moderate,
    /// Only controls in High are non-negotiable.
    High,
}

impl From<MinBaselineArg> for MinBaseline {
    fn from(arg: MinBaselineArg) -> Self {
        match arg {
            MinBaselineArg::Moderate => MinBaseline::Moderate,
            MinBaselineArg::High => MinBaseline::High,
        }
    }
}

/// Run the generate subcommand.
pub fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    let config = RuleConfig::with_min_baseline(args.non_negotiable_min_baseline.into());

    let controls = parse_catalog(&read(&args.catalog)?)
        .with_context(|| format!("failed to parse catalog {}", args.catalog.display()))?;
    tracing::info!(count = controls.len(), "parsed catalog");

    let sets = BaselineSets::new(
        load_profile(&args.baseline_low, BaselineTier::Low)?,
        load_profile(&args.baseline_moderate, BaselineTier::Moderate)?,
        load_profile(&args.baseline_high, BaselineTier::High)?,
        load_profile(&args.baseline_privacy, BaselineTier::Privacy)?,
    )?;

    report_orphan_baselines(&controls, &sets);

    let enriched = assemble(&controls, &sets, &config, Timestamp::now());

    let file = fs::File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &enriched)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    writer.flush()?;

    println!("Wrote {} controls to {}", enriched.count, args.out.display());
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_profile(path: &Path, tier: BaselineTier) -> anyhow::Result<BaselineSet> {
    let ids = parse_profile(&read(path)?)
        .with_context(|| format!("failed to parse {tier} baseline profile {}", path.display()))?;
    tracing::debug!(tier = %tier, count = ids.len(), "parsed baseline profile");
    Ok(BaselineSet::from_ids(tier, ids))
}
