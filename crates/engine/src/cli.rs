//! Command-line argument definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use laundry_domain::{RulesetCatalogue, Talent};

use crate::audit::audit_catalogue;
use crate::automation::{build_support_forecast, SupportTest, DEFAULT_DN, MAX_POOL};
use crate::config::EngineConfig;
use crate::i18n::{Localize, Translations};
use crate::loader::{load_actor, load_catalogue};
use crate::prerequisites::{describe_result, evaluate_prerequisites, EvaluationResult};

/// Rules engine for the Laundry tabletop RPG.
#[derive(Parser, Debug)]
#[command(name = "laundry-engine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Ruleset catalogue JSON (overrides LAUNDRY_CATALOGUE).
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,

    /// Translation table JSON (overrides LAUNDRY_LOCALE).
    #[arg(long, global = true)]
    pub locale: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check an actor against talent prerequisites.
    Check(CheckArgs),

    /// Forecast the success chance of a supported test.
    Forecast(ForecastArgs),

    /// Lint the ruleset catalogue.
    Audit(AuditArgs),
}

/// Arguments for the check command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Actor JSON exported from the host.
    pub actor: PathBuf,

    /// Only check this catalogue talent.
    #[arg(long)]
    pub talent: Option<String>,

    /// Print evaluation results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the forecast command.
#[derive(Parser, Debug)]
pub struct ForecastArgs {
    /// Dice in the pool.
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_POOL))]
    pub pool: i64,

    /// Difficulty number (2-6).
    #[arg(long, default_value_t = DEFAULT_DN)]
    pub dn: i64,

    /// Successes required.
    #[arg(long, default_value_t = 1)]
    pub complexity: i64,

    /// Successes granted before rolling.
    #[arg(long, default_value_t = 0)]
    pub bonus: i64,

    /// Print the forecast as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the audit command.
#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Text to print and whether the process should exit successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TalentReport<'a> {
    talent: &'a str,
    #[serde(flatten)]
    result: &'a EvaluationResult,
}

/// Runs one command with configuration already resolved.
pub fn run(command: &Command, config: &EngineConfig) -> anyhow::Result<CommandOutput> {
    match command {
        Command::Check(args) => run_check(args, config),
        Command::Forecast(args) => run_forecast(args),
        Command::Audit(args) => run_audit(args, config),
    }
}

fn run_check(args: &CheckArgs, config: &EngineConfig) -> anyhow::Result<CommandOutput> {
    let actor = load_actor(&args.actor)?;
    let catalogue = load_catalogue(config.catalogue_path.as_deref())?;
    let translations = match &config.locale_path {
        Some(path) => Some(Translations::load(path)?),
        None => None,
    };

    let talents = selected_talents(&catalogue, args.talent.as_deref())?;
    let results: Vec<(&Talent, EvaluationResult)> = talents
        .into_iter()
        .map(|talent| (talent, evaluate_prerequisites(&actor, talent, &catalogue)))
        .collect();

    if args.json {
        let reports: Vec<TalentReport<'_>> = results
            .iter()
            .map(|(talent, result)| TalentReport {
                talent: &talent.name,
                result,
            })
            .collect();
        let text = serde_json::to_string_pretty(&reports).context("serializing results")?;
        return Ok(CommandOutput::ok(text));
    }

    if results.is_empty() {
        return Ok(CommandOutput::ok("Catalogue has no talents to check.".to_string()));
    }
    let i18n = translations.as_ref().map(|t| t as &dyn Localize);
    let lines: Vec<String> = results
        .iter()
        .map(|(talent, result)| {
            format!(
                "{} [{}]: {}",
                talent.name,
                result.status,
                describe_result(result, i18n)
            )
        })
        .collect();
    Ok(CommandOutput::ok(lines.join("\n")))
}

fn selected_talents<'a>(
    catalogue: &'a RulesetCatalogue,
    name: Option<&str>,
) -> anyhow::Result<Vec<&'a Talent>> {
    match name {
        Some(name) => match catalogue.find_talent(name) {
            Some(talent) => Ok(vec![talent]),
            None => bail!("Talent '{}' is not in the catalogue", name),
        },
        None => Ok(catalogue.talents.iter().collect()),
    }
}

fn run_forecast(args: &ForecastArgs) -> anyhow::Result<CommandOutput> {
    let test = SupportTest::new(args.pool, args.dn, args.complexity).with_bonus(args.bonus);
    let forecast = build_support_forecast(&test);

    if args.json {
        let text = serde_json::to_string_pretty(&forecast).context("serializing forecast")?;
        return Ok(CommandOutput::ok(text));
    }

    Ok(CommandOutput::ok(format!(
        "{} dice at DN {}, complexity {} (+{} bonus): {:.1}% chance, {} success(es) needed, {:.2} expected",
        forecast.pool,
        forecast.dn,
        forecast.complexity,
        forecast.bonus_successes,
        forecast.chance * 100.0,
        forecast.required_successes,
        forecast.expected_successes
    )))
}

fn run_audit(args: &AuditArgs, config: &EngineConfig) -> anyhow::Result<CommandOutput> {
    let catalogue = load_catalogue(config.catalogue_path.as_deref())?;
    let report = audit_catalogue(&catalogue);
    let success = report.is_clean();

    let text = if args.json {
        serde_json::to_string_pretty(&report).context("serializing audit report")?
    } else {
        let mut lines: Vec<String> = report
            .errors
            .iter()
            .map(|e| format!("error: {}", e))
            .chain(report.warnings.iter().map(|w| format!("warning: {}", w)))
            .collect();
        lines.push(format!(
            "{} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        ));
        lines.join("\n")
    };

    Ok(CommandOutput { text, success })
}
