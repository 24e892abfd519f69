//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use smallgroup_core::division::DEFAULT_MAX_PASSES;
use smallgroup_core::{Division, GroupDivisionService, Member, PartitionOptimizer, Roster, TargetSize};
use tracing::{debug, info};

use crate::cli::{ConfigArgs, DivideArgs, RosterArgs};
use crate::config::{Config, DEFAULT_TARGET_SIZE};

/// Settings for one `divide` run after flags, env, and config are combined.
#[derive(Debug, Clone, PartialEq)]
struct DivideSettings {
    target_size: i64,
    max_passes: usize,
    seed: Option<u64>,
}

impl DivideSettings {
    fn resolve(args: &DivideArgs, config: &Config) -> Self {
        Self {
            target_size: args.size.or(config.target_size).unwrap_or(DEFAULT_TARGET_SIZE),
            max_passes: args.max_passes.or(config.max_passes).unwrap_or(DEFAULT_MAX_PASSES),
            seed: args.seed.or(config.seed),
        }
    }
}

fn roster_path(args: &RosterArgs, config: &Config) -> Result<PathBuf> {
    args.roster
        .clone()
        .or_else(|| config.roster_path.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No roster given. Pass --roster, set SMALLGROUP_ROSTER, or save one with `smallgroup config --roster`")
        })
}

fn load_present(args: &RosterArgs, config: &Config) -> Result<(NaiveDate, Vec<Member>)> {
    let path = roster_path(args, config)?;
    let roster = Roster::load(&path)
        .with_context(|| format!("Failed to load roster: {}", path.display()))?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let present = roster.present_on(date);
    debug!(%date, present = present.len(), "Resolved present members");
    Ok((date, present))
}

/// Stderr notes for groups that deserve a second look.
fn warnings(division: &Division) -> Vec<String> {
    let mut notes: Vec<String> = division
        .groups
        .iter()
        .filter(|g| g.imbalanced)
        .map(|g| format!("Group {} has a lone member of one gender", g.number))
        .collect();
    notes.extend(
        division
            .groups
            .iter()
            .filter(|g| g.leader_count == 0)
            .map(|g| format!("Group {} has no counselor or facilitator", g.number)),
    );
    if division.unoptimized {
        notes.push("Optimizer stopped at its pass cap; groups may not be fully mixed".to_string());
    }
    notes
}

pub fn divide(args: DivideArgs, config: &Config) -> Result<()> {
    let settings = DivideSettings::resolve(&args, config);
    let (date, present) = load_present(&args.roster, config)?;

    let mut service = GroupDivisionService::new(PartitionOptimizer::new(settings.max_passes));
    if let Some(seed) = settings.seed {
        service = service.with_seed(seed);
    }
    let division = service.divide(&present, settings.target_size)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&division)?);
        return Ok(());
    }

    if division.is_empty() {
        eprintln!("Nothing to divide: nobody is marked present on {}", date);
        return Ok(());
    }

    print!("{}", division.export_text);
    for note in warnings(&division) {
        eprintln!("warning: {}", note);
    }
    Ok(())
}

pub fn present(args: RosterArgs, config: &Config) -> Result<()> {
    let (date, present) = load_present(&args, config)?;
    println!("{} present on {}", present.len(), date);
    for member in &present {
        println!(
            "- {} ({}, {}, {})",
            member.display_name(),
            member.gender,
            member.faith_status,
            member.role
        );
    }
    Ok(())
}

pub fn config(args: ConfigArgs, mut config: Config) -> Result<()> {
    if args.has_updates() {
        if let Some(size) = args.size {
            TargetSize::try_from(size)?;
        }
        config.merge(Config {
            roster_path: args.roster,
            target_size: args.size,
            max_passes: args.max_passes,
            seed: args.seed,
        });
        let path = config.save()?;
        info!(path = %path.display(), "Saved config");
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
