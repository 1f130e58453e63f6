// File: crates/demo/src/main.rs
// Summary: Demo loads language stats (and optional per-repo contributions) from CSV and
//          renders every chart family: leaderboards, bars, horizontal bars, pie and donut.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use langviz_core::{theme, BreakdownFn, ChartRenderer, LanguageTable, StatEntry};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Deserialize)]
struct StatRow {
    language: String,
    repos: u64,
    lines: u64,
    weighted: f64,
}

#[derive(Debug, Deserialize)]
struct RepoRow {
    language: String,
    repo: String,
    lines: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Args: [stats.csv] [breakdown.csv] [output_dir] [theme] [username]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stats_path = arg_or(&args, 0, "assets/sample_stats.csv");
    let breakdown_path = arg_or(&args, 1, "assets/sample_breakdown.csv");
    let output_dir = arg_or(&args, 2, "target/out");
    let theme = theme::find(&arg_or(&args, 3, "light"));
    let username = arg_or(&args, 4, "octocat");

    let rows = load_stats(Path::new(&stats_path))
        .with_context(|| format!("failed to load stats CSV '{stats_path}'"))?;
    if rows.is_empty() {
        anyhow::bail!("no statistics loaded - check headers/delimiter.");
    }
    info!(languages = rows.len(), theme = theme.name, "loaded statistics");

    let mut by_repos: Vec<StatEntry> = rows
        .iter()
        .map(|r| StatEntry::count(r.language.clone(), r.repos))
        .collect();
    by_repos.sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));

    let mut by_lines: Vec<StatEntry> = rows
        .iter()
        .map(|r| StatEntry::count(r.language.clone(), r.lines))
        .collect();
    by_lines.sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));

    let mut by_weighted: Vec<StatEntry> = rows
        .iter()
        .map(|r| StatEntry::score(r.language.clone(), r.weighted))
        .collect();
    by_weighted.sort_by(|a, b| b.value.as_f64().total_cmp(&a.value.as_f64()));

    let contributions = load_contributions(Path::new(&breakdown_path));
    let contributions_empty = contributions.is_empty();
    // `BreakdownFn` carries a `'static` object bound, so the closure must own the map.
    let breakdown = move |language: &str, top: usize| -> Vec<(String, u64)> {
        contributions
            .get(language)
            .map(|repos| repos.iter().take(top).cloned().collect())
            .unwrap_or_default()
    };
    let breakdown_fn: Option<&BreakdownFn> = if contributions_empty {
        None
    } else {
        Some(&breakdown)
    };

    let languages = LanguageTable::load("assets/languages.json");
    let mut renderer = ChartRenderer::new(&output_dir, theme)?.with_languages(languages);

    renderer.create_all_leaderboards(&username, &by_repos, &by_lines, &by_weighted, breakdown_fn, 5)?;
    renderer.create_bar_charts(&username, &by_repos, &by_lines, &by_weighted)?;
    renderer.create_horizontal_bar_charts(&username, &by_repos, &by_lines, &by_weighted)?;
    renderer.create_pie_charts(&username, &by_repos, &by_lines, &by_weighted, false)?;
    renderer.create_pie_charts(&username, &by_repos, &by_lines, &by_weighted, true)?;

    info!(output = %renderer.output_dir().display(), "chart set complete");
    Ok(())
}

fn arg_or(args: &[String], index: usize, default: &str) -> String {
    args.get(index).cloned().unwrap_or_else(|| default.to_string())
}

fn load_stats(path: &Path) -> Result<Vec<StatRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Per-repository line contributions, largest first per language.
/// A missing or unreadable file just means plain leaderboards.
fn load_contributions(path: &Path) -> HashMap<String, Vec<(String, u64)>> {
    let mut reader = match csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "no contribution breakdown, leaderboards stay plain");
            return HashMap::new();
        }
    };
    let mut map: HashMap<String, Vec<(String, u64)>> = HashMap::new();
    for record in reader.deserialize::<RepoRow>() {
        match record {
            Ok(row) => map.entry(row.language).or_default().push((row.repo, row.lines)),
            Err(err) => warn!(error = %err, "skipping malformed contribution row"),
        }
    }
    for repos in map.values_mut() {
        repos.sort_by(|a, b| b.1.cmp(&a.1));
    }
    map
}
