// File: crates/langviz-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests for every chart family, decoding the PNGs written.

use langviz_core::{BadgeError, BadgeTransport, ChartRenderer, StatEntry, Theme};

struct NoBadges;

impl BadgeTransport for NoBadges {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, BadgeError> {
        Err(BadgeError::Service { status: 503 })
    }
}

fn renderer(dir: &std::path::Path, theme: Theme) -> ChartRenderer {
    ChartRenderer::new(dir, theme)
        .expect("renderer")
        .with_transport(Box::new(NoBadges))
}

fn sample() -> Vec<StatEntry> {
    vec![
        StatEntry::count("Rust", 52_000),
        StatEntry::count("Go", 31_500),
        StatEntry::count("Python", 9_800),
    ]
}

#[test]
fn leaderboard_writes_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());
    let path = r
        .leaderboard(&sample(), "smoke - leaderboard", "leaderboard_by_lines.png", "Lines of Code")
        .expect("render should succeed")
        .expect("path for non-empty data");
    // 11in x 6in at 300 dpi; three rows stay on the height floor
    let (w, h) = image::image_dimensions(&path).expect("decodable png");
    assert_eq!((w, h), (3300, 1800));
}

#[test]
fn leaderboard_height_grows_with_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());
    let data: Vec<StatEntry> = (0..20)
        .map(|i| StatEntry::count(format!("Lang{i}"), 1_000 - i as u64))
        .collect();
    let path = r
        .leaderboard(&data, "smoke - tall", "leaderboard_by_repos.png", "Number of Repositories")
        .unwrap()
        .unwrap();
    // 20 rows x 0.4in beats the 6in floor
    let (w, h) = image::image_dimensions(&path).unwrap();
    assert_eq!((w, h), (3300, 2400));
}

#[test]
fn vertical_bar_chart_has_fixed_figure_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());
    let path = r
        .vertical_bar_chart(&sample(), "smoke - bars", "bar_by_repos.png", "Repository Count")
        .unwrap()
        .unwrap();
    let (w, h) = image::image_dimensions(&path).unwrap();
    assert_eq!((w, h), (3000, 1800));
}

#[test]
fn horizontal_bar_chart_caps_rows_at_fifteen() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());
    let data: Vec<StatEntry> = (0..30)
        .map(|i| StatEntry::count(format!("Lang{i}"), 900 - i as u64))
        .collect();
    let path = r
        .horizontal_bar_chart(&data, "smoke - hbars", "horizontal_bar_by_repos.png", "Repository Count")
        .unwrap()
        .unwrap();
    // capped at 15 rows, so the 6in height floor always wins
    let (w, h) = image::image_dimensions(&path).unwrap();
    assert_eq!((w, h), (3000, 1800));
}

#[test]
fn pie_and_donut_render_in_both_themes() {
    let dir = tempfile::tempdir().unwrap();

    let mut light = renderer(dir.path(), Theme::light());
    let pie = light
        .pie_chart(&sample(), "smoke - pie", "pie_by_repos.png", false)
        .unwrap()
        .unwrap();
    assert_eq!(image::image_dimensions(&pie).unwrap(), (2700, 2100));

    let mut dark = renderer(dir.path(), Theme::dark());
    let donut = dark
        .pie_chart(&sample(), "smoke - donut", "donut_by_repos.png", true)
        .unwrap()
        .unwrap();
    assert_eq!(image::image_dimensions(&donut).unwrap(), (2700, 2100));
}

#[test]
fn breakdown_leaderboard_renders_segments() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::dark());
    let by_lines = vec![
        StatEntry::count("Rust", 100_000),
        StatEntry::count("Go", 40_000),
    ];
    let breakdown = |language: &str, top: usize| -> Vec<(String, u64)> {
        assert_eq!(top, 5);
        match language {
            "Rust" => vec![("api".to_string(), 40_000), ("cli".to_string(), 30_000)],
            _ => Vec::new(),
        }
    };
    let path = r
        .leaderboard_with_breakdown(
            &by_lines,
            "smoke - breakdown",
            "leaderboard_by_lines.png",
            "Lines of Code",
            &breakdown,
            5,
        )
        .unwrap()
        .unwrap();
    let (w, h) = image::image_dimensions(&path).unwrap();
    assert_eq!((w, h), (3300, 1800));
}

#[test]
fn empty_input_is_a_quiet_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());

    assert!(r.leaderboard(&[], "empty", "x.png", "v").unwrap().is_none());
    assert!(r.vertical_bar_chart(&[], "empty", "x.png", "v").unwrap().is_none());
    assert!(r.horizontal_bar_chart(&[], "empty", "x.png", "v").unwrap().is_none());
    assert!(r.pie_chart(&[], "empty", "x.png", false).unwrap().is_none());
    let no_parts = |_: &str, _: usize| -> Vec<(String, u64)> { Vec::new() };
    assert!(r
        .leaderboard_with_breakdown(&[], "empty", "x.png", "v", &no_parts, 5)
        .unwrap()
        .is_none());

    assert!(!dir.path().join("x.png").exists());
}

#[test]
fn all_zero_pie_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());
    let zeros = vec![StatEntry::count("Rust", 0), StatEntry::count("Go", 0)];
    assert!(r.pie_chart(&zeros, "zeros", "pie.png", false).unwrap().is_none());
    assert!(!dir.path().join("pie.png").exists());
}

#[test]
fn drivers_write_the_full_chart_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut r = renderer(dir.path(), Theme::light());

    let by_repos = sample();
    let by_lines = sample();
    let by_weighted = vec![
        StatEntry::score("Rust", 87.5),
        StatEntry::score("Go", 55.25),
        StatEntry::score("Python", 12.0),
    ];

    r.create_all_leaderboards("octocat", &by_repos, &by_lines, &by_weighted, None, 5)
        .unwrap();
    r.create_bar_charts("octocat", &by_repos, &by_lines, &by_weighted).unwrap();
    r.create_horizontal_bar_charts("octocat", &by_repos, &by_lines, &by_weighted)
        .unwrap();
    r.create_pie_charts("octocat", &by_repos, &by_lines, &by_weighted, false).unwrap();
    r.create_pie_charts("octocat", &by_repos, &by_lines, &by_weighted, true).unwrap();

    for name in [
        "leaderboard_by_repos.png",
        "leaderboard_by_lines.png",
        "leaderboard_by_weighted.png",
        "bar_by_repos.png",
        "bar_by_lines.png",
        "bar_by_weighted.png",
        "horizontal_bar_by_repos.png",
        "horizontal_bar_by_lines.png",
        "horizontal_bar_by_weighted.png",
        "pie_by_repos.png",
        "pie_by_lines.png",
        "pie_by_weighted.png",
        "donut_by_repos.png",
        "donut_by_lines.png",
        "donut_by_weighted.png",
    ] {
        let path = dir.path().join(name);
        assert!(path.exists(), "missing {name}");
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "{name} should be non-empty");
    }
}
