//! End-to-end runs of the download aggregator against a mock upstream

use anyhow::Result;
use dlbadge_lib::{BadgeFormat, SourceKind, produce_badge};
use dlbadge_tests::{MockUpstream, github_releases, spigot_page};
use serde_json::{Value, json};

fn read_json(path: &std::path::Path) -> Result<Value> {
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

#[tokio::test]
async fn worked_example_totals_120() -> Result<()> {
    let mut upstream = MockUpstream::start().await?;
    upstream.with_example_counts().await;
    let config = upstream.config();

    let run = produce_badge(&config).await?;

    assert_eq!(run.report.count_for(SourceKind::Modrinth), Some(100));
    assert_eq!(run.report.count_for(SourceKind::Github), Some(12));
    assert_eq!(run.report.count_for(SourceKind::Spigot), Some(8));
    assert_eq!(run.report.total(), 120);
    assert_eq!(
        read_json(&config.output)?,
        json!({"schemaVersion": 1, "label": "downloads", "message": "120", "color": "blue"})
    );
    Ok(())
}

#[tokio::test]
async fn each_failing_source_counts_zero() -> Result<()> {
    for failing in SourceKind::ALL {
        let mut upstream = MockUpstream::start().await?;
        let status = |kind| if kind == failing { 503 } else { 200 };

        upstream.modrinth(status(SourceKind::Modrinth), r#"{"downloads": 100}"#).await;
        upstream
            .github(status(SourceKind::Github), &github_releases(&[&[5, 7]]))
            .await;
        upstream
            .spigot(status(SourceKind::Spigot), &spigot_page("Total Downloads: 8"))
            .await;
        let config = upstream.config();

        let run = produce_badge(&config).await?;

        let expected = 120 - match failing {
            SourceKind::Modrinth => 100,
            SourceKind::Github => 12,
            SourceKind::Spigot => 8,
        };
        assert_eq!(run.report.total(), expected, "{failing} failing");
        assert_eq!(run.report.count_for(failing), Some(0));
        assert!(config.output.exists(), "badge still written when {failing} fails");
    }
    Ok(())
}

#[tokio::test]
async fn all_sources_down_still_writes_zero_badge() -> Result<()> {
    let mut upstream = MockUpstream::start().await?;
    upstream.modrinth(500, "").await;
    upstream.github(502, "").await;
    upstream.spigot(404, "").await;
    let config = upstream.config();

    let run = produce_badge(&config).await?;

    assert_eq!(run.report.total(), 0);
    assert_eq!(run.report.unavailable().count(), 3);
    assert_eq!(read_json(&config.output)?["message"], "0");
    Ok(())
}

#[tokio::test]
async fn github_sums_every_asset_of_every_release() -> Result<()> {
    let mut upstream = MockUpstream::start().await?;
    upstream
        .github(200, &github_releases(&[&[1, 2, 3], &[], &[10], &[0, 4]]))
        .await;
    let mut config = upstream.config();
    config.sources = vec![SourceKind::Github];

    let run = produce_badge(&config).await?;

    assert_eq!(run.report.total(), 20);
    Ok(())
}

#[tokio::test]
async fn spigot_thousands_separators_are_stripped() -> Result<()> {
    let mut upstream = MockUpstream::start().await?;
    upstream
        .spigot(200, &spigot_page("<b>Total Downloads:</b> 12,345"))
        .await;
    let mut config = upstream.config();
    config.sources = vec![SourceKind::Spigot];

    // Tag between label and number breaks the fixed pattern
    let run = produce_badge(&config).await?;
    assert_eq!(run.report.total(), 0);

    let mut upstream = MockUpstream::start().await?;
    upstream.spigot(200, &spigot_page("Total Downloads: 12,345")).await;
    let mut config = upstream.config();
    config.sources = vec![SourceKind::Spigot];

    let run = produce_badge(&config).await?;
    assert_eq!(run.report.total(), 12345);
    Ok(())
}

#[tokio::test]
async fn second_run_replaces_previous_artifact() -> Result<()> {
    let mut first = MockUpstream::start().await?;
    first.with_example_counts().await;
    let mut config = first.config();
    config.label = "installs".to_string();
    config.badge_color = "green".to_string();
    produce_badge(&config).await?;
    assert_eq!(read_json(&config.output)?["label"], "installs");

    let mut second = MockUpstream::start().await?;
    second.modrinth(200, r#"{"downloads": 1}"#).await;
    second.github(200, "[]").await;
    second.spigot(200, &spigot_page("")).await;
    let mut rerun = second.config();
    rerun.output = config.output.clone();
    produce_badge(&rerun).await?;

    assert_eq!(
        read_json(&config.output)?,
        json!({"schemaVersion": 1, "label": "downloads", "message": "1", "color": "blue"})
    );
    Ok(())
}

#[tokio::test]
async fn svg_output_embeds_total() -> Result<()> {
    let mut upstream = MockUpstream::start().await?;
    upstream.with_example_counts().await;
    let mut config = upstream.config();
    config.output = upstream.workdir().join("downloads.svg");

    let run = produce_badge(&config).await?;
    assert_eq!(run.artifact.format(), BadgeFormat::Svg);

    let svg = std::fs::read_to_string(&config.output)?;
    assert!(svg.contains(">120</text>"));
    assert!(svg.contains(">downloads</text>"));
    Ok(())
}

#[tokio::test]
async fn only_selected_sources_are_queried() -> Result<()> {
    let mut upstream = MockUpstream::start().await?;
    upstream.with_example_counts().await;
    let mut config = upstream.config();
    config.sources = vec![SourceKind::Modrinth, SourceKind::Github];

    let run = produce_badge(&config).await?;

    assert_eq!(run.report.sources.len(), 2);
    assert_eq!(run.report.count_for(SourceKind::Spigot), None);
    assert_eq!(run.report.total(), 112);
    Ok(())
}
