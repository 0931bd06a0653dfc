//! Mastermind CLI support
//!
//! Loading and rendering helpers behind the `mastermind` binary. Rendering
//! returns strings so the binary only has to print them.

use anyhow::Context;
use mastermind_core::{
    fallback_mind_map, mind_map_or_fallback, DayPlan, MindMap, MindMapNode, NodeRecord,
};
use mastermind_webhook::WebhookConfig;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Install the tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info`. Logs go to stderr so command
/// output stays clean on stdout.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load a mind map from a JSON file, or the fallback map without one
///
/// A file that is not JSON, or not a mind map, yields the fallback map just
/// like a bad webhook reply does.
///
/// # Errors
/// Returns an error only if the file cannot be read.
pub fn load_mind_map(path: Option<&Path>) -> anyhow::Result<MindMap> {
    let Some(path) = path else {
        return Ok(fallback_mind_map(""));
    };

    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(mind_map_or_fallback(&value, "")),
        Err(e) => {
            tracing::warn!("{} is not JSON ({}), using fallback data", path.display(), e);
            Ok(fallback_mind_map(""))
        }
    }
}

/// Resolve webhook configuration: file, then environment, then `--url`
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub fn webhook_config(config: Option<&Path>, url: Option<&str>) -> anyhow::Result<WebhookConfig> {
    let base = match config {
        Some(path) => WebhookConfig::load(path)?,
        None => WebhookConfig::default(),
    };
    Ok(base
        .with_env_overrides()
        .with_url_override(url.map(str::to_owned)))
}

/// Render the forest as an indented tree
#[must_use]
pub fn render_tree(map: &MindMap) -> String {
    let mut out = format!("Mind Map: {}\n", map.idea());
    for visit in mastermind_core::pre_order(map.nodes()) {
        let indent = "  ".repeat(visit.level);
        let _ = writeln!(out, "{indent}- {} (#{})", visit.node.title(), visit.node.id());
    }
    out
}

/// Render a single node and its direct children
#[must_use]
pub fn render_node(node: &MindMapNode) -> String {
    let mut out = format!("#{} {}\n", node.id(), node.title());
    if node.is_leaf() {
        out.push_str("  (no sub-topics)\n");
    }
    for child in node.children() {
        let _ = writeln!(out, "  - {} (#{})", child.title(), child.id());
    }
    out
}

/// Render titles as a numbered list
#[must_use]
pub fn render_titles(titles: &[String]) -> String {
    let mut out = String::new();
    for (index, title) in titles.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, title);
    }
    out
}

/// Render outline rows as tab-separated columns
#[must_use]
pub fn render_outline(records: &[NodeRecord]) -> String {
    let mut out = String::from("id\tparent\tlevel\torder\ttitle\n");
    for record in records {
        let parent = record
            .parent
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            record.id, parent, record.level, record.order_index, record.title
        );
    }
    out
}

/// Render a learning schedule
#[must_use]
pub fn render_schedule(plans: &[DayPlan], day_count: i64) -> String {
    let mut out = format!("Your {day_count}-Day Learning Plan\n");
    if plans.is_empty() {
        out.push_str("\nNothing to schedule.\n");
    }
    for plan in plans {
        let _ = writeln!(out, "\nDay {}", plan.day);
        for (index, topic) in plan.topics.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, topic);
        }
    }
    out
}

/// Pretty JSON for any serializable value
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mastermind_core::{partition_by_day, NodeId, FALLBACK_IDEA};
    use mastermind_test_utils::{create_test_mind_map, malformed_mind_map_json, target_market_json};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn temp_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_without_input_gives_fallback() {
        let map = load_mind_map(None).unwrap();
        assert_eq!(map.idea(), FALLBACK_IDEA);
        assert_eq!(map.summary().node_count, 10);
    }

    #[test]
    fn load_valid_file() {
        let file = temp_file(&target_market_json("Smart Gym").to_string());
        let map = load_mind_map(Some(file.path())).unwrap();
        assert_eq!(map, create_test_mind_map("Smart Gym"));
    }

    #[test]
    fn load_malformed_file_falls_back() {
        let file = temp_file(&malformed_mind_map_json().to_string());
        assert_eq!(load_mind_map(Some(file.path())).unwrap(), fallback_mind_map(""));

        let file = temp_file("not json at all");
        assert_eq!(load_mind_map(Some(file.path())).unwrap(), fallback_mind_map(""));
    }

    #[test]
    fn load_non_utf8_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'{', 0x80]).unwrap();
        assert_eq!(load_mind_map(Some(file.path())).unwrap(), fallback_mind_map(""));
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_mind_map(Some(Path::new("/nonexistent/map.json"))).is_err());
    }

    #[test]
    fn url_flag_wins_over_file() {
        let file = temp_file("url = \"http://from-file/hook\"\ntimeout_ms = 500\n");
        let config = webhook_config(Some(file.path()), Some("http://from-flag/hook")).unwrap();
        assert_eq!(config.url, "http://from-flag/hook");
        assert_eq!(config.timeout_ms, 500);
    }

    #[test]
    fn tree_rendering() {
        let rendered = render_tree(&create_test_mind_map("Smart Gym"));
        assert_eq!(
            rendered,
            "Mind Map: Smart Gym\n- Target Market (#1)\n  - Athletes (#2)\n  - Beginners (#3)\n"
        );
    }

    #[test]
    fn node_rendering() {
        let map = create_test_mind_map("x");
        let root = map.find(NodeId(1)).unwrap();
        assert_eq!(
            render_node(root),
            "#1 Target Market\n  - Athletes (#2)\n  - Beginners (#3)\n"
        );
        let leaf = map.find(NodeId(2)).unwrap();
        assert_eq!(render_node(leaf), "#2 Athletes\n  (no sub-topics)\n");
    }

    #[test]
    fn outline_rendering() {
        let map = create_test_mind_map("x");
        let rendered = render_outline(&map.records());
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[1], "1\t-\t0\t0\tTarget Market");
        assert_eq!(lines[3], "3\t1\t1\t1\tBeginners");
    }

    #[test]
    fn schedule_rendering() {
        let titles = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let plans = partition_by_day(&titles, 2);
        assert_eq!(
            render_schedule(&plans, 2),
            "Your 2-Day Learning Plan\n\nDay 1\n  1. a\n  2. b\n\nDay 2\n  1. c\n"
        );
        assert!(render_schedule(&[], 3).contains("Nothing to schedule"));
    }

    #[test]
    fn titles_rendering() {
        let rendered = render_titles(&["one".to_string(), "two".to_string()]);
        assert_eq!(rendered, "  1. one\n  2. two\n");
    }
}
