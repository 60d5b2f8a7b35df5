//! Integration tests for export and re-import between two hosts
//!
//! A page is exported from one in-memory host, sent through JSON text, and
//! imported into a second host. Exporting the second host must give back the
//! same design, apart from ids the hosts assign themselves.

use design_io::{
    ExportDesign, ExportResult, ImportDesign, InMemoryRepository, NodeRepository, RecordingNotifier,
};
use design_model::{
    Color, DesignNode, Effect, FontName, LayoutMode, NodeKind, Padding, Paint, PaintKind,
    ScaleMode, TextSegment, Transform, Vector2,
};
use serde_json::Value;

/// A page touching most property groups, with the component first so both
/// hosts end up with the same root order
fn sample_page() -> Vec<DesignNode> {
    let button = DesignNode::new("Button", NodeKind::Component)
        .with_component_key("button-key")
        .with_size(120.0, 40.0)
        .with_fills(vec![Paint::solid(Color::rgb(0.2, 0.4, 0.9))])
        .with_child(
            DesignNode::new("Label", NodeKind::Text)
                .with_text("Sign up", FontName::new("Inter", "Semi Bold"), 14.0),
        );

    let mut hero = DesignNode::new("Hero", NodeKind::Frame)
        .with_position(0.0, 0.0)
        .with_size(1440.0, 720.0)
        .with_auto_layout(LayoutMode::Vertical, 24.0, Padding::symmetric(48.0, 96.0))
        .with_fills(vec![Paint::linear_gradient(Color::WHITE, Color::rgb(0.1, 0.1, 0.12))])
        .with_effects(vec![Effect::drop_shadow(
            Color::rgba(0.0, 0.0, 0.0, 0.25),
            Vector2::new(0.0, 4.0),
            12.0,
        )])
        .with_children(vec![
            DesignNode::new("Headline", NodeKind::Text)
                .with_text("Design faster", FontName::new("Inter", "Bold"), 48.0)
                .with_text_segments(vec![
                    TextSegment::new(0, 6).with_font(FontName::new("Inter", "Bold"), 48.0),
                    TextSegment::new(7, 13)
                        .with_fills(vec![Paint::solid(Color::rgb(0.9, 0.3, 0.2))]),
                ]),
            DesignNode::new("Screenshot", NodeKind::Rectangle)
                .with_size(640.0, 400.0)
                .with_fills(vec![Paint::embedded_image(vec![0x89, 0x50, 0x4e, 0x47], ScaleMode::Fill)])
                .with_image_data(vec![0x89, 0x50, 0x4e, 0x47]),
            DesignNode::new("Sign up", NodeKind::Instance).with_main_component_key("button-key"),
        ]);
    hero.relative_transform = Some(Transform::translation(10.0, 20.0));

    let widget = DesignNode::new("Poll", NodeKind::from("FUTURE_WIDGET"))
        .with_fills(vec![Paint::of_kind(PaintKind::from("PATTERN"))]);

    vec![button, hero, widget]
}

async fn export(repo: &InMemoryRepository) -> ExportResult {
    let notifier = RecordingNotifier::new();
    ExportDesign::new(repo, &notifier).execute().await
}

fn without_host_ids(nodes: &[DesignNode]) -> Vec<DesignNode> {
    nodes.iter().map(DesignNode::without_host_ids).collect()
}

/// Reverse every array of nodes in the payload, as an unordered transport might
fn scramble(value: &mut Value) {
    match value {
        Value::Array(items) => {
            items.reverse();
            items.iter_mut().for_each(scramble);
        }
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if key == "children" || key == "data" {
                    scramble(inner);
                }
            }
        }
        _ => {}
    }
}

async fn import_into_fresh_host(payload: &Value) -> InMemoryRepository {
    let target = InMemoryRepository::new().strict_instances();
    let notifier = RecordingNotifier::new();
    let result = ImportDesign::new(&target, &notifier).execute(payload).await;
    assert!(result.success, "import failed: {:?}", result.error);
    assert_eq!(result.nodes_created, 3);
    target
}

#[tokio::test]
async fn test_export_import_export_preserves_design() {
    let source = InMemoryRepository::new().with_page(sample_page());
    let first = export(&source).await;
    assert!(first.success);
    assert_eq!(first.node_count, 7);

    let text = first.to_json().unwrap();
    let payload: Value = serde_json::from_str(&text).unwrap();
    let payload = serde_json::json!({"data": payload["nodes"]});

    let target = import_into_fresh_host(&payload).await;
    let second = export(&target).await;

    assert!(second.success);
    assert_eq!(second.node_count, first.node_count);
    assert_eq!(without_host_ids(&second.nodes), without_host_ids(&first.nodes));
}

#[tokio::test]
async fn test_round_trip_survives_reordering_transport() {
    let source = InMemoryRepository::new().with_page(sample_page());
    let first = export(&source).await;

    let mut payload = serde_json::json!({"data": &first.nodes});
    scramble(&mut payload);
    assert_eq!(payload["data"][0]["name"], "Poll");

    let target = import_into_fresh_host(&payload).await;
    let second = export(&target).await;

    let names: Vec<&str> = second.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Button", "Hero", "Poll"]);
    assert_eq!(without_host_ids(&second.nodes), without_host_ids(&first.nodes));
}

#[tokio::test]
async fn test_imported_instance_points_at_imported_component() {
    let source = InMemoryRepository::new().with_page(sample_page());
    let first = export(&source).await;

    let target = import_into_fresh_host(&serde_json::json!(&first.nodes)).await;
    let page = target.export_all().await.unwrap();

    let component_id = page[0].id.clone();
    assert!(component_id.is_some());
    let mut instance_targets = Vec::new();
    page[1].walk(|node, _| {
        if node.kind() == &NodeKind::Instance {
            instance_targets.push(node.main_component_id.clone());
        }
    });
    assert_eq!(instance_targets, vec![component_id]);
}

#[tokio::test]
async fn test_unknown_kinds_pass_through() {
    let source = InMemoryRepository::new().with_page(sample_page());
    let first = export(&source).await;
    let json: Value = serde_json::from_str(&first.to_json().unwrap()).unwrap();

    assert_eq!(json["nodes"][2]["type"], "FUTURE_WIDGET");
    assert_eq!(json["nodes"][2]["fills"][0]["type"], "PATTERN");

    let target = import_into_fresh_host(&serde_json::json!({"data": json["nodes"]})).await;
    let page = target.export_all().await.unwrap();
    assert_eq!(page[2].kind().as_str(), "FUTURE_WIDGET");
}
