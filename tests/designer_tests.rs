use emotion_radar::designer::{DesignerPlugin, WIDGET_CLASS_NAME, WidgetDescriptor};
use emotion_radar::core::Viewport;
use emotion_radar::render::NullRenderer;

#[test]
fn descriptor_reports_static_metadata() {
    let descriptor = DesignerPlugin::new().descriptor();

    assert_eq!(descriptor, WidgetDescriptor::EMOTION_RADAR);
    assert_eq!(descriptor.name, WIDGET_CLASS_NAME);
    assert_eq!(descriptor.group, "Analytics");
    assert!(!descriptor.is_container);
    assert!(descriptor.tool_tip.contains("emotion"));
    assert!(descriptor.dom_xml.contains("name=\"emotionRadar\""));
}

#[test]
fn created_widgets_start_from_defaults() {
    let plugin = DesignerPlugin::new();
    let chart = plugin
        .create_widget(NullRenderer::default())
        .expect("create widget");

    assert_eq!(chart.labels().len(), 8);
    assert!(chart.values().iter().all(|value| *value == 0.0));
    assert_eq!(chart.viewport(), chart.size_hint());
}

#[test]
fn create_widget_with_invalid_viewport_fails() {
    let plugin = DesignerPlugin::new();
    assert!(
        plugin
            .create_widget_with_viewport(NullRenderer::default(), Viewport::new(0, 0))
            .is_err()
    );
}

#[test]
fn descriptor_serializes_for_palette_export() {
    let json = serde_json::to_string(&WidgetDescriptor::EMOTION_RADAR).expect("serialize");
    assert!(json.contains("\"group\":\"Analytics\""));
    assert!(json.contains("\"is_container\":false"));
}
