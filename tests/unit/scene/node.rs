use super::*;

fn sample_tree() -> VisualNode {
    VisualNode::container(
        "root",
        Container::new(Layout::Stack).children(vec![
            VisualNode::backdrop(Paint::solid(Rgba8::WHITE)),
            VisualNode::container(
                "card",
                Container::new(Layout::Row).children(vec![
                    VisualNode::text("title", TextNode::new("GPT-5", 20.0, 600, Rgba8::BLACK)),
                    VisualNode::shape(
                        "badge",
                        Shape::Circle { diameter: 28.0 },
                        Some(Paint::solid(Rgba8::BLACK)),
                    ),
                ]),
            ),
        ]),
    )
}

#[test]
fn find_walks_depth_first() {
    let tree = sample_tree();
    assert_eq!(tree.find("title").and_then(|n| n.text_content()), Some("GPT-5"));
    assert!(tree.find("badge").is_some());
    assert!(tree.find("missing").is_none());
    assert_eq!(tree.node_count(), 5);
}

#[test]
fn style_setters_clamp() {
    let n = VisualNode::backdrop(Paint::solid(Rgba8::WHITE))
        .opacity(1.4)
        .scale(-2.0)
        .translate(0.0, -400.0);
    assert_eq!(n.style.opacity, 1.0);
    assert_eq!(n.style.scale, 0.0);
    assert_eq!(n.style.translate, Vec2::new(0.0, -400.0));
}

#[test]
fn stroke_only_applies_to_shapes() {
    let stroke = Stroke {
        color: Rgba8::WHITE,
        width: 3.0,
        round: true,
    };
    let shape = VisualNode::shape("s", Shape::Circle { diameter: 4.0 }, None).stroke(stroke);
    let NodeKind::Shape(s) = &shape.kind else {
        panic!("expected shape");
    };
    assert_eq!(s.stroke, Some(stroke));

    let text = VisualNode::text("t", TextNode::new("x", 10.0, 400, Rgba8::BLACK)).stroke(stroke);
    assert!(matches!(text.kind, NodeKind::Text(_)));
}

#[test]
fn serializes_with_type_tags() {
    let v = serde_json::to_value(sample_tree()).unwrap();
    assert_eq!(v["kind"]["type"], "container");
    assert_eq!(v["kind"]["children"][1]["kind"]["children"][0]["kind"]["type"], "text");
    assert_eq!(
        v["kind"]["children"][0]["kind"]["background"]["color"],
        "#ffffff"
    );
    let back: VisualNode = serde_json::from_value(v).unwrap();
    assert_eq!(back, sample_tree());
}
