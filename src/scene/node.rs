use crate::foundation::{color::Rgba8, core::Vec2};

/// Per-node transform and visibility, applied around the node's center.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    /// Opacity in `[0, 1]`, multiplied into descendants.
    pub opacity: f64,
    /// Uniform scale (`>= 0`).
    pub scale: f64,
    /// Translation in pixels, applied after scale.
    pub translate: Vec2,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

/// Fill of a shape, container background, or glyph run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Rgba8,
    },
    /// Two-stop linear gradient; `angle_deg` follows CSS (`135` runs top-left to
    /// bottom-right).
    LinearGradient {
        /// Gradient direction in degrees.
        angle_deg: f64,
        /// Color at 0%.
        from: Rgba8,
        /// Color at 100%.
        to: Rgba8,
    },
}

impl Paint {
    /// Flat color paint.
    pub const fn solid(color: Rgba8) -> Self {
        Self::Solid { color }
    }

    /// 135-degree two-stop gradient.
    pub const fn diagonal(from: Rgba8, to: Rgba8) -> Self {
        Self::LinearGradient {
            angle_deg: 135.0,
            from,
            to,
        }
    }
}

/// Box edges in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// CSS shorthand `vertical horizontal`.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Horizontal or vertical extent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the parent's extent.
    Percent(f64),
}

/// Drop shadow under a container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    /// Vertical offset in pixels.
    pub offset_y: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow color.
    pub color: Rgba8,
}

/// Outline stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels (or view-box units for paths).
    pub width: f64,
    /// Round caps and joins.
    pub round: bool,
}

/// How a container places its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Children fill the container, stacked and centered on both axes.
    #[default]
    Stack,
    /// Children left to right, vertically centered.
    Row,
    /// Children top to bottom.
    Column,
    /// Children placed at their `translate` relative to the container's top-left corner.
    Absolute,
}

/// Main-axis distribution for row/column layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Pack toward the start.
    #[default]
    Start,
    /// Pack around the center.
    Center,
    /// First and last child on the edges, remaining space between.
    SpaceBetween,
}

/// Text alignment inside a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Ragged right.
    #[default]
    Left,
    /// Centered lines.
    Center,
}

/// Group node with optional box decoration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    /// Child placement.
    pub layout: Layout,
    /// Main-axis distribution.
    pub justify: Justify,
    /// Spacing between children in pixels.
    pub gap: f64,
    /// Inner padding.
    pub padding: Edges,
    /// Preferred width.
    pub width: Option<Length>,
    /// Fixed height in pixels.
    pub height: Option<f64>,
    /// Lower width bound in pixels.
    pub min_width: Option<f64>,
    /// Upper width bound in pixels.
    pub max_width: Option<f64>,
    /// Background fill.
    pub background: Option<Paint>,
    /// Corner radius in pixels; values at or above half the height give a pill.
    pub corner_radius: f64,
    /// Optional outline.
    pub border: Option<Stroke>,
    /// Optional drop shadow.
    pub shadow: Option<Shadow>,
    /// Children in painter's order.
    pub children: Vec<VisualNode>,
}

impl Container {
    /// Empty container with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Set main-axis distribution.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Set child spacing.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Set inner padding.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set preferred width.
    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    /// Set fixed height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Set maximum width.
    pub fn max_width(mut self, px: f64) -> Self {
        self.max_width = Some(px);
        self
    }

    /// Set background fill.
    pub fn background(mut self, paint: Paint) -> Self {
        self.background = Some(paint);
        self
    }

    /// Set corner radius.
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set outline.
    pub fn border(mut self, stroke: Stroke) -> Self {
        self.border = Some(stroke);
        self
    }

    /// Set drop shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Replace children.
    pub fn children(mut self, children: Vec<VisualNode>) -> Self {
        self.children = children;
        self
    }
}

/// A run of text in a single face.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    /// Visible text (already truncated by any reveal animation).
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// CSS font weight (100..=900).
    pub font_weight: u16,
    /// Glyph fill; gradients are clipped to the glyph shapes.
    pub fill: Paint,
    /// Line height as a multiple of the font size.
    pub line_height: Option<f64>,
    /// Alignment within the text box.
    pub align: TextAlign,
    /// Outer margin.
    pub margin: Edges,
}

impl TextNode {
    /// Left-aligned text with a flat color.
    pub fn new(content: impl Into<String>, font_size: f64, font_weight: u16, color: Rgba8) -> Self {
        Self {
            content: content.into(),
            font_size,
            font_weight,
            fill: Paint::solid(color),
            line_height: None,
            align: TextAlign::Left,
            margin: Edges::default(),
        }
    }

    /// Replace the glyph fill.
    pub fn fill(mut self, paint: Paint) -> Self {
        self.fill = paint;
        self
    }

    /// Set line height.
    pub fn line_height(mut self, factor: f64) -> Self {
        self.line_height = Some(factor);
        self
    }

    /// Set alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set outer margin.
    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }
}

/// Geometry of a shape node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned (optionally rounded) rectangle.
    Rect {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Corner radius in pixels.
        corner_radius: f64,
    },
    /// Circle.
    Circle {
        /// Diameter in pixels.
        diameter: f64,
    },
    /// SVG path data drawn into a square box.
    Path {
        /// SVG `d` attribute.
        d: String,
        /// Side of the square view box the path coordinates live in.
        view_box: f64,
        /// Rendered side length in pixels.
        size: f64,
    },
}

/// Filled and/or stroked geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeNode {
    /// Geometry.
    pub shape: Shape,
    /// Interior fill.
    pub fill: Option<Paint>,
    /// Outline.
    pub stroke: Option<Stroke>,
}

/// Discriminated node payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Group with decoration.
    Container(Container),
    /// Text run.
    Text(TextNode),
    /// Geometry.
    Shape(ShapeNode),
}

/// One node of the per-frame visual state tree handed to the external renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualNode {
    /// Stable node name, unique among siblings.
    pub name: String,
    /// Transform and opacity.
    pub style: Style,
    /// Payload.
    pub kind: NodeKind,
}

impl VisualNode {
    /// Container node with default style.
    pub fn container(name: impl Into<String>, container: Container) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            kind: NodeKind::Container(container),
        }
    }

    /// Text node with default style.
    pub fn text(name: impl Into<String>, text: TextNode) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            kind: NodeKind::Text(text),
        }
    }

    /// Shape node with default style.
    pub fn shape(name: impl Into<String>, shape: Shape, fill: Option<Paint>) -> Self {
        Self {
            name: name.into(),
            style: Style::default(),
            kind: NodeKind::Shape(ShapeNode {
                shape,
                fill,
                stroke: None,
            }),
        }
    }

    /// Full-canvas background fill.
    pub fn backdrop(paint: Paint) -> Self {
        Self::container("background", Container::new(Layout::Stack).background(paint))
    }

    /// Set opacity (clamped to `[0, 1]`).
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set uniform scale (negative values clamp to 0).
    pub fn scale(mut self, scale: f64) -> Self {
        self.style.scale = scale.max(0.0);
        self
    }

    /// Set translation.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.style.translate = Vec2::new(x, y);
        self
    }

    /// Set the stroke of a shape node; no-op for other kinds.
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        if let NodeKind::Shape(shape) = &mut self.kind {
            shape.stroke = Some(stroke);
        }
        self
    }

    /// Direct children (empty for leaves).
    pub fn children(&self) -> &[VisualNode] {
        match &self.kind {
            NodeKind::Container(c) => &c.children,
            NodeKind::Text(_) | NodeKind::Shape(_) => &[],
        }
    }

    /// Depth-first, pre-order search by node name.
    pub fn find(&self, name: &str) -> Option<&VisualNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    /// Text content when this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(VisualNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
