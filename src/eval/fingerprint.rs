use xxhash_rust::xxh3::Xxh3;

use crate::{
    eval::evaluator::FrameState,
    foundation::color::Rgba8,
    scene::node::{
        Container, Edges, Justify, Layout, Length, NodeKind, Paint, Shadow, Shape, ShapeNode,
        Stroke, Style, TextAlign, TextNode, VisualNode,
    },
};

const XXH3_SEED: u64 = 0x6f2c_91d4_a83e_5b07;

/// Stable 128-bit digest of a frame's visual content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint the layers of `state`.
///
/// The global frame index and each layer's local frame are not hashed, so two frames that
/// draw the same thing share a fingerprint.
pub fn fingerprint_frame(state: &FrameState) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_len(state.layers.len());
    for layer in &state.layers {
        h.write_str(layer.scene.as_str());
        h.write_u32(layer.z);
        write_node(&mut h, &layer.root);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_len(&mut self, n: usize) {
        self.write_u64(n as u64);
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 draw identically.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(v) => {
                self.write_u8(1);
                self.write_f64(v);
            }
            None => self.write_u8(0),
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, node: &VisualNode) {
    h.write_str(&node.name);
    write_style(h, &node.style);
    match &node.kind {
        NodeKind::Container(c) => {
            h.write_u8(0);
            write_container(h, c);
        }
        NodeKind::Text(t) => {
            h.write_u8(1);
            write_text(h, t);
        }
        NodeKind::Shape(s) => {
            h.write_u8(2);
            write_shape_node(h, s);
        }
    }
}

fn write_style(h: &mut StableHasher, style: &Style) {
    h.write_f64(style.opacity);
    h.write_f64(style.scale);
    h.write_f64(style.translate.x);
    h.write_f64(style.translate.y);
}

fn write_container(h: &mut StableHasher, c: &Container) {
    h.write_u8(match c.layout {
        Layout::Stack => 0,
        Layout::Row => 1,
        Layout::Column => 2,
        Layout::Absolute => 3,
    });
    h.write_u8(match c.justify {
        Justify::Start => 0,
        Justify::Center => 1,
        Justify::SpaceBetween => 2,
    });
    h.write_f64(c.gap);
    write_edges(h, &c.padding);
    match c.width {
        Some(Length::Px(v)) => {
            h.write_u8(1);
            h.write_f64(v);
        }
        Some(Length::Percent(v)) => {
            h.write_u8(2);
            h.write_f64(v);
        }
        None => h.write_u8(0),
    }
    h.write_opt_f64(c.height);
    h.write_opt_f64(c.min_width);
    h.write_opt_f64(c.max_width);
    write_opt_paint(h, c.background.as_ref());
    h.write_f64(c.corner_radius);
    write_opt_stroke(h, c.border.as_ref());
    match &c.shadow {
        Some(Shadow {
            offset_y,
            blur,
            color,
        }) => {
            h.write_u8(1);
            h.write_f64(*offset_y);
            h.write_f64(*blur);
            write_color(h, *color);
        }
        None => h.write_u8(0),
    }
    h.write_len(c.children.len());
    for child in &c.children {
        write_node(h, child);
    }
}

fn write_text(h: &mut StableHasher, t: &TextNode) {
    h.write_str(&t.content);
    h.write_f64(t.font_size);
    h.write_u16(t.font_weight);
    write_paint(h, &t.fill);
    h.write_opt_f64(t.line_height);
    h.write_u8(match t.align {
        TextAlign::Left => 0,
        TextAlign::Center => 1,
    });
    write_edges(h, &t.margin);
}

fn write_shape_node(h: &mut StableHasher, s: &ShapeNode) {
    match &s.shape {
        Shape::Rect {
            width,
            height,
            corner_radius,
        } => {
            h.write_u8(0);
            h.write_f64(*width);
            h.write_f64(*height);
            h.write_f64(*corner_radius);
        }
        Shape::Circle { diameter } => {
            h.write_u8(1);
            h.write_f64(*diameter);
        }
        Shape::Path { d, view_box, size } => {
            h.write_u8(2);
            h.write_str(d);
            h.write_f64(*view_box);
            h.write_f64(*size);
        }
    }
    write_opt_paint(h, s.fill.as_ref());
    write_opt_stroke(h, s.stroke.as_ref());
}

fn write_edges(h: &mut StableHasher, e: &Edges) {
    h.write_f64(e.top);
    h.write_f64(e.right);
    h.write_f64(e.bottom);
    h.write_f64(e.left);
}

fn write_color(h: &mut StableHasher, c: Rgba8) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    match p {
        Paint::Solid { color } => {
            h.write_u8(0);
            write_color(h, *color);
        }
        Paint::LinearGradient {
            angle_deg,
            from,
            to,
        } => {
            h.write_u8(1);
            h.write_f64(*angle_deg);
            write_color(h, *from);
            write_color(h, *to);
        }
    }
}

fn write_opt_paint(h: &mut StableHasher, p: Option<&Paint>) {
    match p {
        Some(p) => {
            h.write_u8(1);
            write_paint(h, p);
        }
        None => h.write_u8(0),
    }
}

fn write_opt_stroke(h: &mut StableHasher, s: Option<&Stroke>) {
    match s {
        Some(s) => {
            h.write_u8(1);
            write_color(h, s.color);
            h.write_f64(s.width);
            h.write_bool(s.round);
        }
        None => h.write_u8(0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
