use daycycle::Rgb;
use glam::{Affine2, Vec2};

/// Logical coordinate window mapped onto the output surface, y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    /// `[0, width] x [0, height]`, matching a 2D orthographic projection.
    pub fn ortho(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    /// Normalized device coordinates, `[-1, 1]` on both axes.
    pub fn unit() -> Self {
        Self {
            min: Vec2::splat(-1.0),
            max: Vec2::ONE,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled simple polygon; winding does not matter.
    Polygon(Vec<Vec2>),
    /// Open polyline with a stroke width in output pixels.
    LineStrip { points: Vec<Vec2>, width: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub primitive: Primitive,
    pub color: Rgb,
}

/// One entry of a display list. Groups scope their transform to their
/// children; the renderer restores the parent transform afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Shape(Shape),
    Group {
        transform: Affine2,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn polygon(points: Vec<Vec2>, color: Rgb) -> Self {
        Node::Shape(Shape {
            primitive: Primitive::Polygon(points),
            color,
        })
    }

    /// Axis-aligned rectangle anchored at its lower-left corner.
    pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Self {
        Node::polygon(
            vec![
                Vec2::new(x, y),
                Vec2::new(x + width, y),
                Vec2::new(x + width, y + height),
                Vec2::new(x, y + height),
            ],
            color,
        )
    }

    pub fn line_strip(points: Vec<Vec2>, width: f32, color: Rgb) -> Self {
        Node::Shape(Shape {
            primitive: Primitive::LineStrip { points, width },
            color,
        })
    }

    pub fn group(transform: Affine2, children: Vec<Node>) -> Self {
        Node::Group {
            transform,
            children,
        }
    }

    pub fn shape_count(&self) -> usize {
        match self {
            Node::Shape(_) => 1,
            Node::Group { children, .. } => children.iter().map(Node::shape_count).sum(),
        }
    }

    fn visit<F>(&self, parent: &Affine2, visitor: &mut F)
    where
        F: FnMut(&Affine2, &Shape),
    {
        match self {
            Node::Shape(shape) => visitor(parent, shape),
            Node::Group {
                transform,
                children,
            } => {
                let local = *parent * *transform;
                for child in children {
                    child.visit(&local, visitor);
                }
            }
        }
    }
}

/// Complete description of one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Rgb,
    pub viewport: Viewport,
    pub nodes: Vec<Node>,
}

impl Frame {
    pub fn new(clear: Rgb, viewport: Viewport) -> Self {
        Self {
            clear,
            viewport,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn shape_count(&self) -> usize {
        self.nodes.iter().map(Node::shape_count).sum()
    }

    /// Walks every shape in draw order together with its accumulated
    /// world transform.
    pub fn for_each_shape<F>(&self, mut visitor: F)
    where
        F: FnMut(&Affine2, &Shape),
    {
        for node in &self.nodes {
            node.visit(&Affine2::IDENTITY, &mut visitor);
        }
    }
}
