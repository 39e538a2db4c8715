use crate::core::Bounds;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// One drawable item.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Named group of primitives drawn in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveGroup {
    pub name: String,
    pub key: Option<String>,
    pub primitives: Vec<Primitive>,
}

impl PrimitiveGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Groups are drawn in order, so later groups stack on top of earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: Bounds,
    pub groups: Vec<PrimitiveGroup>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: PrimitiveGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.groups.iter().flat_map(|group| group.primitives.iter())
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.primitives().filter_map(|primitive| match primitive {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.primitives().filter_map(|primitive| match primitive {
            Primitive::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.primitives().filter_map(|primitive| match primitive {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives().filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&PrimitiveGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.bounds.validate()?;
        for primitive in self.primitives() {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.primitives.is_empty())
    }
}
