//! Partial updates for the value types.
//!
//! Every field is optional; a missing field keeps the value of the instance
//! the patch is applied to.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl PointPatch {
    pub fn new() -> PointPatch {
        PointPatch::default()
    }

    pub fn x(mut self, x: f64) -> PointPatch {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> PointPatch {
        self.y = Some(y);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VectorPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl VectorPatch {
    pub fn new() -> VectorPatch {
        VectorPatch::default()
    }

    pub fn x(mut self, x: f64) -> VectorPatch {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> VectorPatch {
        self.y = Some(y);
        self
    }
}

/// Patch over the four scalars of a positional vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionalPatch {
    pub origin_x: Option<f64>,
    pub origin_y: Option<f64>,
    pub vector_x: Option<f64>,
    pub vector_y: Option<f64>,
}

impl PositionalPatch {
    pub fn new() -> PositionalPatch {
        PositionalPatch::default()
    }

    pub fn origin_x(mut self, x: f64) -> PositionalPatch {
        self.origin_x = Some(x);
        self
    }

    pub fn origin_y(mut self, y: f64) -> PositionalPatch {
        self.origin_y = Some(y);
        self
    }

    pub fn vector_x(mut self, x: f64) -> PositionalPatch {
        self.vector_x = Some(x);
        self
    }

    pub fn vector_y(mut self, y: f64) -> PositionalPatch {
        self.vector_y = Some(y);
        self
    }

    pub fn origin(&self) -> PointPatch {
        PointPatch {
            x: self.origin_x,
            y: self.origin_y,
        }
    }

    pub fn vector(&self) -> VectorPatch {
        VectorPatch {
            x: self.vector_x,
            y: self.vector_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_patch_splits_by_field() {
        let patch = PositionalPatch::new().origin_x(5.0).vector_y(-1.0);
        assert_eq!(patch.origin(), PointPatch::new().x(5.0));
        assert_eq!(patch.vector(), VectorPatch::new().y(-1.0));
    }
}
