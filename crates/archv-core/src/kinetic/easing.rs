//! Curves for the nav stow slide

pub use crate::config::EasingType;

impl EasingType {
    /// Map linear progress `t` onto the curve. Both ends are pinned: 0 maps to
    /// 0 and 1 maps to 1.
    pub fn ease(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => t.floor(),
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}
