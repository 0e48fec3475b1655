use super::{CoordMapper, ResizePolicy};

/// Result of feeding a platform resize event through the viewport.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResizeOutcome {
    /// The policy ignores resizes; nothing changed.
    Ignored,
    /// The device size is now `size`. `adjusted` is true when it differs from
    /// what the platform reported, i.e. the window should be asked to follow.
    Accepted { size: (u32, u32), adjusted: bool },
}

/// Device surface size plus the size and policy it started with.
///
/// Invariant: `initial_*` never change after construction; the device size
/// only changes through [`apply_resize`](Self::apply_resize).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    initial_width: u32,
    initial_height: u32,
    policy: ResizePolicy,
    /// Size we last asked the window to adopt; its echo is accepted verbatim.
    pending: Option<(u32, u32)>,
}

impl Viewport {
    pub fn new(width: u32, height: u32, policy: ResizePolicy) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            initial_width: width,
            initial_height: height,
            policy,
            pending: None,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn initial_size(&self) -> (u32, u32) {
        (self.initial_width, self.initial_height)
    }

    #[inline]
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Uniform content scale: `min(w / w0, h / h0)` under `Scale`, 1.0 otherwise.
    pub fn scale(&self) -> f32 {
        if !self.policy.scales_content() {
            return 1.0;
        }
        let sx = self.width as f32 / self.initial_width as f32;
        let sy = self.height as f32 / self.initial_height as f32;
        sx.min(sy)
    }

    /// Mapper for the current device size and scale.
    #[inline]
    pub fn mapper(&self) -> CoordMapper {
        CoordMapper::new(self.width as f32, self.height as f32, self.scale())
    }

    /// Applies a platform resize request according to the policy.
    pub fn apply_resize(&mut self, requested: (u32, u32)) -> ResizeOutcome {
        if self.pending.take() == Some(requested) {
            self.width = requested.0;
            self.height = requested.1;
            return ResizeOutcome::Accepted { size: requested, adjusted: false };
        }

        // Re-applying the policy to a size it already produced could only truncate it.
        if self.policy.is_resizable() && requested == self.size() {
            return ResizeOutcome::Accepted { size: requested, adjusted: false };
        }

        let Some(size) = self.policy.accept(requested, self.size(), self.initial_size()) else {
            return ResizeOutcome::Ignored;
        };

        self.width = size.0;
        self.height = size.1;

        let adjusted = size != requested;
        if adjusted {
            self.pending = Some(size);
        }
        ResizeOutcome::Accepted { size, adjusted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn none_policy_keeps_size() {
        let mut vp = Viewport::new(800, 600, ResizePolicy::None);
        assert_eq!(vp.apply_resize((400, 300)), ResizeOutcome::Ignored);
        assert_eq!(vp.size(), (800, 600));
    }

    #[test]
    fn scale_policy_doubles_at_twice_the_size() {
        let mut vp = Viewport::new(480, 360, ResizePolicy::Scale);
        vp.apply_resize((960, 720));
        assert_eq!(vp.size(), (960, 720));
        assert_eq!(vp.scale(), 2.0);
        assert_eq!(vp.mapper().to_device_len(24.0), 48.0);
    }

    #[test]
    fn scale_uses_the_smaller_axis() {
        let mut vp = Viewport::new(400, 300, ResizePolicy::Both);
        vp.apply_resize((800, 900));
        // `Both` never scales content.
        assert_eq!(vp.scale(), 1.0);

        let mut vp = Viewport::new(400, 300, ResizePolicy::Scale);
        vp.apply_resize((800, 900));
        assert_eq!(vp.size(), (800, 600));
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn initial_size_is_immutable() {
        let mut vp = Viewport::new(640, 480, ResizePolicy::Both);
        vp.apply_resize((1000, 100));
        vp.apply_resize((20, 20));
        assert_eq!(vp.initial_size(), (640, 480));
    }

    #[test]
    fn adjusted_size_echo_is_not_reclamped() {
        let mut vp = Viewport::new(800, 600, ResizePolicy::Aspect);
        let out = vp.apply_resize((1000, 700));
        assert_eq!(out, ResizeOutcome::Accepted { size: (933, 700), adjusted: true });

        // The window reports back exactly what we asked for: keep it as is,
        // even though re-applying the policy would truncate it to 933x699.
        let echo = vp.apply_resize((933, 700));
        assert_eq!(echo, ResizeOutcome::Accepted { size: (933, 700), adjusted: false });
        assert_eq!(vp.size(), (933, 700));
    }

    #[test]
    fn repeated_current_size_is_kept() {
        let mut vp = Viewport::new(800, 600, ResizePolicy::Aspect);
        vp.apply_resize((1000, 700));
        vp.apply_resize((933, 700));

        // A second report of the same size (no request pending) must not shrink it.
        let again = vp.apply_resize((933, 700));
        assert_eq!(again, ResizeOutcome::Accepted { size: (933, 700), adjusted: false });
        assert_eq!(vp.size(), (933, 700));

        let mut fixed = Viewport::new(800, 600, ResizePolicy::None);
        assert_eq!(fixed.apply_resize((800, 600)), ResizeOutcome::Ignored);
    }

    #[test]
    fn round_trip_holds_after_every_policy() {
        let policies = [
            ResizePolicy::None,
            ResizePolicy::Width,
            ResizePolicy::Height,
            ResizePolicy::Both,
            ResizePolicy::Aspect,
            ResizePolicy::Scale,
        ];
        for policy in policies {
            let mut vp = Viewport::new(480, 360, policy);
            vp.apply_resize((1111, 777));
            let m = vp.mapper();
            let p = Vec2::new(-123.5, 88.25);
            let back = m.to_logical(m.to_device(p));
            assert!((back.x - p.x).abs() < 1e-3 && (back.y - p.y).abs() < 1e-3, "{policy:?}");
        }
    }
}
