/// How the window reacts to platform resize requests.
///
/// The policy only decides which size is *accepted*; the runtime then
/// reconfigures the surface and, if the accepted size differs from the
/// request, asks the window to adopt it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ResizePolicy {
    /// Fixed size. The window is created non-resizable and resize events are ignored.
    #[default]
    None,
    /// Only the width follows the request; the height stays pinned.
    Width,
    /// Only the height follows the request; the width stays pinned.
    Height,
    /// Both axes follow the request.
    Both,
    /// Both axes follow, clamped to the initial aspect ratio.
    Aspect,
    /// Like `Aspect`, and logical content is scaled uniformly with the window.
    Scale,
}

impl ResizePolicy {
    /// Whether the platform window should allow user resizing at all.
    #[inline]
    pub fn is_resizable(self) -> bool {
        !matches!(self, ResizePolicy::None)
    }

    /// Whether logical coordinates and sizes scale with the window.
    #[inline]
    pub fn scales_content(self) -> bool {
        matches!(self, ResizePolicy::Scale)
    }

    /// Computes the accepted size for a `requested` resize.
    ///
    /// Returns `None` when the policy ignores resize events entirely.
    /// Aspect math runs on integers so the truncation is exact; a zero-height
    /// request is treated as height 1 and results never drop below 1×1.
    pub fn accept(
        self,
        requested: (u32, u32),
        current: (u32, u32),
        initial: (u32, u32),
    ) -> Option<(u32, u32)> {
        let (w, h) = requested;
        match self {
            ResizePolicy::None => None,
            ResizePolicy::Width => Some((w.max(1), current.1)),
            ResizePolicy::Height => Some((current.0, h.max(1))),
            ResizePolicy::Both => Some((w.max(1), h.max(1))),
            ResizePolicy::Aspect | ResizePolicy::Scale => Some(lock_aspect((w, h), initial)),
        }
    }
}

fn lock_aspect(requested: (u32, u32), initial: (u32, u32)) -> (u32, u32) {
    let (iw, ih) = match initial {
        (0, _) | (_, 0) => (1u64, 1u64),
        (iw, ih) => (iw as u64, ih as u64),
    };
    let w = requested.0 as u64;
    let h = requested.1.max(1) as u64;

    // w/h > iw/ih  <=>  w*ih > h*iw
    let (w, h) = if w * ih > h * iw {
        (h * iw / ih, h)
    } else {
        (w, w * ih / iw)
    };

    (w.clamp(1, u32::MAX as u64) as u32, h.clamp(1, u32::MAX as u64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL: (u32, u32) = (800, 600);

    fn accept(p: ResizePolicy, req: (u32, u32)) -> Option<(u32, u32)> {
        p.accept(req, INITIAL, INITIAL)
    }

    fn aspect_error(size: (u32, u32)) -> f64 {
        let want = INITIAL.0 as f64 / INITIAL.1 as f64;
        let got = size.0 as f64 / size.1 as f64;
        // One pixel of truncation on the clamped axis.
        (got - want).abs() / want
    }

    // ── pinned / passthrough policies ─────────────────────────────────────

    #[test]
    fn none_ignores_requests() {
        assert_eq!(accept(ResizePolicy::None, (400, 300)), None);
    }

    #[test]
    fn width_pins_height() {
        assert_eq!(accept(ResizePolicy::Width, (1000, 123)), Some((1000, 600)));
    }

    #[test]
    fn height_pins_width() {
        assert_eq!(accept(ResizePolicy::Height, (1000, 123)), Some((800, 123)));
    }

    #[test]
    fn both_accepts_as_is() {
        assert_eq!(accept(ResizePolicy::Both, (1234, 321)), Some((1234, 321)));
    }

    #[test]
    fn pinned_axis_uses_current_not_initial() {
        let got = ResizePolicy::Width.accept((900, 50), (700, 500), INITIAL);
        assert_eq!(got, Some((900, 500)));
    }

    // ── aspect lock ───────────────────────────────────────────────────────

    #[test]
    fn aspect_clamps_width_when_too_wide() {
        assert_eq!(accept(ResizePolicy::Aspect, (1200, 600)), Some((800, 600)));
    }

    #[test]
    fn aspect_clamps_height_when_too_tall() {
        assert_eq!(accept(ResizePolicy::Aspect, (400, 900)), Some((400, 300)));
    }

    #[test]
    fn aspect_exact_ratio_is_unchanged() {
        assert_eq!(accept(ResizePolicy::Scale, (1600, 1200)), Some((1600, 1200)));
    }

    #[test]
    fn aspect_zero_height_is_treated_as_one() {
        let got = accept(ResizePolicy::Aspect, (500, 0)).unwrap();
        assert_eq!(got, (1, 1));
    }

    #[test]
    fn aspect_never_returns_zero() {
        let got = accept(ResizePolicy::Aspect, (0, 0)).unwrap();
        assert!(got.0 >= 1 && got.1 >= 1);
    }

    #[test]
    fn aspect_preserves_ratio_over_many_requests() {
        for w in (50..2000).step_by(37) {
            for h in (50..1500).step_by(41) {
                for p in [ResizePolicy::Aspect, ResizePolicy::Scale] {
                    let got = accept(p, (w, h)).unwrap();
                    assert!(got.0 <= w && got.1 <= h.max(1), "{p:?} grew {w}x{h} to {got:?}");
                    // Truncation costs at most one pixel on the clamped axis.
                    let tol = 1.0 / got.0.min(got.1) as f64;
                    assert!(aspect_error(got) <= tol, "{p:?} {w}x{h} -> {got:?}");
                }
            }
        }
    }

    #[test]
    fn degenerate_initial_size_uses_square_ratio() {
        let got = ResizePolicy::Aspect.accept((300, 200), (10, 10), (0, 0));
        assert_eq!(got, Some((200, 200)));
    }

    // ── flags ─────────────────────────────────────────────────────────────

    #[test]
    fn only_scale_scales_content() {
        assert!(ResizePolicy::Scale.scales_content());
        assert!(!ResizePolicy::Aspect.scales_content());
        assert!(!ResizePolicy::None.is_resizable());
        assert!(ResizePolicy::Width.is_resizable());
    }
}
