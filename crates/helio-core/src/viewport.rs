//! Fitting a fixed design canvas onto the available viewport.

use serde::Deserialize;

use crate::env::EnvironmentProvider;

/// Reference resolution a page was authored against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignCanvas {
    /// Logical width in CSS pixels.
    pub width: f64,
    /// Logical height in CSS pixels.
    pub height: f64,
}

impl DesignCanvas {
    /// Canvas of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Currently available display area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    /// Available width in CSS pixels.
    pub width: f64,
    /// Available height in CSS pixels.
    pub height: f64,
}

impl ViewportSize {
    /// Viewport of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp each axis to an optional cap; non-positive or non-finite caps are ignored.
    #[must_use]
    pub fn capped(self, width: Option<f64>, height: Option<f64>) -> Self {
        Self {
            width: apply_cap(self.width, width),
            height: apply_cap(self.height, height),
        }
    }

    fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

fn apply_cap(value: f64, cap: Option<f64>) -> f64 {
    match cap {
        Some(cap) if cap.is_finite() && cap > 0.0 => value.min(cap),
        _ => value,
    }
}

/// How the canvas maps onto the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitPolicy {
    /// Keep the canvas size and scale it until it covers the viewport; overflow is cropped.
    CoverScale,
    /// Cover scale, then resize the canvas so that it fills the viewport exactly.
    CoverResize,
    /// Scale until the whole canvas is visible; leaves margins.
    Contain,
}

/// Point the scale transform is anchored at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Canvas centre pinned to viewport centre.
    Center,
    /// Canvas top-left pinned to viewport top-left.
    TopLeft,
}

/// Canvas, policy and anchor of one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    /// Design resolution.
    pub canvas: DesignCanvas,
    /// Fit policy.
    pub policy: FitPolicy,
    /// Transform anchor.
    pub anchor: Anchor,
}

impl PageLayout {
    /// Fit this layout onto `viewport`.
    #[must_use]
    pub fn fit(&self, viewport: Option<ViewportSize>) -> FitResult {
        fit(self.canvas, viewport, self.policy)
    }
}

/// Derived scale and the logical size content should be laid out at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// Uniform scale factor; always finite and positive.
    pub scale: f64,
    /// Logical width to render at before scaling.
    pub effective_width: f64,
    /// Logical height to render at before scaling.
    pub effective_height: f64,
}

impl FitResult {
    fn identity(canvas: DesignCanvas) -> Self {
        Self {
            scale: 1.0,
            effective_width: canvas.width,
            effective_height: canvas.height,
        }
    }

    /// Inline style for the element wrapping the canvas.
    #[must_use]
    pub fn canvas_style(&self, anchor: Anchor) -> String {
        let size = format!(
            "width:{:.2}px;height:{:.2}px;",
            self.effective_width, self.effective_height
        );
        match anchor {
            Anchor::Center => format!(
                "{size}position:absolute;left:50%;top:50%;transform-origin:center center;transform:translate(-50%,-50%) scale({:.4});",
                self.scale
            ),
            Anchor::TopLeft => format!(
                "{size}position:absolute;left:0;top:0;transform-origin:0 0;transform:scale({:.4});",
                self.scale
            ),
        }
    }
}

/// `max(vw / cw, vh / ch)`, or `1` for degenerate input.
#[must_use]
pub fn cover_scale(canvas: DesignCanvas, viewport: ViewportSize) -> f64 {
    guarded_scale(canvas, viewport, f64::max)
}

/// `min(vw / cw, vh / ch)`, or `1` for degenerate input.
#[must_use]
pub fn contain_scale(canvas: DesignCanvas, viewport: ViewportSize) -> f64 {
    guarded_scale(canvas, viewport, f64::min)
}

fn guarded_scale(canvas: DesignCanvas, viewport: ViewportSize, pick: fn(f64, f64) -> f64) -> f64 {
    if canvas.is_degenerate() || viewport.is_degenerate() {
        return 1.0;
    }
    let scale = pick(viewport.width / canvas.width, viewport.height / canvas.height);
    if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
}

/// Fit `canvas` onto `viewport` under `policy`.
///
/// An absent or zero-sized viewport yields scale `1` at the canvas size.
#[must_use]
pub fn fit(canvas: DesignCanvas, viewport: Option<ViewportSize>, policy: FitPolicy) -> FitResult {
    let Some(viewport) = viewport.filter(|v| !v.is_degenerate()) else {
        return FitResult::identity(canvas);
    };
    if canvas.is_degenerate() {
        return FitResult::identity(canvas);
    }
    match policy {
        FitPolicy::CoverScale => FitResult {
            scale: cover_scale(canvas, viewport),
            ..FitResult::identity(canvas)
        },
        FitPolicy::Contain => FitResult {
            scale: contain_scale(canvas, viewport),
            ..FitResult::identity(canvas)
        },
        FitPolicy::CoverResize => {
            let scale = cover_scale(canvas, viewport);
            FitResult {
                scale,
                effective_width: viewport.width / scale,
                effective_height: viewport.height / scale,
            }
        }
    }
}

/// Compute a fit now and again on every resize reported by `env`.
///
/// `caps` are the optional `width`/`height` page options. The returned subscription
/// stops the updates when dropped.
pub fn watch_fit<E, F>(
    env: &E,
    layout: PageLayout,
    caps: (Option<f64>, Option<f64>),
    on_fit: F,
) -> E::Subscription
where
    E: EnvironmentProvider,
    F: Fn(FitResult) + 'static,
{
    let (cap_w, cap_h) = caps;
    let compute = move |viewport: Option<ViewportSize>| {
        layout.fit(viewport.map(|v| v.capped(cap_w, cap_h)))
    };
    on_fit(compute(env.viewport_size()));
    env.on_resize(Box::new(move |viewport| on_fit(compute(viewport))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnvironment;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn cover_scale_picks_larger_ratio() {
        let canvas = DesignCanvas::new(1280.0, 720.0);
        assert!(close(cover_scale(canvas, ViewportSize::new(1920.0, 900.0)), 1.5));
        assert!(close(cover_scale(canvas, ViewportSize::new(800.0, 900.0)), 1.25));
    }

    #[test]
    fn contain_scale_picks_smaller_ratio() {
        let canvas = DesignCanvas::new(1280.0, 720.0);
        assert!(close(contain_scale(canvas, ViewportSize::new(1920.0, 900.0)), 1.25));
        assert!(close(contain_scale(canvas, ViewportSize::new(800.0, 900.0)), 0.625));
    }

    #[test]
    fn scale_only_policies_keep_canvas_size() {
        let canvas = DesignCanvas::new(1280.0, 720.0);
        let result = fit(canvas, Some(ViewportSize::new(1920.0, 900.0)), FitPolicy::CoverScale);
        assert!(close(result.effective_width, 1280.0));
        assert!(close(result.effective_height, 720.0));
        assert!(close(
            result.effective_width / result.effective_height,
            canvas.aspect_ratio()
        ));
    }

    #[test]
    fn cover_resize_fills_viewport_exactly() {
        let canvas = DesignCanvas::new(1200.0, 600.0);
        let viewport = ViewportSize::new(1000.0, 800.0);
        let result = fit(canvas, Some(viewport), FitPolicy::CoverResize);
        assert!(close(result.scale, 800.0 / 600.0));
        assert!(close(result.effective_width, 750.0));
        assert!(close(result.effective_height, 600.0));
        assert!(close(result.effective_width * result.scale, viewport.width));
        assert!(close(result.effective_height * result.scale, viewport.height));
        assert!(close(
            result.effective_width / result.effective_height,
            viewport.width / viewport.height
        ));
        assert!(result.effective_width <= canvas.width + TOLERANCE);
    }

    #[test]
    fn degenerate_viewports_default_to_identity() {
        let canvas = DesignCanvas::new(1280.0, 720.0);
        for viewport in [
            None,
            Some(ViewportSize::new(0.0, 0.0)),
            Some(ViewportSize::new(0.0, 900.0)),
            Some(ViewportSize::new(-5.0, 900.0)),
            Some(ViewportSize::new(f64::NAN, 900.0)),
        ] {
            for policy in [FitPolicy::CoverScale, FitPolicy::CoverResize, FitPolicy::Contain] {
                let result = fit(canvas, viewport, policy);
                assert!(close(result.scale, 1.0));
                assert!(close(result.effective_width, 1280.0));
                assert!(result.effective_height.is_finite());
            }
        }
        assert!(close(cover_scale(DesignCanvas::new(0.0, 0.0), ViewportSize::new(10.0, 10.0)), 1.0));
    }

    #[test]
    fn caps_limit_available_area() {
        let viewport = ViewportSize::new(1920.0, 1080.0).capped(Some(800.0), Some(0.0));
        assert_eq!(viewport, ViewportSize::new(800.0, 1080.0));
    }

    #[test]
    fn canvas_style_reflects_anchor() {
        let result = FitResult {
            scale: 1.5,
            effective_width: 1280.0,
            effective_height: 720.0,
        };
        let centered = result.canvas_style(Anchor::Center);
        assert!(centered.contains("translate(-50%,-50%) scale(1.5000)"));
        let top_left = result.canvas_style(Anchor::TopLeft);
        assert!(top_left.contains("transform-origin:0 0"));
        assert!(top_left.starts_with("width:1280.00px;height:720.00px;"));
    }

    #[test]
    fn watch_fit_recomputes_on_each_resize() {
        let env = StaticEnvironment::new(Some("de-DE"), Some(ViewportSize::new(1920.0, 900.0)));
        let layout = PageLayout {
            canvas: DesignCanvas::new(1280.0, 720.0),
            policy: FitPolicy::CoverScale,
            anchor: Anchor::Center,
        };
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = watch_fit(&env, layout, (None, None), move |result| {
            sink.borrow_mut().push(result.scale);
        });

        env.resize_to(Some(ViewportSize::new(800.0, 900.0)));
        env.resize_to(None);
        drop(subscription);
        env.resize_to(Some(ViewportSize::new(2560.0, 1440.0)));

        let scales = seen.borrow().clone();
        assert_eq!(scales.len(), 3);
        assert!(close(scales[0], 1.5));
        assert!(close(scales[1], 1.25));
        assert!(close(scales[2], 1.0));
    }

    #[test]
    fn watch_fit_applies_caps() {
        let env = StaticEnvironment::new(None, Some(ViewportSize::new(1920.0, 1080.0)));
        let layout = PageLayout {
            canvas: DesignCanvas::new(1280.0, 720.0),
            policy: FitPolicy::Contain,
            anchor: Anchor::TopLeft,
        };
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let _subscription = watch_fit(&env, layout, (Some(640.0), None), move |result| {
            *sink.borrow_mut() = Some(result.scale);
        });
        assert!(seen.borrow().is_some_and(|scale| close(scale, 0.5)));
    }
}
