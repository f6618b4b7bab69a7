//! Scroll-linked choreography as plain functions of a progress value.
//!
//! Nothing in here touches the DOM. Views read a [`SceneFrame`] for the
//! current progress and turn it into inline styles.

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn smooth_step(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`, clamping
/// outside the input range.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return if value < in_min { out_min } else { out_max };
    }
    lerp(out_min, out_max, clamp01((value - in_min) / span))
}

/// How far the viewport has travelled through a tall container, 0 when its
/// top reaches the top of the viewport and 1 when its bottom reaches the
/// bottom.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let scrollable = rect_height - viewport_height;
    if scrollable <= 0.0 {
        return if rect_top <= 0.0 { 1.0 } else { 0.0 };
    }
    clamp01(-rect_top / scrollable)
}

fn eased(value: f64, start: f64, end: f64) -> f64 {
    smooth_step(clamp01((value - start) / (end - start)))
}

/// Hero-to-dashboard transition: the showreel grows until it fills the
/// screen, then the dashboard frame fades in over it and settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneFrame {
    pub video_scale: f64,
    pub tag_opacity: f64,
    pub tag_offset_y: f64,
    pub overlay_opacity: f64,
    pub frame_opacity: f64,
    pub frame_scale: f64,
    pub frame_offset_y: f64,
    pub frame_radius: f64,
}

impl SceneFrame {
    pub fn at(progress: f64) -> Self {
        let t = clamp01(progress);

        let video_scale = if t < 0.1 {
            0.85
        } else if t < 0.25 {
            lerp(0.85, 1.0, eased(t, 0.1, 0.25))
        } else if t < 0.6 {
            lerp(1.0, 2.8, eased(t, 0.25, 0.6))
        } else {
            2.8
        };

        let tag_opacity = if t < 0.15 {
            0.0
        } else if t < 0.3 {
            map_range(t, 0.15, 0.3, 0.0, 1.0)
        } else if t < 0.45 {
            1.0
        } else if t < 0.55 {
            map_range(t, 0.45, 0.55, 1.0, 0.0)
        } else {
            0.0
        };

        let tag_offset_y = if t < 0.15 {
            20.0
        } else {
            lerp(20.0, 0.0, map_range(t, 0.15, 0.3, 0.0, 1.0))
        };

        let frame_opacity = if t < 0.6 { 0.0 } else { eased(t, 0.6, 0.75) };

        let frame_scale = if t < 0.75 {
            1.2
        } else {
            lerp(1.2, 0.95, eased(t, 0.75, 1.0))
        };

        let frame_offset_y = if t < 0.75 {
            0.0
        } else {
            lerp(0.0, -20.0, eased(t, 0.75, 1.0))
        };

        Self {
            video_scale,
            tag_opacity,
            tag_offset_y,
            overlay_opacity: map_range(t, 0.6, 0.75, 0.0, 1.0),
            frame_opacity,
            frame_scale,
            frame_offset_y,
            frame_radius: lerp(0.0, 32.0, eased(t, 0.4, 0.7)),
        }
    }

    pub fn video_style(&self) -> String {
        format!("transform: scale({:.4});", self.video_scale)
    }

    pub fn tag_style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px);",
            self.tag_opacity, self.tag_offset_y
        )
    }

    pub fn overlay_style(&self) -> String {
        format!("opacity: {:.4};", self.overlay_opacity)
    }

    pub fn frame_style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px) scale({:.4}); border-radius: {:.2}px;",
            self.frame_opacity, self.frame_offset_y, self.frame_scale, self.frame_radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_interpolation_helpers() {
        assert!(close(lerp(0.0, 10.0, 0.25), 2.5));
        assert!(close(smooth_step(0.5), 0.5));
        assert!(close(smooth_step(0.0), 0.0));
        assert!(close(smooth_step(1.0), 1.0));
        assert!(close(clamp01(-3.0), 0.0));
        assert!(close(clamp01(7.0), 1.0));
    }

    #[test]
    fn test_map_range_clamps() {
        assert!(close(map_range(0.2, 0.15, 0.3, 0.0, 1.0), 1.0 / 3.0));
        assert!(close(map_range(0.0, 0.15, 0.3, 0.0, 1.0), 0.0));
        assert!(close(map_range(0.9, 0.15, 0.3, 0.0, 1.0), 1.0));
        assert!(close(map_range(0.5, 0.45, 0.55, 1.0, 0.0), 0.5));
    }

    #[test]
    fn test_map_range_degenerate_span() {
        assert!(close(map_range(0.1, 0.5, 0.5, 0.0, 1.0), 0.0));
        assert!(close(map_range(0.5, 0.5, 0.5, 0.0, 1.0), 1.0));
    }

    #[test]
    fn test_scroll_progress() {
        assert!(close(scroll_progress(0.0, 3000.0, 1000.0), 0.0));
        assert!(close(scroll_progress(-1000.0, 3000.0, 1000.0), 0.5));
        assert!(close(scroll_progress(-5000.0, 3000.0, 1000.0), 1.0));
        assert!(close(scroll_progress(400.0, 3000.0, 1000.0), 0.0));
        assert!(close(scroll_progress(-10.0, 800.0, 1000.0), 1.0));
    }

    #[test]
    fn test_scene_start_and_end() {
        let start = SceneFrame::at(0.0);
        assert!(close(start.video_scale, 0.85));
        assert!(close(start.tag_opacity, 0.0));
        assert!(close(start.tag_offset_y, 20.0));
        assert!(close(start.frame_opacity, 0.0));
        assert!(close(start.frame_scale, 1.2));
        assert!(close(start.frame_radius, 0.0));

        let end = SceneFrame::at(1.0);
        assert!(close(end.video_scale, 2.8));
        assert!(close(end.overlay_opacity, 1.0));
        assert!(close(end.frame_opacity, 1.0));
        assert!(close(end.frame_scale, 0.95));
        assert!(close(end.frame_offset_y, -20.0));
        assert!(close(end.frame_radius, 32.0));
    }

    #[test]
    fn test_scene_midpoints() {
        let frame = SceneFrame::at(0.35);
        assert!(close(frame.tag_opacity, 1.0));
        assert!(close(frame.tag_offset_y, 0.0));
        assert!(frame.video_scale > 1.0 && frame.video_scale < 2.8);

        let frame = SceneFrame::at(0.5);
        assert!(close(frame.tag_opacity, 0.5));
        assert!(close(frame.frame_opacity, 0.0));
    }

    #[test]
    fn test_video_scale_never_shrinks_while_scrolling_down() {
        let mut previous = SceneFrame::at(0.0).video_scale;
        for i in 1..=100 {
            let scale = SceneFrame::at(i as f64 / 100.0).video_scale;
            assert!(scale + 1e-12 >= previous);
            previous = scale;
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(SceneFrame::at(-1.0), SceneFrame::at(0.0));
        assert_eq!(SceneFrame::at(4.0), SceneFrame::at(1.0));
    }

    #[test]
    fn test_styles_render() {
        let frame = SceneFrame::at(0.0);
        assert_eq!(frame.video_style(), "transform: scale(0.8500);");
        assert!(frame.frame_style().starts_with("opacity: 0.0000;"));
    }
}
