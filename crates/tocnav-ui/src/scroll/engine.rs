//! Scroll targeting engine
//!
//! Drives one request at a time through `Idle -> Settling -> Scrolling ->
//! Idle`. Expanding collapsed sections changes the content height on the
//! host's own layout schedule, so the engine yields a few frames, forces a
//! layout pass, and only then measures where the target ended up.

use std::rc::Weak;
use std::time::Duration;

use tocnav_core::{BoundsProvider, ScrollContainer, SectionId};

use super::config::{ScrollConfig, ScrollConfigExt, SettleMode};
use super::easing::EasingTypeExt;
use super::timing::{lerp, progress};

/// Content heights closer than this count as the same layout
const STABLE_HEIGHT_EPSILON: f64 = 0.5;

/// Normalized offset that puts `target_top` (minus `top_margin`) at the
/// viewport's top edge, or `None` when the content fits without scrolling.
///
/// `1.0` is scrolled fully to the top, `0.0` fully to the bottom.
pub fn normalized_target(
    content_height: f64,
    viewport_height: f64,
    target_top: f64,
    top_margin: f64,
) -> Option<f64> {
    let scrollable_range = content_height - viewport_height;
    if scrollable_range.is_nan() || scrollable_range <= 0.0 {
        return None;
    }
    let distance = (target_top - top_margin).max(0.0);
    Some((1.0 - distance / scrollable_range).clamp(0.0, 1.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Settling,
    Scrolling,
}

/// An animation in flight
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub target: SectionId,
    /// Container offset read when the animation started
    pub from: f64,
    pub to: f64,
    pub elapsed: Duration,
    pub duration: Duration,
}

struct Settle {
    target: SectionId,
    bounds: Weak<dyn BoundsProvider>,
    frames: u32,
    last_height: Option<f64>,
}

enum Phase {
    Idle,
    Settling(Settle),
    Scrolling(ScrollRequest),
}

pub struct ScrollEngine {
    phase: Phase,
    config: ScrollConfig,
}

impl std::fmt::Debug for ScrollEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("state", &self.state())
            .field("target", &self.target())
            .finish()
    }
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollEngine {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            phase: Phase::Idle,
            config,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Takes effect from the next request
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    pub fn state(&self) -> EngineState {
        match self.phase {
            Phase::Idle => EngineState::Idle,
            Phase::Settling(_) => EngineState::Settling,
            Phase::Scrolling(_) => EngineState::Scrolling,
        }
    }

    /// True while a request is settling or scrolling; hosts can use this to
    /// keep ticking at animation rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn target(&self) -> Option<&SectionId> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Settling(settle) => Some(&settle.target),
            Phase::Scrolling(request) => Some(&request.target),
        }
    }

    pub fn request(&self) -> Option<&ScrollRequest> {
        match &self.phase {
            Phase::Scrolling(request) => Some(request),
            _ => None,
        }
    }

    /// Start a new request, abandoning any request in flight without
    /// snapping it to its target.
    pub fn begin(&mut self, target: SectionId, bounds: Weak<dyn BoundsProvider>) {
        if let Some(previous) = self.target() {
            tracing::debug!(previous = %previous, next = %target, "Scroll request superseded");
        }
        tracing::debug!(section = %target, "Settling layout before scroll");
        self.phase = Phase::Settling(Settle {
            target,
            bounds,
            frames: 0,
            last_height: None,
        });
    }

    /// Drop the request in flight, leaving the container where it is
    pub fn cancel(&mut self) {
        if let Some(target) = self.target() {
            tracing::debug!(section = %target, "Scroll request cancelled");
        }
        self.phase = Phase::Idle;
    }

    /// Advance by one host frame that took `dt` of real time
    pub fn tick(&mut self, dt: Duration, container: &dyn ScrollContainer) -> EngineState {
        self.phase = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => Phase::Idle,
            Phase::Settling(settle) => self.settle_step(settle, container),
            Phase::Scrolling(request) => self.scroll_step(request, dt, container),
        };
        self.state()
    }

    fn settle_step(&self, mut settle: Settle, container: &dyn ScrollContainer) -> Phase {
        settle.frames += 1;
        if settle.frames < self.config.min_settle_frames() {
            return Phase::Settling(settle);
        }

        container.force_layout_recompute();

        if self.config.settle == SettleMode::UntilStable {
            let height = container.content_height();
            let stable = settle
                .last_height
                .is_some_and(|last| (last - height).abs() < STABLE_HEIGHT_EPSILON);
            if !stable && settle.frames < self.config.settle_frame_limit() {
                settle.last_height = Some(height);
                return Phase::Settling(settle);
            }
        }

        self.measure(settle, container)
    }

    fn measure(&self, settle: Settle, container: &dyn ScrollContainer) -> Phase {
        let content_height = container.content_height();
        let viewport_height = container.viewport_height();
        if content_height <= viewport_height {
            tracing::debug!(
                section = %settle.target,
                content_height,
                viewport_height,
                "Content fits in viewport, no scroll needed"
            );
            return Phase::Idle;
        }

        let Some(bounds) = settle.bounds.upgrade() else {
            tracing::warn!(section = %settle.target, "Scroll target was destroyed before layout settled");
            return Phase::Idle;
        };
        let target_top = bounds.bounds_in_content_space(container.content_origin()).top;

        let Some(to) = normalized_target(content_height, viewport_height, target_top, self.config.top_margin) else {
            return Phase::Idle;
        };
        let from = container.normalized_offset();

        tracing::debug!(
            section = %settle.target,
            settle_frames = settle.frames,
            content_height,
            viewport_height,
            target_top,
            from,
            to,
            "Scroll target measured"
        );

        if !self.config.is_smooth() {
            container.set_normalized_offset(to);
            return Phase::Idle;
        }

        Phase::Scrolling(ScrollRequest {
            target: settle.target,
            from,
            to,
            elapsed: Duration::ZERO,
            duration: self.config.animation_duration(),
        })
    }

    fn scroll_step(&self, mut request: ScrollRequest, dt: Duration, container: &dyn ScrollContainer) -> Phase {
        request.elapsed += dt;
        if request.elapsed >= request.duration {
            container.set_normalized_offset(request.to);
            tracing::debug!(section = %request.target, offset = request.to, "Scroll finished");
            return Phase::Idle;
        }

        let t = self.config.easing.apply(progress(request.elapsed, request.duration));
        container.set_normalized_offset(lerp(request.from, request.to, t));
        Phase::Scrolling(request)
    }
}
