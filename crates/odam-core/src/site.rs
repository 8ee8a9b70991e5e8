//! Pure helpers behind the page effects: player labels, header state, verse
//! rotation, wave-bar animation and the loading bar.

use crate::constants::*;
use rand::Rng;

/// `m:ss` label for a playback position. Non-finite or negative input shows `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Played share of a track in percent; `None` until the duration is known.
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0)
        .then(|| (current / duration * 100.0).clamp(0.0, 100.0))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Header is marked scrolled past 100px and slides away while scrolling down
/// beyond 200px.
pub fn header_state(current: f64, last: f64) -> HeaderState {
    HeaderState {
        scrolled: current > HEADER_SCROLLED_AFTER_PX,
        hidden: current > last && current > HEADER_HIDE_AFTER_PX,
    }
}

/// Document offset to scroll to so the target clears the fixed header.
#[inline]
pub fn anchor_scroll_top(target_rect_top: f64, page_y_offset: f64) -> f64 {
    target_rect_top + page_y_offset - ANCHOR_SCROLL_OFFSET_PX
}

/// Random index in `0..len` that differs from `current` whenever `len > 1`.
pub fn pick_index<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    current: Option<usize>,
) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => loop {
            let next = rng.gen_range(0..len);
            if Some(next) != current {
                break Some(next);
            }
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveBar {
    pub height_px: f64,
    pub opacity: f64,
}

impl WaveBar {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            height_px: WAVE_BAR_MIN_HEIGHT_PX + rng.gen::<f64>() * WAVE_BAR_HEIGHT_SPAN_PX,
            opacity: WAVE_BAR_MIN_OPACITY + rng.gen::<f64>() * WAVE_BAR_OPACITY_SPAN,
        }
    }
}

/// Fill level of the page loading bar.
///
/// Starts at 10%, images that finish (loaded or failed) fill up to 90%, and
/// anything at or above 90% moves on to completion exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadProgress {
    percent: f64,
    settled: usize,
    total: usize,
    completing: bool,
}

impl LoadProgress {
    /// `pending` counts images not yet complete when tracking starts.
    pub fn new(total_images: usize, pending: usize) -> Self {
        Self {
            percent: LOADING_START_PERCENT,
            settled: total_images.saturating_sub(pending),
            total: total_images,
            completing: false,
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_completing(&self) -> bool {
        self.completing
    }

    /// An image fired `load` or `error`.
    pub fn image_settled(&mut self) -> f64 {
        if self.total == 0 {
            return self.percent;
        }
        self.settled = (self.settled + 1).min(self.total);
        let share = self.settled as f64 / self.total as f64;
        self.advance(LOADING_START_PERCENT + share * LOADING_IMAGES_SPAN_PERCENT)
    }

    /// Applied once the floor delay passes, whatever the images are doing.
    pub fn force_floor(&mut self) -> f64 {
        self.advance(LOADING_FLOOR_PERCENT)
    }

    /// True the first time the bar reaches the floor; the caller then
    /// schedules `complete`.
    pub fn should_complete(&mut self) -> bool {
        if self.completing || self.percent < LOADING_FLOOR_PERCENT {
            return false;
        }
        self.completing = true;
        true
    }

    pub fn complete(&mut self) -> f64 {
        self.completing = true;
        self.percent = 100.0;
        self.percent
    }

    fn advance(&mut self, percent: f64) -> f64 {
        self.percent = self.percent.max(percent).min(100.0);
        self.percent
    }
}
