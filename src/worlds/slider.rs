//! Worlds domain: horizontal slider over the ordered world list.

use bevy::prelude::*;

use crate::content::SliderTuning;
use crate::tween::Tween;

#[derive(Debug, Clone, PartialEq)]
struct Slide {
    from: f32,
    to: f32,
    tween: Tween,
}

/// Index change produced by [`WorldSlider::next`] or [`WorldSlider::previous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Resource, Debug, Clone)]
pub struct WorldSlider {
    current: usize,
    count: usize,
    spacing: f32,
    duration: f32,
    /// Container x offset
    position: f32,
    slide: Option<Slide>,
}

impl WorldSlider {
    /// Starts snapped onto the first world.
    pub fn new(count: usize, tuning: &SliderTuning) -> Self {
        let mut slider = Self {
            current: 0,
            count,
            spacing: tuning.spacing,
            duration: tuning.slide_duration,
            position: 0.0,
            slide: None,
        };
        slider.position = slider.target_for(0);
        slider
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    #[cfg(test)]
    pub fn is_sliding(&self) -> bool {
        self.slide.is_some()
    }

    /// Local x of the world at `index` inside the container.
    pub fn item_x(&self, index: usize) -> f32 {
        index as f32 * self.spacing
    }

    fn target_for(&self, index: usize) -> f32 {
        -self.item_x(index)
    }

    pub fn can_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.count
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        if !self.can_next() {
            return None;
        }
        Some(self.change_to(self.current + 1))
    }

    pub fn previous(&mut self) -> Option<SlideChange> {
        if !self.can_previous() {
            return None;
        }
        Some(self.change_to(self.current - 1))
    }

    /// A new slide starts from wherever the container is now.
    fn change_to(&mut self, index: usize) -> SlideChange {
        let change = SlideChange {
            from: self.current,
            to: index,
        };
        self.current = index;
        self.slide = Some(Slide {
            from: self.position,
            to: self.target_for(index),
            tween: Tween::new(self.duration),
        });
        change
    }

    pub fn tick(&mut self, delta: f32) -> f32 {
        if let Some(slide) = self.slide.as_mut() {
            slide.tween.tick(delta);
            let s = slide.tween.eased(EaseFunction::CubicOut);
            self.position = slide.from.lerp(slide.to, s);
            if slide.tween.finished() {
                self.position = slide.to;
                self.slide = None;
            }
        }
        self.position
    }
}
