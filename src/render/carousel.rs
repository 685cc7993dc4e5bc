//! Shape carousel - horizontally scrolling shape picker
//!
//! Tapping an item selects it. Dragging, the mouse wheel and trackpad
//! gestures scroll freely; once the pointer is up and the strip comes to
//! rest it snaps so the nearest item is centered, and that item becomes the
//! selection.

use eframe::egui::{self, Vec2};

use crate::formulas::formula;
use crate::shapes::ShapeKind;

/// Index of the item closest to center at scroll `offset`
pub fn nearest_index(offset: f32, stride: f32, count: usize) -> usize {
    if count == 0 || stride <= 0.0 {
        return 0;
    }
    let index = (offset / stride).round().max(0.0) as usize;
    index.min(count - 1)
}

/// Scroll offset that centers item `index`
pub fn offset_for(index: usize, stride: f32) -> f32 {
    index as f32 * stride
}

/// Scroll gesture the carousel is following
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Motion {
    Idle,
    /// Pointer is down and has moved the strip
    Dragging,
    /// Strip is moving on its own (release momentum, mouse wheel, trackpad)
    Settling,
}

pub struct Carousel {
    /// Width of each item in pixels
    pub item_width: f32,
    /// Height of each item in pixels
    pub item_height: f32,
    /// Item to center on the next frame
    pending: Option<usize>,
    /// Offset seen on the previous frame
    last_offset: f32,
    motion: Motion,
}

impl Carousel {
    /// Create a carousel centered on `selected`
    pub fn new(selected: ShapeKind) -> Self {
        Self {
            item_width: 110.0,
            item_height: 44.0,
            pending: Some(selected.index()),
            last_offset: 0.0,
            motion: Motion::Idle,
        }
    }

    /// Draw the carousel
    ///
    /// # Returns
    /// The newly selected shape, if the selection changed this frame
    pub fn show(&mut self, ui: &mut egui::Ui, selected: ShapeKind) -> Option<ShapeKind> {
        let stride = self.item_width + ui.spacing().item_spacing.x;
        // Side padding so the first and last items can reach the center
        let pad = ((ui.available_width() - self.item_width) / 2.0).max(0.0);

        let mut area = egui::ScrollArea::horizontal();
        let jump = self.pending.take();
        if let Some(index) = jump {
            area = area.horizontal_scroll_offset(offset_for(index, stride));
        }

        let mut clicked = None;
        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(pad);
                for kind in ShapeKind::ALL {
                    let button = egui::Button::new(formula(*kind).display_name)
                        .selected(*kind == selected)
                        .min_size(Vec2::new(self.item_width, self.item_height));
                    if ui.add(button).clicked() {
                        clicked = Some(kind.index());
                    }
                }
                ui.add_space(pad);
            });
        });

        let offset = output.state.offset.x;
        if jump.is_some() {
            // Our own jump, not a gesture
            self.last_offset = offset;
        }
        let pointer_down = ui.input(|i| i.pointer.any_down());

        self.track(offset, pointer_down, clicked, stride)
            .and_then(|index| ShapeKind::ALL.get(index).copied())
            .filter(|kind| *kind != selected)
    }

    /// Advance the gesture state by one frame
    ///
    /// A tap selects its item at once. Any other movement of the strip
    /// selects the item nearest the center on the first frame where the
    /// pointer is up and the offset has stopped changing; that item is
    /// centered on the next frame.
    ///
    /// # Returns
    /// Index of the item to select, if any
    fn track(&mut self, offset: f32, pointer_down: bool, clicked: Option<usize>, stride: f32) -> Option<usize> {
        let moved = (offset - self.last_offset).abs() > f32::EPSILON;
        self.last_offset = offset;

        if let Some(index) = clicked {
            self.motion = Motion::Idle;
            self.pending = Some(index);
            return Some(index);
        }

        if pointer_down {
            if moved {
                self.motion = Motion::Dragging;
            }
            return None;
        }
        if moved {
            self.motion = Motion::Settling;
            return None;
        }
        if self.motion == Motion::Idle {
            return None;
        }

        self.motion = Motion::Idle;
        let index = nearest_index(offset, stride, ShapeKind::ALL.len());
        log::debug!("Carousel snapped to item {} at offset {:.1}", index, offset);
        self.pending = Some(index);
        Some(index)
    }
}
