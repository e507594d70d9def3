//! Local view state for the product detail page.
//!
//! A plain struct plus pure transition methods. The renderer holds this in
//! a signal and projects it into the DOM; nothing here touches the DOM or
//! performs I/O. The state is created when a product loads and discarded
//! when the identifier changes.

use serde::{Deserialize, Serialize};

/// Direction for cycling through gallery images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Previous image, wrapping from the first to the last.
    Prev,
    /// Next image, wrapping from the last to the first.
    Next,
}

/// Quantity stepper input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Add one, unbounded above.
    Increase,
    /// Subtract one; no-op at the floor of 1.
    Decrease,
}

/// Ephemeral UI state for the detail view.
///
/// Invariants: `selected_image` is valid for the current derived image
/// list, and `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Index into the derived image list.
    pub selected_image: usize,
    /// Units to add to the cart.
    pub quantity: u32,
    /// Local favorite flag; never persisted.
    pub favorite: bool,
    /// Whether the lightbox overlay is open.
    pub lightbox_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_image: 0,
            quantity: 1,
            favorite: false,
            lightbox_open: false,
        }
    }
}

impl ViewState {
    /// Fresh state for a newly loaded product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a thumbnail directly. Callers pass indices of rendered
    /// thumbnails, which are valid by construction.
    pub fn select_image(&mut self, index: usize) {
        self.selected_image = index;
    }

    /// Step the selected image, wrapping at both ends.
    ///
    /// Shared by the inline gallery controls and the lightbox controls;
    /// both read the same field so they can never disagree.
    pub fn step_image(&mut self, direction: StepDirection, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.selected_image = match direction {
            StepDirection::Next => (self.selected_image + 1) % image_count,
            StepDirection::Prev => {
                if self.selected_image == 0 {
                    image_count - 1
                } else {
                    self.selected_image - 1
                }
            }
        };
    }

    /// Apply a quantity stepper input.
    pub fn change_quantity(&mut self, change: QuantityChange) {
        match change {
            QuantityChange::Increase => self.quantity += 1,
            QuantityChange::Decrease => {
                if self.quantity > 1 {
                    self.quantity -= 1;
                }
            }
        }
    }

    /// Whether the decrease control should be disabled.
    pub fn at_minimum_quantity(&self) -> bool {
        self.quantity == 1
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    /// Open the lightbox on the currently selected image.
    pub fn open_lightbox(&mut self) {
        self.lightbox_open = true;
    }

    /// Close the lightbox.
    pub fn close_lightbox(&mut self) {
        self.lightbox_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.selected_image, 0);
        assert_eq!(state.quantity, 1);
        assert!(!state.favorite);
        assert!(!state.lightbox_open);
    }

    #[test]
    fn test_select_image() {
        let mut state = ViewState::new();
        state.select_image(2);
        assert_eq!(state.selected_image, 2);
    }

    #[test]
    fn test_step_image_wraps_forward() {
        let mut state = ViewState::new();
        state.select_image(2);
        state.step_image(StepDirection::Next, 3);
        assert_eq!(state.selected_image, 0);
    }

    #[test]
    fn test_step_image_wraps_backward() {
        let mut state = ViewState::new();
        state.step_image(StepDirection::Prev, 3);
        assert_eq!(state.selected_image, 2);
    }

    #[test]
    fn test_step_image_full_cycle_returns_to_start() {
        // Stepping `image_count` times from any index is the identity.
        for start in 0..4 {
            let mut state = ViewState::new();
            state.select_image(start);
            for _ in 0..4 {
                state.step_image(StepDirection::Next, 4);
            }
            assert_eq!(state.selected_image, start);
        }
    }

    #[test]
    fn test_step_image_empty_list_is_noop() {
        let mut state = ViewState::new();
        state.step_image(StepDirection::Next, 0);
        assert_eq!(state.selected_image, 0);
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        let mut state = ViewState::new();
        for _ in 0..10 {
            state.change_quantity(QuantityChange::Decrease);
        }
        assert_eq!(state.quantity, 1);
        assert!(state.at_minimum_quantity());
    }

    #[test]
    fn test_quantity_increase_unbounded() {
        let mut state = ViewState::new();
        for _ in 0..5 {
            state.change_quantity(QuantityChange::Increase);
        }
        assert_eq!(state.quantity, 6);
        assert!(!state.at_minimum_quantity());

        state.change_quantity(QuantityChange::Decrease);
        assert_eq!(state.quantity, 5);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut state = ViewState::new();
        state.toggle_favorite();
        assert!(state.favorite);
        state.toggle_favorite();
        assert!(!state.favorite);
    }

    #[test]
    fn test_lightbox_shares_selected_index() {
        // Selecting thumbnail k then opening the lightbox shows image k.
        let mut state = ViewState::new();
        state.select_image(1);
        state.open_lightbox();
        assert!(state.lightbox_open);
        assert_eq!(state.selected_image, 1);

        // Navigation inside the lightbox moves the gallery too.
        state.step_image(StepDirection::Next, 3);
        assert_eq!(state.selected_image, 2);
        state.close_lightbox();
        assert!(!state.lightbox_open);
        assert_eq!(state.selected_image, 2);
    }
}
