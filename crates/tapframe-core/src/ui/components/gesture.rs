//! Press / arm / release latch shared by tap-style widgets
//!
//! A press inside the widget arms it. The action commits only when the
//! contact is released while still inside. What happens when a held contact
//! drifts outside depends on the widget: buttons cancel, toggles keep the arm
//! so touch jitter does not void the gesture.

/// Behavior when a held contact leaves the hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutPolicy {
    /// Clear the arm and the pressed styling
    Cancel,
    /// Leave any existing arm in place
    Hold,
}

/// Two-flag interaction state: visual `pressed` plus the commit latch `armed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressLatch {
    is_pressed: bool,
    click_armed: bool,
}

impl PressLatch {
    pub const fn new() -> Self {
        Self {
            is_pressed: false,
            click_armed: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn is_armed(&self) -> bool {
        self.click_armed
    }

    /// Feed one frame. Returns `true` when this frame confirms the gesture.
    pub fn update(&mut self, pressed: bool, hit: bool, policy: DragOutPolicy) -> bool {
        if pressed {
            if hit {
                self.click_armed = true;
                self.is_pressed = true;
            } else if policy == DragOutPolicy::Cancel {
                self.reset();
            }
            false
        } else {
            let confirmed = self.click_armed && hit;
            self.reset();
            confirmed
        }
    }

    pub fn reset(&mut self) {
        self.is_pressed = false;
        self.click_armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_inside_confirms() {
        let mut latch = PressLatch::new();
        assert!(!latch.update(true, true, DragOutPolicy::Cancel));
        assert!(latch.is_pressed() && latch.is_armed());
        assert!(latch.update(false, true, DragOutPolicy::Cancel));
        assert_eq!(latch, PressLatch::new());
    }

    #[test]
    fn test_release_outside_never_confirms() {
        for policy in [DragOutPolicy::Cancel, DragOutPolicy::Hold] {
            let mut latch = PressLatch::new();
            latch.update(true, true, policy);
            assert!(!latch.update(false, false, policy));
            assert!(!latch.is_armed());
        }
    }

    #[test]
    fn test_cancel_policy_clears_on_drag_out() {
        let mut latch = PressLatch::new();
        latch.update(true, true, DragOutPolicy::Cancel);
        latch.update(true, false, DragOutPolicy::Cancel);
        assert!(!latch.is_armed() && !latch.is_pressed());
        // Coming back inside re-arms.
        latch.update(true, true, DragOutPolicy::Cancel);
        assert!(latch.update(false, true, DragOutPolicy::Cancel));
    }

    #[test]
    fn test_hold_policy_keeps_arm_on_drag_out() {
        let mut latch = PressLatch::new();
        latch.update(true, true, DragOutPolicy::Hold);
        latch.update(true, false, DragOutPolicy::Hold);
        assert!(latch.is_armed());
        assert!(latch.update(false, true, DragOutPolicy::Hold));
    }

    #[test]
    fn test_press_started_outside_does_not_arm() {
        let mut latch = PressLatch::new();
        latch.update(true, false, DragOutPolicy::Hold);
        assert!(!latch.is_armed());
        assert!(!latch.update(false, true, DragOutPolicy::Hold));
    }
}
