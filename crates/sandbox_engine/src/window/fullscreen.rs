//! Windowed ⇄ fullscreen flip with exact geometry restore
//!
//! Kept free of GLFW types so the restore logic is testable on its own.

/// Window position and client-area size, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    /// X position of the top-left corner
    pub x: i32,
    /// Y position of the top-left corner
    pub y: i32,
    /// Client area width
    pub width: i32,
    /// Client area height
    pub height: i32,
}

/// Two-state flip that remembers the pre-fullscreen geometry
///
/// The saved geometry is written only on the windowed → fullscreen edge
/// and consumed exactly once on the way back, so toggling twice returns
/// the window to its exact prior position and size.
#[derive(Debug, Default)]
pub struct FullscreenState {
    saved: Option<WindowGeometry>,
}

impl FullscreenState {
    /// Is the window currently fullscreen?
    pub fn is_fullscreen(&self) -> bool {
        self.saved.is_some()
    }

    /// Enter fullscreen, remembering the current windowed geometry
    ///
    /// A repeated enter keeps the originally saved geometry.
    pub fn enter(&mut self, current: WindowGeometry) {
        if self.saved.is_none() {
            self.saved = Some(current);
        }
    }

    /// Leave fullscreen, yielding the geometry to restore
    ///
    /// Returns `None` when already windowed.
    pub fn leave(&mut self) -> Option<WindowGeometry> {
        self.saved.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: WindowGeometry = WindowGeometry {
        x: 120,
        y: 80,
        width: 800,
        height: 600,
    };

    #[test]
    fn toggle_restores_exact_geometry() {
        let mut state = FullscreenState::default();
        state.enter(GEOMETRY);
        assert!(state.is_fullscreen());
        assert_eq!(state.leave(), Some(GEOMETRY));
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn repeated_enter_keeps_first_geometry() {
        let mut state = FullscreenState::default();
        state.enter(GEOMETRY);
        state.enter(WindowGeometry {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
        });
        assert_eq!(state.leave(), Some(GEOMETRY));
    }

    #[test]
    fn leave_while_windowed_is_a_no_op() {
        let mut state = FullscreenState::default();
        assert_eq!(state.leave(), None);
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn geometry_survives_only_one_round_trip() {
        let mut state = FullscreenState::default();
        state.enter(GEOMETRY);
        assert_eq!(state.leave(), Some(GEOMETRY));
        // A second leave must not hand back stale geometry.
        assert_eq!(state.leave(), None);
    }
}
