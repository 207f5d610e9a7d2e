//! Sampled pointer input

/// State of one pointer button for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Held this frame
    pub down: bool,
    /// Went down this frame
    pub pressed: bool,
    /// Went up this frame
    pub released: bool,
}

impl ButtonState {
    /// A button that is held but did not change this frame.
    pub const HELD: Self = Self {
        down: true,
        pressed: false,
        released: false,
    };

    /// A button that went down this frame.
    pub const PRESSED: Self = Self {
        down: true,
        pressed: true,
        released: false,
    };

    /// A button that went up this frame.
    pub const RELEASED: Self = Self {
        down: false,
        pressed: false,
        released: true,
    };
}

/// Input the gizmo layer reads each frame, sampled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// Primary (drag) button
    pub primary: ButtonState,
    /// Secondary (cancel) button
    pub secondary: ButtonState,
    /// Modifier that enables snapping while held
    pub snap_modifier: bool,
}

impl InputSnapshot {
    /// Snapshot with only the primary button in the given state.
    pub fn primary(primary: ButtonState) -> Self {
        Self {
            primary,
            ..Default::default()
        }
    }

    /// Same snapshot with the snapping modifier held.
    pub fn with_snapping(mut self) -> Self {
        self.snap_modifier = true;
        self
    }
}
