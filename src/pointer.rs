bitflags::bitflags! {
    /// Pointer buttons (or touch contact) held during an event.
    ///
    /// Hosts map their platform's button state onto these flags. A touch
    /// contact reports `TOUCH` for the whole gesture.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const PRIMARY   = 0b0001;
        const SECONDARY = 0b0010;
        const MIDDLE    = 0b0100;
        const TOUCH     = 0b1000;
    }
}

impl Buttons {
    /// Buttons that start and sustain a selection drag.
    pub const DRAG: Buttons = Buttons::PRIMARY.union(Buttons::TOUCH);

    pub fn drags(self) -> bool {
        self.intersects(Self::DRAG)
    }
}

/// Pointer and touch input, already resolved to the token under the pointer.
///
/// `index` is the selection index of that token, or `None` when the pointer
/// is over whitespace, punctuation or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed or touch started.
    Down {
        index: Option<usize>,
        buttons: Buttons,
    },
    /// Pointer moved onto a token (or touch moved over one).
    Enter {
        index: Option<usize>,
        buttons: Buttons,
    },
    /// Button released or touch ended.
    Up,
    /// The surface lost focus or visibility mid-gesture.
    Cancel,
}

impl PointerEvent {
    pub fn down(index: usize) -> Self {
        PointerEvent::Down {
            index: Some(index),
            buttons: Buttons::PRIMARY,
        }
    }

    pub fn enter(index: usize) -> Self {
        PointerEvent::Enter {
            index: Some(index),
            buttons: Buttons::PRIMARY,
        }
    }
}
