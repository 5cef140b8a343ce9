//! Mobile navigation menu state and its hamburger icon.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` when it was open.
    pub const fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    #[must_use]
    pub const fn icon(self) -> MenuIcon {
        MenuIcon::for_state(self.open)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// Inline styles for the three icon bars; open morphs them into an "X".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuIcon {
    pub bars: [BarStyle; 3],
}

impl MenuIcon {
    #[must_use]
    pub const fn for_state(open: bool) -> Self {
        if open {
            Self {
                bars: [
                    BarStyle {
                        transform: "rotate(45deg) translate(5px, 5px)",
                        opacity: "1",
                    },
                    BarStyle {
                        transform: "none",
                        opacity: "0",
                    },
                    BarStyle {
                        transform: "rotate(-45deg) translate(7px, -6px)",
                        opacity: "1",
                    },
                ],
            }
        } else {
            let flat = BarStyle {
                transform: "none",
                opacity: "1",
            };
            Self { bars: [flat; 3] }
        }
    }
}
