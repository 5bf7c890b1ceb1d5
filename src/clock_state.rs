use crate::clock_time::Field;

/// Whether the clock is running or being configured.
///
/// In `Configuring` time stands still and the joystick edits the field under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    #[default]
    Normal,
    Configuring,
}

impl ClockMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Configuring,
            Self::Configuring => Self::Normal,
        }
    }

    #[must_use]
    pub const fn is_configuring(self) -> bool {
        matches!(self, Self::Configuring)
    }
}

/// Mode plus the configuration cursor.
///
/// The cursor keeps its field across mode changes; re-entering configuration resumes on the
/// field last selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub mode: ClockMode,
    pub selected_field: Field,
}

impl ClockState {
    /// Flip between `Normal` and `Configuring`. Returns the new mode.
    pub fn toggle_mode(&mut self) -> ClockMode {
        self.mode = self.mode.toggled();
        #[cfg(feature = "defmt")]
        defmt::info!("Mode: {:?}", self.mode);
        self.mode
    }

    /// Move the cursor to the next field. Returns the new field.
    pub fn next_field(&mut self) -> Field {
        self.selected_field = self.selected_field.next();
        #[cfg(feature = "defmt")]
        defmt::info!("Selected field: {:?}", self.selected_field);
        self.selected_field
    }
}
