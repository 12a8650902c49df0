//! Cooldown for the "resend code" action on the verification page.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

pub const RESEND_COOLDOWN_SECS: u32 = 30;

/// Whole-second countdown driven by a one-second interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining_secs: u32,
}

impl ResendCooldown {
    /// Start a fresh cooldown after a resend.
    pub fn start(&mut self) {
        self.remaining_secs = RESEND_COOLDOWN_SECS;
    }

    /// Advance one second. Returns `true` while the cooldown is still running.
    pub fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs > 0
    }

    pub fn can_resend(self) -> bool {
        self.remaining_secs == 0
    }

    pub fn remaining_secs(self) -> u32 {
        self.remaining_secs
    }

    /// Button text for the current state.
    pub fn button_label(self) -> String {
        if self.can_resend() {
            "Resend code".to_owned()
        } else {
            format!("Resend code in {}s", self.remaining_secs)
        }
    }
}
