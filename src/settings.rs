//! Presentation settings
//!
//! Effect toggles and accessibility overrides. These never change game
//! rules - they only gate what the composer draws. Overrides come from the
//! `NEON_PONG_SETTINGS` environment variable as inline JSON; anything
//! missing or malformed falls back to defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen shake on impacts
    pub screen_shake: bool,
    /// Ball trail
    pub trails: bool,
    /// Particle bursts
    pub particles: bool,
    /// White impact flash
    pub flash: bool,
    /// Reduced motion (suppresses shake and flash regardless of toggles)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_shake: true,
            trails: true,
            particles: true,
            flash: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    const ENV_KEY: &'static str = "NEON_PONG_SETTINGS";

    /// Load from the environment, defaulting on absence or parse failure
    pub fn load() -> Self {
        match std::env::var(Self::ENV_KEY) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::ENV_KEY);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", Self::ENV_KEY, err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Screen shake with the reduced-motion override applied
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Impact flash with the reduced-motion override applied
    pub fn effective_flash(&self) -> bool {
        self.flash && !self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let s = Settings::default();
        assert!(s.effective_screen_shake());
        assert!(s.effective_flash());
        assert!(s.trails && s.particles);
    }

    #[test]
    fn reduced_motion_overrides_toggles() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!s.effective_screen_shake());
        assert!(!s.effective_flash());
        assert!(s.trails, "trails are motion-neutral and stay on");
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let s: Settings = serde_json::from_str(r#"{"screen_shake": false}"#).unwrap();
        assert!(!s.screen_shake);
        assert!(s.particles);
    }
}
