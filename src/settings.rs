//! Game settings and difficulty presets
//!
//! Held in memory for the session only; the best score is the sole persisted value.

use std::str::FromStr;

/// Difficulty presets selectable before a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyPreset {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyPreset {
    pub const ALL: [DifficultyPreset; 3] = [
        DifficultyPreset::Easy,
        DifficultyPreset::Medium,
        DifficultyPreset::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Easy => "Easy",
            DifficultyPreset::Medium => "Medium",
            DifficultyPreset::Hard => "Hard",
        }
    }

    /// Scale applied to paddle speed and item fall speed for the whole run
    pub fn multiplier(&self) -> f32 {
        match self {
            DifficultyPreset::Easy => 1.0,
            DifficultyPreset::Medium => 1.5,
            DifficultyPreset::Hard => 2.0,
        }
    }
}

impl FromStr for DifficultyPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyPreset::Easy),
            "medium" | "med" => Ok(DifficultyPreset::Medium),
            "hard" => Ok(DifficultyPreset::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy, medium or hard)")),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone)]
pub struct Settings {
    /// Preset of the current (or last) run
    pub difficulty: DifficultyPreset,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all cues
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyPreset::Easy,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Effective cue volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}
