use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Preferences for move animations.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one quarter turn, in seconds. Zero disables animation.
    pub twist_duration: f32,
    /// Easing curve for quarter turns.
    pub interpolation: Interpolation,
}

impl AnimationPreferences {
    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> eyre::Result<()> {
        eyre::ensure!(
            Duration::try_from_secs_f32(self.twist_duration).is_ok(),
            "twist duration must be a non-negative number of seconds, not {}",
            self.twist_duration,
        );
        Ok(())
    }
}

/// Easing curve used to animate a quarter turn.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Interpolation {
    /// Slow start and slow end.
    #[default]
    Cosine,
    /// Constant speed.
    Linear,
    /// Fast start and slow end.
    CubicOut,
}
