use serde::{Deserialize, Serialize};

use crate::{core::utils::maybe_warn, Float};

/// Default inertia coefficient $`\omega`$.
pub const DEFAULT_INERTIA_COEFF: Float = 0.7;
/// Default cognitive coefficient $`c_1`$.
pub const DEFAULT_COGNITIVE_COEFF: Float = 2.05;
/// Default social coefficient $`c_2`$.
pub const DEFAULT_SOCIAL_COEFF: Float = 2.05;
/// Default duration of one optimization round in milliseconds.
pub const DEFAULT_ROUND_DURATION_MS: Float = 1000.0;

/// The baseline a particle's candidate position is compared against when deciding whether it
/// becomes the particle's new best position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalBestUpdate {
    /// Compare against the particle's position before the move. The recorded best can get worse
    /// over time if a particle oscillates around the target.
    #[default]
    AgainstCurrent,
    /// Compare against the particle's recorded best position, so the personal best never gets
    /// worse (as long as the point of interest stays put).
    AgainstBest,
}

/// The tunable parameters of a [`Swarm`](crate::algorithms::particles::Swarm).
///
/// None of the coefficients are validated; unusual values (including negative ones) simply change
/// how the swarm converges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// The inertia coefficient $`\omega`$, weighting the particle's previous velocity.
    pub inertia: Float,
    /// The cognitive coefficient $`c_1`$, weighting the pull toward the particle's own best.
    pub cognitive: Float,
    /// The social coefficient $`c_2`$, weighting the pull toward the swarm's best.
    pub social: Float,
    /// The duration of one round in milliseconds, used to turn elapsed time into an
    /// interpolation fraction.
    pub round_duration_ms: Float,
    /// The personal-best rule.
    pub personal_best_update: PersonalBestUpdate,
    /// The swarm is flagged as converged once its best fitness is at or below this value.
    pub tolerance: Option<Float>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            inertia: DEFAULT_INERTIA_COEFF,
            cognitive: DEFAULT_COGNITIVE_COEFF,
            social: DEFAULT_SOCIAL_COEFF,
            round_duration_ms: DEFAULT_ROUND_DURATION_MS,
            personal_best_update: PersonalBestUpdate::default(),
            tolerance: None,
        }
    }
}

fn warn_if_negative(name: &str, value: Float) {
    if value < 0.0 {
        maybe_warn(&format!(
            "{name} coefficient set to {value}; negative coefficients push particles away"
        ));
    }
}

impl SwarmConfig {
    /// Sets the inertia coefficient $`\omega`$ (default = `0.7`).
    pub fn with_inertia(&mut self, value: Float) -> &mut Self {
        warn_if_negative("inertia", value);
        self.inertia = value;
        self
    }
    /// Sets the cognitive coefficient $`c_1`$ which controls the particle's tendency to move
    /// towards its personal best (default = `2.05`).
    pub fn with_cognitive(&mut self, value: Float) -> &mut Self {
        warn_if_negative("cognitive", value);
        self.cognitive = value;
        self
    }
    /// Sets the social coefficient $`c_2`$ which controls the particle's tendency to move
    /// towards the swarm's best (default = `2.05`).
    pub fn with_social(&mut self, value: Float) -> &mut Self {
        warn_if_negative("social", value);
        self.social = value;
        self
    }
    /// Sets the round duration in milliseconds (default = `1000`).
    ///
    /// # Panics
    ///
    /// This method will panic if `millis <= 0`.
    pub fn with_round_duration(&mut self, millis: Float) -> &mut Self {
        assert!(millis > 0.0, "round duration must be positive, got {millis}");
        self.round_duration_ms = millis;
        self
    }
    /// Sets the [`PersonalBestUpdate`] rule (default = [`PersonalBestUpdate::AgainstCurrent`]).
    pub const fn with_personal_best_update(&mut self, value: PersonalBestUpdate) -> &mut Self {
        self.personal_best_update = value;
        self
    }
    /// Sets the convergence tolerance on the best fitness (default = `None`, never converged).
    pub const fn with_tolerance(&mut self, value: Option<Float>) -> &mut Self {
        self.tolerance = value;
        self
    }
}
