//! SA configuration and cooling schedules.

use crate::error::{OpenShopError, Result};

/// Cooling schedule for temperature reduction.
///
/// The temperature is updated once after every neighbor evaluation.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter. Typically `(T_0 - T_min) / (max_iter * T_0 * T_min)`.
        beta: f64,
    },
}

impl CoolingSchedule {
    /// Temperature after one more step.
    pub fn next(self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.95 }
    }
}

/// Configuration for the annealing run.
///
/// # Examples
///
/// ```
/// use u_openshop::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_iterations(2000)
///     .with_cooling_rate(0.99)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. `None` derives it from the seed cost
    /// (`seed_cost * temperature_factor`).
    pub initial_temperature: Option<f64>,

    /// Multiplier applied to the seed cost when no initial temperature is set.
    pub temperature_factor: f64,

    /// The run stops once the temperature drops below this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum number of neighbor evaluations.
    pub max_iterations: usize,

    /// Random solutions tried against the seed before annealing starts.
    pub restarts: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: None,
            temperature_factor: 10.0,
            min_temperature: 1e-6,
            cooling: CoolingSchedule::default(),
            max_iterations: 5000,
            restarts: 5,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = Some(t);
        self
    }

    pub fn with_temperature_factor(mut self, factor: f64) -> Self {
        self.temperature_factor = factor;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Geometric cooling with factor `rate`.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling = CoolingSchedule::Geometric { alpha: rate };
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(OpenShopError::InvalidConfig(msg));

        if let Some(t) = self.initial_temperature {
            if !t.is_finite() || t <= 0.0 {
                return invalid(format!("initial_temperature must be positive, got {t}"));
            }
        }
        if !self.temperature_factor.is_finite() || self.temperature_factor <= 0.0 {
            return invalid(format!(
                "temperature_factor must be positive, got {}",
                self.temperature_factor
            ));
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            ));
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return invalid(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta.is_finite() && beta > 0.0) {
                    return invalid(format!("lundy-mees beta must be positive, got {beta}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.initial_temperature, None);
        assert!((config.temperature_factor - 10.0).abs() < 1e-12);
        assert!((config.min_temperature - 1e-6).abs() < 1e-15);
        assert_eq!(config.max_iterations, 5000);
        assert_eq!(config.restarts, 5);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.95 });
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
        assert!(SaConfig::default()
            .with_initial_temperature(3.0)
            .with_cooling(CoolingSchedule::LundyMees { beta: 0.01 })
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(matches!(
            config.validate(),
            Err(OpenShopError::InvalidConfig(_))
        ));
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_factor() {
        assert!(SaConfig::default()
            .with_temperature_factor(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_min_temperature() {
        assert!(SaConfig::default()
            .with_min_temperature(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(SaConfig::default().with_cooling_rate(1.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_steps() {
        let geometric = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((geometric.next(8.0) - 4.0).abs() < 1e-12);
        let lundy = CoolingSchedule::LundyMees { beta: 1.0 };
        assert!((lundy.next(1.0) - 0.5).abs() < 1e-12);
    }
}
