//! Weekly weather generation.
//!
//! Weather is drawn once at the start of every tick, contest weeks
//! included. The distribution is a fixed weight table, except that the
//! overcast weight grows with every active cloud-bringer on the roster:
//!
//! | Weather    | Base weight |
//! |------------|-------------|
//! | Clear      | 30          |
//! | Few clouds | 27          |
//! | Cloudy     | 20          |
//! | Overcast   | 15 + 10 per active cloud-bringer |
//! | Rain       | 8           |

use serde::Deserialize;
use stargazer_types::{Dice, Weather};
use tracing::debug;

/// Base weight for each weather value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeatherWeights {
    /// Weight of [`Weather::Clear`].
    #[serde(default = "default_clear")]
    pub clear: f64,
    /// Weight of [`Weather::FewClouds`].
    #[serde(default = "default_few_clouds")]
    pub few_clouds: f64,
    /// Weight of [`Weather::Cloudy`].
    #[serde(default = "default_cloudy")]
    pub cloudy: f64,
    /// Weight of [`Weather::Overcast`] before the cloud-bringer bonus.
    #[serde(default = "default_overcast")]
    pub overcast: f64,
    /// Weight of [`Weather::Rain`].
    #[serde(default = "default_rain")]
    pub rain: f64,
}

impl Default for WeatherWeights {
    fn default() -> Self {
        Self {
            clear: default_clear(),
            few_clouds: default_few_clouds(),
            cloudy: default_cloudy(),
            overcast: default_overcast(),
            rain: default_rain(),
        }
    }
}

/// The weather distribution, with its cloud-bringer adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeatherTable {
    /// Base weights.
    #[serde(default)]
    pub weights: WeatherWeights,
    /// Overcast weight added per active cloud-bringer (default: 10).
    #[serde(default = "default_overcast_bonus")]
    pub overcast_bonus: f64,
}

impl Default for WeatherTable {
    fn default() -> Self {
        Self {
            weights: WeatherWeights::default(),
            overcast_bonus: default_overcast_bonus(),
        }
    }
}

impl WeatherTable {
    /// Effective weights in [`Weather::ALL`] order.
    pub fn weights_for(&self, cloud_bringers: usize) -> [f64; 5] {
        let bringers = f64::from(u32::try_from(cloud_bringers).unwrap_or(u32::MAX));
        let w = &self.weights;
        [
            w.clear,
            w.few_clouds,
            w.cloudy,
            self.overcast_bonus.mul_add(bringers, w.overcast),
            w.rain,
        ]
    }

    /// Draw this week's weather.
    ///
    /// Falls back to [`Weather::Clear`] when every weight is zero.
    pub fn generate(&self, cloud_bringers: usize, dice: &mut dyn Dice) -> Weather {
        let weights = self.weights_for(cloud_bringers);
        let weather = dice
            .weighted(&weights)
            .and_then(|index| Weather::ALL.get(index).copied())
            .unwrap_or(Weather::Clear);
        debug!(weather = weather.label(), cloud_bringers, "Weather generated");
        weather
    }
}

const fn default_clear() -> f64 {
    30.0
}

const fn default_few_clouds() -> f64 {
    27.0
}

const fn default_cloudy() -> f64 {
    20.0
}

const fn default_overcast() -> f64 {
    15.0
}

const fn default_rain() -> f64 {
    8.0
}

const fn default_overcast_bonus() -> f64 {
    10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn cloud_bringers_raise_overcast_weight() {
        let table = WeatherTable::default();
        let base = table.weights_for(0);
        let boosted = table.weights_for(2);
        assert!((base[3] - 15.0).abs() < f64::EPSILON);
        assert!((boosted[3] - 35.0).abs() < f64::EPSILON);
        assert!((boosted[0] - base[0]).abs() < f64::EPSILON);
    }

    #[test]
    fn overcast_dominates_with_many_cloud_bringers() {
        let table = WeatherTable::default();
        let mut rng = SmallRng::seed_from_u64(17);
        let overcast = (0..2000)
            .filter(|_| table.generate(50, &mut rng) == Weather::Overcast)
            .count();
        assert!(overcast > 1500);
    }

    #[test]
    fn all_zero_weights_fall_back_to_clear() {
        let table = WeatherTable {
            weights: WeatherWeights {
                clear: 0.0,
                few_clouds: 0.0,
                cloudy: 0.0,
                overcast: 0.0,
                rain: 0.0,
            },
            overcast_bonus: 0.0,
        };
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(table.generate(3, &mut rng), Weather::Clear);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let table: WeatherTable = serde_yml::from_str("weights:\n  rain: 50\n").unwrap();
        assert!((table.weights.rain - 50.0).abs() < f64::EPSILON);
        assert!((table.weights.clear - 30.0).abs() < f64::EPSILON);
        assert!((table.overcast_bonus - 10.0).abs() < f64::EPSILON);
    }
}
