//! The six input variables and their linguistic categories.
//!
//! Universes and breakpoints are fixed calibration constants. Categories
//! are listed in declaration order, which is also the tie-break order.
//! Some wind categories (Storm, Hurricane) sit above the 80 km/h universe
//! and never receive membership; they are kept so the Beaufort scale stays
//! complete.

use std::fmt;
use std::str::FromStr;

use fallguard_fuzzy::{Category, CategorySet, FuzzyResult, MembershipShape, Universe};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, RiskError};
use crate::labels::{LabelledCategory, Locale};

/// Measured quantity feeding the risk model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputVariable {
    Wind,
    Temperature,
    Age,
    Humidity,
    Rainfall,
    Health,
}

impl InputVariable {
    /// Every input, in the order the aggregate vector is assembled
    pub const ALL: [InputVariable; 6] = [
        InputVariable::Wind,
        InputVariable::Temperature,
        InputVariable::Age,
        InputVariable::Humidity,
        InputVariable::Rainfall,
        InputVariable::Health,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            InputVariable::Wind => "wind",
            InputVariable::Temperature => "temperature",
            InputVariable::Age => "age",
            InputVariable::Humidity => "humidity",
            InputVariable::Rainfall => "rainfall",
            InputVariable::Health => "health",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            InputVariable::Wind => "Wind Speed",
            InputVariable::Temperature => "Temperature",
            InputVariable::Age => "Worker Age",
            InputVariable::Humidity => "Relative Humidity",
            InputVariable::Rainfall => "Rainfall",
            InputVariable::Health => "Health Condition",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            InputVariable::Wind => "km/h",
            InputVariable::Temperature => "°C",
            InputVariable::Age => "years",
            InputVariable::Humidity => "%",
            InputVariable::Rainfall => "mm",
            InputVariable::Health => "0 = healthy, 5 = critical",
        }
    }

    /// Closed domain `(min, max)` of the universe
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            InputVariable::Wind => (0.0, 80.0),
            InputVariable::Temperature => (-40.0, 60.0),
            InputVariable::Age => (13.0, 100.0),
            InputVariable::Humidity => (0.0, 100.0),
            InputVariable::Rainfall => (0.0, 150.0),
            InputVariable::Health => (0.0, 5.0),
        }
    }

    /// Sampling resolution of the universe
    pub fn step(&self) -> f64 {
        match self {
            InputVariable::Health => 0.01,
            _ => 1.0,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = self.bounds();
        value >= min && value <= max
    }

    /// The sampled universe shared by this variable's categories.
    pub fn universe(&self) -> Result<&'static Universe> {
        Ok(match self {
            InputVariable::Wind => WindCategory::category_set()?.universe(),
            InputVariable::Temperature => TemperatureCategory::category_set()?.universe(),
            InputVariable::Age => AgeCategory::category_set()?.universe(),
            InputVariable::Humidity => HumidityCategory::category_set()?.universe(),
            InputVariable::Rainfall => RainfallCategory::category_set()?.universe(),
            InputVariable::Health => HealthCategory::category_set()?.universe(),
        })
    }

    /// Fuzzify `value` against this variable's categories and reduce it back
    /// to a crisp value on the same scale.
    pub fn evaluate(&self, value: f64, locale: Locale) -> Result<Reading> {
        match self {
            InputVariable::Wind => evaluate::<WindCategory>(value, locale),
            InputVariable::Temperature => evaluate::<TemperatureCategory>(value, locale),
            InputVariable::Age => evaluate::<AgeCategory>(value, locale),
            InputVariable::Humidity => evaluate::<HumidityCategory>(value, locale),
            InputVariable::Rainfall => evaluate::<RainfallCategory>(value, locale),
            InputVariable::Health => evaluate::<HealthCategory>(value, locale),
        }
    }

    /// Describe every category of this variable.
    pub fn categories(&self, locale: Locale) -> Result<Vec<CategoryInfo>> {
        match self {
            InputVariable::Wind => describe::<WindCategory>(locale),
            InputVariable::Temperature => describe::<TemperatureCategory>(locale),
            InputVariable::Age => describe::<AgeCategory>(locale),
            InputVariable::Humidity => describe::<HumidityCategory>(locale),
            InputVariable::Rainfall => describe::<RainfallCategory>(locale),
            InputVariable::Health => describe::<HealthCategory>(locale),
        }
    }
}

impl fmt::Display for InputVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InputVariable {
    type Err = RiskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        match wanted.as_str() {
            "temp" => return Ok(InputVariable::Temperature),
            "rain" => return Ok(InputVariable::Rainfall),
            _ => {}
        }
        InputVariable::ALL
            .iter()
            .copied()
            .find(|v| v.id() == wanted)
            .ok_or_else(|| RiskError::UnknownVariable(s.to_string()))
    }
}

/// Outcome of fuzzifying and defuzzifying one input.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    /// Peak-weighted crisp value, on the variable's own scale
    pub defuzzified: f64,
    /// Label of the strongest category; `None` if nothing has membership
    pub dominant: Option<&'static str>,
}

/// Description of one category, for display.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub shape: MembershipShape,
    /// Universe point where the sampled membership first peaks
    pub peak: f64,
    /// Highest sampled membership within the universe
    pub height: f64,
}

pub(crate) fn evaluate<C: LabelledCategory>(value: f64, locale: Locale) -> Result<Reading> {
    let set = C::category_set()?;
    let fuzzified = set.fuzzify(value)?;
    let defuzzified = set.defuzzify(&fuzzified);
    trace!(scope = C::SCOPE, value, defuzzified, "defuzzified input");
    Ok(Reading {
        defuzzified,
        dominant: fuzzified.dominant().map(|c| c.label(locale)),
    })
}

pub(crate) fn describe<C: LabelledCategory>(locale: Locale) -> Result<Vec<CategoryInfo>> {
    let set = C::category_set()?;
    Ok(set
        .iter()
        .map(|entry| CategoryInfo {
            id: entry.category.id(),
            label: entry.category.label(locale),
            shape: entry.shape.clone(),
            peak: entry.peak,
            height: entry.height(),
        })
        .collect())
}

fn build_set<C: Category>(variable: InputVariable) -> FuzzyResult<CategorySet<C>> {
    let (min, max) = variable.bounds();
    CategorySet::new(Universe::new(min, max, variable.step())?)
}

lazy_static! {
    static ref WIND: FuzzyResult<CategorySet<WindCategory>> = build_set(InputVariable::Wind);
    static ref TEMPERATURE: FuzzyResult<CategorySet<TemperatureCategory>> =
        build_set(InputVariable::Temperature);
    static ref AGE: FuzzyResult<CategorySet<AgeCategory>> = build_set(InputVariable::Age);
    static ref HUMIDITY: FuzzyResult<CategorySet<HumidityCategory>> =
        build_set(InputVariable::Humidity);
    static ref RAINFALL: FuzzyResult<CategorySet<RainfallCategory>> =
        build_set(InputVariable::Rainfall);
    static ref HEALTH: FuzzyResult<CategorySet<HealthCategory>> = build_set(InputVariable::Health);
}

// ── Wind ────────────────────────────────────────────────────────────────

/// Beaufort-derived wind categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindCategory {
    Calm,
    LightAir,
    LightBreeze,
    GentleBreeze,
    ModerateBreeze,
    FreshBreeze,
    StrongBreeze,
    NearGale,
    Gale,
    StrongGale,
    Storm,
    Hurricane,
}

impl Category for WindCategory {
    const ALL: &'static [Self] = &[
        WindCategory::Calm,
        WindCategory::LightAir,
        WindCategory::LightBreeze,
        WindCategory::GentleBreeze,
        WindCategory::ModerateBreeze,
        WindCategory::FreshBreeze,
        WindCategory::StrongBreeze,
        WindCategory::NearGale,
        WindCategory::Gale,
        WindCategory::StrongGale,
        WindCategory::Storm,
        WindCategory::Hurricane,
    ];

    fn id(&self) -> &'static str {
        match self {
            WindCategory::Calm => "calm",
            WindCategory::LightAir => "light_air",
            WindCategory::LightBreeze => "light_breeze",
            WindCategory::GentleBreeze => "gentle_breeze",
            WindCategory::ModerateBreeze => "moderate_breeze",
            WindCategory::FreshBreeze => "fresh_breeze",
            WindCategory::StrongBreeze => "strong_breeze",
            WindCategory::NearGale => "near_gale",
            WindCategory::Gale => "gale",
            WindCategory::StrongGale => "strong_gale",
            WindCategory::Storm => "storm",
            WindCategory::Hurricane => "hurricane",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            WindCategory::Calm => MembershipShape::triangular(0.0, 0.0, 2.0),
            WindCategory::LightAir => MembershipShape::triangular(1.0, 3.0, 6.0),
            WindCategory::LightBreeze => MembershipShape::triangular(4.0, 7.5, 10.0),
            WindCategory::GentleBreeze => MembershipShape::triangular(8.0, 13.0, 17.0),
            WindCategory::ModerateBreeze => MembershipShape::triangular(15.0, 21.5, 27.0),
            WindCategory::FreshBreeze => MembershipShape::triangular(25.0, 31.0, 36.0),
            WindCategory::StrongBreeze => MembershipShape::triangular(34.0, 41.5, 47.0),
            WindCategory::NearGale => MembershipShape::triangular(45.0, 53.0, 60.0),
            WindCategory::Gale => MembershipShape::triangular(58.0, 66.0, 73.0),
            WindCategory::StrongGale => MembershipShape::triangular(71.0, 79.0, 86.0),
            WindCategory::Storm => MembershipShape::triangular(84.0, 95.0, 105.0),
            WindCategory::Hurricane => MembershipShape::trapezoidal(102.0, 110.0, 150.0, 150.0),
        }
    }
}

impl LabelledCategory for WindCategory {
    const SCOPE: &'static str = "wind";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        WIND.as_ref().map_err(|e| e.clone().into())
    }
}

// ── Temperature ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureCategory {
    VeryCold,
    Cold,
    Mild,
    Hot,
    ExtremeHeat,
}

impl Category for TemperatureCategory {
    const ALL: &'static [Self] = &[
        TemperatureCategory::VeryCold,
        TemperatureCategory::Cold,
        TemperatureCategory::Mild,
        TemperatureCategory::Hot,
        TemperatureCategory::ExtremeHeat,
    ];

    fn id(&self) -> &'static str {
        match self {
            TemperatureCategory::VeryCold => "very_cold",
            TemperatureCategory::Cold => "cold",
            TemperatureCategory::Mild => "mild",
            TemperatureCategory::Hot => "hot",
            TemperatureCategory::ExtremeHeat => "extreme_heat",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            TemperatureCategory::VeryCold => MembershipShape::triangular(-40.0, -30.0, -15.0),
            TemperatureCategory::Cold => MembershipShape::triangular(-20.0, -5.0, 10.0),
            TemperatureCategory::Mild => MembershipShape::triangular(5.0, 17.5, 30.0),
            TemperatureCategory::Hot => MembershipShape::triangular(25.0, 35.0, 45.0),
            TemperatureCategory::ExtremeHeat => {
                MembershipShape::trapezoidal(42.0, 50.0, 60.0, 60.0)
            }
        }
    }
}

impl LabelledCategory for TemperatureCategory {
    const SCOPE: &'static str = "temperature";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        TEMPERATURE.as_ref().map_err(|e| e.clone().into())
    }
}

// ── Age ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    Adolescent,
    YoungAdult,
    MiddleAged,
    Senior,
    Elderly,
}

impl Category for AgeCategory {
    const ALL: &'static [Self] = &[
        AgeCategory::Adolescent,
        AgeCategory::YoungAdult,
        AgeCategory::MiddleAged,
        AgeCategory::Senior,
        AgeCategory::Elderly,
    ];

    fn id(&self) -> &'static str {
        match self {
            AgeCategory::Adolescent => "adolescent",
            AgeCategory::YoungAdult => "young_adult",
            AgeCategory::MiddleAged => "middle_aged",
            AgeCategory::Senior => "senior",
            AgeCategory::Elderly => "elderly",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            // Starts below the 13-year universe floor
            AgeCategory::Adolescent => MembershipShape::triangular(10.0, 15.0, 20.0),
            AgeCategory::YoungAdult => MembershipShape::triangular(17.0, 26.0, 36.0),
            AgeCategory::MiddleAged => MembershipShape::triangular(33.0, 45.0, 58.0),
            AgeCategory::Senior => MembershipShape::triangular(55.0, 67.0, 80.0),
            AgeCategory::Elderly => MembershipShape::trapezoidal(75.0, 85.0, 100.0, 100.0),
        }
    }
}

impl LabelledCategory for AgeCategory {
    const SCOPE: &'static str = "age";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        AGE.as_ref().map_err(|e| e.clone().into())
    }
}

// ── Humidity ────────────────────────────────────────────────────────────

/// Humidity is hazardous at both ends, so `Extreme` is bimodal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityCategory {
    Extreme,
    Comfortable,
}

impl Category for HumidityCategory {
    const ALL: &'static [Self] = &[HumidityCategory::Extreme, HumidityCategory::Comfortable];

    fn id(&self) -> &'static str {
        match self {
            HumidityCategory::Extreme => "extreme",
            HumidityCategory::Comfortable => "comfortable",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            HumidityCategory::Extreme => MembershipShape::trapezoidal(0.0, 0.0, 10.0, 30.0)
                .union(MembershipShape::trapezoidal(80.0, 90.0, 100.0, 100.0)),
            HumidityCategory::Comfortable => MembershipShape::triangular(30.0, 55.0, 80.0),
        }
    }
}

impl LabelledCategory for HumidityCategory {
    const SCOPE: &'static str = "humidity";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        HUMIDITY.as_ref().map_err(|e| e.clone().into())
    }
}

// ── Rainfall ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainfallCategory {
    None,
    Light,
    Moderate,
    Heavy,
    Violent,
    Extreme,
}

impl Category for RainfallCategory {
    const ALL: &'static [Self] = &[
        RainfallCategory::None,
        RainfallCategory::Light,
        RainfallCategory::Moderate,
        RainfallCategory::Heavy,
        RainfallCategory::Violent,
        RainfallCategory::Extreme,
    ];

    fn id(&self) -> &'static str {
        match self {
            RainfallCategory::None => "none",
            RainfallCategory::Light => "light",
            RainfallCategory::Moderate => "moderate",
            RainfallCategory::Heavy => "heavy",
            RainfallCategory::Violent => "violent",
            RainfallCategory::Extreme => "extreme",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            RainfallCategory::None => MembershipShape::triangular(0.0, 0.0, 0.3),
            RainfallCategory::Light => MembershipShape::triangular(0.1, 1.5, 3.0),
            RainfallCategory::Moderate => MembershipShape::triangular(2.5, 5.5, 9.0),
            RainfallCategory::Heavy => MembershipShape::triangular(8.0, 22.0, 40.0),
            RainfallCategory::Violent => MembershipShape::triangular(35.0, 65.0, 90.0),
            RainfallCategory::Extreme => MembershipShape::trapezoidal(85.0, 100.0, 150.0, 150.0),
        }
    }
}

impl LabelledCategory for RainfallCategory {
    const SCOPE: &'static str = "rainfall";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        RAINFALL.as_ref().map_err(|e| e.clone().into())
    }
}

// ── Health ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    Healthy,
    Moderate,
    AtRisk,
    HighRisk,
    Critical,
}

impl Category for HealthCategory {
    const ALL: &'static [Self] = &[
        HealthCategory::Healthy,
        HealthCategory::Moderate,
        HealthCategory::AtRisk,
        HealthCategory::HighRisk,
        HealthCategory::Critical,
    ];

    fn id(&self) -> &'static str {
        match self {
            HealthCategory::Healthy => "healthy",
            HealthCategory::Moderate => "moderate",
            HealthCategory::AtRisk => "at_risk",
            HealthCategory::HighRisk => "high_risk",
            HealthCategory::Critical => "critical",
        }
    }

    fn shape(&self) -> MembershipShape {
        match self {
            HealthCategory::Healthy => MembershipShape::trapezoidal(0.0, 0.0, 0.5, 1.2),
            HealthCategory::Moderate => MembershipShape::triangular(1.0, 1.7, 2.4),
            HealthCategory::AtRisk => MembershipShape::triangular(2.1, 2.7, 3.3),
            HealthCategory::HighRisk => MembershipShape::triangular(3.0, 3.6, 4.2),
            HealthCategory::Critical => MembershipShape::trapezoidal(4.0, 4.5, 5.0, 5.0),
        }
    }
}

impl LabelledCategory for HealthCategory {
    const SCOPE: &'static str = "health";

    fn category_set() -> Result<&'static CategorySet<Self>> {
        HEALTH.as_ref().map_err(|e| e.clone().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn peaks<C: LabelledCategory>() -> Vec<f64> {
        C::category_set().unwrap().iter().map(|e| e.peak).collect()
    }

    #[test]
    fn universes_match_bounds() {
        for variable in InputVariable::ALL {
            let universe = variable.universe().unwrap();
            let (min, max) = variable.bounds();
            assert_eq!(universe.min(), min);
            assert_eq!(universe.max(), max);
            assert_eq!(universe.points()[0], min);
            assert!(close(*universe.points().last().unwrap(), max));
        }
        assert_eq!(InputVariable::Health.universe().unwrap().len(), 501);
        assert_eq!(InputVariable::Wind.universe().unwrap().len(), 81);
    }

    #[test]
    fn bounds_normalize_to_unit_interval() {
        for variable in InputVariable::ALL {
            let universe = variable.universe().unwrap();
            let (min, max) = variable.bounds();
            assert_eq!(universe.normalize(min).unwrap(), 0.0);
            assert_eq!(universe.normalize(max).unwrap(), 1.0);
        }
    }

    #[test]
    fn every_category_has_labels_in_every_locale() {
        fn check<C: LabelledCategory>() {
            for c in C::ALL {
                for &locale in Locale::ALL {
                    assert!(
                        labels::lookup(C::SCOPE, c.id(), locale).is_some(),
                        "missing {:?} label for {}::{}",
                        locale,
                        C::SCOPE,
                        c.id()
                    );
                }
            }
        }
        check::<WindCategory>();
        check::<TemperatureCategory>();
        check::<AgeCategory>();
        check::<HumidityCategory>();
        check::<RainfallCategory>();
        check::<HealthCategory>();
    }

    #[test]
    fn sampled_peaks() {
        // Off-grid apexes resolve to the first maximal sample; categories
        // beyond the universe fall back to its first point.
        assert_eq!(
            peaks::<WindCategory>(),
            vec![0.0, 3.0, 7.0, 13.0, 21.0, 31.0, 41.0, 53.0, 66.0, 79.0, 0.0, 0.0]
        );
        assert_eq!(
            peaks::<TemperatureCategory>(),
            vec![-30.0, -5.0, 17.0, 35.0, 50.0]
        );
        assert_eq!(peaks::<AgeCategory>(), vec![15.0, 26.0, 45.0, 67.0, 85.0]);
        assert_eq!(peaks::<HumidityCategory>(), vec![0.0, 55.0]);
        assert_eq!(
            peaks::<RainfallCategory>(),
            vec![0.0, 2.0, 6.0, 22.0, 65.0, 100.0]
        );
        let health = peaks::<HealthCategory>();
        let expected = [0.0, 1.7, 2.7, 3.6, 4.5];
        for (got, want) in health.iter().zip(expected) {
            assert!(close(*got, want), "{} != {}", got, want);
        }
    }

    #[test]
    fn full_membership_at_on_grid_peaks() {
        fn check<C: LabelledCategory>() {
            let set = C::category_set().unwrap();
            let universe = set.universe();
            for entry in set.iter() {
                for core in entry.shape.cores() {
                    let on_grid = ((core - universe.min()) / universe.step()).fract().abs() < 1e-9
                        || ((core - universe.min()) / universe.step()).fract() > 1.0 - 1e-9;
                    if !universe.contains(core) || !on_grid {
                        continue;
                    }
                    let f = set.fuzzify(core).unwrap();
                    assert!(
                        close(f.degree(entry.category), 1.0),
                        "{}::{} at {} = {}",
                        C::SCOPE,
                        entry.category.id(),
                        core,
                        f.degree(entry.category)
                    );
                }
            }
        }
        check::<WindCategory>();
        check::<TemperatureCategory>();
        check::<AgeCategory>();
        check::<HumidityCategory>();
        check::<RainfallCategory>();
        check::<HealthCategory>();
    }

    #[test]
    fn evaluate_extremes() {
        let wind = InputVariable::Wind.evaluate(80.0, Locale::English).unwrap();
        assert!(close(wind.defuzzified, 79.0));
        assert_eq!(wind.dominant, Some("Strong Gale"));

        let temp = InputVariable::Temperature.evaluate(60.0, Locale::English).unwrap();
        assert!(close(temp.defuzzified, 50.0));

        let age = InputVariable::Age.evaluate(100.0, Locale::English).unwrap();
        assert!(close(age.defuzzified, 85.0));

        // Both tails of the bimodal set peak at the low end
        let humidity = InputVariable::Humidity.evaluate(100.0, Locale::English).unwrap();
        assert_eq!(humidity.defuzzified, 0.0);
        assert_eq!(humidity.dominant, Some("Extreme"));

        let rain = InputVariable::Rainfall.evaluate(150.0, Locale::Turkish).unwrap();
        assert!(close(rain.defuzzified, 100.0));
        assert_eq!(rain.dominant, Some("Aşırı"));

        let health = InputVariable::Health.evaluate(5.0, Locale::English).unwrap();
        assert!(close(health.defuzzified, 4.5));
    }

    #[test]
    fn evaluate_between_categories() {
        // Mild temperature apex sits between grid points
        let temp = InputVariable::Temperature.evaluate(17.5, Locale::English).unwrap();
        assert!(close(temp.defuzzified, 17.0));
        assert_eq!(temp.dominant, Some("Mild"));

        // 3 km/h: Light Air only
        let wind = InputVariable::Wind.evaluate(3.0, Locale::English).unwrap();
        assert!(close(wind.defuzzified, 3.0));
    }

    #[test]
    fn variable_parsing() {
        assert_eq!("wind".parse::<InputVariable>().unwrap(), InputVariable::Wind);
        assert_eq!("Temp".parse::<InputVariable>().unwrap(), InputVariable::Temperature);
        assert_eq!("rain".parse::<InputVariable>().unwrap(), InputVariable::Rainfall);
        assert!("pressure".parse::<InputVariable>().is_err());
    }

    #[test]
    fn describe_categories() {
        let info = InputVariable::Humidity.categories(Locale::Turkish).unwrap();
        assert_eq!(info.len(), 2);
        assert_eq!(info[0].id, "extreme");
        assert_eq!(info[0].label, "Uçta (Tehlikeli)");
        assert_eq!(info[1].peak, 55.0);
    }
}
