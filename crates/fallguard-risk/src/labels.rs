//! Display labels for every category, per locale.
//!
//! Categories are identified by `(scope, id)`, where the scope is the
//! variable name (`"wind"`, ..., `"risk"`) and the id is the category's
//! stable identifier. The pipeline never looks at labels; they only matter
//! at the output boundary.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use fallguard_fuzzy::{Category, CategorySet};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// Output language for category labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "tr")]
    Turkish,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::English, Locale::Turkish];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Turkish => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = RiskError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "tr" | "turkish" | "türkçe" => Ok(Locale::Turkish),
            other => Err(RiskError::UnknownLocale(other.to_string())),
        }
    }
}

/// (scope, id, English, Turkish)
const LABEL_TABLE: &[(&str, &str, &str, &str)] = &[
    ("wind", "calm", "Calm", "Sakin"),
    ("wind", "light_air", "Light Air", "Hafif Esinti"),
    ("wind", "light_breeze", "Light Breeze", "Hafif Rüzgar"),
    ("wind", "gentle_breeze", "Gentle Breeze", "Zayıf Rüzgar"),
    ("wind", "moderate_breeze", "Moderate Breeze", "Orta Kuvvetli Rüzgar"),
    ("wind", "fresh_breeze", "Fresh Breeze", "Sert Rüzgar"),
    ("wind", "strong_breeze", "Strong Breeze", "Kuvvetli Rüzgar"),
    ("wind", "near_gale", "Near Gale", "Fırtına"),
    ("wind", "gale", "Gale", "Kuvvetli Fırtına"),
    ("wind", "strong_gale", "Strong Gale", "Tam Fırtına"),
    ("wind", "storm", "Storm", "Şiddetli Fırtına"),
    ("wind", "hurricane", "Hurricane", "Kasırga"),
    ("temperature", "very_cold", "Very Cold", "Çok Soğuk"),
    ("temperature", "cold", "Cold", "Soğuk"),
    ("temperature", "mild", "Mild", "Ilıman"),
    ("temperature", "hot", "Hot", "Sıcak"),
    ("temperature", "extreme_heat", "Extreme Heat", "Aşırı Sıcak"),
    ("age", "adolescent", "Adolescent", "Ergen"),
    ("age", "young_adult", "Young Adult", "Genç Yetişkin"),
    ("age", "middle_aged", "Middle Aged", "Orta Yaşlı"),
    ("age", "senior", "Senior", "Yaşlı"),
    ("age", "elderly", "Elderly", "Çok Yaşlı"),
    ("humidity", "extreme", "Extreme", "Uçta (Tehlikeli)"),
    ("humidity", "comfortable", "Comfortable", "Orta (Konforlu)"),
    ("rainfall", "none", "No Rain", "Hiç Yağış Yok"),
    ("rainfall", "light", "Light", "Hafif"),
    ("rainfall", "moderate", "Moderate", "Orta"),
    ("rainfall", "heavy", "Heavy", "Kuvvetli"),
    ("rainfall", "violent", "Violent", "Şiddetli"),
    ("rainfall", "extreme", "Extreme", "Aşırı"),
    ("health", "healthy", "Healthy", "Sağlıklı"),
    ("health", "moderate", "Moderate", "Orta"),
    ("health", "at_risk", "At Risk", "Riskli"),
    ("health", "high_risk", "High Risk", "Çok Riskli"),
    ("health", "critical", "Critical", "Kritik"),
    ("risk", "very_low", "Very Low", "Çok Düşük"),
    ("risk", "low", "Low", "Düşük"),
    ("risk", "medium", "Medium", "Orta"),
    ("risk", "high", "High", "Yüksek"),
    ("risk", "very_high", "Very High", "Çok Yüksek"),
];

lazy_static! {
    static ref LABELS: HashMap<(&'static str, &'static str), (&'static str, &'static str)> =
        LABEL_TABLE
            .iter()
            .map(|&(scope, id, en, tr)| ((scope, id), (en, tr)))
            .collect();
}

/// Label for category `id` of `scope` in `locale`, if one is registered.
pub fn lookup(scope: &'static str, id: &'static str, locale: Locale) -> Option<&'static str> {
    LABELS.get(&(scope, id)).map(|&(en, tr)| match locale {
        Locale::English => en,
        Locale::Turkish => tr,
    })
}

/// A category of one of the model's variables.
///
/// Ties a [`Category`] to its label scope and to its precomputed,
/// process-wide category set.
pub trait LabelledCategory: Category {
    /// Scope of this category's ids in the label table
    const SCOPE: &'static str;

    /// The sampled category set for this variable.
    fn category_set() -> Result<&'static CategorySet<Self>>;

    /// Display label; falls back to the stable id if no label is registered.
    fn label(&self, locale: Locale) -> &'static str {
        lookup(Self::SCOPE, self.id(), locale).unwrap_or_else(|| self.id())
    }
}
