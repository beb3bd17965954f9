use crate::constants::*;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Named rotation speed. Unknown names resolve to `Normal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedPreset {
    pub fn from_name(name: &str) -> Self {
        match name {
            "slow" => SpeedPreset::Slow,
            "normal" => SpeedPreset::Normal,
            "fast" => SpeedPreset::Fast,
            _ => SpeedPreset::Normal,
        }
    }

    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            SpeedPreset::Slow => SPEED_SLOW,
            SpeedPreset::Normal => SPEED_NORMAL,
            SpeedPreset::Fast => SPEED_FAST,
        }
    }
}

impl From<&str> for SpeedPreset {
    fn from(name: &str) -> Self {
        SpeedPreset::from_name(name)
    }
}

impl<'de> Deserialize<'de> for SpeedPreset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match LooseValue::deserialize(deserializer)? {
            LooseValue::Str(name) => SpeedPreset::from_name(&name),
            _ => SpeedPreset::Normal,
        })
    }
}

// Options come from hand-written page scripts, so option values are read the
// way a script would treat them instead of being rejected on type.
enum LooseValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Object,
}

impl LooseValue {
    fn truthy(&self) -> bool {
        match self {
            LooseValue::Null => false,
            LooseValue::Bool(b) => *b,
            LooseValue::Number(n) => *n != 0.0 && !n.is_nan(),
            LooseValue::Str(s) => !s.is_empty(),
            LooseValue::Object => true,
        }
    }

    fn number(&self) -> Option<f64> {
        match self {
            LooseValue::Number(n) => Some(*n),
            LooseValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for LooseValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LooseVisitor;

        impl<'de> Visitor<'de> for LooseVisitor {
            type Value = LooseValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an option value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<LooseValue, E> {
                Ok(LooseValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LooseValue, E> {
                Ok(LooseValue::Number(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LooseValue, E> {
                Ok(LooseValue::Number(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<LooseValue, E> {
                Ok(LooseValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LooseValue, E> {
                Ok(LooseValue::Str(v.to_owned()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<LooseValue, E> {
                Ok(LooseValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<LooseValue, E> {
                Ok(LooseValue::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<LooseValue, D::Error> {
                d.deserialize_any(LooseVisitor)
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<LooseValue, A::Error> {
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(LooseValue::Object)
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<LooseValue, A::Error> {
                while map
                    .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                    .is_some()
                {}
                Ok(LooseValue::Object)
            }
        }

        deserializer.deserialize_any(LooseVisitor)
    }
}

fn loose_radius<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(LooseValue::deserialize(d)?.number())
}

// `0` and non-numbers fall back to the default heading
fn loose_direction<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(LooseValue::deserialize(d)?
        .number()
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(DEFAULT_DIRECTION_DEG))
}

fn loose_flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(LooseValue::deserialize(d)?.truthy())
}

/// Scene settings, fixed once the engine is constructed.
///
/// Field names follow the page-side options object (`maxSpeed`, `keep`, ...)
/// and every field is optional there.
///
/// - `radius`: initial sphere radius used for layout (falls back to
///   [`DEFAULT_RADIUS`] when missing, zero, negative or not finite)
/// - `max_speed`: preset that scales every rotation step
/// - `init_speed`, `direction`: carried for callers; rotation does not read them
/// - `keep`: keep drifting while the pointer is outside the surface
/// - `use_container_inline_styles`: let the front-end position/clip the container
///
/// Loosely typed values are accepted: numeric strings count as numbers, a
/// `0` direction means the default, and flags follow script truthiness.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    #[serde(deserialize_with = "loose_radius")]
    pub radius: Option<f64>,
    pub max_speed: SpeedPreset,
    pub init_speed: SpeedPreset,
    #[serde(deserialize_with = "loose_direction")]
    pub direction: f64,
    #[serde(deserialize_with = "loose_flag")]
    pub keep: bool,
    #[serde(deserialize_with = "loose_flag")]
    pub use_container_inline_styles: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: None,
            max_speed: SpeedPreset::Normal,
            init_speed: SpeedPreset::Normal,
            direction: DEFAULT_DIRECTION_DEG,
            keep: true,
            use_container_inline_styles: true,
        }
    }
}

impl SceneConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_max_speed(mut self, preset: SpeedPreset) -> Self {
        self.max_speed = preset;
        self
    }

    pub fn with_keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    /// Radius used for the initial layout.
    pub fn base_radius(&self) -> f64 {
        match self.radius {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => DEFAULT_RADIUS,
        }
    }

    /// Rotation multiplier resolved from `max_speed`.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.max_speed.multiplier()
    }
}
