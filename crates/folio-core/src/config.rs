//! Option sets for one particle-field instance.
//!
//! The same engine backs the footer and the ambient section backgrounds; each
//! call site differs only by the numbers collected here. The two presets keep
//! the tuning of the original sites separate on purpose.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::constants::{
    CAROUSEL_ROTATION_MS, CAROUSEL_SAMPLE_SIZE, GRID_RGB, LINK_ALPHA_FLOOR, LINK_ALPHA_SWING,
    TECH_GLYPHS,
};
use crate::error::ConfigError;
use crate::random::Span;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub population: PopulationConfig,
    pub particle: ParticleStyle,
    pub links: LinkStyle,
    pub grid: GridStyle,
    pub interaction: InteractionConfig,
}

/// `count = min(max_particles, floor(area / density_divisor))`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub density_divisor: u32,
    pub max_particles: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
    pub radius: Span,
    pub pulse_amplitude: f32,
    pub pulse_speed: Span,
    /// Full width of the per-axis velocity distribution, centered on zero.
    pub speed_spread: f32,
    pub opacity: Span,
    pub hue: Span,
    pub saturation: f32,
    pub lightness: f32,
    pub glow_factor: f32,
    pub glow_intensity: Span,
    pub glow_mid_stop: bool,
    pub glyphs: Vec<String>,
    pub glyph_probability: f32,
    pub glyph_scale: f32,
    pub glyph_saturation: f32,
    pub glyph_lightness: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
    pub max_distance: f32,
    pub keep_probability: f32,
    pub phase_speed: Span,
    pub alpha_swing: f32,
    pub alpha_floor: f32,
    pub edge_alpha: f32,
    pub mid_alpha: f32,
    pub mid_saturation: f32,
    pub mid_lightness: f32,
    pub line_width: f32,
    pub dash: [f32; 2],
    pub dash_speed: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub spacing: f32,
    pub color: Rgba,
    pub line_width: f32,
}

/// Pointer force. Positive `strength` pushes particles away, negative pulls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub radius: f32,
    pub strength: f32,
    pub highlight: Option<Highlight>,
}

/// Opacity response to the pointer while it is over the surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub peak: f32,
    pub rise: f32,
    pub floor: f32,
    pub decay: f32,
}

impl FieldConfig {
    /// Dense, brighter variant behind the footer contact block.
    pub fn footer() -> Self {
        Self {
            population: PopulationConfig {
                density_divisor: 5000,
                max_particles: 35,
            },
            particle: ParticleStyle {
                radius: Span::new(4.0, 12.0),
                pulse_amplitude: 3.0,
                pulse_speed: Span::new(0.03, 0.06),
                speed_spread: 0.4,
                opacity: Span::new(0.2, 0.5),
                hue: Span::new(200.0, 260.0),
                saturation: 80.0,
                lightness: 70.0,
                glow_factor: 4.0,
                glow_intensity: Span::new(0.5, 1.0),
                glow_mid_stop: true,
                glyph_probability: 0.5,
                glyph_scale: 1.4,
                glyph_saturation: 100.0,
                glyph_lightness: 95.0,
                ..ParticleStyle::default()
            },
            links: LinkStyle {
                max_distance: 180.0,
                keep_probability: 0.8,
                phase_speed: Span::new(0.03, 0.06),
                edge_alpha: 0.6,
                mid_alpha: 0.8,
                mid_saturation: 90.0,
                mid_lightness: 80.0,
                line_width: 1.5,
                dash: [4.0, 3.0],
                dash_speed: 15.0,
                ..LinkStyle::default()
            },
            grid: GridStyle {
                spacing: 50.0,
                color: Rgba::new(GRID_RGB[0], GRID_RGB[1], GRID_RGB[2], 0.08),
                line_width: 0.8,
            },
            interaction: InteractionConfig {
                radius: 120.0,
                strength: 0.02,
                highlight: Some(Highlight {
                    peak: 0.8,
                    rise: 0.02,
                    floor: 0.2,
                    decay: 0.01,
                }),
            },
        }
    }

    /// Subtle variant behind the home, about and tech-skills sections.
    pub fn ambient() -> Self {
        Self::default()
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "footer" => Ok(Self::footer()),
            "" | "ambient" | "home" | "about" | "skills" => Ok(Self::ambient()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    /// Apply a partial JSON object over `self`. Missing keys keep their preset values.
    pub fn merged_with_json(&self, json: &str) -> Result<Self, ConfigError> {
        let mut base =
            serde_json::to_value(self).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        let patch: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        merge_json(&mut base, patch);
        let merged: Self =
            serde_json::from_value(base).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        merged.validate()?;
        Ok(merged)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.particle;
        if self.population.density_divisor == 0 {
            return Err(ConfigError::ZeroDensityDivisor);
        }
        if !(0.0..=1.0).contains(&self.links.keep_probability) {
            return Err(ConfigError::KeepProbability(self.links.keep_probability));
        }
        for (name, span) in [
            ("radius", p.radius),
            ("pulse_speed", p.pulse_speed),
            ("opacity", p.opacity),
            ("hue", p.hue),
            ("glow_intensity", p.glow_intensity),
            ("phase_speed", self.links.phase_speed),
        ] {
            if !span.is_ordered() {
                return Err(ConfigError::InvertedRange(name));
            }
        }
        if p.radius.min <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(p.radius.min));
        }
        if p.pulse_amplitude.abs() >= p.radius.min {
            return Err(ConfigError::PulseTooLarge {
                amplitude: p.pulse_amplitude,
                radius_min: p.radius.min,
            });
        }
        if self.grid.spacing <= 0.0 {
            return Err(ConfigError::GridSpacing);
        }
        if self.interaction.radius <= 0.0 {
            return Err(ConfigError::InteractionRadius);
        }
        if p.glyph_probability > 0.0 && p.glyphs.is_empty() {
            return Err(ConfigError::EmptyGlyphPalette);
        }
        Ok(())
    }
}

fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(dst), serde_json::Value::Object(src)) => {
            for (k, v) in src {
                let nested = v.is_object() && dst.get(&k).map_or(false, |s| s.is_object());
                if !nested {
                    dst.insert(k, v);
                } else if let Some(slot) = dst.get_mut(&k) {
                    merge_json(slot, v);
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            particle: ParticleStyle::default(),
            links: LinkStyle::default(),
            grid: GridStyle::default(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            density_divisor: 8000,
            max_particles: 25,
        }
    }
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            radius: Span::new(4.0, 10.0),
            pulse_amplitude: 2.0,
            pulse_speed: Span::new(0.02, 0.04),
            speed_spread: 0.3,
            opacity: Span::new(0.1, 0.3),
            hue: Span::new(200.0, 260.0),
            saturation: 70.0,
            lightness: 60.0,
            glow_factor: 3.0,
            glow_intensity: Span::fixed(0.3),
            glow_mid_stop: false,
            glyphs: TECH_GLYPHS.iter().map(|g| g.to_string()).collect(),
            glyph_probability: 0.3,
            glyph_scale: 1.2,
            glyph_saturation: 70.0,
            glyph_lightness: 100.0,
        }
    }
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            max_distance: 150.0,
            keep_probability: 0.7,
            phase_speed: Span::new(0.02, 0.04),
            alpha_swing: LINK_ALPHA_SWING,
            alpha_floor: LINK_ALPHA_FLOOR,
            edge_alpha: 0.3,
            mid_alpha: 0.5,
            mid_saturation: 80.0,
            mid_lightness: 70.0,
            line_width: 1.0,
            dash: [3.0, 3.0],
            dash_speed: 10.0,
        }
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            color: Rgba::new(GRID_RGB[0], GRID_RGB[1], GRID_RGB[2], 0.03),
            line_width: 0.5,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            strength: 0.02,
            highlight: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub sample_size: usize,
    pub rotation_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            sample_size: CAROUSEL_SAMPLE_SIZE,
            rotation_ms: CAROUSEL_ROTATION_MS,
        }
    }
}
