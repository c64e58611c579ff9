//! Widget settings files
//!
//! A `RatingSettings` describes a widget in TOML. Every key is optional and
//! falls back to the widget default:
//!
//! ```toml
//! count = 5
//! star_width = 20.0
//! star_height = 20.0
//! spacing = 5.0
//! min_score = 0.0
//! max_score = 5.0
//! current_score = 2.0
//! rating_type = "unlimited"
//! star_animation = true
//! touch_enabled = true
//! slide_enabled = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use starry_core::{Rect, Size};

use crate::config::{
    RatingType, DEFAULT_COUNT, DEFAULT_MAX_SCORE, DEFAULT_SPACING, DEFAULT_STAR_SIZE,
};
use crate::error::Result;
use crate::widget::RatingWidget;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RatingSettings {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_star_size")]
    pub star_width: f32,
    #[serde(default = "default_star_size")]
    pub star_height: f32,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    #[serde(default)]
    pub min_score: f32,
    #[serde(default = "default_max_score")]
    pub max_score: f32,
    #[serde(default)]
    pub current_score: f32,
    #[serde(default)]
    pub rating_type: RatingType,
    #[serde(default = "default_true")]
    pub star_animation: bool,
    #[serde(default)]
    pub touch_enabled: bool,
    #[serde(default)]
    pub slide_enabled: bool,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_star_size() -> f32 {
    DEFAULT_STAR_SIZE
}

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

fn default_max_score() -> f32 {
    DEFAULT_MAX_SCORE
}

fn default_true() -> bool {
    true
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            count: default_count(),
            star_width: default_star_size(),
            star_height: default_star_size(),
            spacing: default_spacing(),
            min_score: 0.0,
            max_score: default_max_score(),
            current_score: 0.0,
            rating_type: RatingType::default(),
            star_animation: true,
            touch_enabled: false,
            slide_enabled: false,
        }
    }
}

impl RatingSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded rating settings");
        Ok(settings)
    }

    pub fn star_size(&self) -> Size {
        Size::new(self.star_width, self.star_height)
    }
}

impl RatingWidget {
    /// Build a widget from settings, validating every value
    ///
    /// The first invalid value aborts construction with its error.
    pub fn from_settings(frame: Rect, settings: &RatingSettings) -> Result<Self> {
        let mut widget = RatingWidget::new(frame);
        widget.set_star_animation(false);
        widget.set_count(settings.count)?;
        widget.set_star_size(settings.star_size())?;
        widget.set_spacing(settings.spacing)?;
        widget.set_score_range(settings.min_score, settings.max_score)?;
        widget.set_rating_type(settings.rating_type);
        widget.set_current_score(settings.current_score)?;
        widget.set_touch_enabled(settings.touch_enabled);
        widget.set_slide_enabled(settings.slide_enabled);
        widget.set_star_animation(settings.star_animation);
        Ok(widget)
    }
}
