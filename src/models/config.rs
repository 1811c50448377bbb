use crate::error::KnockoutError;
use flood_matte::{Connectivity, FillOptions, MatteError, Tolerance, DEFAULT_TOLERANCE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Channels strictly below this value count as near-black
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,

    /// Neighbourhood for the fill: 4 or 8
    #[serde(default = "default_connectivity")]
    pub connectivity: u8,

    /// Recompress the output PNG with oxipng
    #[serde(default)]
    pub optimize: bool,

    /// Input used when no paths are given on the command line
    #[serde(default = "default_input")]
    pub default_input: PathBuf,

    /// Output used when no paths are given on the command line
    #[serde(default = "default_output")]
    pub default_output: PathBuf,
}

fn default_tolerance() -> u8 {
    DEFAULT_TOLERANCE
}

fn default_connectivity() -> u8 {
    4
}

fn default_input() -> PathBuf {
    PathBuf::from("public/kaelux-icon-new.jpg")
}

fn default_output() -> PathBuf {
    PathBuf::from("public/kaelux-icon-transparent.png")
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, KnockoutError> {
        // An empty document is valid and means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| KnockoutError::Config(e.to_string()))
    }

    /// Load configuration from a file, failing if it is missing or invalid
    pub fn load(path: &Path) -> Result<Self, KnockoutError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| KnockoutError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            tolerance = config.tolerance,
            connectivity = config.connectivity,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Fill options described by this configuration
    pub fn fill_options(&self) -> Result<FillOptions, KnockoutError> {
        let connectivity =
            Connectivity::try_from(self.connectivity).map_err(MatteError::from)?;
        Ok(FillOptions::new()
            .tolerance(Tolerance::new(self.tolerance))
            .connectivity(connectivity))
    }

    /// Pick input and output paths.
    ///
    /// Both given: use them. Neither given: use the configured defaults.
    /// Only one given is a usage error.
    pub fn resolve_paths(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<(PathBuf, PathBuf), KnockoutError> {
        match (input, output) {
            (Some(i), Some(o)) => Ok((i, o)),
            (None, None) => Ok((self.default_input.clone(), self.default_output.clone())),
            (Some(_), None) => Err(KnockoutError::Usage(
                "an output path is required when an input path is given".to_string(),
            )),
            (None, Some(_)) => Err(KnockoutError::Usage(
                "an input path is required when an output path is given".to_string(),
            )),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            connectivity: default_connectivity(),
            optimize: false,
            default_input: default_input(),
            default_output: default_output(),
        }
    }
}
