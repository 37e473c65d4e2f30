#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::draw::MIN_PARTICIPANTS;
use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};

/// Effective settings after layering defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSettings {
    pub min_participants: usize,
    pub seed: Option<u64>,
    pub participants: Vec<String>,
    pub output_format: OutputFormat,
    pub output_path: Option<String>,
    pub json_logs: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            min_participants: MIN_PARTICIPANTS,
            seed: None,
            participants: Vec::new(),
            output_format: OutputFormat::default(),
            output_path: None,
            json_logs: false,
        }
    }
}

impl DrawSettings {
    /// Applies `layers` over the defaults. Later layers win for scalar values;
    /// participant lists are concatenated in layer order.
    pub fn resolve(layers: &[&dyn ConfigProvider]) -> Result<Self> {
        let mut settings = Self::default();
        for layer in layers {
            settings.apply(*layer);
        }
        settings.validate()?;
        Ok(settings)
    }

    fn apply(&mut self, layer: &dyn ConfigProvider) {
        if let Some(min) = layer.min_participants() {
            self.min_participants = min;
        }
        if let Some(seed) = layer.seed() {
            self.seed = Some(seed);
        }
        self.participants.extend(layer.participants());
        if let Some(format) = layer.output_format() {
            self.output_format = format;
        }
        if let Some(path) = layer.output_path() {
            self.output_path = Some(path.to_string());
        }
        if let Some(json) = layer.json_logs() {
            self.json_logs = json;
        }
    }
}

impl Validate for DrawSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("draw.min_participants", self.min_participants, MIN_PARTICIPANTS)?;
        if let Some(path) = &self.output_path {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Layer {
        min: Option<usize>,
        names: Vec<&'static str>,
        path: Option<&'static str>,
    }

    impl ConfigProvider for Layer {
        fn min_participants(&self) -> Option<usize> {
            self.min
        }
        fn seed(&self) -> Option<u64> {
            None
        }
        fn participants(&self) -> Vec<String> {
            self.names.iter().map(|n| n.to_string()).collect()
        }
        fn output_format(&self) -> Option<OutputFormat> {
            None
        }
        fn output_path(&self) -> Option<&str> {
            self.path
        }
        fn json_logs(&self) -> Option<bool> {
            None
        }
    }

    #[test]
    fn test_defaults() {
        let settings = DrawSettings::resolve(&[]).unwrap();
        assert_eq!(settings, DrawSettings::default());
        assert_eq!(settings.min_participants, 3);
    }

    #[test]
    fn test_later_layers_win_and_names_concatenate() {
        let file = Layer {
            min: Some(4),
            names: vec!["Ana", "Bia"],
            path: Some("file.txt"),
        };
        let cli = Layer {
            min: Some(5),
            names: vec!["Caio"],
            path: None,
        };

        let settings = DrawSettings::resolve(&[&file, &cli]).unwrap();

        assert_eq!(settings.min_participants, 5);
        assert_eq!(settings.participants, vec!["Ana", "Bia", "Caio"]);
        assert_eq!(settings.output_path.as_deref(), Some("file.txt"));
    }

    #[test]
    fn test_minimum_below_three_is_rejected() {
        let layer = Layer {
            min: Some(2),
            names: vec![],
            path: None,
        };
        assert!(DrawSettings::resolve(&[&layer]).is_err());
    }
}
