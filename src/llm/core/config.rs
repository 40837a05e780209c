//! Generation configuration parameters

/// Parameters for controlling text generation
///
/// Every field is optional; unset fields are left to the provider's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Randomness (0.0-2.0, higher = more random)
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    /// Create a configuration that defers everything to the provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// True when no parameter overrides the provider defaults
    pub fn is_empty(&self) -> bool {
        self.max_tokens.is_none() && self.temperature.is_none()
    }
}
