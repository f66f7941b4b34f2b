use crate::error::AutorecError;
use serde::Deserialize;

/// Raw `autorec.toml` contents after layering. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutorecConfig {
    pub pricing: Option<PricingSection>,
    pub classifier: Option<ClassifierSection>,
    pub explain: Option<ExplainSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingSection {
    pub unit_threshold: Option<f64>,
    pub unit_divisor: Option<f64>,
    pub default_budget: Option<f64>,
    pub minivan_family_inflation: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSection {
    pub min_profile_score: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplainSection {
    pub max_reasons: Option<usize>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    pub top_n: Option<usize>,
    pub dedupe: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    /// Range minimums above this are raw yen rather than 万円.
    pub unit_threshold: f64,
    pub unit_divisor: f64,
    /// Budget assumed by the price scorer when no max_price is given.
    pub default_budget: f64,
    pub minivan_family_inflation: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_threshold: 10_000.0,
            unit_divisor: 10_000.0,
            default_budget: 1_000.0,
            minivan_family_inflation: 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub min_profile_score: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_profile_score: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainConfig {
    pub max_reasons: usize,
    pub delimiter: String,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            max_reasons: 3,
            delimiter: "、".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub top_n: Option<usize>,
    pub dedupe: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n: None,
            dedupe: true,
        }
    }
}

/// Fully resolved settings consumed by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub pricing: PricingConfig,
    pub classifier: ClassifierConfig,
    pub explain: ExplainConfig,
    pub output: OutputConfig,
}

impl AutorecConfig {
    pub fn pricing(&self) -> PricingConfig {
        let defaults = PricingConfig::default();
        match &self.pricing {
            Some(pricing) => PricingConfig {
                unit_threshold: pricing.unit_threshold.unwrap_or(defaults.unit_threshold),
                unit_divisor: pricing.unit_divisor.unwrap_or(defaults.unit_divisor),
                default_budget: pricing.default_budget.unwrap_or(defaults.default_budget),
                minivan_family_inflation: pricing
                    .minivan_family_inflation
                    .unwrap_or(defaults.minivan_family_inflation),
            },
            None => defaults,
        }
    }

    pub fn classifier(&self) -> ClassifierConfig {
        let defaults = ClassifierConfig::default();
        ClassifierConfig {
            min_profile_score: self
                .classifier
                .as_ref()
                .and_then(|classifier| classifier.min_profile_score)
                .unwrap_or(defaults.min_profile_score),
        }
    }

    pub fn explain(&self) -> ExplainConfig {
        let defaults = ExplainConfig::default();
        match &self.explain {
            Some(explain) => ExplainConfig {
                max_reasons: explain.max_reasons.unwrap_or(defaults.max_reasons),
                delimiter: explain.delimiter.clone().unwrap_or(defaults.delimiter),
            },
            None => defaults,
        }
    }

    pub fn output(&self) -> OutputConfig {
        let defaults = OutputConfig::default();
        match &self.output {
            Some(output) => OutputConfig {
                top_n: output.top_n.or(defaults.top_n),
                dedupe: output.dedupe.unwrap_or(defaults.dedupe),
            },
            None => defaults,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            pricing: self.pricing(),
            classifier: self.classifier(),
            explain: self.explain(),
            output: self.output(),
        }
    }

    pub fn validate(&self) -> Result<(), AutorecError> {
        let pricing = self.pricing();
        if !(pricing.unit_threshold > 0.0) {
            return Err(AutorecError::ConfigParse(
                "pricing.unit_threshold must be greater than 0".to_string(),
            ));
        }
        if !(pricing.unit_divisor > 0.0) {
            return Err(AutorecError::ConfigParse(
                "pricing.unit_divisor must be greater than 0".to_string(),
            ));
        }
        if !(pricing.default_budget > 0.0) {
            return Err(AutorecError::ConfigParse(
                "pricing.default_budget must be greater than 0".to_string(),
            ));
        }
        if !(pricing.minivan_family_inflation >= 1.0) {
            return Err(AutorecError::ConfigParse(format!(
                "pricing.minivan_family_inflation must be at least 1.0 (found {:.2})",
                pricing.minivan_family_inflation
            )));
        }

        if self.explain().max_reasons == 0 {
            return Err(AutorecError::ConfigParse(
                "explain.max_reasons must be greater than 0".to_string(),
            ));
        }

        if self.output().top_n == Some(0) {
            return Err(AutorecError::ConfigParse(
                "output.top_n must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}
