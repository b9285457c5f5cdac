use std::fmt;
use std::str::FromStr;

use crate::engine::error::EngineError;

/// One of the five algorithm-explainer diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    NeuralNetwork,
    RandomForest,
    Svm,
    Ensemble,
    FeatureExtraction,
}

impl Variant {
    /// Gallery order.
    pub const ALL: [Variant; 5] = [
        Variant::NeuralNetwork,
        Variant::RandomForest,
        Variant::Svm,
        Variant::Ensemble,
        Variant::FeatureExtraction,
    ];

    /// Stable id used for selection.
    pub fn id(self) -> &'static str {
        match self {
            Variant::NeuralNetwork => "neural-network",
            Variant::RandomForest => "random-forest",
            Variant::Svm => "svm",
            Variant::Ensemble => "ensemble",
            Variant::FeatureExtraction => "feature-extraction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::NeuralNetwork => "Deep Neural Network",
            Variant::RandomForest => "Random Forest",
            Variant::Svm => "Support Vector Machine",
            Variant::Ensemble => "Ensemble Learning",
            Variant::FeatureExtraction => "Feature Extraction",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Variant::NeuralNetwork => {
                "Visualizes how a deep neural network processes tissue patterns through multiple layers of neurons."
            }
            Variant::RandomForest => {
                "Shows how multiple decision trees work together to analyze cellular structures."
            }
            Variant::Svm => {
                "Demonstrates boundary detection between healthy and affected tissue regions."
            }
            Variant::Ensemble => {
                "Illustrates how multiple models combine their predictions for better accuracy."
            }
            Variant::FeatureExtraction => {
                "Shows the process of identifying and extracting key biomarkers from medical data."
            }
        }
    }

    /// Accent hue (degrees) for the gallery card.
    pub fn accent_hue(self) -> f32 {
        match self {
            Variant::NeuralNetwork => 270.0,
            Variant::RandomForest => 120.0,
            Variant::Svm => 210.0,
            Variant::Ensemble => 0.0,
            Variant::FeatureExtraction => 48.0,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variant {
    type Err = EngineError;

    /// Accepts the canonical ids plus the short gallery aliases
    /// (`dnn`, `rf`, `feature`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neural-network" | "dnn" => Ok(Variant::NeuralNetwork),
            "random-forest" | "rf" => Ok(Variant::RandomForest),
            "svm" => Ok(Variant::Svm),
            "ensemble" => Ok(Variant::Ensemble),
            "feature-extraction" | "feature" => Ok(Variant::FeatureExtraction),
            _ => Err(EngineError::InvalidVariant(s.to_owned())),
        }
    }
}
