//! Deterministic mock analysis of an uploaded file.
//!
//! Everything is derived from a single number, the file "hash"
//! (`name length in UTF-16 units + size in bytes`), so the same file always
//! yields the same report. No content is read.

pub mod tables;

use std::fmt;
use std::path::Path;

use tables::{
    CKD_PARAMETERS, DIETARY_RECOMMENDATIONS, HIGH_RISK_RECOMMENDATIONS, LIFESTYLE_RECOMMENDATIONS,
    LOW_RISK_RECOMMENDATIONS, MEDIUM_RISK_RECOMMENDATIONS, OTHER_ISSUES,
};

/// What the generator knows about a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl FileMetadata {
    pub fn new(name: impl Into<String>, byte_size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            byte_size,
            mime_type: mime_type.into(),
        }
    }

    /// Stat a file on disk. The MIME type is guessed from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let byte_size = std::fs::metadata(path)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        Ok(Self::new(name, byte_size, guess_mime(&ext)))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    fn hash(&self) -> u64 {
        (self.name.encode_utf16().count() as u64).wrapping_add(self.byte_size)
    }
}

fn guess_mime(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "csv" => "text/csv",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_probability(p: f64) -> Self {
        if p > 0.7 {
            RiskLevel::High
        } else if p > 0.3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => HIGH_RISK_RECOMMENDATIONS,
            RiskLevel::Medium => MEDIUM_RISK_RECOMMENDATIONS,
            RiskLevel::Low => LOW_RISK_RECOMMENDATIONS,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterStatus {
    High,
    Low,
    Normal,
}

impl fmt::Display for ParameterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParameterStatus::High => "high",
            ParameterStatus::Low => "low",
            ParameterStatus::Normal => "normal",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterReading {
    pub name: &'static str,
    pub short_form: &'static str,
    /// Value with its unit, e.g. `"27.0mEq/L"`.
    pub value: String,
    pub status: ParameterStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub has_swelling: bool,
    pub has_shrinkage: bool,
    pub has_pores: bool,
    pub other_issues: Vec<&'static str>,
    pub ckd_probability: f64,
    pub confidence: f64,
    pub risk: RiskLevel,
    pub recommendations: Vec<&'static str>,
    /// Lab readings; only produced for non-image files.
    pub parameters: Option<Vec<ParameterReading>>,
    pub dietary_recommendations: Vec<&'static str>,
    pub lifestyle_recommendations: Vec<&'static str>,
    pub is_image: bool,
}

pub fn analyze(file: &FileMetadata) -> AnalysisResult {
    let hash = file.hash();
    let ckd_probability = (hash % 100) as f64 / 100.0;
    let risk = RiskLevel::from_probability(ckd_probability);
    let is_image = file.is_image();

    log::debug!("analyzing {} (hash {hash}, risk {risk})", file.name);

    AnalysisResult {
        has_swelling: hash % 2 == 0,
        has_shrinkage: hash % 3 == 0,
        has_pores: hash % 4 == 0,
        other_issues: every_third(OTHER_ISSUES, hash).collect(),
        ckd_probability,
        confidence: 0.85 + (hash % 15) as f64 / 100.0,
        risk,
        recommendations: pick(risk.recommendations(), hash, 2).take(3).collect(),
        parameters: (!is_image).then(|| parameters(hash)),
        dietary_recommendations: every_third(DIETARY_RECOMMENDATIONS, hash).take(5).collect(),
        lifestyle_recommendations: every_third(LIFESTYLE_RECOMMENDATIONS, hash).take(5).collect(),
        is_image,
    }
}

/// Entries whose index `i` satisfies `(hash + i) % modulus == 0`.
fn pick<'a, T: Copy>(items: &'a [T], hash: u64, modulus: u64) -> impl Iterator<Item = T> + 'a {
    items
        .iter()
        .enumerate()
        .filter(move |(i, _)| (hash.wrapping_add(*i as u64)) % modulus == 0)
        .map(|(_, item)| *item)
}

fn every_third<'a, T: Copy>(items: &'a [T], hash: u64) -> impl Iterator<Item = T> + 'a {
    pick(items, hash, 3)
}

fn parameters(hash: u64) -> Vec<ParameterReading> {
    every_third(CKD_PARAMETERS, hash)
        .enumerate()
        .map(|(k, param)| {
            let value = hash.wrapping_mul(k as u64 + 1) % 100;
            let status = match hash.wrapping_add(param.name.encode_utf16().count() as u64) % 3 {
                0 => ParameterStatus::High,
                1 => ParameterStatus::Low,
                _ => ParameterStatus::Normal,
            };
            let description = match status {
                ParameterStatus::High => {
                    format!("Elevated {} levels indicate potential kidney dysfunction", param.name)
                }
                ParameterStatus::Low => {
                    format!("Low {} levels suggest possible metabolic issues", param.name)
                }
                ParameterStatus::Normal => format!("{} levels are within normal range", param.name),
            };
            ParameterReading {
                name: param.name,
                short_form: param.short_form,
                value: format!("{:.1}{}", value as f64, param.unit),
                status,
                description,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_report() {
        // hash = 8 + 92 = 100
        let r = analyze(&FileMetadata::new("scan.png", 92, "image/png"));
        assert!(r.is_image);
        assert!(r.has_swelling);
        assert!(!r.has_shrinkage);
        assert!(r.has_pores);
        assert_eq!(r.other_issues, ["Unusual membrane formation"]);
        assert_eq!(r.ckd_probability, 0.0);
        assert!((r.confidence - 0.95).abs() < 1e-9);
        assert_eq!(r.risk, RiskLevel::Low);
        assert_eq!(
            r.recommendations,
            ["Routine follow-up in 3 months", "Monitor blood pressure weekly", "Stay well hydrated"]
        );
        assert_eq!(r.parameters, None);
        assert_eq!(
            r.dietary_recommendations,
            [
                "Choose foods low in phosphorus",
                "Stay hydrated with appropriate fluid intake",
                "Choose whole grains over refined grains",
            ]
        );
    }

    #[test]
    fn lab_file_report() {
        // hash = 8 + 1 = 9
        let r = analyze(&FileMetadata::new("labs.csv", 1, "text/csv"));
        assert!(!r.is_image);
        assert!(!r.has_swelling);
        assert!(r.has_shrinkage);
        assert_eq!(
            r.other_issues,
            ["Irregular cell structure detected", "Cellular degradation present"]
        );
        assert_eq!(
            r.recommendations,
            ["Maintain healthy diet and exercise", "Annual kidney function screening"]
        );

        let params = r.parameters.unwrap();
        let summary: Vec<(&str, &str, ParameterStatus)> = params
            .iter()
            .map(|p| (p.short_form, p.value.as_str(), p.status))
            .collect();
        assert_eq!(
            summary,
            [
                ("bp", "9.0mmHg", ParameterStatus::Low),
                ("bgr", "18.0mg/dL", ParameterStatus::Normal),
                ("sod", "27.0mEq/L", ParameterStatus::High),
                ("pcv", "36.0%", ParameterStatus::High),
            ]
        );
        assert_eq!(
            params[2].description,
            "Elevated Sodium (SOD) levels indicate potential kidney dysfunction"
        );
    }

    #[test]
    fn same_file_same_report() {
        let f = FileMetadata::new("biopsy_0042.tiff", 1_048_576, "image/tiff");
        assert_eq!(analyze(&f), analyze(&f));
    }

    #[test]
    fn risk_thresholds() {
        assert_eq!(RiskLevel::from_probability(0.71), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.31), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.3), RiskLevel::Low);
    }

    #[test]
    fn high_risk_uses_high_table() {
        // hash = 1 + 79 = 80
        let r = analyze(&FileMetadata::new("a", 79, "text/plain"));
        assert_eq!(r.risk, RiskLevel::High);
        assert!(r.recommendations.iter().all(|s| HIGH_RISK_RECOMMENDATIONS.contains(s)));
        assert!(r.recommendations.len() <= 3);
    }

    #[test]
    fn name_length_counts_utf16_units() {
        let ascii = FileMetadata::new("ab", 0, "text/plain");
        let accented = FileMetadata::new("é🙂", 0, "text/plain");
        assert_eq!(ascii.hash(), 2);
        assert_eq!(accented.hash(), 3);
    }

    #[test]
    fn lists_are_capped() {
        for size in 0..50 {
            let r = analyze(&FileMetadata::new("x.csv", size, "text/csv"));
            assert!(r.dietary_recommendations.len() <= 5);
            assert!(r.lifestyle_recommendations.len() <= 5);
            assert!(r.recommendations.len() <= 3);
        }
    }

    #[test]
    fn metadata_from_disk() {
        let path = std::env::temp_dir().join(format!("algo-gallery-{}.PNG", std::process::id()));
        std::fs::write(&path, [0u8; 64]).unwrap();
        let meta = FileMetadata::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(meta.byte_size, 64);
        assert_eq!(meta.mime_type, "image/png");
        assert!(meta.name.ends_with(".PNG"));
        assert!(FileMetadata::from_path(&path).is_err());
    }
}
