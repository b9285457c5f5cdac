//! Stateless egui helpers shared by the gallery panels.

use eframe::egui;
use algo_gallery::analysis::{ParameterStatus, RiskLevel};
use algo_gallery::render::color::hsla;
use algo_gallery::render::painter::to_color32;
use algo_gallery::scene::variant::Variant;

// ─── Colors ───────────────────────────────────────────────────────────────────

/// The variant's card accent.
pub fn accent(variant: Variant) -> egui::Color32 {
    to_color32(hsla(variant.accent_hue(), 0.7, 0.45, 1.0))
}

pub fn risk_color(risk: RiskLevel) -> egui::Color32 {
    match risk {
        RiskLevel::High => egui::Color32::from_rgb(220, 38, 38),
        RiskLevel::Medium => egui::Color32::from_rgb(217, 119, 6),
        RiskLevel::Low => egui::Color32::from_rgb(22, 163, 74),
    }
}

pub fn status_color(status: ParameterStatus) -> egui::Color32 {
    match status {
        ParameterStatus::High => egui::Color32::from_rgb(220, 38, 38),
        ParameterStatus::Low => egui::Color32::from_rgb(37, 99, 235),
        ParameterStatus::Normal => egui::Color32::GRAY,
    }
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

/// `0.374` → `"37.4%"`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// `true` → `"Detected"`, `false` → `"Not detected"`.
pub fn detected(flag: bool) -> &'static str {
    if flag {
        "Detected"
    } else {
        "Not detected"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate() {
        assert_eq!(truncate_str("kidney_scan.png", 40), "kidney_scan.png");
        assert_eq!(truncate_str("abcdefghij", 6), "abc...");
        assert_eq!(truncate_str("ααααα", 4), "α...");
    }

    #[test]
    fn percent_format() {
        assert_eq!(percent(0.374), "37.4%");
        assert_eq!(percent(0.0), "0.0%");
        assert_eq!(percent(0.99), "99.0%");
    }

    #[test]
    fn detected_label() {
        assert_eq!(detected(true), "Detected");
        assert_eq!(detected(false), "Not detected");
    }
}
