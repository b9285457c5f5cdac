//! Fixed text tables the analysis generator selects from.

pub const OTHER_ISSUES: &[&str] = &[
    "Irregular cell structure detected",
    "Abnormal tissue density observed",
    "Unusual membrane formation",
    "Cellular degradation present",
    "Tissue scarring detected",
];

pub const HIGH_RISK_RECOMMENDATIONS: &[&str] = &[
    "Immediate nephrology consultation required",
    "Begin intensive kidney function monitoring",
    "Schedule follow-up biopsy in 2 weeks",
    "Consider dialysis preparation",
    "Strict dietary restrictions recommended",
];

pub const MEDIUM_RISK_RECOMMENDATIONS: &[&str] = &[
    "Schedule follow-up examination in 1 month",
    "Monitor blood pressure daily",
    "Dietary sodium restriction advised",
    "Regular blood work every 2 weeks",
    "Consider preventive medications",
];

pub const LOW_RISK_RECOMMENDATIONS: &[&str] = &[
    "Routine follow-up in 3 months",
    "Maintain healthy diet and exercise",
    "Monitor blood pressure weekly",
    "Annual kidney function screening",
    "Stay well hydrated",
];

pub const DIETARY_RECOMMENDATIONS: &[&str] = &[
    "Limit sodium intake to less than 2,300mg per day",
    "Reduce protein intake to 0.8g per kg of body weight",
    "Choose foods low in phosphorus",
    "Limit potassium-rich foods",
    "Increase intake of anti-inflammatory foods",
    "Stay hydrated with appropriate fluid intake",
    "Avoid processed and packaged foods",
    "Include omega-3 rich foods in diet",
    "Choose whole grains over refined grains",
    "Monitor calcium intake carefully",
];

pub const LIFESTYLE_RECOMMENDATIONS: &[&str] = &[
    "Maintain regular physical activity with doctor's approval",
    "Get adequate sleep (7-8 hours per night)",
    "Monitor blood pressure regularly",
    "Avoid smoking and limit alcohol consumption",
    "Practice stress management techniques",
    "Keep a food and symptom diary",
    "Attend all scheduled medical appointments",
    "Join a kidney disease support group",
    "Learn about kidney-friendly cooking methods",
    "Take prescribed medications consistently",
];

/// A lab parameter the generator can report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabParameter {
    pub name: &'static str,
    pub short_form: &'static str,
    pub unit: &'static str,
}

const fn param(name: &'static str, short_form: &'static str, unit: &'static str) -> LabParameter {
    LabParameter { name, short_form, unit }
}

pub const CKD_PARAMETERS: &[LabParameter] = &[
    param("Blood Pressure (BP)", "bp", "mmHg"),
    param("Specific Gravity (SG)", "sg", ""),
    param("Albumin (AL)", "al", "g/dL"),
    param("Blood Glucose Random (BGR)", "bgr", "mg/dL"),
    param("Blood Urea (BU)", "bu", "mg/dL"),
    param("Serum Creatinine (SC)", "sc", "mg/dL"),
    param("Sodium (SOD)", "sod", "mEq/L"),
    param("Potassium (POT)", "pot", "mEq/L"),
    param("Hemoglobin (HEMO)", "hemo", "g/dL"),
    param("Packed Cell Volume (PCV)", "pcv", "%"),
    param("White Blood Cells (WC)", "wc", "/cu.mm"),
    param("Red Blood Cells Count (RC)", "rc", "millions/cu.mm"),
];
