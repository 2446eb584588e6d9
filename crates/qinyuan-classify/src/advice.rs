//! Canned prose for the meridian report and the recommendation banner.
//!
//! Everything here is a fixed lookup keyed on labels. No text is generated
//! from snapshot values other than the score shown next to a weak meridian.

use qinyuan_contracts::{
    formula::FormulaType,
    labels::{ClassificationLabels, ConstitutionType},
    meridian::Meridian,
    snapshot::MeridianBalance,
};

fn display_name(meridian: Meridian) -> &'static str {
    match meridian {
        Meridian::Lung => "Lung meridian",
        Meridian::Heart => "Heart meridian",
        Meridian::Spleen => "Spleen meridian",
        Meridian::Liver => "Liver meridian",
        Meridian::Kidney => "Kidney meridian",
    }
}

fn symptoms(meridian: Meridian) -> &'static [&'static str] {
    match meridian {
        Meridian::Lung => &["coughing", "shortness of breath", "chest tightness"],
        Meridian::Heart => &["palpitations", "insomnia", "vivid dreams"],
        Meridian::Spleen => &["indigestion", "poor appetite", "bloating"],
        Meridian::Liver => &["headaches", "eye strain", "tendon problems"],
        Meridian::Kidney => &["lower back pain", "tinnitus", "hair loss"],
    }
}

fn care_tip(meridian: Meridian) -> &'static str {
    match meridian {
        Meridian::Lung => "protect respiratory health and avoid cold exposure",
        Meridian::Heart => "manage emotions and keep a calm, cheerful mood",
        Meridian::Spleen => "keep regular meals and avoid excessive worry",
        Meridian::Liver => "regulate emotions and avoid prolonged tension",
        Meridian::Kidney => "keep warm and avoid overexertion",
    }
}

/// One finding per weak meridian, then one for an unbalanced constitution.
pub fn findings(labels: &ClassificationLabels, balance: &MeridianBalance) -> Vec<String> {
    let mut lines: Vec<String> = labels
        .meridian_deficiencies
        .iter()
        .map(|m| {
            format!(
                "{} weak ({:.1}%): may lead to {}",
                display_name(*m),
                balance.get(*m),
                symptoms(*m).join(", ")
            )
        })
        .collect();

    match labels.constitution_type {
        ConstitutionType::YangExcess => {
            lines.push("Yang excess: may lead to dry mouth, irritability, insomnia".to_string())
        }
        ConstitutionType::YinDeficiency => {
            lines.push("Yin excess: may lead to chills, fatigue, low spirits".to_string())
        }
        ConstitutionType::Balanced => {}
    }

    lines
}

/// Lifestyle advice: one line per deficient meridian, then one for an
/// unbalanced constitution.
pub fn lifestyle_advice(labels: &ClassificationLabels) -> Vec<String> {
    let mut lines: Vec<String> = labels
        .meridian_deficiencies
        .iter()
        .map(|m| format!("Support the {}: {}", display_name(*m).to_lowercase(), care_tip(*m)))
        .collect();

    match labels.constitution_type {
        ConstitutionType::YangExcess => lines.push(
            "Yang excess: favour nourishing, cooling foods such as lotus seed, lily bulb and white fungus"
                .to_string(),
        ),
        ConstitutionType::YinDeficiency => lines.push(
            "Yin excess: favour warming, qi-building foods such as lamb, ginger and longan"
                .to_string(),
        ),
        ConstitutionType::Balanced => {}
    }

    lines
}

/// Banner phrase for what a formula draws on.
pub fn describe_formula_type(formula_type: FormulaType) -> &'static str {
    match formula_type {
        FormulaType::Balanced => "a balanced blend of TCM and western elements",
        FormulaType::TcmFocused => "traditional Chinese medicine theory",
        FormulaType::WesternFocused => "modern medical theory",
    }
}
