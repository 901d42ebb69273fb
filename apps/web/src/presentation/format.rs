/// Color band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good, // ≥ 80
    Fair, // 60 – 79
    Poor, // < 60
}

const GREEN: &str = "#10b981";
const AMBER: &str = "#f59e0b";
const RED: &str = "#ef4444";

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Good => GREEN,
            ScoreBand::Fair => AMBER,
            ScoreBand::Poor => RED,
        }
    }
}

/// Company adjustments are not banded: positive or zero is green, negative red.
pub fn adjustment_color(modifier: f64) -> &'static str {
    if modifier >= 0.0 {
        GREEN
    } else {
        RED
    }
}

/// `cloud_devops` → `Cloud Devops`, `early-stage` → `Early-Stage`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "programming_languages" => "💻",
        "frameworks_libraries" => "⚡",
        "databases" => "🗄️",
        "cloud_devops" => "☁️",
        "soft_skills" => "🤝",
        _ => "📋",
    }
}

/// Whole numbers print bare, anything else with one decimal.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub fn format_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_number(value))
    } else {
        format_number(value)
    }
}

/// Bar width for a 0–100 score, clamped.
pub fn bar_percent(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
