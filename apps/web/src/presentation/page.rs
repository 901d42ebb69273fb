//! The single page: input form plus whichever status panel the view state calls for.
//!
//! `IndexPage::from_view_model` flattens the view model into display-ready strings so the
//! template stays free of formatting logic.

use askama::Template;

use crate::analysis::validation::{MIN_JOB_DESCRIPTION_CHARS, MIN_RESUME_CHARS};
use crate::analysis::view_model::{AnalysisViewModel, ViewState};
use crate::models::company::POPULAR_COMPANIES;
use crate::models::score::{ScoreResponse, UNKNOWN_COMPANY};
use crate::presentation::format::{
    adjustment_color, bar_percent, category_icon, format_number, format_signed, title_case,
    ScoreBand,
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub form: FormView,
    pub demo_loaded: bool,
    pub status: StatusView,
}

pub struct FormView {
    pub resume_text: String,
    pub job_description: String,
    pub resume_counter: CounterView,
    pub job_counter: CounterView,
    pub companies: Vec<CompanyOption>,
    pub can_submit: bool,
    pub submitting: bool,
}

pub struct CounterView {
    pub text: String,
    pub ok: bool,
}

pub struct CompanyOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub enum StatusView {
    Idle,
    Loading,
    Error(String),
    Results(ResultsView),
}

pub struct ResultsView {
    pub tiles: Vec<ScoreTile>,
    pub explanation: String,
    pub categories: Vec<CategoryRow>,
    pub experience: ExperienceView,
}

pub struct ScoreTile {
    pub label: &'static str,
    pub value: String,
    pub color: &'static str,
    pub large: bool,
}

pub struct CategoryRow {
    pub icon: &'static str,
    pub name: String,
    pub score: String,
    pub color: &'static str,
    pub bar_percent: String,
    pub weight_percent: String,
    pub resume_count: u32,
    pub job_count: u32,
    pub matched: String,
    pub missing: String,
}

pub struct ExperienceView {
    pub resume_years: String,
    pub resume_level: String,
    pub job_years: String,
    pub job_level: String,
    pub bonus: String,
    pub leadership_count: u32,
}

impl IndexPage {
    pub fn from_view_model(vm: &AnalysisViewModel) -> Self {
        let status = match vm.state() {
            ViewState::Idle => StatusView::Idle,
            ViewState::Submitting(_) => StatusView::Loading,
            ViewState::Failed(failure) => StatusView::Error(failure.message.clone()),
            ViewState::Success(response) => StatusView::Results(ResultsView::from(response)),
        };

        Self {
            form: FormView::from(vm),
            demo_loaded: vm.demo_loaded(),
            status,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, StatusView::Loading)
    }
}

impl From<&AnalysisViewModel> for FormView {
    fn from(vm: &AnalysisViewModel) -> Self {
        let fields = vm.fields();
        Self {
            resume_text: fields.resume_text.clone(),
            job_description: fields.job_description.clone(),
            resume_counter: CounterView::new(&fields.resume_text, MIN_RESUME_CHARS),
            job_counter: CounterView::new(&fields.job_description, MIN_JOB_DESCRIPTION_CHARS),
            companies: company_options(&fields.company_name),
            can_submit: vm.can_submit(),
            submitting: vm.is_submitting(),
        }
    }
}

impl CounterView {
    fn new(text: &str, minimum: usize) -> Self {
        let count = text.chars().count();
        Self {
            text: format!("{count}/{minimum} characters minimum"),
            ok: count >= minimum,
        }
    }
}

/// The "unknown" sentinel first, then the catalogue. A selected value outside the
/// catalogue is kept as an extra option so it round-trips unchanged.
fn company_options(selected: &str) -> Vec<CompanyOption> {
    let mut options = vec![CompanyOption {
        value: UNKNOWN_COMPANY.to_string(),
        label: "Select Company (Optional)".to_string(),
        selected: selected == UNKNOWN_COMPANY,
    }];

    options.extend(POPULAR_COMPANIES.iter().map(|c| {
        let value = c.value();
        CompanyOption {
            selected: value == selected,
            label: format!("{} ({})", c.name, c.category.label()),
            value,
        }
    }));

    if !options.iter().any(|o| o.selected) {
        options.push(CompanyOption {
            value: selected.to_string(),
            label: selected.to_string(),
            selected: true,
        });
    }
    options
}

impl From<&ScoreResponse> for ResultsView {
    fn from(r: &ScoreResponse) -> Self {
        let similarity = r.semantic_similarity * 100.0;
        let tiles = vec![
            ScoreTile {
                label: "Final Score",
                value: format_number(r.final_score),
                color: ScoreBand::of(r.final_score).color(),
                large: true,
            },
            ScoreTile {
                label: "Base Score",
                value: format_number(r.overall_score),
                color: ScoreBand::of(r.overall_score).color(),
                large: false,
            },
            ScoreTile {
                label: "Semantic Match",
                value: format!("{}%", format_number(similarity)),
                color: ScoreBand::of(similarity).color(),
                large: false,
            },
            ScoreTile {
                label: "Company Adjustment",
                value: format_signed(r.company_modifier),
                color: adjustment_color(r.company_modifier),
                large: false,
            },
        ];

        let categories = r
            .skills_breakdown
            .iter()
            .map(|(category, data)| CategoryRow {
                icon: category_icon(category),
                name: title_case(category),
                score: format!("{}%", format_number(data.score)),
                color: ScoreBand::of(data.score).color(),
                bar_percent: format!("{:.0}%", bar_percent(data.score)),
                weight_percent: format!("{}%", format_number(data.weight * 100.0)),
                resume_count: data.resume_skill_count,
                job_count: data.job_requirement_count,
                matched: data.matched_skills.join(", "),
                missing: data.missing_skills.join(", "),
            })
            .collect();

        let e = &r.experience_match;
        let experience = ExperienceView {
            resume_years: format_number(e.resume_years),
            resume_level: title_case(&e.resume_level),
            job_years: format_number(e.job_years),
            job_level: title_case(&e.job_level),
            bonus: format_signed(e.experience_bonus),
            leadership_count: e.leadership_keyword_count,
        };

        Self {
            tiles,
            explanation: r.explanation.clone(),
            categories,
            experience,
        }
    }
}
