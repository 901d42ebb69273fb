/// Hiring category the scoring service groups companies by. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyCategory {
    BigTech,
    Unicorn,
    Startup,
    Consulting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    pub name: &'static str,
    pub category: CompanyCategory,
}

impl Company {
    /// The value submitted for this option: the lowercased name.
    pub fn value(&self) -> String {
        self.name.to_lowercase()
    }
}

impl CompanyCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyCategory::BigTech => "Big Tech",
            CompanyCategory::Unicorn => "Unicorn",
            CompanyCategory::Startup => "Startup",
            CompanyCategory::Consulting => "Consulting",
        }
    }
}

pub const POPULAR_COMPANIES: &[Company] = &[
    Company { name: "Google", category: CompanyCategory::BigTech },
    Company { name: "Meta", category: CompanyCategory::BigTech },
    Company { name: "Amazon", category: CompanyCategory::BigTech },
    Company { name: "Apple", category: CompanyCategory::BigTech },
    Company { name: "Microsoft", category: CompanyCategory::BigTech },
    Company { name: "Netflix", category: CompanyCategory::BigTech },
    Company { name: "Uber", category: CompanyCategory::Unicorn },
    Company { name: "Airbnb", category: CompanyCategory::Unicorn },
    Company { name: "Stripe", category: CompanyCategory::Unicorn },
    Company { name: "Startup", category: CompanyCategory::Startup },
    Company { name: "Early-stage", category: CompanyCategory::Startup },
    Company { name: "McKinsey", category: CompanyCategory::Consulting },
    Company { name: "BCG", category: CompanyCategory::Consulting },
    Company { name: "Bain", category: CompanyCategory::Consulting },
    Company { name: "Deloitte", category: CompanyCategory::Consulting },
    Company { name: "Accenture", category: CompanyCategory::Consulting },
];
