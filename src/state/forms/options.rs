//! Closed option sets for the registration form selectors
//!
//! Every selector in the form draws from a fixed set of values. Each
//! enum carries its wire value (what the backend receives) and its
//! display label, so free-form strings never leak into the payload.

/// Organizational unit within the directory tree.
///
/// The registration form and the admin panels expose different subsets
/// (registration offers Engineering, the admin panels offer IT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationalUnit {
    Marketing,
    Sales,
    Engineering,
    Finance,
    HumanResources,
    InformationTechnology,
}

impl OrganizationalUnit {
    /// Units offered by the registration form
    pub const REGISTRATION: [OrganizationalUnit; 5] = [
        OrganizationalUnit::Marketing,
        OrganizationalUnit::Sales,
        OrganizationalUnit::Engineering,
        OrganizationalUnit::Finance,
        OrganizationalUnit::HumanResources,
    ];

    /// Units offered by the admin import/move panels
    pub const ADMIN: [OrganizationalUnit; 5] = [
        OrganizationalUnit::Marketing,
        OrganizationalUnit::Sales,
        OrganizationalUnit::InformationTechnology,
        OrganizationalUnit::Finance,
        OrganizationalUnit::HumanResources,
    ];

    /// Distinguished name sent to the backend
    pub fn dn(&self) -> &'static str {
        match self {
            OrganizationalUnit::Marketing => "OU=Marketing,DC=example,DC=com",
            OrganizationalUnit::Sales => "OU=Sales,DC=example,DC=com",
            OrganizationalUnit::Engineering => "OU=Engineering,DC=example,DC=com",
            OrganizationalUnit::Finance => "OU=Finance,DC=example,DC=com",
            OrganizationalUnit::HumanResources => "OU=HR,DC=example,DC=com",
            OrganizationalUnit::InformationTechnology => "OU=IT,DC=example,DC=com",
        }
    }

    /// Label shown in the registration form selector
    pub fn label(&self) -> &'static str {
        match self {
            OrganizationalUnit::Marketing => "Marketing",
            OrganizationalUnit::Sales => "Sales",
            OrganizationalUnit::Engineering => "Engineering",
            OrganizationalUnit::Finance => "Finance",
            OrganizationalUnit::HumanResources => "Human Resources",
            OrganizationalUnit::InformationTechnology => "IT",
        }
    }

    /// OU component of the distinguished name (admin toasts show this)
    pub fn short_name(&self) -> &'static str {
        match self {
            OrganizationalUnit::Marketing => "Marketing",
            OrganizationalUnit::Sales => "Sales",
            OrganizationalUnit::Engineering => "Engineering",
            OrganizationalUnit::Finance => "Finance",
            OrganizationalUnit::HumanResources => "HR",
            OrganizationalUnit::InformationTechnology => "IT",
        }
    }

    /// Resolve a distinguished name back to a unit
    pub fn from_dn(dn: &str) -> Option<OrganizationalUnit> {
        [
            OrganizationalUnit::Marketing,
            OrganizationalUnit::Sales,
            OrganizationalUnit::Engineering,
            OrganizationalUnit::Finance,
            OrganizationalUnit::HumanResources,
            OrganizationalUnit::InformationTechnology,
        ]
        .into_iter()
        .find(|unit| unit.dn() == dn)
    }
}

/// Industry selector options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Retail,
    Manufacturing,
    Education,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Education,
        Industry::Other,
    ];

    /// Wire value sent to the backend
    pub fn value(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Education => "education",
            Industry::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Retail => "Retail",
            Industry::Manufacturing => "Manufacturing",
            Industry::Education => "Education",
            Industry::Other => "Other",
        }
    }
}

/// Company size brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySize {
    Size1To10,
    Size11To50,
    Size51To200,
    Size201To500,
    Size501To1000,
    Size1000Plus,
}

impl CompanySize {
    pub const ALL: [CompanySize; 6] = [
        CompanySize::Size1To10,
        CompanySize::Size11To50,
        CompanySize::Size51To200,
        CompanySize::Size201To500,
        CompanySize::Size501To1000,
        CompanySize::Size1000Plus,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            CompanySize::Size1To10 => "1-10",
            CompanySize::Size11To50 => "11-50",
            CompanySize::Size51To200 => "51-200",
            CompanySize::Size201To500 => "201-500",
            CompanySize::Size501To1000 => "501-1000",
            CompanySize::Size1000Plus => "1000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Size1To10 => "1-10 employees",
            CompanySize::Size11To50 => "11-50 employees",
            CompanySize::Size51To200 => "51-200 employees",
            CompanySize::Size201To500 => "201-500 employees",
            CompanySize::Size501To1000 => "501-1000 employees",
            CompanySize::Size1000Plus => "1000+ employees",
        }
    }
}

/// Monthly ad budget brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    UnderOneK,
    OneToFiveK,
    FiveToTenK,
    TenToTwentyFiveK,
    TwentyFiveToFiftyK,
    FiftyKPlus,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 6] = [
        BudgetRange::UnderOneK,
        BudgetRange::OneToFiveK,
        BudgetRange::FiveToTenK,
        BudgetRange::TenToTwentyFiveK,
        BudgetRange::TwentyFiveToFiftyK,
        BudgetRange::FiftyKPlus,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            BudgetRange::UnderOneK => "less-1k",
            BudgetRange::OneToFiveK => "1k-5k",
            BudgetRange::FiveToTenK => "5k-10k",
            BudgetRange::TenToTwentyFiveK => "10k-25k",
            BudgetRange::TwentyFiveToFiftyK => "25k-50k",
            BudgetRange::FiftyKPlus => "50k+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::UnderOneK => "Less than $1,000",
            BudgetRange::OneToFiveK => "$1,000 - $5,000",
            BudgetRange::FiveToTenK => "$5,000 - $10,000",
            BudgetRange::TenToTwentyFiveK => "$10,000 - $25,000",
            BudgetRange::TwentyFiveToFiftyK => "$25,000 - $50,000",
            BudgetRange::FiftyKPlus => "$50,000+",
        }
    }
}

/// Preferred contact method (defaults to email)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Both,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::Phone,
        ContactMethod::Both,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::Phone => "Phone",
            ContactMethod::Both => "Both Email and Phone",
        }
    }
}

/// Advertising platforms for the optional multi-select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdPlatform {
    Search,
    Social,
    Display,
    Video,
    Shopping,
    Native,
}

impl AdPlatform {
    pub const ALL: [AdPlatform; 6] = [
        AdPlatform::Search,
        AdPlatform::Social,
        AdPlatform::Display,
        AdPlatform::Video,
        AdPlatform::Shopping,
        AdPlatform::Native,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            AdPlatform::Search => "search",
            AdPlatform::Social => "social",
            AdPlatform::Display => "display",
            AdPlatform::Video => "video",
            AdPlatform::Shopping => "shopping",
            AdPlatform::Native => "native",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdPlatform::Search => "Search",
            AdPlatform::Social => "Social Media",
            AdPlatform::Display => "Display",
            AdPlatform::Video => "Video",
            AdPlatform::Shopping => "Shopping",
            AdPlatform::Native => "Native",
        }
    }
}

/// Step an optional selection through `options`, wrapping at the ends.
/// `None` enters the list at the first (forward) or last (backward)
/// entry; there is no path back to `None`.
pub fn cycle_selection<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let next_index = match current.and_then(|value| options.iter().position(|o| *o == value)) {
        Some(index) => {
            if forward {
                (index + 1) % options.len()
            } else {
                (index + options.len() - 1) % options.len()
            }
        }
        None => {
            if forward {
                0
            } else {
                options.len() - 1
            }
        }
    };
    Some(options[next_index])
}

/// Step a required selection through `options`, wrapping at the ends
pub fn cycle_required<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    match cycle_selection(options, Some(current), forward) {
        Some(value) => value,
        None => current,
    }
}
