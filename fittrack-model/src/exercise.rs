use std::{convert::Infallible, fmt, str::FromStr};

/// Upper bound on exercises returned by a name search.
pub const SEARCH_LIMIT: usize = 30;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: String,
    pub equipment: String,
    pub target: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gif_url: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum BodyPartFilter {
    #[default]
    All,
    Only(String),
}

impl FromStr for BodyPartFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(BodyPartFilter::All)
        } else {
            Ok(BodyPartFilter::Only(s.to_owned()))
        }
    }
}

impl fmt::Display for BodyPartFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyPartFilter::All => write!(f, "all"),
            BodyPartFilter::Only(part) => write!(f, "{}", part),
        }
    }
}

/// Keeps exercises whose name contains `term`, ignoring case, in input
/// order and at most [`SEARCH_LIMIT`] of them.
pub fn filter_by_name(exercises: Vec<Exercise>, term: &str) -> Vec<Exercise> {
    let term = term.trim().to_lowercase();
    exercises
        .into_iter()
        .filter(|exercise| exercise.name.to_lowercase().contains(&term))
        .take(SEARCH_LIMIT)
        .collect()
}
