use axum::Json;

use campus_types::api::{CareerSuggestion, CollegeRecommendation};

use crate::error::ApiError;
use crate::form::FormData;

const GOVT_CUTOFF: i64 = 85;
const PRIVATE_CUTOFF: i64 = 50;

const FALLBACK_FIELD: &str = "General Technology Field";

const CAREER_FIELDS: &[(&str, &str)] = &[
    ("coding", "Software Development / Backend Engineering"),
    ("design", "UI/UX Design / Product Design"),
    ("communication", "Marketing / Public Relations / HR"),
    ("data analysis", "Data Science / Business Analytics"),
    ("machine learning", "AI Research / ML Engineering"),
    ("video editing", "Content Creation / Media Production"),
    ("finance", "Investment Banking / Financial Analysis"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollegeType {
    Government,
    Private,
}

impl CollegeType {
    pub fn label(self) -> &'static str {
        match self {
            CollegeType::Government => "Government",
            CollegeType::Private => "Private",
        }
    }
}

type CityTable = &'static [(&'static str, &'static str)];

/// (skill, government colleges by city, private colleges by city)
const COLLEGES: &[(&str, CityTable, CityTable)] = &[
    (
        "coding",
        &[
            ("Vadodara", "MSU Technology Campus"),
            ("Ahmedabad", "LD Engineering College"),
            ("Surat", "Government Engineering College"),
            ("Rajkot", "Government Engineering College Rajkot"),
            ("Pune", "College of Engineering Pune"),
            ("Mumbai", "VJTI Mumbai"),
            ("Delhi", "NSUT Delhi"),
            ("Bangalore", "University Visvesvaraya College of Engineering"),
            ("Hyderabad", "Osmania University College of Engineering"),
            ("Chennai", "College of Engineering Guindy"),
        ],
        &[
            ("Vadodara", "Parul University"),
            ("Ahmedabad", "Nirma University"),
            ("Surat", "Sardar Vallabhbhai National Institute of Technology"),
            ("Rajkot", "Marwadi University"),
            ("Pune", "MIT World Peace University"),
            ("Mumbai", "NMIMS University"),
            ("Delhi", "Amity University Delhi"),
            ("Bangalore", "PES University"),
            ("Hyderabad", "Vardhaman College of Engineering"),
            ("Chennai", "SRM Institute of Science and Technology"),
        ],
    ),
    (
        "design",
        &[
            ("Vadodara", "MSU Faculty of Fine Arts"),
            ("Ahmedabad", "CEPT University"),
            ("Surat", "Veer Narmad South Gujarat University"),
            ("Rajkot", "Saurashtra University"),
            ("Pune", "College of Engineering Pune - Design"),
            ("Mumbai", "Sir JJ School of Art"),
            ("Delhi", "NIFT Delhi"),
            ("Bangalore", "National Institute of Design"),
            ("Hyderabad", "JNAFAU"),
            ("Chennai", "Government College of Fine Arts"),
        ],
        &[
            ("Vadodara", "Parul Institute of Design"),
            ("Ahmedabad", "Anant National University"),
            ("Surat", "AURO University"),
            ("Rajkot", "RK University"),
            ("Pune", "Symbiosis Institute of Design"),
            ("Mumbai", "Indian School of Design and Innovation"),
            ("Delhi", "Pearl Academy"),
            ("Bangalore", "Srishti Institute of Art, Design and Technology"),
            ("Hyderabad", "ICAT Design and Media College"),
            ("Chennai", "LISAA School of Design"),
        ],
    ),
    (
        "finance",
        &[
            ("Vadodara", "MSU Faculty of Commerce"),
            ("Ahmedabad", "Gujarat University"),
            ("Surat", "Veer Narmad South Gujarat University"),
            ("Rajkot", "Saurashtra University"),
            ("Pune", "Brihan Maharashtra College of Commerce"),
            ("Mumbai", "Sydenham College of Commerce and Economics"),
            ("Delhi", "Shri Ram College of Commerce"),
            ("Bangalore", "Bangalore University"),
            ("Hyderabad", "Osmania University"),
            ("Chennai", "University of Madras"),
        ],
        &[
            ("Vadodara", "Navrachana University"),
            ("Ahmedabad", "GLS University"),
            ("Surat", "AURO University"),
            ("Rajkot", "Atmiya University"),
            ("Pune", "MIT World Peace University"),
            ("Mumbai", "NMIMS School of Business Management"),
            ("Delhi", "Amity Business School"),
            ("Bangalore", "Christ University"),
            ("Hyderabad", "ICFAI Business School"),
            ("Chennai", "VIT Business School"),
        ],
    ),
];

/// Exact, case-insensitive skill lookup.
pub fn career_for(skill: &str) -> &'static str {
    let skill = skill.to_lowercase();
    CAREER_FIELDS
        .iter()
        .find(|(key, _)| *key == skill)
        .map(|(_, field)| *field)
        .unwrap_or(FALLBACK_FIELD)
}

/// `None` when the percentage is below every cutoff.
pub fn college_type_for(percentage: i64) -> Option<CollegeType> {
    if percentage >= GOVT_CUTOFF {
        Some(CollegeType::Government)
    } else if percentage >= PRIVATE_CUTOFF {
        Some(CollegeType::Private)
    } else {
        None
    }
}

/// Skill is matched case-insensitively, city exactly as listed.
pub fn recommend(percentage: i64, skill: &str, city: &str) -> CollegeRecommendation {
    let Some(college_type) = college_type_for(percentage) else {
        return CollegeRecommendation::Message {
            message: "Sorry, percentage too low for recommendations.".into(),
        };
    };

    let skill = skill.to_lowercase();
    let college = COLLEGES
        .iter()
        .find(|(key, _, _)| *key == skill)
        .and_then(|(_, govt, private)| {
            let table = match college_type {
                CollegeType::Government => govt,
                CollegeType::Private => private,
            };
            table.iter().find(|(c, _)| *c == city).map(|(_, name)| *name)
        });

    match college {
        Some(name) => CollegeRecommendation::Found {
            college_type: college_type.label().into(),
            recommended_college: name.into(),
        },
        None => CollegeRecommendation::Message {
            message: "No matching college found for this combination.".into(),
        },
    }
}

/// POST /career/suggest/
pub async fn suggest_career(form: FormData) -> Result<Json<CareerSuggestion>, ApiError> {
    let skill = form.text("skill")?;
    Ok(Json(CareerSuggestion {
        recommended_field: career_for(&skill).into(),
    }))
}

/// POST /college/recommend/
pub async fn recommend_college(form: FormData) -> Result<Json<CollegeRecommendation>, ApiError> {
    let percentage: i64 = form.parse("percentage")?;
    let skill = form.text("skill")?;
    let city = form.text("city")?;
    Ok(Json(recommend(percentage, &skill, &city)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn career_lookup_ignores_case() {
        assert_eq!(career_for("Machine Learning"), "AI Research / ML Engineering");
        assert_eq!(career_for("CODING"), "Software Development / Backend Engineering");
    }

    #[test]
    fn career_lookup_falls_back() {
        assert_eq!(career_for("juggling"), FALLBACK_FIELD);
        assert_eq!(career_for("coding "), FALLBACK_FIELD);
    }

    #[test]
    fn cutoffs_are_inclusive() {
        assert_eq!(college_type_for(49), None);
        assert_eq!(college_type_for(50), Some(CollegeType::Private));
        assert_eq!(college_type_for(84), Some(CollegeType::Private));
        assert_eq!(college_type_for(85), Some(CollegeType::Government));
    }

    #[test]
    fn recommends_by_type_and_city() {
        assert_eq!(
            recommend(90, "Coding", "Pune"),
            CollegeRecommendation::Found {
                college_type: "Government".into(),
                recommended_college: "College of Engineering Pune".into(),
            }
        );
        assert_eq!(
            recommend(60, "finance", "Delhi"),
            CollegeRecommendation::Found {
                college_type: "Private".into(),
                recommended_college: "Amity Business School".into(),
            }
        );
    }

    #[test]
    fn unknown_combination_and_low_percentage_give_messages() {
        assert_eq!(
            recommend(90, "coding", "pune"),
            CollegeRecommendation::Message {
                message: "No matching college found for this combination.".into()
            }
        );
        assert_eq!(
            recommend(30, "coding", "Pune"),
            CollegeRecommendation::Message {
                message: "Sorry, percentage too low for recommendations.".into()
            }
        );
    }
}
