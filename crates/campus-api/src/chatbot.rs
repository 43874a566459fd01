use axum::Json;

use campus_types::api::ChatbotResponse;

use crate::error::ApiError;
use crate::form::FormData;

const RULES: &str =
    "College rules: 75% attendance required, ID card mandatory, ragging strictly prohibited.";
const CANTEEN: &str = "Canteen opens at 9 AM and closes at 5 PM. Menu updates daily.";
const NOTES: &str = "Study materials are available under the Notes section in X Campus.";
const INTERNSHIPS: &str = "Internship listings are updated every Monday. Check the Internships tab.";
const WELCOME: &str =
    "Welcome! Begin with Dashboard, explore your schedule, and check out the canteen and notes.";
const EXAMS: &str = "Mid-sem exams are in October, finals in March. Check Dashboard for exact dates.";
const EVENTS: &str =
    "Upcoming events are listed in the Campus News section. Don't miss the annual fest!";
const WIFI: &str = "Campus Wi-Fi is available in all blocks. Use your student credentials to login.";
const HELP: &str = "For help, visit the Admin Office or use the Help section in X Campus.";

pub const FALLBACK: &str =
    "Sorry, I didn't understand that. Try asking about rules, canteen, notes, exams, or hostel.";

/// Scanned in order; the first keyword contained in the query wins.
const KEYWORDS: &[(&str, &str)] = &[
    ("rule", RULES),
    ("regulation", RULES),
    ("canteen", CANTEEN),
    ("food", CANTEEN),
    ("notes", NOTES),
    ("study material", NOTES),
    ("internship", INTERNSHIPS),
    ("job", INTERNSHIPS),
    ("new student", WELCOME),
    ("how to start", WELCOME),
    ("library", "Library is open from 8 AM to 8 PM. Carry your ID card to enter."),
    ("exam", EXAMS),
    ("test", EXAMS),
    ("attendance", "Minimum 75% attendance is mandatory to appear for exams."),
    (
        "id card",
        "Your college ID card must be carried at all times. It's needed for library, exams, and events.",
    ),
    (
        "ragging",
        "Ragging is strictly prohibited. Report any incident immediately to the authorities.",
    ),
    ("hostel", "Hostel curfew is 10 PM. Visitors allowed till 7 PM with prior permission."),
    ("sports", "Sports facilities include basketball, cricket, and gym. Timings: 4 PM to 7 PM."),
    ("events", EVENTS),
    ("fest", EVENTS),
    ("wifi", WIFI),
    ("internet", WIFI),
    ("contact", HELP),
    ("help", HELP),
];

pub fn reply(query: &str) -> &'static str {
    let query = query.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, response)| *response)
        .unwrap_or(FALLBACK)
}

/// POST /chatbot/query
pub async fn chatbot_query(form: FormData) -> Result<Json<ChatbotResponse>, ApiError> {
    let query = form.text("query")?;
    Ok(Json(ChatbotResponse {
        response: reply(&query).into(),
    }))
}
