use crate::application::http::{
    chat::router::ChatApiDoc, food_scan::router::FoodScanApiDoc, health::router::HealthApiDoc,
    lesson::router::LessonApiDoc, login::router::LoginApiDoc, pet::router::PetApiDoc,
    pet_health::router::PetHealthApiDoc, progress::router::ProgressApiDoc,
    reminder::router::ReminderApiDoc, user::router::UserApiDoc, utils::router::UtilsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DongoPet API"
    ),
    nest(
        (path = "/login", api = LoginApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/pets", api = PetApiDoc),
        (path = "/pets", api = PetHealthApiDoc),
        (path = "/reminders", api = ReminderApiDoc),
        (path = "/food-scan-results", api = FoodScanApiDoc),
        (path = "/utils", api = UtilsApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/lessons", api = LessonApiDoc),
        (path = "/progress", api = ProgressApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_area_is_documented() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        for expected in [
            "/login/access-token",
            "/users/signup",
            "/users/me",
            "/pets/{pet_id}",
            "/pets/{pet_id}/vaccinations/{vaccination_id}",
            "/reminders/pet/{pet_id}",
            "/food-scan-results/{pet_id}/{result_id}",
            "/utils/analyze-food-image",
            "/chat/get_text_response_rag",
            "/lessons/{lesson_id}",
            "/progress/user/{user_id}/current",
            "/health/ready",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "{expected} missing from {paths:?}"
            );
        }
    }
}
