use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    allergy::{
        __path_create_allergy, __path_delete_allergy, __path_get_allergies, __path_get_allergy,
        __path_update_allergy, create_allergy, delete_allergy, get_allergies, get_allergy,
        update_allergy,
    },
    insurance::{
        __path_delete_insurance, __path_get_insurance, __path_upsert_insurance, delete_insurance,
        get_insurance, upsert_insurance,
    },
    medical_condition::{
        __path_delete_medical_condition, __path_get_medical_condition,
        __path_upsert_medical_condition, delete_medical_condition, get_medical_condition,
        upsert_medical_condition,
    },
    medication::{
        __path_delete_medication, __path_get_medication, __path_upsert_medication,
        delete_medication, get_medication, upsert_medication,
    },
    vaccination::{
        __path_create_vaccination, __path_delete_vaccination, __path_get_vaccination,
        __path_get_vaccinations, __path_update_vaccination, create_vaccination,
        delete_vaccination, get_vaccination, get_vaccinations, update_vaccination,
    },
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    get_vaccinations,
    get_vaccination,
    create_vaccination,
    update_vaccination,
    delete_vaccination,
    get_allergies,
    get_allergy,
    create_allergy,
    update_allergy,
    delete_allergy,
    get_insurance,
    upsert_insurance,
    delete_insurance,
    get_medical_condition,
    upsert_medical_condition,
    delete_medical_condition,
    get_medication,
    upsert_medication,
    delete_medication
))]
pub struct PetHealthApiDoc;

pub fn pet_health_routes(state: AppState) -> Router<AppState> {
    let pet_path = format!("{}/pets/{{pet_id}}", state.args.server.root_path);

    Router::new()
        .route(
            &format!("{pet_path}/vaccinations"),
            get(get_vaccinations).post(create_vaccination),
        )
        .route(
            &format!("{pet_path}/vaccinations/{{vaccination_id}}"),
            get(get_vaccination)
                .put(update_vaccination)
                .delete(delete_vaccination),
        )
        .route(
            &format!("{pet_path}/allergies"),
            get(get_allergies).post(create_allergy),
        )
        .route(
            &format!("{pet_path}/allergies/{{allergy_id}}"),
            get(get_allergy).put(update_allergy).delete(delete_allergy),
        )
        .route(
            &format!("{pet_path}/insurance"),
            get(get_insurance)
                .put(upsert_insurance)
                .delete(delete_insurance),
        )
        .route(
            &format!("{pet_path}/medical-condition"),
            get(get_medical_condition)
                .put(upsert_medical_condition)
                .delete(delete_medical_condition),
        )
        .route(
            &format!("{pet_path}/medication"),
            get(get_medication)
                .put(upsert_medication)
                .delete(delete_medication),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
