#[cfg(feature = "ssr")]
use actix_web::{error::InternalError, web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::{Database, NewAttraction};
#[cfg(feature = "ssr")]
use crate::models::flag;
#[cfg(feature = "ssr")]
use crate::models::message::ApiMessage;
#[cfg(feature = "ssr")]
use crate::models::review::{is_valid_rating, ReviewSubmission, ANONYMOUS_LAST_NAME};
#[cfg(feature = "ssr")]
use leptos::logging::{error, log};
#[cfg(feature = "ssr")]
use serde::Deserialize;

/// Body of `POST /attraction`, before validation.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
pub struct AttractionInput {
    #[serde(default)]
    pub attraction_id: Option<i64>,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub difficulte: Option<i32>,
    #[serde(default, deserialize_with = "flag::deserialize_option")]
    pub visible: Option<bool>,
}

#[cfg(feature = "ssr")]
impl AttractionInput {
    /// Name and description must be non-empty and a difficulty given.
    /// A missing visibility means visible; an id of 0 means a new attraction.
    pub fn validate(self) -> Option<NewAttraction> {
        let name = self.nom.filter(|nom| !nom.is_empty())?;
        let description = self.description.filter(|d| !d.is_empty())?;
        let difficulty = self.difficulte?;
        Some(NewAttraction {
            attraction_id: self.attraction_id.filter(|id| *id != 0),
            name,
            description,
            difficulty,
            visible: self.visible.unwrap_or(true),
        })
    }
}

/// Body of `POST /critique`, before validation.
#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
pub struct CritiqueInput {
    #[serde(default)]
    pub attraction_id: Option<i64>,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub note: Option<i64>,
    #[serde(default)]
    pub commentaire: Option<String>,
    #[serde(default, deserialize_with = "flag::deserialize_option")]
    pub est_anonyme: Option<bool>,
}

#[cfg(feature = "ssr")]
impl CritiqueInput {
    /// Requires an attraction and a rating within 1..=5. Missing names and
    /// comment fall back to the anonymous defaults.
    pub fn validate(self) -> Option<ReviewSubmission> {
        let attraction_id = self.attraction_id.filter(|id| *id != 0)?;
        let rating = self
            .note
            .and_then(|note| u8::try_from(note).ok())
            .filter(|note| is_valid_rating(*note))?;
        Some(ReviewSubmission {
            attraction_id,
            last_name: self.nom.unwrap_or_else(|| ANONYMOUS_LAST_NAME.to_string()),
            first_name: self.prenom.unwrap_or_default(),
            rating,
            comment: self.commentaire.unwrap_or_default(),
            is_anonymous: self.est_anonyme.unwrap_or(false),
        })
    }
}

#[cfg(feature = "ssr")]
fn attraction_rejected() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiMessage::new("Erreur lors de l'ajout.").with_result(false))
}

#[cfg(feature = "ssr")]
fn critique_rejected() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiMessage::new("Erreur lors de l'ajout de la critique"))
}

/// Bodies that do not deserialize get the route's own rejection message
/// instead of actix's plain-text error.
#[cfg(feature = "ssr")]
fn rejecting_json(rejection: fn() -> HttpResponse) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, req| {
        log!("[API] Malformed body on {}: {}", req.path(), err);
        InternalError::from_response(err, rejection()).into()
    })
}

#[cfg(feature = "ssr")]
pub async fn get_all_attractions(db: web::Data<Database>) -> HttpResponse {
    match db.get_all_attractions().await {
        Ok(attractions) => HttpResponse::Ok().json(attractions),
        Err(err) => {
            error!("[API] Failed to fetch attractions: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch attractions")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn add_attraction(
    db: web::Data<Database>,
    request: web::Json<AttractionInput>,
) -> HttpResponse {
    log!("[API] Received attraction request: {:?}", request);
    let Some(attraction) = request.into_inner().validate() else {
        log!("[API] Rejected incomplete attraction");
        return attraction_rejected();
    };
    match db.upsert_attraction(&attraction).await {
        Ok(id) => {
            log!("[API] Saved attraction ID: {}", id);
            HttpResponse::Ok().json(ApiMessage::new("Element ajouté.").with_result(id))
        }
        Err(err) => {
            error!("[API] Database error: {:?}", err);
            attraction_rejected()
        }
    }
}

/// Unknown ids answer `[]` with a 200.
#[cfg(feature = "ssr")]
pub async fn get_attraction(db: web::Data<Database>, path: web::Path<i64>) -> HttpResponse {
    let attraction_id = path.into_inner();
    match db.get_attraction(attraction_id).await {
        Ok(Some(attraction)) => HttpResponse::Ok().json(attraction),
        Ok(None) => HttpResponse::Ok().json(Vec::<()>::new()),
        Err(err) => {
            error!("[API] Failed to fetch attraction {}: {:?}", attraction_id, err);
            HttpResponse::InternalServerError().body("Failed to fetch attraction")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn delete_attraction(db: web::Data<Database>, path: web::Path<i64>) -> HttpResponse {
    let attraction_id = path.into_inner();
    match db.delete_attraction(attraction_id).await {
        Ok(_) => HttpResponse::Ok().body("Element supprimé."),
        Err(err) => {
            error!("[API] Failed to delete attraction {}: {:?}", attraction_id, err);
            HttpResponse::InternalServerError()
                .json(ApiMessage::new("Erreur lors de la suppression."))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_visible_attractions(db: web::Data<Database>) -> HttpResponse {
    match db.get_visible_attractions().await {
        Ok(attractions) => HttpResponse::Ok().json(attractions),
        Err(err) => {
            error!("[API] Failed to fetch visible attractions: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch visible attractions")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_visible_attractions_with_critiques(db: web::Data<Database>) -> HttpResponse {
    match db.get_visible_attractions_with_critiques().await {
        Ok(attractions) => {
            log!("[API] Returning {} visible attractions with critiques", attractions.len());
            HttpResponse::Ok().json(attractions)
        }
        Err(err) => {
            error!("[API] Failed to fetch visible attractions with critiques: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch visible attractions")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn add_critique(
    db: web::Data<Database>,
    request: web::Json<CritiqueInput>,
) -> HttpResponse {
    let Some(critique) = request.into_inner().validate() else {
        log!("[API] Rejected critique without attraction or valid note");
        return critique_rejected();
    };
    match db.add_critique(&critique).await {
        Ok(id) => HttpResponse::Ok().json(ApiMessage::new("Critique ajoutée").with_critique_id(id)),
        Err(err) => {
            error!("[API] Failed to store critique: {:?}", err);
            critique_rejected()
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_critiques_by_attraction(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> HttpResponse {
    let attraction_id = path.into_inner();
    match db.get_critiques_by_attraction(attraction_id).await {
        Ok(critiques) => HttpResponse::Ok().json(critiques),
        Err(err) => {
            error!("[API] Failed to fetch critiques for {}: {:?}", attraction_id, err);
            HttpResponse::InternalServerError().body("Failed to fetch critiques")
        }
    }
}

/// Registers the parc API routes. The fixed `visible` paths come before
/// the numeric `{id}` route.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/attraction")
            .app_data(rejecting_json(attraction_rejected))
            .route(web::get().to(get_all_attractions))
            .route(web::post().to(add_attraction)),
    )
    .route("/attraction/visible", web::get().to(get_visible_attractions))
    .route(
        "/attraction/visible/critiques",
        web::get().to(get_visible_attractions_with_critiques),
    )
    .route(r"/attraction/{id:\d+}", web::get().to(get_attraction))
    .route(r"/attraction/{id:\d+}", web::delete().to(delete_attraction))
    .service(
        web::resource("/critique")
            .app_data(rejecting_json(critique_rejected))
            .route(web::post().to(add_critique)),
    )
    .route(
        r"/critique/attraction/{id:\d+}",
        web::get().to(get_critiques_by_attraction),
    );
}
