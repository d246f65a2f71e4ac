use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::web::{Data, Json, Query};
use actix_web::{HttpRequest, HttpResponse, Responder};

use crate::consts;
use crate::errors::ShowReviewError;
use crate::models::review::{CreateReviewRequest, ListReviewsQuery};
use crate::models::text::{
    Capitalization, ProcessTextQuery, ProcessTextResponse, UppercaseQuery, UppercaseResponse,
};
use crate::models::{ErrorResponse, MessageResponse};
use crate::store_client::ReviewStore;
use crate::text_processing;

fn error_response(err: ShowReviewError) -> HttpResponse {
    match &err {
        ShowReviewError::ValidationError(msg) => log::info!("rejected request: {}", msg),
        _ => log::error!("request failed: {:?}", err),
    }
    HttpResponse::build(err.status_code()).json(ErrorResponse::new(err.public_message()))
}

fn required_text(text: Option<String>) -> Result<String, ShowReviewError> {
    text.ok_or_else(|| {
        ShowReviewError::ValidationError("'text' is a required query parameter.".to_string())
    })
}

pub async fn create_review(
    store: Data<dyn ReviewStore>,
    request: Json<CreateReviewRequest>,
) -> impl Responder {
    log::debug!("create review request: {:?}", request.0);

    let review = match request.into_inner().validate() {
        Ok(review) => review,
        Err(e) => return error_response(e),
    };

    match store.add_review(&review).await {
        Ok(record) => {
            log::info!("review stored: id={}, show={:?}", record.id, record.fields.show);
            HttpResponse::Created().json(MessageResponse {
                message: consts::REVIEW_CREATED_MESSAGE.to_string(),
            })
        }
        Err(e) => error_response(e),
    }
}

pub async fn all_reviews(
    store: Data<dyn ReviewStore>,
    query: Query<ListReviewsQuery>,
) -> impl Responder {
    let options = match query.into_inner().validate() {
        Ok(options) => options,
        Err(e) => return error_response(e),
    };

    match store.list_reviews(&options).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => error_response(e),
    }
}

pub async fn uppercase(query: Query<UppercaseQuery>) -> impl Responder {
    match required_text(query.into_inner().text) {
        Ok(text) => HttpResponse::Ok().json(UppercaseResponse {
            text: text_processing::uppercase(&text),
        }),
        Err(e) => error_response(e),
    }
}

pub async fn process_text(query: Query<ProcessTextQuery>) -> impl Responder {
    let query = query.into_inner();

    let result = required_text(query.text).and_then(|text| {
        let capitalization = match query.capitalization.as_deref() {
            Some(value) => value.parse::<Capitalization>()?,
            None => Capitalization::default(),
        };
        // Negative factors repeat zero times.
        let duplication_factor = match query.duplication_factor {
            Some(factor) => usize::try_from(factor.max(0)).unwrap_or(usize::MAX),
            None => consts::DEFAULT_DUPLICATION_FACTOR,
        };
        text_processing::process_text(&text, duplication_factor, capitalization)
    });

    match result {
        Ok(processed_text) => HttpResponse::Ok().json(ProcessTextResponse { processed_text }),
        Err(e) => error_response(e),
    }
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}

pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => consts::JSON_BODY_REQUIRED_MESSAGE.to_string(),
        JsonPayloadError::Deserialize(e) if e.is_eof() => {
            consts::JSON_BODY_REQUIRED_MESSAGE.to_string()
        }
        _ => format!("Invalid request body: {}", err),
    };
    log::info!("rejected request body: {}", err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    InternalError::from_response(err, response).into()
}

pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::info!("rejected query string: {}", err);

    let response = HttpResponse::BadRequest()
        .json(ErrorResponse::new(format!("Invalid query parameters: {}", err)));
    InternalError::from_response(err, response).into()
}
