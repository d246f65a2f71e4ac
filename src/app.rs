use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::handlers;
use crate::store_client::ReviewStore;

pub fn create_app(
    store: Arc<dyn ReviewStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(store))
        .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(handlers::query_error_handler))
        .route("/review", web::post().to(handlers::create_review))
        .route("/all_reviews", web::get().to(handlers::all_reviews))
        .route("/uppercase", web::get().to(handlers::uppercase))
        .route("/process_text", web::get().to(handlers::process_text))
        .default_service(web::to(handlers::not_found))
}
