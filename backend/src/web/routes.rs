// backend/src/web/routes.rs

use actix_web::{guard, http::header, web, HttpResponse};

use crate::web::handlers::{trade_item_handlers, user_details_handlers, user_handlers};

async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

fn is_multipart(ctx: &guard::GuardContext<'_>) -> bool {
  ctx
    .head()
    .headers()
    .get(header::CONTENT_TYPE)
    .and_then(|value| value.to_str().ok())
    .is_some_and(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::resource("/users")
          .route(web::get().to(user_handlers::get_user_handler))
          .route(web::post().to(user_handlers::create_user_handler)),
      )
      .service(
        web::resource("/userdetails")
          .route(web::get().to(user_details_handlers::get_user_details_handler))
          // Multipart edits may carry a photo; everything else is text-only.
          .route(
            web::post()
              .guard(guard::fn_guard(is_multipart))
              .to(user_details_handlers::update_user_details_multipart_handler),
          )
          .route(web::post().to(user_details_handlers::update_user_details_handler)),
      )
      .service(web::resource("/tradeitems").route(web::get().to(trade_item_handlers::list_trade_items_handler))),
  );
}
