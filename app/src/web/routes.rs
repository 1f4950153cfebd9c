// app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, cart_handlers, checkout_handlers, dashboard_handlers, site_handlers};

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(site_handlers::index_handler))
    .route("/login", web::get().to(site_handlers::login_page_handler))
    .route("/health", web::get().to(site_handlers::health_check_handler))
    .service(
      web::scope("/api/v1")
        .service(
          web::scope("/auth")
            .route("/login", web::post().to(auth_handlers::login_handler))
            .route("/register", web::post().to(auth_handlers::register_handler))
            .route("/logout", web::post().to(auth_handlers::logout_handler)),
        )
        .service(
          web::scope("/dashboard")
            .route("", web::get().to(dashboard_handlers::dashboard_handler))
            .route("/tab", web::post().to(dashboard_handlers::select_tab_handler)),
        )
        .service(
          web::scope("/cart")
            .route("/toggle/{food_id}", web::post().to(cart_handlers::toggle_handler))
            .route("/quantity", web::post().to(cart_handlers::set_quantity_handler))
            .route("/{food_id}/increment", web::post().to(cart_handlers::increment_handler))
            .route("/{food_id}/decrement", web::post().to(cart_handlers::decrement_handler)),
        )
        .route("/checkout", web::post().to(checkout_handlers::checkout_handler)),
    );
}
