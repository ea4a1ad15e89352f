//! HTTP handlers and route configuration.

mod health;
mod newsletter;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Post routes. `/posts/featured` must precede `/posts/{id}`
            // so the literal segment wins the match.
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/featured", web::get().to(posts::featured_posts))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}/like", web::post().to(posts::like_post))
            .route("/search", web::get().to(posts::search_posts))
            .route("/subscribe", web::post().to(newsletter::subscribe)),
    );
}
