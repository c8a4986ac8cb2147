use actix_web::{http::Method, web, HttpResponse, Result};
use crate::models::{ApiResponse, SearchRequest, SearchResponse};
use crate::services::search_service::SearchService;

pub async fn search(
    service: web::Data<SearchService>,
    body: web::Json<SearchRequest>,
) -> Result<HttpResponse> {
    match service.search(&body.query).await {
        Ok(items) => {
            let response = SearchResponse {
                item_summaries: items,
            };
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::error!("搜索失败: {}", e);
            let response = ApiResponse::<SearchResponse>::error(e.to_string());
            Ok(HttpResponse::BadGateway().json(response))
        }
    }
}

/// 浏览器预检请求，直接放行
pub async fn search_preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/search")
            .route(web::post().to(search))
            .route(web::method(Method::OPTIONS).to(search_preflight)),
    );
}
