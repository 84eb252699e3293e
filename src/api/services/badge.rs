use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, trace};

use crate::api::route::{RenderRequest, RouteError, parse_request};
use crate::render::{
    CachePolicy, NO_CACHE_HEADERS, Rendered, render_badge, render_stats, render_stats_batch,
};
use crate::services::VisitCounter;

pub struct BadgeService {}

impl BadgeService {
    pub async fn handle(req: HttpRequest, counter: web::Data<VisitCounter>) -> HttpResponse {
        match parse_request(req.path(), req.uri().query()) {
            Ok(request) => {
                let rendered = Self::process(request, &counter).await;
                Self::finish(rendered)
            }
            Err(e) => {
                debug!("Rejected {}: {}", req.path(), e.message());
                Self::error_response(e)
            }
        }
    }

    async fn process(request: RenderRequest, counter: &VisitCounter) -> Rendered {
        trace!("Routing {} request", request.mode().as_ref());
        match request {
            RenderRequest::Badge { format, key } => {
                let count = counter.increment(&key).await;
                trace!("Badge {:?} for {} -> {}", format, key, count);
                render_badge(format, count)
            }
            RenderRequest::Stats { key } => render_stats(counter.read(&key).await),
            RenderRequest::StatsBatch { keys } => {
                let counts = counter.read_many(&keys).await;
                render_stats_batch(&counts)
            }
        }
    }

    fn finish(rendered: Rendered) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        builder.insert_header(("Content-Type", rendered.content_type));
        if rendered.cache == CachePolicy::NoStore {
            for header in NO_CACHE_HEADERS {
                builder.insert_header(header);
            }
        }
        builder.body(rendered.body)
    }

    #[inline]
    fn error_response(err: RouteError) -> HttpResponse {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        HttpResponse::build(status)
            .insert_header(ContentType::plaintext())
            .body(err.message())
    }
}

/// Catch-all resource: every path and method goes through the router.
pub fn badge_routes() -> actix_web::Resource {
    web::resource("/{tail:.*}").route(web::route().to(BadgeService::handle))
}
