use std::time::{Duration, Instant};

use warp::{
    http::StatusCode,
    path::Tail,
    reject,
    reply::{json, with_header, with_status, Reply},
};

use crate::catalog::{self, WILDCARD_CATEGORY};
use crate::contact::ContactSubmission;
use crate::display::{CatalogPage, ResourceCard, SchedulingPage};
use crate::environment::Environment;
use crate::errors::HubError;
use crate::pages;
use crate::routes::{
    query::FilterQuery,
    rejection::{Context, Rejection},
    response::SuccessResponse,
};

const SERVER_TIMING_HEADER: &str = "server-timing";
type RouteResult = Result<Box<dyn Reply>, reject::Rejection>;

macro_rules! timed {
    ($($expression:stmt);+) => {
        let start = Instant::now();

        // TODO when `try` blocks are stabilized, we can wrap the body
        // and return the headers even on errors
        let result = { $($expression)+ };

        Ok(Box::new(with_header(
            result,
            SERVER_TIMING_HEADER,
            format_server_timing(start.elapsed()),
        )) as Box<dyn Reply>)
    };
}

pub async fn home(_environment: Environment) -> RouteResult {
    timed! {
        json(&pages::home_page())
    }
}

pub async fn class_content(environment: Environment, query: FilterQuery) -> RouteResult {
    let search = query.search.unwrap_or_default();
    let category = query
        .category
        .unwrap_or_else(|| WILDCARD_CATEGORY.to_owned());

    timed! {
        let worksheets = environment
            .library
            .worksheets()
            .await
            .map_err(|e: HubError| Rejection::new(Context::class_content(&search, &category), e))?;

        let coloring_sheets = environment
            .library
            .coloring_sheets()
            .await
            .map_err(|e: HubError| Rejection::new(Context::class_content(&search, &category), e))?;

        let categories = environment
            .library
            .categories()
            .await
            .map_err(|e: HubError| Rejection::new(Context::class_content(&search, &category), e))?;

        json(&CatalogPage::new(
            pages::class_content_meta(),
            categories,
            catalog::filter_resources(&worksheets, &search, &category),
            catalog::filter_resources(&coloring_sheets, &search, &category),
            &environment.urls,
        ))
    }
}

pub async fn about(_environment: Environment) -> RouteResult {
    timed! {
        json(&pages::about_page())
    }
}

pub async fn contact(_environment: Environment) -> RouteResult {
    timed! {
        json(&pages::contact_page())
    }
}

pub async fn contact_submit(
    environment: Environment,
    submission: ContactSubmission,
) -> RouteResult {
    timed! {
        let receipt = environment
            .outbox
            .send(submission)
            .await
            .map_err(|e: HubError| Rejection::new(Context::contact(), e))?;

        json(&SuccessResponse::Submitted(receipt))
    }
}

pub async fn scheduling(environment: Environment) -> RouteResult {
    timed! {
        let sessions = environment
            .library
            .sessions()
            .await
            .map_err(|e: HubError| Rejection::new(Context::scheduling(), e))?;

        json(&SchedulingPage::new(
            pages::scheduling_meta(),
            sessions,
            pages::booking_info(),
        ))
    }
}

pub async fn worksheet(environment: Environment, id: String) -> RouteResult {
    retrieve_resource(environment, catalog::ResourceKind::Worksheet, id).await
}

pub async fn coloring_sheet(environment: Environment, id: String) -> RouteResult {
    retrieve_resource(environment, catalog::ResourceKind::ColoringSheet, id).await
}

async fn retrieve_resource(
    environment: Environment,
    kind: catalog::ResourceKind,
    id: String,
) -> RouteResult {
    timed! {
        let parsed: catalog::Id = id.parse().map_err(|_| {
            Rejection::new(
                Context::resource(kind.path_segment(), &id),
                HubError::InvalidId(id.clone()),
            )
        })?;

        let resource = environment
            .library
            .resource(kind, parsed)
            .await
            .map_err(|e: HubError| Rejection::new(Context::resource(kind.path_segment(), &id), e))?;

        match resource {
            Some(resource) => {
                Box::new(json(&ResourceCard::new(kind, &resource, &environment.urls)))
                    as Box<dyn Reply>
            }
            None => Box::new(with_status(json(&()), StatusCode::NOT_FOUND)) as Box<dyn Reply>,
        }
    }
}

pub async fn lookup(_environment: Environment, segment: String) -> RouteResult {
    timed! {
        match pages::classify_identifier(&segment) {
            Some(kind) => json(&pages::lookup_page(&segment, kind)),
            None => {
                return Err(Rejection::new(
                    Context::lookup(&segment),
                    HubError::UnrecognizedIdentifier(segment),
                )
                .into())
            }
        }
    }
}

pub async fn not_found(environment: Environment, path: Tail) -> RouteResult {
    // Failed resource retrievals carry their own rejection; the
    // fallback page must not shadow it.
    if path.as_str().starts_with(&environment.urls.resources_prefix) {
        return Err(reject::not_found());
    }

    timed! {
        with_status(json(&pages::not_found_page(path.as_str())), StatusCode::NOT_FOUND)
    }
}

fn format_server_timing(seconds: Duration) -> String {
    format!("handler;dur={}", seconds.as_secs_f64() * 1000.0)
}
