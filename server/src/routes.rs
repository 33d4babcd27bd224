use std::sync::Arc;

use log::{error, Logger};
use warp::http::StatusCode;
use warp::reject;
use warp::reply::{json, with_status, Json, WithStatus};

use crate::errors::HubError;

pub mod admin;
mod handlers;
mod query;
mod rejection;
mod response;

pub use internal::*;

/// The maximum contact-form body size to accept.
const MAX_CONTENT_LENGTH: u64 = 64 * 1024;

pub async fn format_rejection(
    logger: Arc<Logger>,
    rej: reject::Rejection,
) -> Result<WithStatus<Json>, reject::Rejection> {
    if let Some(r) = rej.find::<rejection::Rejection>() {
        let e = &r.error;
        error!(logger, "Request failed"; "context" => ?r.context, "error" => ?r.error, "status" => %status_code_for(e), "message" => %r.error);
        let flattened = r.flatten();

        return Ok(with_status(json(&flattened), status_code_for(e)));
    }

    if rej
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        error!(logger, "Malformed contact submission");
        let flattened =
            rejection::Rejection::new(rejection::Context::contact(), HubError::MalformedSubmission)
                .flatten();

        return Ok(with_status(json(&flattened), StatusCode::BAD_REQUEST));
    }

    Err(rej)
}

fn status_code_for(e: &HubError) -> StatusCode {
    use HubError::*;

    match e {
        InvalidId(..) | MalformedSubmission => StatusCode::BAD_REQUEST,
        ResourceNotFound | UnrecognizedIdentifier(..) => StatusCode::NOT_FOUND,
    }
}

mod internal {
    use warp::filters::BoxedFilter;
    use warp::path::{end, param as par, tail};
    use warp::Filter;
    use warp::Reply;
    use warp::{get as g, path as p, post, query};

    use super::{format_rejection, handlers, query as q, MAX_CONTENT_LENGTH};
    use crate::environment::Environment;

    type Route = BoxedFilter<(Box<dyn Reply>,)>;

    macro_rules! route_filter {
    ($route_variable:ident; $first:expr) => (let $route_variable = $route_variable.and($first););
    ($route_variable:ident; $first:expr, $($rest:expr),+) => (
        let $route_variable = $route_variable.and($first);
        route_filter!($route_variable; $($rest),+);
    )
}

    macro_rules! route {
    ($name:ident => $handler:ident, $route_variable:ident; $($filters:expr),+) => (
        pub fn $name(environment: Environment) -> Route {
            let $route_variable = warp::any().map(move || environment.clone());

            route_filter!($route_variable; $($filters),+);

            $route_variable.and_then(handlers::$handler)
                .boxed()
        }
    );
}

    macro_rules! resource_route {
    ($name:ident => $handler:ident, $route_variable:ident; $($filters:expr),+) => (
        pub fn $name(environment: Environment) -> Route {
            let r = environment.urls.resources_path.clone();

            let $route_variable = warp::any()
                .map(move || environment.clone())
                .and(p(r));

            route_filter!($route_variable; $($filters),+);

            $route_variable.and_then(handlers::$handler)
                .boxed()
        }
    );
}

    route!(make_home_route => home, rt; end(), g());
    route!(make_class_content_route => class_content, rt; p("class-content"), query::<q::FilterQuery>(), end(), g());
    route!(make_about_route => about, rt; p("about"), end(), g());
    route!(make_contact_route => contact, rt; p("contact"), end(), g());
    route!(make_contact_submit_route => contact_submit, rt; p("contact"), end(), post(), warp::body::content_length_limit(MAX_CONTENT_LENGTH), warp::body::json());
    route!(make_scheduling_route => scheduling, rt; p("scheduling"), end(), g());
    route!(make_lookup_route => lookup, rt; par::<String>(), end(), g());
    route!(make_not_found_route => not_found, rt; tail(), g());
    resource_route!(make_worksheet_route => worksheet, rt; p("worksheets"), par::<String>(), end(), g());
    resource_route!(make_coloring_sheet_route => coloring_sheet, rt; p("coloring-sheets"), par::<String>(), end(), g());

    /// Composes every site route in matching order, with rejection
    /// recovery. Used by `main` and by the HTTP tests.
    pub fn make_site(
        environment: Environment,
    ) -> impl Filter<Extract = (impl Reply,), Error = warp::reject::Rejection> + Clone {
        let logger = environment.logger.clone();

        make_home_route(environment.clone())
            .or(make_class_content_route(environment.clone()))
            .or(make_about_route(environment.clone()))
            .or(make_contact_submit_route(environment.clone()))
            .or(make_contact_route(environment.clone()))
            .or(make_scheduling_route(environment.clone()))
            .or(make_worksheet_route(environment.clone()))
            .or(make_coloring_sheet_route(environment.clone()))
            .or(make_lookup_route(environment.clone()))
            .or(make_not_found_route(environment))
            .recover(move |r| format_rejection(logger.clone(), r))
    }
}
