use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, MethodRouter},
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::cli::{open_backend, ServeArgs};
use crate::core::operation::{Invocation, Location, Operation};
use crate::provider::{dispatch, Connect};
use crate::web::serializer::{create_safe_error_response, error_response, respond};

/// Upper bound on requests served at once, and so on open database sessions
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shared application state
pub struct AppState {
    pub connector: Arc<dyn Connect>,
}

type PathParams = Path<HashMap<String, String>>;
type QueryParams = Query<HashMap<String, String>>;

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the backend cannot
/// be configured, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Build the backend named by the serve arguments
///
/// # Errors
///
/// Returns an error for an unusable database URL or an unreadable fixture.
pub fn connector_from_args(args: &ServeArgs) -> anyhow::Result<Arc<dyn Connect>> {
    open_backend(args.db_url.as_deref(), args.fixture.as_deref())?
        .ok_or_else(|| anyhow::anyhow!("either --db-url or --fixture is required"))
}

/// Create the application router: one GET route per provider operation.
pub fn create_router(connector: Arc<dyn Connect>) -> Router {
    let state = Arc::new(AppState { connector });

    let mut router = Router::new();
    for operation in Operation::ALL {
        if operation.has_path_params() {
            router = router.route(
                &operation.route(),
                get(
                    move |State(state): State<Arc<AppState>>,
                          Path(path): PathParams,
                          Query(query): QueryParams| async move {
                        handle_operation(operation, &state, &path, &query).await
                    },
                ),
            );
        }
        router = router.route(&operation.query_route(), query_only(operation, HashMap::new()));

        // `/gene_info/` names the empty identifier
        if let Some(param) = operation.sole_path_param() {
            let path = HashMap::from([(param.name.to_string(), String::new())]);
            router = router.route(
                &format!("{}/", operation.query_route()),
                query_only(operation, path),
            );
        }
    }

    router
        .fallback(not_found_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("no-referrer"),
                ))
                .layer(TraceLayer::new_for_http())
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        )
}

/// GET handler taking its path parameters from `path` and the rest from the query string
fn query_only(
    operation: Operation,
    path: HashMap<String, String>,
) -> MethodRouter<Arc<AppState>> {
    get(
        move |State(state): State<Arc<AppState>>, Query(query): QueryParams| {
            let path = path.clone();
            async move { handle_operation(operation, &state, &path, &query).await }
        },
    )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let connector = connector_from_args(&args)?;
    tracing::info!("Serving UTA data from {}", connector.describe());
    let app = create_router(connector);

    let addr = format!("{}:{}", args.address, args.port);
    let listener = TcpListener::bind(&addr).await?;
    println!("Starting uta-rest server at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Validate the request against the operation's parameters, then run it on a
/// freshly acquired provider handle. No handle is acquired for a request that
/// fails validation.
async fn handle_operation(
    operation: Operation,
    state: &AppState,
    path: &HashMap<String, String>,
    query: &HashMap<String, String>,
) -> Response {
    let invocation = match Invocation::from_lookup(operation, |param| {
        let value = match param.location {
            Location::Path => path.get(param.name).or_else(|| query.get(param.name)),
            Location::Query => query.get(param.name),
        };
        value.map(String::as_str)
    }) {
        Ok(invocation) => invocation,
        Err(err) => {
            tracing::debug!(%operation, "rejected request: {err}");
            return error_response(&err);
        }
    };

    let provider = match state.connector.connect().await {
        Ok(provider) => provider,
        Err(err) => return error_response(&err),
    };

    respond(dispatch(provider.as_ref(), &invocation).await)
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(create_safe_error_response("not_found", "Not Found", None)),
    )
}
