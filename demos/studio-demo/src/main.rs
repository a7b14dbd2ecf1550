//! Simple CLI demo for the entity store engine.
//!
//! Lists formats from a running CMS API and prints the normalized store
//! state. Configure with `STUDIO_API_URL`, `STUDIO_SPACE`, and `STUDIO_LOG`.

use std::sync::Arc;
use std::time::Duration;
use studio_entities::model::Format;
use studio_entities::{
    EntityAction, EntityEnvironment, EntityReducer, EntityState, EntityStore, ListQuery,
    RestClient, TracingNotifier,
};
use studio_runtime::Store;
use tracing_subscriber::EnvFilter;

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STUDIO_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env();
    let mut api = RestClient::new(&config.api_url);
    if let Some(space) = config.space {
        api = api.with_space(space);
    }

    let env = EntityEnvironment::new(api, Arc::new(TracingNotifier));
    let store: EntityStore<Format> =
        Store::new(EntityState::default(), EntityReducer::new(), env);

    let query = ListQuery {
        page: Some(1),
        limit: Some(10),
        ..ListQuery::default()
    };

    let outcome = store
        .send_and_wait_for(
            EntityAction::FetchList { query },
            |a| matches!(a, EntityAction::ListLoaded { .. } | EntityAction::Failed { .. }),
            Duration::from_secs(10),
        )
        .await?;

    match outcome {
        EntityAction::ListLoaded { descriptor, .. } => {
            println!(
                "{} formats on this page ({} total):",
                descriptor.data.len(),
                descriptor.total
            );
            let names = store
                .state(|state| {
                    descriptor
                        .data
                        .iter()
                        .filter_map(|id| state.details.get(id).map(|f| f.name.clone()))
                        .collect::<Vec<_>>()
                })
                .await;
            for name in names {
                println!("  - {name}");
            }
        },
        EntityAction::Failed { message, .. } => {
            eprintln!("fetch failed: {message}");
        },
        _ => {},
    }

    store.shutdown(Duration::from_secs(5)).await?;
    Ok(())
}
