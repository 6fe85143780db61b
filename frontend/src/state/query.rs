use crate::api::QueryClient;
use leptos::*;

/// Query cache plus a signal that ticks on every invalidation, so resources
/// keyed on [`QueryContext::generation`] re-read after a mutation.
#[derive(Clone)]
pub struct QueryContext {
    client: QueryClient,
    generation: RwSignal<u64>,
}

impl QueryContext {
    pub fn new(client: QueryClient) -> Self {
        let generation = create_rw_signal(0u64);
        client.subscribe(move || generation.update(|g| *g += 1));
        Self { client, generation }
    }

    pub fn client(&self) -> &QueryClient {
        &self.client
    }

    /// Tracked read; use as a resource source.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }
}

pub fn use_query() -> QueryContext {
    match use_context::<QueryContext>() {
        Some(ctx) => ctx,
        None => {
            let ctx = QueryContext::new(QueryClient::new());
            provide_context(ctx.clone());
            ctx
        }
    }
}
