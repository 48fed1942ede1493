/// Main application entry point for Parc Attraction.
/// Mounts the attraction list, which owns the review flow.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::client::{AttractionService, GlooTransport};
use crate::components::attractions_list::AttractionsList;
use crate::config::ApiConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/parcattraction.css"/>
        <Title text="Parc Attraction"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let service = AttractionService::new(GlooTransport, ApiConfig::from_env());

    view! {
        <div>
            <h1>{ "Parc Attraction" }</h1>
            <AttractionsList service=service />
        </div>
    }
}
