/// Component to display the visible attractions and their reviews.
/// Opens the review form for an attraction and reloads the whole list once
/// the API has accepted a review.
use leptos::*;
use crate::board::{deliver_review, Notification};
use crate::client::{AttractionService, GlooTransport};
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::models::attraction::Attraction;
use crate::review_workflow::DialogOutcome;
use crate::utils::leptos_owner::with_owner_safe;

#[component]
pub fn AttractionsList(service: AttractionService<GlooTransport>) -> impl IntoView {
    // Bumped after each accepted review; the resource refetches on change.
    let (refresh, set_refresh) = create_signal(0u32);
    let (reviewing, set_reviewing) = create_signal(None::<Attraction>);
    let (notification, set_notification) = create_signal(None::<Notification>);

    let list_service = service.clone();
    let attractions = create_local_resource(
        move || refresh.get(),
        move |_| {
            let service = list_service.clone();
            async move { service.get_visible_attractions_with_critiques().await }
        },
    );

    let owner = Owner::current();
    let on_close = Callback::new(move |outcome: DialogOutcome| {
        set_reviewing.set(None);
        let service = service.clone();
        spawn_local(async move {
            let Some(result) = deliver_review(&service, outcome).await else {
                return;
            };
            with_owner_safe(owner, "review delivered", move || {
                if result.is_success() {
                    set_refresh.update(|n| *n += 1);
                }
                set_notification.set(Some(result));
            });
        });
    });

    view! {
        <section class="attractions">
            {move || notification.get().map(|n| {
                let class = if n.is_success() { "notice success" } else { "notice error" };
                view! {
                    <div class=class on:click=move |_| set_notification.set(None)>
                        { n.message().to_string() }
                    </div>
                }
            })}

            <Suspense fallback=move || view! { <p class="loading">{ "Chargement des attractions..." }</p> }>
                {move || attractions.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p>{ "Aucune attraction à afficher." }</p>
                    }.into_view(),
                    Ok(list) => view! {
                        <ul class="attraction-cards">
                            {list.into_iter().map(|attraction| view! {
                                <AttractionCard
                                    attraction=attraction
                                    on_review=move |a: Attraction| set_reviewing.set(Some(a))
                                />
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                    Err(err) => view! {
                        <p class="error">{ format!("Impossible de charger les attractions : {}", err) }</p>
                    }.into_view(),
                })}
            </Suspense>

            {move || reviewing.get().map(|attraction| view! {
                <ReviewForm attraction=attraction on_close=on_close />
            })}
        </section>
    }
}

#[component]
fn AttractionCard(
    attraction: Attraction,
    #[prop(into)] on_review: Callback<Attraction>,
) -> impl IntoView {
    let average = attraction
        .average_rating()
        .map(|avg| format!("{:.1}/5", avg))
        .unwrap_or_else(|| "pas encore noté".to_string());
    let reviews = attraction.reviews().to_vec();
    let selected = attraction.clone();

    view! {
        <li class="attraction-card">
            <h3>{ attraction.name }</h3>
            <p>{ attraction.description }</p>
            <p class="meta">
                { format!("Difficulté : {}/5 · Note moyenne : {}", attraction.difficulty, average) }
            </p>
            <ReviewsList reviews=reviews />
            <button on:click=move |_| on_review.call(selected.clone())>{ "Laisser un avis" }</button>
        </li>
    }
}
