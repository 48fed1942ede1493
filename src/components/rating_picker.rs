use leptos::*;
use crate::models::review::RATING_RANGE;

/// The 1-5 star control of the review form. Only ever emits values from
/// that range.
#[component]
pub fn RatingPicker(
    #[prop(into)] value: Signal<Option<u8>>,
    #[prop(into)] on_select: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="rating-picker">
            {RATING_RANGE.map(|star| view! {
                <button
                    type="button"
                    class="star"
                    class:selected=move || value.get().is_some_and(|rating| star <= rating)
                    title=format!("{}/5", star)
                    on:click=move |_| on_select.call(star)
                >
                    { "★" }
                </button>
            }).collect_view()}
        </div>
    }
}
