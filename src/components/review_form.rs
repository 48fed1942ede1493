use leptos::*;
use leptos::ev::SubmitEvent;
use crate::components::rating_picker::RatingPicker;
use crate::models::attraction::Attraction;
use crate::review_workflow::{DialogOutcome, ReviewDialog};

/// Modal form for reviewing one attraction. Reports how it was closed
/// through `on_close`; sending the review is up to the caller.
#[component]
pub fn ReviewForm(
    attraction: Attraction,
    #[prop(into)] on_close: Callback<DialogOutcome>,
) -> impl IntoView {
    let dialog = create_rw_signal(ReviewDialog::open(attraction.attraction_id));

    let validity = move || dialog.with(|d| d.draft().validity());
    let locked = move || dialog.with(|d| d.draft().names_locked());
    let rating = Signal::derive(move || dialog.with(|d| d.draft().rating()));

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(outcome) = dialog.try_update(|d| d.confirm()).flatten() {
            on_close.call(outcome);
        }
    };

    let cancel = move |_| {
        if let Some(outcome) = dialog.try_update(|d| d.cancel()).flatten() {
            on_close.call(outcome);
        }
    };

    view! {
        <div class="modal-backdrop">
            <form class="review-form" on:submit=submit_review>
                <h3>{ format!("Votre avis sur {}", attraction.name) }</h3>

                <label class="anonymous">
                    <input
                        type="checkbox"
                        prop:checked=move || dialog.with(|d| d.draft().is_anonymous())
                        on:change=move |e| dialog.update(|d| d.draft_mut().set_anonymous(event_target_checked(&e)))
                    />
                    { "Publier anonymement" }
                </label>

                <input
                    type="text"
                    placeholder="Nom"
                    class:invalid=move || !validity().last_name
                    prop:disabled=locked
                    prop:value=move || dialog.with(|d| d.draft().last_name().to_string())
                    on:input=move |e| dialog.update(|d| { d.draft_mut().set_last_name(event_target_value(&e)); })
                />
                <input
                    type="text"
                    placeholder="Prénom"
                    class:invalid=move || !validity().first_name
                    prop:disabled=locked
                    prop:value=move || dialog.with(|d| d.draft().first_name().to_string())
                    on:input=move |e| dialog.update(|d| { d.draft_mut().set_first_name(event_target_value(&e)); })
                />

                <RatingPicker
                    value=rating
                    on_select=move |star: u8| dialog.update(|d| d.draft_mut().set_rating(star))
                />
                <Show when=move || !validity().rating>
                    <p class="field-error">{ "Choisissez une note entre 1 et 5." }</p>
                </Show>

                <textarea
                    placeholder="Votre commentaire"
                    class:invalid=move || !validity().comment
                    prop:value=move || dialog.with(|d| d.draft().comment().to_string())
                    on:input=move |e| dialog.update(|d| d.draft_mut().set_comment(event_target_value(&e)))
                />

                <div class="actions">
                    <button type="button" on:click=cancel>{ "Annuler" }</button>
                    <button type="submit" prop:disabled=move || !validity().is_valid()>
                        { "Envoyer" }
                    </button>
                </div>
            </form>
        </div>
    }
}
