use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="no-reviews">{ "Aucun avis pour le moment." }</p> }.into_view();
    }

    view! {
        <div class="reviews">
            <h4>{ "Avis" }</h4>
            <ul>
                {
                    reviews.into_iter().map(|review| {
                        view! {
                            <li>
                                <strong>{ review.author() }</strong>
                                { format!(" - {}/5 - {}", review.rating, review.comment) }
                            </li>
                        }
                    }).collect_view()
                }
            </ul>
        </div>
    }
    .into_view()
}
