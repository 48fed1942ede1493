#![cfg(target_arch = "wasm32")]
// Browser tests for the review form.
// Run with: wasm-pack test --headless --firefox --no-default-features --features wasm-test
use gloo_timers::future::sleep;
use leptos::*;
use parcattraction::components::review_form::ReviewForm;
use parcattraction::models::attraction::Attraction;
use parcattraction::review_workflow::DialogOutcome;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn attraction() -> Attraction {
    Attraction {
        attraction_id: 7,
        name: "Space Mountain".into(),
        description: "Voyage dans les étoiles".into(),
        difficulty: 4,
        visible: true,
        critiques: Some(vec![]),
    }
}

// Helper function to mount the form in a fresh container
fn mount_form(closed: RwSignal<Option<DialogOutcome>>) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(container.clone().unchecked_into::<HtmlElement>(), move || {
        view! {
            <ReviewForm
                attraction=attraction()
                on_close=move |outcome: DialogOutcome| closed.set(Some(outcome))
            />
        }
    });
    container
}

fn input(container: &Element, selector: &str) -> HtmlInputElement {
    container
        .query_selector(selector)
        .unwrap()
        .expect("element rendered")
        .unchecked_into::<HtmlInputElement>()
}

fn click(container: &Element, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .expect("element rendered")
        .unchecked_into::<HtmlElement>()
        .click();
}

#[wasm_bindgen_test::wasm_bindgen_test]
async fn test_anonymous_checkbox_locks_name_fields() {
    let closed = create_rw_signal(None);
    let container = mount_form(closed);

    click(&container, "input[type='checkbox']");
    sleep(Duration::from_millis(20)).await;

    let last_name = input(&container, "input[placeholder='Nom']");
    let first_name = input(&container, "input[placeholder='Prénom']");
    assert!(last_name.disabled());
    assert!(first_name.disabled());
    assert_eq!(last_name.value(), "Anonyme");
    assert_eq!(first_name.value(), "");

    click(&container, "input[type='checkbox']");
    sleep(Duration::from_millis(20)).await;

    assert!(!last_name.disabled());
    assert_eq!(last_name.value(), "");
}

#[wasm_bindgen_test::wasm_bindgen_test]
async fn test_empty_form_does_not_close() {
    let closed = create_rw_signal(None);
    let container = mount_form(closed);

    let form = container.query_selector("form").unwrap().unwrap();
    let submit = web_sys::Event::new("submit").unwrap();
    form.dispatch_event(&submit).unwrap();
    sleep(Duration::from_millis(20)).await;

    assert_eq!(closed.get_untracked(), None);
}

#[wasm_bindgen_test::wasm_bindgen_test]
async fn test_cancel_reports_cancelled() {
    let closed = create_rw_signal(None);
    let container = mount_form(closed);

    click(&container, ".actions button[type='button']");
    sleep(Duration::from_millis(20)).await;

    assert_eq!(closed.get_untracked(), Some(DialogOutcome::Cancelled));
}
