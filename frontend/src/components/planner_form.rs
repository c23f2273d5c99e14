use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::planner::{HttpPlanService, PlannerStore, PreferenceField};

#[derive(Properties, PartialEq)]
pub struct PreferenceInputProps {
    pub field: PreferenceField,
    pub value: String,
    pub on_change: Callback<(PreferenceField, String)>,
}

#[function_component(PreferenceInput)]
fn preference_input(props: &PreferenceInputProps) -> Html {
    let field = props.field;
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="preference-card">
            <div class={classes!("preference-glow", format!("glow-{}", field.color()))}></div>
            <div class="preference-body">
                <h3 class={classes!("preference-label", format!("accent-{}", field.color()))}>
                    {field.label()}
                </h3>
                <input
                    type="text"
                    placeholder={format!("Enter {}", field.label())}
                    value={props.value.clone()}
                    {oninput}
                />
            </div>
        </div>
    }
}

/// Preferences form plus the plan viewer below it.
#[function_component(PlannerForm)]
pub fn planner_form() -> Html {
    let store = use_memo(|_| PlannerStore::new(), ());
    let service = use_memo(|_| HttpPlanService::default(), ());
    let update = use_update();

    // Re-render on every store change
    {
        use_effect_with_deps(
            move |store| {
                let subscription = store.subscribe(move |_| update());
                move || drop(subscription)
            },
            store.clone(),
        );
    }

    let on_change = {
        let store = store.clone();
        Callback::from(move |(field, value): (PreferenceField, String)| {
            store.set_field(field, value);
        })
    };

    let on_generate = {
        let store = store.clone();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            spawn_local(store.generate_plan(&*service));
        })
    };

    let snapshot = store.snapshot();

    html! {
        <>
            <div class="preference-grid">
                {
                    PreferenceField::ALL.iter().map(|field| {
                        html! {
                            <PreferenceInput
                                field={*field}
                                value={snapshot.preferences.get(*field).to_string()}
                                on_change={on_change.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="generate-row">
                <button class="generate-button" onclick={on_generate}>
                    {"Generate Plan ✨"}
                </button>
            </div>

            <div class="plan-viewer">
                <h3>{"AI Trip Plan"}</h3>
                <p class="plan-text">{&snapshot.display}</p>
            </div>
        </>
    }
}
