use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use wasm_bindgen_futures::spawn_local;

use crate::payment::client::{submit, HttpGateway};
use crate::payment::models::{is_displayable, pretty_print, Currency};
use crate::payment::state::{FormAction, FormState, FormStore};

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentFormViewProps {
    pub state: Rc<FormState>,
    pub on_action: Callback<FormAction>,
    pub on_submit: Callback<()>,
}

/// The form itself. Holds no state of its own; every edit goes out as a
/// `FormAction`.
#[function_component]
pub fn PaymentFormView(props: &PaymentFormViewProps) -> Html {
    let state = &props.state;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_email = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FormAction::SetEmail(input.value())
    });

    let on_amount = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FormAction::SetAmount(input.value())
    });

    let on_currency = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Currency>() {
                Ok(currency) => on_action.emit(FormAction::SelectCurrency(currency)),
                Err(err) => log::warn!("Ignoring currency selection: {}", err),
            }
        })
    };

    html! {
        <div class="page-container">
            <style>
                {r#"
                    .page-container {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 2rem;
                        font-family: system-ui, sans-serif;
                    }

                    .title {
                        letter-spacing: 0.2em;
                        margin-bottom: 2rem;
                    }

                    .form-container {
                        width: 100%;
                        max-width: 420px;
                        padding: 2rem;
                        border: 1px solid #ddd;
                        border-radius: 8px;
                    }

                    .form-container form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .form-container input,
                    .form-container select,
                    .form-container button {
                        padding: 0.75rem;
                        font-size: 1rem;
                    }

                    .form-container button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }

                    .response {
                        margin-top: 1.5rem;
                        padding: 1rem;
                        background: #f6f6f6;
                        border-radius: 6px;
                        overflow-x: auto;
                    }
                "#}
            </style>
            <h1 class="title">{"MARIMEKKO POS"}</h1>
            <div class="form-container">
                <h2>{"Simple payment app"}</h2>
                <form onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Email address"
                        value={state.email.clone()}
                        oninput={on_email}
                        required={true}
                    />
                    <input
                        type="number"
                        placeholder="Amount"
                        value={state.amount.clone()}
                        oninput={on_amount}
                        required={true}
                    />
                    <select onchange={on_currency}>
                        {
                            Currency::ALL.iter().map(|currency| {
                                html! {
                                    <option
                                        value={currency.code()}
                                        selected={*currency == state.currency}
                                    >
                                        {currency.code()}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                    <button type="submit" disabled={state.loading}>
                        {if state.loading { "Processing..." } else { "Submit Payment" }}
                    </button>
                </form>
                {
                    match state.response.as_ref() {
                        Some(response) if is_displayable(response) => html! {
                            <div class="response">
                                <pre>{pretty_print(response)}</pre>
                            </div>
                        },
                        _ => html! {},
                    }
                }
            </div>
        </div>
    }
}

/// Owns the form state and runs submissions against the backend.
#[function_component]
pub fn PaymentPage() -> Html {
    let store = use_reducer(FormStore::default);
    let current = store.current.clone();

    let on_action = {
        let dispatcher = store.dispatcher();
        use_callback(move |action: FormAction, _: &()| dispatcher.dispatch(action), ())
    };

    let on_submit = {
        let dispatcher = store.dispatcher();
        use_callback(
            move |_: (), state: &Rc<FormState>| {
                let request = state.to_request();
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    submit(&HttpGateway, request, move |action| dispatcher.dispatch(action)).await;
                });
            },
            current.clone(),
        )
    };

    html! {
        <PaymentFormView state={current} on_action={on_action} on_submit={on_submit} />
    }
}
