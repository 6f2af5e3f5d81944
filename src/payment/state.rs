use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use yew::prelude::*;

use super::models::{parse_amount, Currency, PaymentRequest};

/// Everything the payment form shows. Lives as long as the page does.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub email: String,
    /// Raw text of the amount input, converted only at submit time.
    pub amount: String,
    pub currency: Currency,
    pub response: Option<Value>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetEmail(String),
    SetAmount(String),
    SelectCurrency(Currency),
    SubmitStarted,
    Settled(Value),
}

impl FormState {
    pub fn to_request(&self) -> PaymentRequest {
        PaymentRequest {
            email: self.email.clone(),
            amount: parse_amount(&self.amount),
            currency: self.currency,
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::try_unwrap(self).unwrap_or_else(|shared| (*shared).clone());
        match action {
            FormAction::SetEmail(email) => next.email = email,
            FormAction::SetAmount(amount) => next.amount = amount,
            FormAction::SelectCurrency(currency) => next.currency = currency,
            FormAction::SubmitStarted => next.loading = true,
            // whichever request settles last owns the panel
            FormAction::Settled(response) => {
                next.response = Some(response);
                next.loading = false;
            }
        }
        Rc::new(next)
    }
}

/// Reducer root for the page. Hands out the current state as a shared `Rc`
/// so rendering never copies the response.
#[derive(Debug, Default, PartialEq)]
pub struct FormStore {
    pub current: Rc<FormState>,
}

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(FormStore {
            current: self.current.clone().reduce(action),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn apply(actions: Vec<FormAction>) -> Rc<FormState> {
        actions
            .into_iter()
            .fold(Rc::new(FormState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn test_initial_state_is_idle_with_eur() {
        let state = FormState::default();
        assert!(!state.loading);
        assert_eq!(state.response, None);
        assert_eq!(state.currency, Currency::Eur);
    }

    #[test]
    fn test_submit_started_sets_loading_without_touching_response() {
        let state = apply(vec![
            FormAction::Settled(json!({"status": "ok"})),
            FormAction::SubmitStarted,
        ]);
        assert!(state.loading);
        assert_eq!(state.response, Some(json!({"status": "ok"})));
    }

    #[test]
    fn test_settled_stores_response_and_clears_loading() {
        let state = apply(vec![
            FormAction::SubmitStarted,
            FormAction::Settled(json!({"status": "ok"})),
        ]);
        assert!(!state.loading);
        assert_eq!(state.response, Some(json!({"status": "ok"})));
    }

    #[test]
    fn test_changed_currency_reaches_the_request() {
        let state = apply(vec![
            FormAction::SetEmail("payer@example.com".to_string()),
            FormAction::SetAmount("19.99".to_string()),
            FormAction::SelectCurrency(Currency::Nok),
        ]);
        let body = serde_json::to_value(state.to_request()).unwrap();
        assert_eq!(
            body,
            json!({"email": "payer@example.com", "amount": 19.99, "currency": "NOK"})
        );
    }

    #[test]
    fn test_overlapping_settlements_keep_the_last_one() {
        let state = apply(vec![
            FormAction::SubmitStarted,
            FormAction::SubmitStarted,
            FormAction::Settled(json!({"request": "second"})),
            FormAction::Settled(json!({"request": "first"})),
        ]);
        assert_eq!(state.response, Some(json!({"request": "first"})));
        assert!(!state.loading);
    }

    #[test]
    fn test_state_serializes_as_a_plain_record() {
        let state = apply(vec![FormAction::SetAmount("5".to_string())]);
        assert_eq!(
            serde_json::to_value(&*state).unwrap(),
            json!({
                "email": "",
                "amount": "5",
                "currency": "EUR",
                "response": null,
                "loading": false
            })
        );
    }

    #[test]
    fn test_store_advances_without_touching_handed_out_state() {
        let store = Rc::new(FormStore::default());
        let before = store.current.clone();

        let store = store.reduce(FormAction::SubmitStarted);
        let store = store.reduce(FormAction::Settled(json!({"status": "ok"})));

        assert!(!before.loading);
        assert_eq!(before.response, None);
        assert_eq!(store.current.response, Some(json!({"status": "ok"})));
    }
}
