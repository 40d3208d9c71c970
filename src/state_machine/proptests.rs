//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::catalog::{self, Language, PRODUCTS};
use crate::quote::PriceQuote;
use crate::session::Session;
use chrono::Utc;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context(quote: Option<f64>) -> TurnContext {
    TurnContext::new(
        quote.map(|value| PriceQuote {
            value,
            currency: "INR".to_string(),
            fetched_at: Utc::now(),
        }),
        "ORD-PROPTEST",
    )
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn arb_product_id() -> impl Strategy<Value = String> {
    prop::sample::select(PRODUCTS.iter().map(|p| p.id.to_string()).collect::<Vec<_>>())
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::Idle),
        Just(ConvState::WelcomeSent),
        Just(ConvState::MainMenu),
        Just(ConvState::CreateOrder),
        Just(ConvState::SelectProduct),
        arb_product_id().prop_map(|product| ConvState::EnterQuantity { product }),
        (arb_product_id(), 1u32..1000)
            .prop_map(|(product, quantity)| ConvState::ConfirmOrder { product, quantity }),
        Just(ConvState::ChangeLanguage),
    ]
}

fn arb_session() -> impl Strategy<Value = Session> {
    (arb_state(), arb_language()).prop_map(|(state, language)| Session { state, language })
}

/// Every id the catalog can produce, plus the confirmation buttons
fn known_ids() -> Vec<String> {
    let mut ids: Vec<String> = catalog::MAIN_MENU_IDS
        .iter()
        .chain(catalog::ORDER_MENU_IDS.iter())
        .map(ToString::to_string)
        .collect();
    ids.extend(PRODUCTS.iter().map(|p| p.id.to_string()));
    ids.extend(Language::ALL.iter().map(|l| l.selection_id().to_string()));
    ids.push(catalog::CONFIRM.to_string());
    ids.push(catalog::CANCEL.to_string());
    ids
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("hi".to_string()),
        Just("order".to_string()),
        Just("menu".to_string()),
        "[0-9]{1,4}",
        "[a-zA-Z ]{0,20}",
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    let ids = known_ids();
    prop_oneof![
        arb_text().prop_map(Event::text),
        prop::sample::select(ids.clone()).prop_map(Event::list),
        prop::sample::select(ids).prop_map(Event::button),
        "zz_[a-z]{1,8}".prop_map(Event::list),
    ]
}

/// Input no state accepts
fn arb_junk_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        "zz_[a-z]{1,8}".prop_map(Event::list),
        "zz_[a-z]{1,8}".prop_map(Event::button),
        "zz [a-z]{1,8}".prop_map(Event::text),
    ]
}

// ============================================================================
// State Validity Checkers
// ============================================================================

fn is_valid_session(session: &Session) -> bool {
    match &session.state {
        ConvState::EnterQuantity { product } => catalog::find_product(product).is_some(),
        ConvState::ConfirmOrder { product, quantity } => {
            catalog::find_product(product).is_some() && *quantity >= 1
        }
        _ => true,
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Every event gets an answer
    #[test]
    fn prop_every_event_sends_a_message(session in arb_session(), event in arb_event()) {
        let result = transition(&session, &test_context(Some(4000.0)), event);
        prop_assert!(
            !result.messages().is_empty(),
            "No message for {:?}",
            session.state
        );
    }

    // Unrecognized input never moves the conversation
    #[test]
    fn prop_junk_keeps_state(session in arb_session(), event in arb_junk_event()) {
        let result = transition(&session, &test_context(None), event);
        prop_assert_eq!(result.new_session, session);
    }

    // Confirm and cancel both land on the main menu with the order cleared
    #[test]
    fn prop_confirmation_resets_order(
        product in arb_product_id(),
        quantity in 1u32..1000,
        language in arb_language(),
        confirm in any::<bool>()
    ) {
        let session = Session {
            state: ConvState::ConfirmOrder { product, quantity },
            language,
        };
        let id = if confirm { catalog::CONFIRM } else { catalog::CANCEL };
        let result = transition(&session, &test_context(None), Event::button(id));

        prop_assert_eq!(&result.new_session.state, &ConvState::MainMenu);
        prop_assert_eq!(result.new_session.selected_product(), None);
        prop_assert_eq!(result.new_session.quantity(), None);
        prop_assert_eq!(result.new_session.language, language);
    }

    // Only the language picker changes the language
    #[test]
    fn prop_language_only_changes_in_picker(session in arb_session(), event in arb_event()) {
        let result = transition(&session, &test_context(Some(4000.0)), event);
        if session.state != ConvState::ChangeLanguage {
            prop_assert_eq!(result.new_session.language, session.language);
        }
    }

    // A positive integer always reaches confirmation, quote or not
    #[test]
    fn prop_numeric_quantity_confirms(
        product in arb_product_id(),
        quantity in 1u32..100_000,
        has_quote in any::<bool>()
    ) {
        let session = Session::default().with_state(ConvState::EnterQuantity {
            product: product.clone(),
        });
        let ctx = test_context(has_quote.then_some(4000.0));
        let result = transition(&session, &ctx, Event::text(quantity.to_string()));

        prop_assert_eq!(
            result.new_session.state,
            ConvState::ConfirmOrder { product, quantity }
        );
    }

    // The quote is needed exactly when the reply shows a rate
    #[test]
    fn prop_quote_only_read_when_required(session in arb_session(), event in arb_event()) {
        let required = quote_required(&session.state, &event);
        let with = transition(&session, &test_context(Some(4000.0)), event.clone());
        let without = transition(&session, &test_context(None), event);

        if !required {
            prop_assert_eq!(with.effects, without.effects);
        }
        prop_assert_eq!(with.new_session, without.new_session);
    }

    // Random walks never reach an inconsistent session
    #[test]
    fn prop_walks_stay_valid(events in proptest::collection::vec(arb_event(), 0..30)) {
        let mut session = Session::default();
        let ctx = test_context(Some(4000.0));

        for event in events {
            session = transition(&session, &ctx, event).new_session;
            prop_assert!(is_valid_session(&session), "Invalid session: {:?}", session);
        }
    }
}
