//! Pure state transition function
//!
//! Every `(state, event)` pair has an outcome. Input a state does not expect
//! keeps the state and answers with a reprompt.

use super::{ConvState, Effect, Event};
use crate::catalog::{self, find_product, render, texts, Language, Product};
use crate::dispatch::{ButtonMessage, OutboundMessage, ReplyButton};
use crate::quote::PriceQuote;
use crate::session::Session;
use regex::Regex;
use std::sync::LazyLock;

static QUANTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]+$").expect("quantity pattern is valid"));

/// Per-turn inputs produced outside the transition
#[derive(Debug, Clone, Default)]
pub struct TurnContext {
    /// Current quote. `None` when unavailable or not needed this turn.
    pub quote: Option<PriceQuote>,
    /// Id assigned if this turn confirms an order
    pub order_id: String,
}

impl TurnContext {
    pub fn new(quote: Option<PriceQuote>, order_id: impl Into<String>) -> Self {
        Self {
            quote,
            order_id: order_id.into(),
        }
    }
}

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_session: Session,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(session: Session) -> Self {
        Self {
            new_session: session,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Outbound messages, in send order
    #[cfg(test)]
    pub fn messages(&self) -> Vec<&OutboundMessage> {
        self.effects.iter().filter_map(Effect::message).collect()
    }
}

/// Top-level text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Hi,
    Order,
    Menu,
}

impl Command {
    fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "hi" => Some(Command::Hi),
            "order" => Some(Command::Order),
            "menu" => Some(Command::Menu),
            _ => None,
        }
    }
}

/// Parse a quantity reply: ASCII digits only, at least 1
pub fn parse_quantity(text: &str) -> Option<u32> {
    let text = text.trim();
    if !QUANTITY_PATTERN.is_match(text) {
        return None;
    }
    text.parse::<u32>().ok().filter(|q| *q > 0)
}

/// Whether the transition for this pair reads the quote
pub fn quote_required(state: &ConvState, event: &Event) -> bool {
    match (state, event) {
        (ConvState::Idle | ConvState::WelcomeSent, Event::Text { body }) => {
            Command::parse(body) == Some(Command::Hi)
        }
        (ConvState::EnterQuantity { .. }, Event::Text { body }) => parse_quantity(body).is_some(),
        _ => false,
    }
}

/// `quantity × weight × price`, or `None` without a quote
pub fn order_total(product: &Product, quantity: u32, quote: Option<&PriceQuote>) -> Option<f64> {
    quote.map(|q| product.total_cost(quantity, q.value))
}

/// Pure transition function
///
/// Given the same session, context and event it always produces the same
/// result, with no I/O.
pub fn transition(session: &Session, ctx: &TurnContext, event: Event) -> TransitionResult {
    let lang = session.language;
    let t = texts(lang);

    match (&session.state, event) {
        // ============================================================
        // Greeting and text commands
        // ============================================================
        (ConvState::Idle | ConvState::WelcomeSent, Event::Text { body }) => {
            match Command::parse(&body) {
                Some(Command::Hi) => {
                    let welcome = match &ctx.quote {
                        Some(q) => render(t.welcome, &[("rate", &q.format_amount(q.value))]),
                        None => t.welcome_no_rate.to_string(),
                    };
                    TransitionResult::new(session.with_state(ConvState::WelcomeSent))
                        .with_effect(Effect::text(welcome))
                }
                Some(Command::Order) => show_order_menu(session),
                Some(Command::Menu) => show_main_menu(session),
                None => reprompt(session, t.help),
            }
        }
        (ConvState::Idle | ConvState::WelcomeSent, _) => reprompt(session, t.help),

        // ============================================================
        // Main menu
        // ============================================================
        (ConvState::MainMenu, Event::ListSelection { id }) => match id.as_str() {
            catalog::VIEW_POINTS => show_info(session, t.points_info),
            catalog::VIEW_ORDERS => show_info(session, t.orders_info),
            catalog::CONTACT_SUPPORT => show_info(session, t.support_info),
            catalog::CHANGE_LANGUAGE => show_language_menu(session),
            catalog::CREATE_ORDER => show_order_menu(session),
            _ => show_main_menu(session),
        },
        (ConvState::MainMenu, _) => show_main_menu(session),

        // ============================================================
        // Order sub-menu
        // ============================================================
        (ConvState::CreateOrder, Event::ListSelection { id }) if id == catalog::BROWSE_PRODUCTS => {
            TransitionResult::new(session.with_state(ConvState::SelectProduct))
                .with_effect(Effect::menu(&catalog::product_list(lang)))
        }
        (ConvState::CreateOrder, Event::ListSelection { id }) if id == catalog::BACK_TO_MAIN => {
            show_main_menu(session)
        }
        (ConvState::CreateOrder, _) => show_order_menu(session),

        // ============================================================
        // Product selection
        // ============================================================
        (ConvState::SelectProduct, Event::ListSelection { id }) => match find_product(&id) {
            Some(item) => TransitionResult::new(session.with_state(ConvState::EnterQuantity {
                product: item.id.to_string(),
            }))
            .with_effect(Effect::text(render(
                t.quantity_prompt,
                &[("product", item.name)],
            ))),
            None => reprompt(session, t.select_product_reprompt),
        },
        (ConvState::SelectProduct, _) => reprompt(session, t.select_product_reprompt),

        // ============================================================
        // Quantity entry
        // ============================================================
        (ConvState::EnterQuantity { product }, Event::Text { body }) => {
            match (find_product(product), parse_quantity(&body)) {
                (Some(item), Some(quantity)) => show_confirmation(session, ctx, item, quantity),
                (Some(_), None) => reprompt(session, t.quantity_reprompt),
                // Only reachable with a session restored from elsewhere
                (None, _) => TransitionResult::new(session.with_state(ConvState::SelectProduct))
                    .with_effect(Effect::text(t.select_product_reprompt))
                    .with_effect(Effect::menu(&catalog::product_list(lang))),
            }
        }
        (ConvState::EnterQuantity { .. }, _) => reprompt(session, t.quantity_reprompt),

        // ============================================================
        // Confirmation
        // ============================================================
        (ConvState::ConfirmOrder { product, quantity }, Event::ButtonSelection { id })
            if id == catalog::CONFIRM =>
        {
            show_main_menu(session)
                .prepend(Effect::text(render(
                    t.order_placed,
                    &[("order_id", &ctx.order_id)],
                )))
                .with_effect(Effect::OrderPlaced {
                    order_id: ctx.order_id.clone(),
                    product: product.clone(),
                    quantity: *quantity,
                })
        }
        (ConvState::ConfirmOrder { product, quantity }, Event::ButtonSelection { id })
            if id == catalog::CANCEL =>
        {
            show_main_menu(session)
                .prepend(Effect::text(t.order_cancelled))
                .with_effect(Effect::OrderCancelled {
                    product: product.clone(),
                    quantity: *quantity,
                })
        }
        (ConvState::ConfirmOrder { .. }, _) => reprompt(session, t.use_buttons_reprompt),

        // ============================================================
        // Language switch
        // ============================================================
        (ConvState::ChangeLanguage, Event::ListSelection { id }) => {
            match Language::from_selection_id(&id) {
                Some(new_lang) => {
                    let next = Session {
                        state: ConvState::MainMenu,
                        language: new_lang,
                    };
                    TransitionResult::new(next)
                        .with_effect(Effect::text(texts(new_lang).language_changed))
                        .with_effect(Effect::menu(&catalog::main_menu(new_lang)))
                }
                None => show_language_menu(session),
            }
        }
        (ConvState::ChangeLanguage, _) => show_language_menu(session),
    }
}

impl TransitionResult {
    fn prepend(mut self, effect: Effect) -> Self {
        self.effects.insert(0, effect);
        self
    }
}

// Helper functions

fn reprompt(session: &Session, text: &str) -> TransitionResult {
    TransitionResult::new(session.clone()).with_effect(Effect::text(text))
}

fn show_main_menu(session: &Session) -> TransitionResult {
    TransitionResult::new(session.with_state(ConvState::MainMenu))
        .with_effect(Effect::menu(&catalog::main_menu(session.language)))
}

fn show_order_menu(session: &Session) -> TransitionResult {
    TransitionResult::new(session.with_state(ConvState::CreateOrder))
        .with_effect(Effect::menu(&catalog::order_menu(session.language)))
}

fn show_language_menu(session: &Session) -> TransitionResult {
    TransitionResult::new(session.with_state(ConvState::ChangeLanguage))
        .with_effect(Effect::menu(&catalog::language_menu()))
}

/// Informational reply, then the main menu again
fn show_info(session: &Session, text: &str) -> TransitionResult {
    show_main_menu(session).prepend(Effect::text(text))
}

fn show_confirmation(
    session: &Session,
    ctx: &TurnContext,
    item: &Product,
    quantity: u32,
) -> TransitionResult {
    let t = texts(session.language);
    let quote = ctx.quote.as_ref();
    let count = quantity.to_string();
    let weight = item.weight_grams.to_string();

    let body = match (quote, order_total(item, quantity, quote)) {
        (Some(q), Some(total)) => render(
            t.confirm_body,
            &[
                ("quantity", &count),
                ("product", item.name),
                ("weight", &weight),
                ("rate", &q.format_amount(q.value)),
                ("total", &q.format_amount(total)),
            ],
        ),
        _ => render(
            t.confirm_body_no_rate,
            &[("quantity", &count), ("product", item.name), ("weight", &weight)],
        ),
    };

    TransitionResult::new(session.with_state(ConvState::ConfirmOrder {
        product: item.id.to_string(),
        quantity,
    }))
    .with_effect(Effect::SendMessage(OutboundMessage::Buttons(ButtonMessage {
        header: t.confirm_header.to_string(),
        body_text: body,
        buttons: vec![
            ReplyButton::new(catalog::CONFIRM, t.confirm_button),
            ReplyButton::new(catalog::CANCEL, t.cancel_button),
        ],
    })))
}
