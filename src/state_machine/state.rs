//! Conversation state types

use serde::{Deserialize, Serialize};

/// Where a user is in the conversation, and what input is expected next.
///
/// The in-progress product and quantity live inside the order states, so
/// returning to any menu state drops them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// No conversation yet, or nothing in progress
    #[default]
    Idle,

    /// Greeted with the current rate, waiting for a command
    WelcomeSent,

    /// Main menu list shown
    MainMenu,

    /// Order sub-menu shown
    CreateOrder,

    /// Product list shown
    SelectProduct,

    /// Product chosen, waiting for a quantity
    EnterQuantity { product: String },

    /// Summary with Confirm/Cancel buttons shown
    ConfirmOrder { product: String, quantity: u32 },

    /// Language picker shown
    ChangeLanguage,
}

impl ConvState {
    /// Stable upper-case name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            ConvState::Idle => "IDLE",
            ConvState::WelcomeSent => "WELCOME_SENT",
            ConvState::MainMenu => "MAIN_MENU",
            ConvState::CreateOrder => "CREATE_ORDER",
            ConvState::SelectProduct => "SELECT_PRODUCT",
            ConvState::EnterQuantity { .. } => "ENTER_QUANTITY",
            ConvState::ConfirmOrder { .. } => "CONFIRM_ORDER",
            ConvState::ChangeLanguage => "CHANGE_LANGUAGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_is_tagged() {
        let state = ConvState::ConfirmOrder {
            product: "chain".to_string(),
            quantity: 2,
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": "confirm_order", "product": "chain", "quantity": 2 })
        );
        let back: ConvState = serde_json::from_value(value).unwrap();
        assert_eq!(back, state);
    }
}
