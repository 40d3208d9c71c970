//! Localized menus and content
//!
//! Pure lookups from a language to the structures the bot sends. Row ids are
//! defined once here and shared by every locale, so selection handling never
//! depends on the language a menu was rendered in.

mod language;
mod product;
mod text;

pub use language::Language;
pub use product::{find_product, Product, PRODUCTS};
pub use text::{render, texts};

use crate::dispatch::{ListMessage, ListRow, ListSection, OutboundMessage};

pub const VIEW_POINTS: &str = "view_points";
pub const VIEW_ORDERS: &str = "view_orders";
pub const CONTACT_SUPPORT: &str = "contact_support";
pub const CHANGE_LANGUAGE: &str = "change_language";
pub const CREATE_ORDER: &str = "create_order";

pub const BROWSE_PRODUCTS: &str = "browse_products";
pub const BACK_TO_MAIN: &str = "back_to_main";

pub const CONFIRM: &str = "confirm";
pub const CANCEL: &str = "cancel";

pub const MAIN_MENU_IDS: [&str; 5] = [
    VIEW_POINTS,
    VIEW_ORDERS,
    CONTACT_SUPPORT,
    CHANGE_LANGUAGE,
    CREATE_ORDER,
];

pub const ORDER_MENU_IDS: [&str; 2] = [BROWSE_PRODUCTS, BACK_TO_MAIN];

/// One selectable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Immutable, localized list content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuContent {
    pub header: &'static str,
    pub body: &'static str,
    pub button_label: &'static str,
    pub section_title: &'static str,
    pub rows: Vec<MenuRow>,
}

impl MenuContent {
    #[cfg(test)]
    pub fn row_ids(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Render as a single-section list message
    pub fn to_message(&self) -> OutboundMessage {
        OutboundMessage::List(ListMessage {
            header: self.header.to_string(),
            body_text: self.body.to_string(),
            button_label: self.button_label.to_string(),
            sections: vec![ListSection {
                title: self.section_title.to_string(),
                rows: self
                    .rows
                    .iter()
                    .map(|r| ListRow {
                        id: r.id.to_string(),
                        title: r.title.to_string(),
                        description: r.description.to_string(),
                    })
                    .collect(),
            }],
        })
    }
}

fn rows(ids: &[&'static str], texts: &[text::RowText]) -> Vec<MenuRow> {
    ids.iter()
        .zip(texts)
        .map(|(&id, t)| MenuRow {
            id,
            title: t.title,
            description: t.description,
        })
        .collect()
}

pub fn main_menu(lang: Language) -> MenuContent {
    let t = texts(lang);
    MenuContent {
        header: t.main_menu_header,
        body: t.main_menu_body,
        button_label: t.menu_button,
        section_title: t.menu_section,
        rows: rows(&MAIN_MENU_IDS, &t.main_menu_rows),
    }
}

/// Language picker. Each language is listed in its own script, so the picker
/// is the same whatever the session's current language.
pub fn language_menu() -> MenuContent {
    MenuContent {
        header: "Language / भाषा",
        body: "Choose your language.",
        button_label: "Languages",
        section_title: "Languages",
        rows: Language::ALL
            .into_iter()
            .map(|lang| MenuRow {
                id: lang.selection_id(),
                title: lang.native_name(),
                description: lang.code(),
            })
            .collect(),
    }
}

pub fn order_menu(lang: Language) -> MenuContent {
    let t = texts(lang);
    MenuContent {
        header: t.order_menu_header,
        body: t.order_menu_body,
        button_label: t.menu_button,
        section_title: t.order_menu_header,
        rows: rows(&ORDER_MENU_IDS, &t.order_menu_rows),
    }
}

/// Product list. Product ids and names are not translated.
pub fn product_list(lang: Language) -> MenuContent {
    let t = texts(lang);
    MenuContent {
        header: t.product_list_header,
        body: t.product_list_body,
        button_label: t.product_button,
        section_title: t.product_list_header,
        rows: PRODUCTS
            .iter()
            .map(|p| MenuRow {
                id: p.id,
                title: p.name,
                description: "",
            })
            .collect(),
    }
}
