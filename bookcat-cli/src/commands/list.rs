//! List command implementation

use super::Controller;
use anyhow::Result;
use bookcat_core::PriceFilter;
use serde::Serialize;

/// One card in JSON output
#[derive(Serialize)]
struct CardInfo<'a> {
    index: usize,
    title: &'a str,
    author: &'a str,
    price: &'a str,
    image: &'a str,
    link: &'a str,
    selected: bool,
}

/// Listing output
#[derive(Serialize)]
struct ListInfo<'a> {
    filter: PriceFilter,
    has_selection: bool,
    books: Vec<CardInfo<'a>>,
}

/// Show the books passing `filter`
pub fn list(controller: &mut Controller, filter: PriceFilter, json: bool) -> Result<()> {
    controller.set_filter(filter);

    if json {
        let info = ListInfo {
            filter,
            has_selection: controller.has_selection(),
            books: controller
                .cards()
                .into_iter()
                .map(|card| CardInfo {
                    index: card.index,
                    title: card.title,
                    author: card.author,
                    price: card.price,
                    image: card.image,
                    link: card.link,
                    selected: card.selected,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", render(controller));
    }

    Ok(())
}

/// Text view of the catalog: controls line, then one card per line
pub(crate) fn render(controller: &Controller) -> String {
    let mut out = String::new();
    let state = if controller.has_selection() {
        "enabled"
    } else {
        "disabled"
    };
    out.push_str(&format!(
        "Filter: {} | Update/Delete: {}\n",
        controller.filter(),
        state
    ));

    let cards = controller.cards();
    if cards.is_empty() {
        out.push_str("No books to show\n");
    }
    for card in cards {
        out.push_str(&format!("{}\n", card));
    }
    out
}
