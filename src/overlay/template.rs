//! Markup of the overlay's content slots.

use crate::catalog::{
    Credit,
    GalleryTile,
};
use crate::markup::Node;

const NO_CLASS: [&str; 0] = [];

/// `<h3>{heading}</h3><p>{description}</p>`
#[must_use]
pub fn description_block(heading: &str, description: &str) -> Vec<Node> {
    vec![
        Node::element("h3", NO_CLASS, vec![Node::text(heading)]),
        Node::element("p", NO_CLASS, vec![Node::text(description)]),
    ]
}

/// One `credit-item` per credit, in order.
#[must_use]
pub fn credits_block(credits: &[Credit]) -> Vec<Node> {
    credits
        .iter()
        .map(|credit| {
            Node::element(
                "div",
                ["credit-item"],
                vec![
                    Node::element("div", ["credit-label"], vec![Node::text(&credit.label)]),
                    Node::element("div", ["credit-value"], vec![Node::text(&credit.value)]),
                ],
            )
        })
        .collect()
}

/// Gallery heading followed by a grid with one tile per gallery item.
#[must_use]
pub fn gallery_block(heading: &str, tiles: &[GalleryTile]) -> Vec<Node> {
    let items = tiles
        .iter()
        .map(|tile| {
            Node::element(
                "div",
                ["gallery-item", tile.size.class_name().unwrap_or_default()],
                vec![Node::element(
                    "div",
                    ["gallery-placeholder"],
                    vec![Node::element("span", NO_CLASS, vec![Node::text(&tile.glyph)])],
                )],
            )
        })
        .collect();

    vec![
        Node::element("h3", ["gallery-title"], vec![Node::text(heading)]),
        Node::element("div", ["gallery-grid"], items),
    ]
}
