//! vnyx-site
//!
//! VNYX スタジオサイトのヘッドレスなプレゼンテーションコア。
//! ロケール辞書、ケーススタディのオーバーレイ、ページウィジェットを扱う。

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod driver;
pub mod indexer;
pub mod localization;
pub mod markup;
pub mod overlay;
pub mod page;
pub mod storage;
pub mod surface;
pub mod types;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use page::{
    Page,
    UiEvent,
};
