//! leaflet-draw-locale
//!
//! Leaflet.draw ツールバー向けのロケールテーブル（ペルシャ語・英語）と、
//! キーパスによる参照・構造的な上書きマージを提供する

pub mod config;
pub mod error;
pub mod key_path;
pub mod loader;
pub mod locale;
mod merge;
pub mod schema;
pub mod table;
#[cfg(test)]
mod test_utils;

pub use error::LocaleError;
pub use key_path::KeyPath;
pub use locale::{
    Locale,
    builtin,
    english,
    persian,
};
pub use schema::{
    DrawLocal,
    check_conformance,
};
pub use table::{
    Entry,
    LocaleTable,
};

/// Leaflet.draw release these strings were written for.
pub const DRAW_VERSION: &str = "0.4.2";
