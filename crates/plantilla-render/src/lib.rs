//! # plantilla-render
//!
//! Pure rendering of player records into HTML fragments, and the views that
//! publish those fragments into an [`Article`].
//!
//! - [`table`]: table header, rows, and footer strings
//! - [`views`]: list/detail/home/about views with their fixed titles
//! - [`tags`]: `### TAG ###` templates filled from a record
//! - [`article`]: the display region contract

pub mod article;
pub mod table;
pub mod tags;
pub mod views;

pub use article::{Article, RecordingArticle};
pub use tags::{PlayerTemplate, TemplateTag, substitute_tags};
pub use views::{
    TITLE_ABOUT, TITLE_HOME, TITLE_LIST_ALL, TITLE_LIST_NAMES, TITLE_SHOW_ONE, list_all,
    list_names, show_about, show_home, show_one,
};
