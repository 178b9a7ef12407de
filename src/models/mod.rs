pub mod rich_text;
pub mod element;
pub mod title_page;
pub mod screenplay;
pub mod screenplay_properties;
pub mod conf;

pub use rich_text::{RichText, Segment, Style, StyleMarkup, Html};
pub use element::{Element, Slug, Section, Action, Dialog, DialogBlock, DualDialog, Transition};
pub use title_page::{TitlePage, TitleKeywordFormat};
pub use screenplay::Screenplay;
pub use screenplay_properties::ScreenplayProperties;
pub use conf::{Conf, TransitionPolicy};
