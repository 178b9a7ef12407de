pub mod emphasis;
pub mod preprocessor;
pub mod segmenter;
pub mod title_page;
pub mod dialog;
pub mod classifier;
pub mod fountain_parser;

pub use emphasis::{parse_emphasis, tokenize_emphasis, EmphasisToken};
pub use preprocessor::{clean_line, is_blank, split_script};
pub use segmenter::{segment, InputParagraph, Segmenter};
pub use title_page::parse_title_page;
pub use dialog::parse_dialog_blocks;
pub use classifier::{classify, fixup_transitions, Classifier};
pub use fountain_parser::{FountainParser, ParseOutput};
