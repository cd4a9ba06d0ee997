pub mod loaders;
pub mod types;

pub use loaders::json::{LoadError, load_embedded, load_from_file, parse_tables};
pub use types::{PairKey, PairTable, PhraseDictionary, PhraseEntry, fold_case};
