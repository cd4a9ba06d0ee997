pub mod loader;

pub use loader::HindiPhrasesLoader;
