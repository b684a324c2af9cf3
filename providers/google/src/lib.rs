mod translator;

pub use translator::GoogleTranslator;
