pub mod header;
pub mod language_reference;
pub mod language_selector;
pub mod model_selector;
pub mod settings;
pub mod translation;
