// Library target exists for the integration tests in tests/.
// The binary entry point is main.rs; this file re-declares the module tree
// so that tests can drive the app through `vocable::app::App`.
// Some modules are only exercised through the binary, so suppress
// dead_code warnings.
#![allow(dead_code)]

rust_i18n::i18n!("locales", fallback = "en");

// Public: driven directly by integration tests
pub mod app;
pub mod config;
pub mod content;
pub mod engine;
pub mod share;
pub mod timers;
pub mod ui;

// Private: only the binary's event loop needs it
mod event;
