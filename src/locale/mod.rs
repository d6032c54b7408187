//! Locale - shared display-language state
//!
//! A single `LocaleStore` owns the current locale. The navigation bar is the
//! only writer (`toggle`); pages hold `LocaleSubscription` guards and are
//! notified synchronously on every change.
//!
//! ```text
//! toggle → persist (best effort) → broadcast → every live subscriber
//! ```

mod environment;
mod storage;
mod store;
mod subscription;

pub use environment::*;
pub use storage::*;
pub use store::*;
pub use subscription::LocaleSubscription;
