pub mod discovery;
pub mod matching;
pub mod profile;
pub mod reservations;
pub mod tagging;

use std::future::Future;
use std::pin::Pin;

/// Boxed, sendable future returned by the async collaborator traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
