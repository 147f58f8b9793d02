//! The `resolver` module resolves the local machine's hostname.
//!
//! Resolution is the one external dependency of a payload, so it sits behind
//! the [`HostnameResolver`] trait: production code uses [`SystemResolver`],
//! tests substitute a fake instead of hitting the real name service.

use std::io;

pub mod system;

pub use system::SystemResolver;


/// Resolves the local machine's hostname.
///
/// The call is blocking and synchronous with no timeout of its own; callers
/// needing bounded latency must impose one externally.
pub trait HostnameResolver {
    /// Returns the canonical fully-qualified hostname when `canonical` is
    /// true, the short hostname otherwise.
    fn resolve(&self, canonical: bool) -> io::Result<String>;
}
