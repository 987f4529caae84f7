/// Router Module Index
///
/// The portal's routes split by access level. Authentication is applied at
/// the layer level for the authenticated module; admin handlers take the
/// `AuthUser` extractor and re-check their dashboard section themselves.

/// Routes open to anonymous visitors: news, campus listings and login.
pub mod public;

/// Routes that need a signed-in actor.
pub mod authenticated;

/// Dashboard routes, each gated by the section it manages.
pub mod admin;
