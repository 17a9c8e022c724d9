//! Client-side request construction and response routing for hikyaku.
//!
//! Two pieces do all the work:
//!
//! - [`ActorRequestFactory`] builds uniquely identified, contextualized
//!   query and command envelopes for one actor.
//! - [`BackendClient`] drives each envelope to completion: commands get a
//!   single classified acknowledgment, queries get a streaming subscription
//!   whose items arrive through the caller's callback.
//!
//! The HTTP transport and the streaming result store are collaborators
//! consumed through the [`Transport`] and [`SubscriptionClient`] traits —
//! wire them up with whatever stack the host application uses.

pub mod backend;
pub mod clock;
pub mod context;
pub mod error;
pub mod factory;
pub mod subscription;
pub mod transport;

pub use backend::{BackendClient, COMMAND_PATH, ErrorCallback, QUERY_PATH};
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::ContextBuilder;
pub use error::DispatchError;
pub use factory::ActorRequestFactory;
pub use subscription::{ItemCallback, SubscriptionClient};
pub use transport::{HttpResponse, Transport, TransportError};
