//! # Dialog Slots: Parameter Resolution for Classified Requests
//!
//! Once a request like *"Get database details AppTestDB"* has been classified
//! (say, as `database.details`), its class declares the parameter slots it
//! needs: a `databasename` of type `entity`, perhaps a `region` of type
//! `keyword`. This crate fills those slots.
//!
//! ## Core Ideas
//!
//! - **Handlers own types**: each slot type maps to a [`TypeHandler`] in a
//!   [`HandlerRegistry`]. Handlers extract values and may enumerate
//!   candidates; capability flags on the trait replace special-casing types
//!   by name.
//! - **Extract first, ask last**: every slot gets a silent extraction pass
//!   before the user is asked anything, and each value found is removed from
//!   the statement so it cannot satisfy a second slot.
//! - **Suppliers are authoritative**: a slot may name a [`ValueSupplier`]
//!   whose current list overrides the slot's declared values and enables
//!   fuzzy disambiguation.
//! - **Declining is not failing**: a slot the user exits out of is simply
//!   absent from the [`Resolution`]. Errors are reserved for broken
//!   configuration and failing collaborators.
//!
//! ## Example
//!
//! ```rust,ignore
//! let engine = ResolutionEngine::builder(conversation, catalog)
//!     .suppliers(suppliers)
//!     .settings(ResolverSettings::from_env()?)
//!     .build();
//!
//! let resolution = engine
//!     .resolve_class("Get database details AppTestDB", "database.details")
//!     .await?;
//! assert_eq!(resolution.get("databasename"), Some("AppTestDB"));
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod handlers;
pub mod prompt;
pub mod resolution;
pub mod settings;
pub mod slot;
pub mod statement;
pub mod supplier;

#[cfg(any(test, feature = "helpers"))]
mod helpers;
#[cfg(any(test, feature = "helpers"))]
pub use helpers::*;

pub use catalog::{ClassSchema, InMemoryCatalog, SchemaCatalog};
pub use engine::{ResolutionEngine, ResolutionEngineBuilder};
pub use error::{ConfigurationError, ConversationError, ResolveError};
pub use gateway::{Choice, Conversation, EXIT, Expect, NONE, Reply};
pub use handler::{CandidateSource, HandlerRegistry, TypeHandler};
pub use prompt::Prompts;
pub use resolution::Resolution;
pub use settings::ResolverSettings;
pub use slot::ParameterSlot;
pub use supplier::{StaticSupplier, SupplierContext, SupplierRegistry, ValueSupplier};
