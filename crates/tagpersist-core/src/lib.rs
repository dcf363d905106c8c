//! tagpersist Core - metadata-driven component markup serializer
//!
//! This crate converts an in-memory tree of components into nested tagged
//! markup (`<prefix:Type Attr="..." runat="server" />`), including:
//! - A metadata model components use to describe their properties and events
//! - Attribute classification, with content-visibility flattening
//! - Inner-property persistence (nested tags, collections, encoded text)
//! - Explicit child control persistence
//! - Hosting service traits for tag-prefix and event-binding lookup
//! - An indentation-aware markup writer
//!
//! Serialization is one-way; no markup parser is provided.

pub mod encode;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod persist;
pub mod services;
pub mod writer;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PersistError, Result};
pub use model::{
    Component, ComponentType, EventDescriptor, PersistenceMode, PropertyDescriptor,
    PropertyValue, Visibility,
};
pub use options::PersistOptions;
pub use persist::{persist_control_to_string, persist_sited_control_to_string, ControlPersister};
pub use services::{
    ComponentSite, DesignerHost, EventBindingService, EventBindings, HostServices, Site,
    StaticTagPrefixResolver, TagPrefixResolver,
};
pub use writer::{HtmlTextWriter, MarkupWriter};
