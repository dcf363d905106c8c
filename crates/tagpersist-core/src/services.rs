//! Hosting services consumed by the persistence engine
//!
//! The engine only sees these traits. The concrete types below are small
//! table-driven implementations for embedders that do not run a full design
//! surface, and for tests.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Component, ComponentType, EventDescriptor, PropertyDescriptor, PropertyValue};

/// Maps a component or property type to the tag prefix qualifying its tags
pub trait TagPrefixResolver {
    fn tag_prefix(&self, ty: &ComponentType) -> Option<String>;
}

/// Service container supplied with every persist call
pub trait DesignerHost {
    /// The tag-prefix service, if this host provides one
    fn tag_prefix_resolver(&self) -> Option<&dyn TagPrefixResolver>;
}

/// Resolves events to the string property holding the bound handler name
pub trait EventBindingService {
    fn event_property<'a>(
        &'a self,
        component: &'a dyn Component,
        event: &'a EventDescriptor,
    ) -> Option<PropertyDescriptor<'a>>;
}

/// Hosting context of a component placed on a design surface
pub trait Site {
    fn host(&self) -> Option<&dyn DesignerHost>;

    fn event_binding(&self) -> Option<&dyn EventBindingService>;
}

/// Namespace-to-prefix registration table
///
/// Mirrors `<%@ Register TagPrefix="x" Namespace="..." %>` directives:
/// every type in a registered namespace resolves to that namespace's prefix.
#[derive(Debug, Clone, Default)]
pub struct StaticTagPrefixResolver {
    prefixes: HashMap<String, String>,
}

impl StaticTagPrefixResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.prefixes.insert(namespace.into(), prefix.into());
        self
    }
}

impl TagPrefixResolver for StaticTagPrefixResolver {
    fn tag_prefix(&self, ty: &ComponentType) -> Option<String> {
        self.prefixes.get(ty.namespace()).cloned()
    }
}

/// A [`DesignerHost`] holding an optional tag-prefix service
#[derive(Default)]
pub struct HostServices {
    resolver: Option<Box<dyn TagPrefixResolver>>,
}

impl HostServices {
    /// Host without any registered service
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: impl TagPrefixResolver + 'static) -> Self {
        Self {
            resolver: Some(Box::new(resolver)),
        }
    }
}

impl DesignerHost for HostServices {
    fn tag_prefix_resolver(&self) -> Option<&dyn TagPrefixResolver> {
        self.resolver.as_deref()
    }
}

const HANDLER_TYPE: ComponentType = ComponentType::new("System", "String");

/// Event name to handler name table for a single sited component
#[derive(Debug, Clone, Default)]
pub struct EventBindings {
    handlers: HashMap<String, String>,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        self.handlers.insert(event.into(), handler.into());
        self
    }

    pub fn handler(&self, event: &str) -> Option<&str> {
        self.handlers.get(event).map(String::as_str)
    }
}

impl EventBindingService for EventBindings {
    fn event_property<'a>(
        &'a self,
        _component: &'a dyn Component,
        event: &'a EventDescriptor,
    ) -> Option<PropertyDescriptor<'a>> {
        // Unbound events still resolve, with a null handler value.
        let handler = self.handler(event.name());
        Some(
            PropertyDescriptor::new(
                event.name(),
                HANDLER_TYPE,
                PropertyValue::optional_text(handler),
            )
            .non_default(handler.is_some()),
        )
    }
}

/// A [`Site`] sharing a host and optionally carrying event bindings
#[derive(Clone)]
pub struct ComponentSite {
    host: Option<Arc<dyn DesignerHost>>,
    event_bindings: Option<EventBindings>,
}

impl ComponentSite {
    pub fn new(host: Arc<dyn DesignerHost>) -> Self {
        Self {
            host: Some(host),
            event_bindings: None,
        }
    }

    /// A site that is not attached to any designer host
    pub fn detached() -> Self {
        Self {
            host: None,
            event_bindings: None,
        }
    }

    pub fn with_event_bindings(mut self, bindings: EventBindings) -> Self {
        self.event_bindings = Some(bindings);
        self
    }
}

impl Site for ComponentSite {
    fn host(&self) -> Option<&dyn DesignerHost> {
        self.host.as_deref()
    }

    fn event_binding(&self) -> Option<&dyn EventBindingService> {
        self.event_bindings
            .as_ref()
            .map(|b| b as &dyn EventBindingService)
    }
}
