use std::fmt;

use super::descriptor::PropertyDescriptor;
use super::event::EventDescriptor;
use crate::services::Site;

/// Runtime type identity of a component or property value
///
/// The namespace drives tag-prefix resolution; the name becomes the local
/// part of the tag (`prefix:Name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType {
    namespace: &'static str,
    name: &'static str,
}

impl ComponentType {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Namespace-qualified name, e.g. `System.Web.UI.WebControls.Button`
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// A serializable object instance
///
/// Implementors expose their metadata explicitly: the property list in
/// declaring order, the events they raise, and (for controls) the ordered
/// child controls. The engine only ever reads through this trait.
pub trait Component {
    fn component_type(&self) -> ComponentType;

    /// Property descriptors bound to this instance, in declaring order
    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>>;

    fn describe_events(&self) -> Vec<EventDescriptor> {
        Vec::new()
    }

    /// Whether this component is a control (may own child controls and be
    /// persisted through the inner-properties entry points)
    fn is_control(&self) -> bool {
        false
    }

    /// Whether child controls are persisted as the markup content
    fn persists_children(&self) -> bool {
        false
    }

    /// Child controls in order
    fn children(&self) -> Vec<&dyn Component> {
        Vec::new()
    }

    /// Hosting site, when the component lives in a design surface
    fn site(&self) -> Option<&dyn Site> {
        None
    }
}
