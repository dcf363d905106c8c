/// An event raised by a component
///
/// Handler names are not stored here; they are looked up through the
/// site's event-binding service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    name: String,
}

impl EventDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute name used to persist a bound handler, e.g. `OnClick`
    pub fn attribute_name(&self) -> String {
        format!("On{}", self.name)
    }
}
