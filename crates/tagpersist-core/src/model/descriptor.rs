use std::borrow::Cow;
use std::fmt;

use super::component::{Component, ComponentType};
use super::converter::{
    CollectionConverter, ExpandableObjectConverter, StringConverter, TypeConverter,
};

/// How a property participates in serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Serialized as a single attribute or inner tag
    #[default]
    Visible,
    /// Never serialized
    Hidden,
    /// Not serialized itself; its sub-properties are, with dashed names
    Content,
}

/// Where a visible property lands in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistenceMode {
    #[default]
    Attribute,
    InnerProperty,
    InnerDefaultProperty,
    EncodedInnerDefaultProperty,
}

impl PersistenceMode {
    /// True for the modes that must be the sole inner content of a component
    pub fn is_default_inner(&self) -> bool {
        matches!(
            self,
            PersistenceMode::InnerDefaultProperty | PersistenceMode::EncodedInnerDefaultProperty
        )
    }
}

/// Current value of a property, classified once by the describing component
#[derive(Clone)]
pub enum PropertyValue<'a> {
    Null,
    Text(Cow<'a, str>),
    Structured(&'a dyn Component),
    Collection(Vec<&'a dyn Component>),
}

impl<'a> PropertyValue<'a> {
    pub fn text(value: impl Into<Cow<'a, str>>) -> Self {
        PropertyValue::Text(value.into())
    }

    /// `Null` for `None`, text otherwise
    pub fn optional_text(value: Option<&'a str>) -> Self {
        value.map_or(PropertyValue::Null, PropertyValue::text)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    fn stock_converter(&self) -> &'static dyn TypeConverter {
        match self {
            PropertyValue::Null | PropertyValue::Text(_) => &StringConverter,
            PropertyValue::Structured(_) => &ExpandableObjectConverter,
            PropertyValue::Collection(_) => &CollectionConverter,
        }
    }
}

impl fmt::Debug for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => f.write_str("Null"),
            PropertyValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            PropertyValue::Structured(component) => f
                .debug_tuple("Structured")
                .field(&component.component_type())
                .finish(),
            PropertyValue::Collection(items) => f
                .debug_tuple("Collection")
                .field(&items.len())
                .finish(),
        }
    }
}

/// Metadata for one property, bound to the instance that described it
///
/// Built with [`PropertyDescriptor::new`] and refined with the builder
/// methods. A new descriptor is visible, persisted as an attribute, writable,
/// non-default, and carries the stock converter for its value shape.
#[derive(Clone)]
pub struct PropertyDescriptor<'a> {
    name: &'a str,
    declared_type: ComponentType,
    visibility: Visibility,
    mode: PersistenceMode,
    read_only: bool,
    design_time_only: bool,
    non_default: bool,
    converter: Option<&'a dyn TypeConverter>,
    value: PropertyValue<'a>,
}

impl<'a> PropertyDescriptor<'a> {
    pub fn new(name: &'a str, declared_type: ComponentType, value: PropertyValue<'a>) -> Self {
        let converter = Some(value.stock_converter());
        Self {
            name,
            declared_type,
            visibility: Visibility::Visible,
            mode: PersistenceMode::Attribute,
            read_only: false,
            design_time_only: false,
            non_default: true,
            converter,
            value,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn mode(mut self, mode: PersistenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn design_time_only(mut self, design_time_only: bool) -> Self {
        self.design_time_only = design_time_only;
        self
    }

    /// Record whether the current value differs from the declared default
    pub fn non_default(mut self, non_default: bool) -> Self {
        self.non_default = non_default;
        self
    }

    pub fn converter(mut self, converter: &'a dyn TypeConverter) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn without_converter(mut self) -> Self {
        self.converter = None;
        self
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn declared_type(&self) -> ComponentType {
        self.declared_type
    }

    pub fn get_visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn persistence_mode(&self) -> PersistenceMode {
        self.mode
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_design_time_only(&self) -> bool {
        self.design_time_only
    }

    pub fn has_non_default_value(&self) -> bool {
        self.non_default
    }

    pub fn get_converter(&self) -> Option<&'a dyn TypeConverter> {
        self.converter
    }

    pub fn value(&self) -> &PropertyValue<'a> {
        &self.value
    }

    /// Sub-properties of a structured value; empty for any other shape
    pub fn child_properties(&self) -> Vec<PropertyDescriptor<'a>> {
        match self.value {
            PropertyValue::Structured(component) => component.describe_properties(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Debug for PropertyDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("visibility", &self.visibility)
            .field("mode", &self.mode)
            .field("read_only", &self.read_only)
            .field("design_time_only", &self.design_time_only)
            .field("non_default", &self.non_default)
            .field("has_converter", &self.converter.is_some())
            .field("value", &self.value)
            .finish()
    }
}
