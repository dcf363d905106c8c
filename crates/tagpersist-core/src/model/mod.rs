//! Component metadata model
//!
//! Components describe themselves through statically written descriptor
//! lists instead of runtime reflection; the persistence engine is driven
//! purely by that metadata.

pub mod component;
pub mod converter;
pub mod descriptor;
pub mod event;

pub use component::{Component, ComponentType};
pub use converter::{
    CollectionConverter, ConvertError, ExpandableObjectConverter, NonStringConverter,
    StringConverter, TypeConverter,
};
pub use descriptor::{PersistenceMode, PropertyDescriptor, PropertyValue, Visibility};
pub use event::EventDescriptor;
