use thiserror::Error;

use super::descriptor::PropertyValue;

/// Failure raised by a converter while producing a string form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConvertError {
    message: String,
}

impl ConvertError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Converts a property value to its markup string form
pub trait TypeConverter: Sync {
    /// Whether this converter can produce a string at all
    fn can_convert_to_string(&self) -> bool {
        true
    }

    /// # Errors
    ///
    /// Returns [`ConvertError`] when the value has no string form.
    fn convert_to_string(&self, value: &PropertyValue<'_>) -> Result<String, ConvertError>;
}

/// Identity conversion for text values
#[derive(Debug, Clone, Copy, Default)]
pub struct StringConverter;

impl TypeConverter for StringConverter {
    fn convert_to_string(&self, value: &PropertyValue<'_>) -> Result<String, ConvertError> {
        Ok(match value {
            PropertyValue::Null => String::new(),
            PropertyValue::Text(text) => text.to_string(),
            PropertyValue::Structured(component) => component.component_type().full_name(),
            PropertyValue::Collection(_) => CollectionConverter::DISPLAY.to_string(),
        })
    }
}

/// Converter for structured values whose sub-properties carry the data
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandableObjectConverter;

impl TypeConverter for ExpandableObjectConverter {
    fn convert_to_string(&self, value: &PropertyValue<'_>) -> Result<String, ConvertError> {
        match value {
            PropertyValue::Structured(component) => Ok(component.component_type().full_name()),
            other => StringConverter.convert_to_string(other),
        }
    }
}

/// Converter for collection values
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionConverter;

impl CollectionConverter {
    pub const DISPLAY: &'static str = "(Collection)";
}

impl TypeConverter for CollectionConverter {
    fn convert_to_string(&self, _value: &PropertyValue<'_>) -> Result<String, ConvertError> {
        Ok(Self::DISPLAY.to_string())
    }
}

/// Converter present on the descriptor but unable to produce strings
#[derive(Debug, Clone, Copy, Default)]
pub struct NonStringConverter;

impl TypeConverter for NonStringConverter {
    fn can_convert_to_string(&self) -> bool {
        false
    }

    fn convert_to_string(&self, _value: &PropertyValue<'_>) -> Result<String, ConvertError> {
        Err(ConvertError::new("value has no string representation"))
    }
}
