use super::context::PersistContext;
use crate::errors::{PersistError, Result};
use crate::model::{PersistenceMode, PropertyDescriptor, PropertyValue, TypeConverter, Visibility};
use crate::writer::MarkupWriter;

/// Contribute a property to the currently open begin tag
///
/// Visible attribute-mode properties become one attribute, named
/// `prefix-Name` when reached through a content-visibility ancestor.
/// Content-visibility properties recurse into their sub-properties. Any
/// other property contributes nothing here; inner-content modes are
/// persisted later. Returns whether at least one attribute was written.
///
/// Each content level entered counts against the nesting depth in `ctx`.
pub(crate) fn try_emit_attribute(
    writer: &mut dyn MarkupWriter,
    prop: &PropertyDescriptor<'_>,
    name_prefix: &str,
    ctx: PersistContext<'_>,
) -> Result<bool> {
    if is_suppressed(prop) {
        tracing::trace!(property = prop.name(), "attribute suppressed");
        return Ok(false);
    }

    let name = qualified_name(name_prefix, prop.name());
    match prop.get_visibility() {
        Visibility::Content => {
            // Only structured values have sub-properties to flatten.
            let PropertyValue::Structured(value) = prop.value() else {
                return Ok(false);
            };
            let ctx = ctx.enter(&value.component_type())?;
            let mut emitted = false;
            for child in prop.child_properties() {
                if try_emit_attribute(writer, &child, &name, ctx)? {
                    emitted = true;
                }
            }
            Ok(emitted)
        }
        Visibility::Visible if prop.persistence_mode() == PersistenceMode::Attribute => {
            let Some(converter) = string_converter(prop) else {
                return Ok(false);
            };
            let value = convert(converter, prop, &name)?;
            writer.write_attribute(&name, &value)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// The property's converter, if it can produce strings
pub(crate) fn string_converter<'a>(
    prop: &PropertyDescriptor<'a>,
) -> Option<&'a dyn TypeConverter> {
    prop.get_converter()
        .filter(|converter| converter.can_convert_to_string())
}

/// Run a converter, attributing failure to `display_name`
pub(crate) fn convert(
    converter: &dyn TypeConverter,
    prop: &PropertyDescriptor<'_>,
    display_name: &str,
) -> Result<String> {
    converter
        .convert_to_string(prop.value())
        .map_err(|e| PersistError::Conversion {
            property: display_name.to_string(),
            message: e.to_string(),
        })
}

// Content-visibility properties only need converters on their children.
fn is_suppressed(prop: &PropertyDescriptor<'_>) -> bool {
    prop.get_visibility() == Visibility::Hidden
        || prop.is_design_time_only()
        || prop.is_read_only()
        || !prop.has_non_default_value()
        || (prop.get_visibility() != Visibility::Content && string_converter(prop).is_none())
}

fn qualified_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}-{}", prefix, name)
    }
}
