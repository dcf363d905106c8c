use super::attributes::{convert, string_converter, try_emit_attribute};
use super::context::PersistContext;
use super::object::persist_object;
use crate::encode::html_encode;
use crate::errors::{PersistError, Result};
use crate::model::{Component, PersistenceMode, PropertyDescriptor, PropertyValue, Visibility};
use crate::writer::{IndentScope, MarkupWriter};

/// Whether the component will write anything between its begin and end tags
///
/// Read-only and default-valued properties are not excluded here, so this
/// may predict a full tag whose body ends up empty. It never predicts a
/// self-closing tag for a component that has inner content.
pub(crate) fn has_inner_content(component: &dyn Component) -> bool {
    match explicit_children(component) {
        Some(children) => !children.is_empty(),
        None => component
            .describe_properties()
            .iter()
            .any(is_inner_candidate),
    }
}

/// Persist everything between a component's begin and end tags
pub(crate) fn persist_inner_content(
    writer: &mut dyn MarkupWriter,
    component: &dyn Component,
    ctx: PersistContext<'_>,
) -> Result<()> {
    if let Some(children) = explicit_children(component) {
        if children.is_empty() {
            return Ok(());
        }
        writer.write_line()?;
        let mut scope = IndentScope::enter(writer);
        let run_at_server = ctx.options().child_controls_run_at_server;
        for child in children {
            persist_object(&mut *scope, child, ctx, run_at_server)?;
        }
        return Ok(());
    }

    let candidates: Vec<_> = component
        .describe_properties()
        .into_iter()
        .filter(is_inner_candidate)
        .collect();
    check_sole_default(component, &candidates)?;

    for prop in &candidates {
        match prop.persistence_mode() {
            PersistenceMode::EncodedInnerDefaultProperty => {
                // Without a string form the property is skipped and the scan goes on.
                if let Some(converter) = string_converter(prop) {
                    let text = convert(converter, prop, prop.name())?;
                    writer.write_raw(&html_encode(&text))?;
                    return Ok(());
                }
            }
            PersistenceMode::InnerDefaultProperty => {
                return persist_inner_value(writer, prop, ctx, true);
            }
            PersistenceMode::InnerProperty => {
                persist_inner_value(writer, prop, ctx, false)?;
            }
            PersistenceMode::Attribute => {}
        }
    }
    writer.write_line()
}

/// Persist one inner property value as nested markup
///
/// `is_default` marks the component's sole default property, whose value is
/// written without a wrapping property tag.
pub(crate) fn persist_inner_value(
    writer: &mut dyn MarkupWriter,
    prop: &PropertyDescriptor<'_>,
    ctx: PersistContext<'_>,
    is_default: bool,
) -> Result<()> {
    let tag = ctx.tag_name(&prop.declared_type(), prop.name())?;
    writer.write_line()?;

    match prop.value() {
        PropertyValue::Null => {
            if !is_default {
                writer.write_begin_tag(&tag)?;
                writer.write_self_closing_tag_close()?;
            }
        }
        PropertyValue::Collection(items) => {
            if items.is_empty() {
                return Ok(());
            }
            if is_default {
                for item in items {
                    persist_object(writer, *item, ctx, false)?;
                }
            } else {
                writer.write_full_begin_tag(&tag)?;
                writer.write_line()?;
                {
                    let mut scope = IndentScope::enter(writer);
                    for item in items {
                        persist_object(&mut *scope, *item, ctx, false)?;
                    }
                }
                writer.write_end_tag(&tag)?;
            }
        }
        PropertyValue::Structured(value) => {
            let ctx = ctx.enter(&value.component_type())?;
            writer.write_begin_tag(&tag)?;
            for sub in value.describe_properties() {
                try_emit_attribute(writer, &sub, "", ctx)?;
            }
            writer.write_self_closing_tag_close()?;
        }
        PropertyValue::Text(_) => {
            writer.write_begin_tag(&tag)?;
            writer.write_self_closing_tag_close()?;
        }
    }
    Ok(())
}

/// Shared by the lookahead and the emission scan so both agree on which
/// properties can produce inner content. Content-visibility properties are
/// always flattened into attributes and never count here.
fn is_inner_candidate(prop: &PropertyDescriptor<'_>) -> bool {
    prop.get_visibility() == Visibility::Visible
        && !prop.is_design_time_only()
        && prop.get_converter().is_some()
        && prop.persistence_mode() != PersistenceMode::Attribute
}

fn explicit_children(component: &dyn Component) -> Option<Vec<&dyn Component>> {
    if component.is_control() && component.persists_children() {
        Some(component.children())
    } else {
        None
    }
}

// An encoded default without a string form is skipped during emission, so
// it does not count as a default here either.
fn is_effective_default(prop: &PropertyDescriptor<'_>) -> bool {
    let mode = prop.persistence_mode();
    mode.is_default_inner()
        && (mode != PersistenceMode::EncodedInnerDefaultProperty
            || string_converter(prop).is_some())
}

/// Reject a default inner property that follows any other inner content
///
/// Runs before anything is written, so a conflicting component produces no
/// inner markup at all. Inner properties after the default are never reached
/// by the emission scan and are allowed; a second default is not.
fn check_sole_default(
    component: &dyn Component,
    candidates: &[PropertyDescriptor<'_>],
) -> Result<()> {
    let mut content_started = false;
    for prop in candidates {
        if is_effective_default(prop) {
            if content_started {
                tracing::debug!(
                    component_type = %component.component_type(),
                    property = prop.name(),
                    "default inner property conflicts with earlier inner content"
                );
                return Err(PersistError::MultipleDefaultInnerProperties {
                    component_type: component.component_type().full_name(),
                    property: prop.name().to_string(),
                });
            }
            content_started = true;
        } else if prop.persistence_mode() == PersistenceMode::InnerProperty {
            content_started = true;
        }
    }
    Ok(())
}
