use super::attributes::try_emit_attribute;
use super::context::PersistContext;
use super::inner::{has_inner_content, persist_inner_content};
use crate::errors::Result;
use crate::model::{Component, Visibility};
use crate::writer::{IndentScope, MarkupWriter};

/// Persist one component as a single complete tag
///
/// Attributes come from the component's properties in declaring order,
/// then the `runat` marker, then bound event handlers. The tag self-closes
/// unless the lookahead finds inner content. The writer is left at the
/// indentation it had on entry and is flushed after the closing line break.
pub(crate) fn persist_object(
    writer: &mut dyn MarkupWriter,
    component: &dyn Component,
    ctx: PersistContext<'_>,
    run_at_server: bool,
) -> Result<()> {
    let ty = component.component_type();
    let ctx = ctx.enter(&ty)?;
    let tag = ctx.tag_name(&ty, ty.name())?;

    writer.write_begin_tag(&tag)?;
    for prop in component.describe_properties() {
        try_emit_attribute(writer, &prop, "", ctx)?;
    }
    if run_at_server {
        writer.write_attribute("runat", "server")?;
    }
    persist_events(writer, component)?;

    if has_inner_content(component) {
        writer.write_full_begin_tag_close()?;
        {
            let mut scope = IndentScope::enter(writer);
            persist_inner_content(&mut *scope, component, ctx)?;
        }
        writer.write_end_tag(&tag)?;
    } else {
        writer.write_self_closing_tag_close()?;
    }

    writer.write_line()?;
    writer.flush()
}

/// Write `On<Event>` attributes for handlers bound through the component's site
fn persist_events(writer: &mut dyn MarkupWriter, component: &dyn Component) -> Result<()> {
    let Some(bindings) = component.site().and_then(|site| site.event_binding()) else {
        return Ok(());
    };

    for event in component.describe_events() {
        let Some(prop) = bindings.event_property(component, &event) else {
            continue;
        };
        let Some(handler) = prop.value().as_text() else {
            continue;
        };
        if prop.get_visibility() != Visibility::Visible
            || prop.is_design_time_only()
            || prop.is_read_only()
            || !prop.has_non_default_value()
        {
            continue;
        }
        writer.write_attribute(&event.attribute_name(), handler)?;
    }
    Ok(())
}
