//! Object persistence engine
//!
//! Serializes a tree of components into tagged markup, driven only by the
//! metadata each component describes:
//!
//! - one tag per component, `prefix:TypeName`
//! - visible attribute-mode properties as attributes, content-visibility
//!   properties flattened into dashed attribute names
//! - inner-property modes and explicit child controls as nested markup
//!
//! [`ControlPersister`] is the entry point. It holds no state besides the
//! host and options, so one persister may serve any number of calls.

mod attributes;
mod context;
mod inner;
mod object;

use std::time::Instant;

use crate::errors::{PersistError, Result};
use crate::model::Component;
use crate::options::PersistOptions;
use crate::services::DesignerHost;
use crate::writer::{HtmlTextWriter, MarkupWriter};
use crate::{log_op_end, log_op_error, log_op_start};

use context::PersistContext;
use inner::persist_inner_content;
use object::persist_object;

/// Persists components through a designer host
pub struct ControlPersister<'h> {
    host: &'h dyn DesignerHost,
    options: PersistOptions,
}

impl<'h> ControlPersister<'h> {
    /// Persister with default options
    pub fn new(host: &'h dyn DesignerHost) -> Self {
        Self {
            host,
            options: PersistOptions::default(),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` if the options fail validation.
    pub fn with_options(host: &'h dyn DesignerHost, options: PersistOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { host, options })
    }

    pub fn options(&self) -> &PersistOptions {
        &self.options
    }

    /// Persist a control, with its `runat="server"` marker, to `writer`
    ///
    /// Output written before a failure is left in the writer and must be
    /// discarded by the caller.
    ///
    /// # Errors
    ///
    /// * `ServiceUnavailable` / `TagPrefixNotFound` - If a tag prefix cannot be resolved
    /// * `Conversion` - If a property converter fails
    /// * `MultipleDefaultInnerProperties` - If a component declares conflicting inner content
    /// * `DepthExceeded` - If nesting exceeds `max_depth`
    /// * `Io` - If the writer's sink fails
    pub fn persist_control(
        &self,
        writer: &mut dyn MarkupWriter,
        control: &dyn Component,
    ) -> Result<()> {
        let component_type = control.component_type().full_name();
        log_op_start!("persist_control", component_type = component_type.as_str());
        let start = Instant::now();

        persist_object(writer, control, self.context(), true).map_err(|e| {
            log_op_error!(
                "persist_control",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                component_type = component_type.as_str()
            );
            e
        })?;

        log_op_end!(
            "persist_control",
            duration_ms = start.elapsed().as_millis() as u64,
            component_type = component_type.as_str()
        );
        Ok(())
    }

    /// Persist a control and return the produced markup
    ///
    /// # Errors
    ///
    /// Same as [`persist_control`](Self::persist_control).
    pub fn persist_control_to_string(&self, control: &dyn Component) -> Result<String> {
        let component_type = control.component_type().full_name();
        log_op_start!(
            "persist_control_to_string",
            component_type = component_type.as_str()
        );
        let start = Instant::now();

        let result = self
            .buffered(|writer| persist_object(writer, control, self.context(), true))
            .map_err(|e| {
                log_op_error!(
                    "persist_control_to_string",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    component_type = component_type.as_str()
                );
                e
            })?;

        log_op_end!(
            "persist_control_to_string",
            duration_ms = start.elapsed().as_millis() as u64,
            component_type = component_type.as_str(),
            bytes_written = result.len() as u64
        );
        Ok(result)
    }

    /// Persist only what goes between a control's begin and end tags
    ///
    /// For callers that already own the outer tag.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - If `component` is not a control
    /// * otherwise the same as [`persist_control`](Self::persist_control)
    pub fn persist_inner_properties(
        &self,
        writer: &mut dyn MarkupWriter,
        component: &dyn Component,
    ) -> Result<()> {
        let component_type = component.component_type().full_name();
        log_op_start!(
            "persist_inner_properties",
            component_type = component_type.as_str()
        );
        let start = Instant::now();

        self.inner_properties_impl(writer, component)
            .map_err(|e| {
                log_op_error!(
                    "persist_inner_properties",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    component_type = component_type.as_str()
                );
                e
            })?;

        log_op_end!(
            "persist_inner_properties",
            duration_ms = start.elapsed().as_millis() as u64,
            component_type = component_type.as_str()
        );
        Ok(())
    }

    /// Inner content of a control as a string
    ///
    /// # Errors
    ///
    /// Same as [`persist_inner_properties`](Self::persist_inner_properties).
    pub fn persist_inner_properties_to_string(&self, component: &dyn Component) -> Result<String> {
        let component_type = component.component_type().full_name();
        log_op_start!(
            "persist_inner_properties_to_string",
            component_type = component_type.as_str()
        );
        let start = Instant::now();

        let result = self
            .buffered(|writer| self.inner_properties_impl(writer, component))
            .map_err(|e| {
                log_op_error!(
                    "persist_inner_properties_to_string",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    component_type = component_type.as_str()
                );
                e
            })?;

        log_op_end!(
            "persist_inner_properties_to_string",
            duration_ms = start.elapsed().as_millis() as u64,
            component_type = component_type.as_str(),
            bytes_written = result.len() as u64
        );
        Ok(result)
    }

    fn context(&self) -> PersistContext<'_> {
        PersistContext::new(self.host, &self.options)
    }

    fn inner_properties_impl(
        &self,
        writer: &mut dyn MarkupWriter,
        component: &dyn Component,
    ) -> Result<()> {
        if !component.is_control() {
            return Err(PersistError::InvalidInput {
                reason: format!(
                    "Only controls can be serialised, got {}",
                    component.component_type()
                ),
            });
        }
        let ty = component.component_type();
        let ctx = self.context().enter(&ty)?;
        persist_inner_content(writer, component, ctx)?;
        writer.flush()
    }

    fn buffered<F>(&self, persist: F) -> Result<String>
    where
        F: FnOnce(&mut dyn MarkupWriter) -> Result<()>,
    {
        let mut writer = HtmlTextWriter::with_options(Vec::new(), &self.options);
        let sink: &mut dyn MarkupWriter = &mut writer;
        persist(&mut *sink)?;
        sink.flush()?;
        String::from_utf8(writer.into_inner()).map_err(|e| PersistError::Internal {
            message: format!("persisted markup is not UTF-8: {}", e),
        })
    }
}

/// Persist a control with default options and return the markup
///
/// # Errors
///
/// Same as [`ControlPersister::persist_control`].
pub fn persist_control_to_string(control: &dyn Component, host: &dyn DesignerHost) -> Result<String> {
    ControlPersister::new(host).persist_control_to_string(control)
}

/// Persist a control through the designer host of its own site
///
/// A control that is not sited has no markup and yields an empty string.
///
/// # Errors
///
/// * `InvalidInput` - If the site exposes no designer host
/// * otherwise the same as [`ControlPersister::persist_control`]
pub fn persist_sited_control_to_string(control: &dyn Component) -> Result<String> {
    let Some(site) = control.site() else {
        return Ok(String::new());
    };
    let host = site.host().ok_or_else(|| PersistError::InvalidInput {
        reason: format!("Site of {} has no designer host", control.component_type()),
    })?;
    ControlPersister::new(host).persist_control_to_string(control)
}
