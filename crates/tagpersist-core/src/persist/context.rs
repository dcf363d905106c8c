use crate::errors::{PersistError, Result};
use crate::model::ComponentType;
use crate::options::PersistOptions;
use crate::services::DesignerHost;

/// Per-call state threaded through the recursion
///
/// Holds the host services, the options, and the nesting depth of the
/// component currently being persisted. Copied into each nested call.
#[derive(Clone, Copy)]
pub(crate) struct PersistContext<'h> {
    host: &'h dyn DesignerHost,
    options: &'h PersistOptions,
    depth: usize,
}

impl std::fmt::Debug for PersistContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistContext")
            .field("options", &self.options)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<'h> PersistContext<'h> {
    pub(crate) fn new(host: &'h dyn DesignerHost, options: &'h PersistOptions) -> Self {
        Self {
            host,
            options,
            depth: 0,
        }
    }

    pub(crate) fn options(&self) -> &'h PersistOptions {
        self.options
    }

    /// Context for persisting one more level of component nesting
    pub(crate) fn enter(self, ty: &ComponentType) -> Result<Self> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(PersistError::DepthExceeded {
                max_depth: self.options.max_depth,
                component_type: ty.full_name(),
            });
        }
        Ok(Self { depth, ..self })
    }

    /// Qualified tag name `prefix:local` for a type
    pub(crate) fn tag_name(&self, ty: &ComponentType, local: &str) -> Result<String> {
        let resolver =
            self.host
                .tag_prefix_resolver()
                .ok_or_else(|| PersistError::ServiceUnavailable {
                    service: "tag prefix resolver".to_string(),
                })?;
        let prefix = resolver
            .tag_prefix(ty)
            .ok_or_else(|| PersistError::TagPrefixNotFound {
                type_name: ty.full_name(),
            })?;
        Ok(format!("{}:{}", prefix, local))
    }
}
