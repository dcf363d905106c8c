//! Data-driven component fixtures shared by the integration tests
//!
//! `TestControl` describes itself from plain vectors, so a test can build
//! any shape of component tree without writing a `Component` impl per case.

use std::sync::Arc;

use tagpersist_core::model::{ConvertError, NonStringConverter, TypeConverter};
use tagpersist_core::{
    Component, ComponentSite, ComponentType, DesignerHost, EventBindingService, EventDescriptor,
    HostServices, PersistenceMode, PropertyDescriptor, PropertyValue, Site,
    StaticTagPrefixResolver, Visibility,
};

#[allow(dead_code)]
pub const WEB_CONTROLS: &str = "System.Web.UI.WebControls";
#[allow(dead_code)]
pub const UNREGISTERED: &str = "Acme.Unregistered";

/// A type in the namespace registered under the `asp` prefix
#[allow(dead_code)]
pub const fn asp(name: &'static str) -> ComponentType {
    ComponentType::new(WEB_CONTROLS, name)
}

/// Host resolving the web controls namespace to `asp`
#[allow(dead_code)]
pub fn asp_host() -> HostServices {
    HostServices::with_resolver(StaticTagPrefixResolver::new().register(WEB_CONTROLS, "asp"))
}

#[allow(dead_code)]
pub fn asp_site() -> ComponentSite {
    let host: Arc<dyn DesignerHost> = Arc::new(asp_host());
    ComponentSite::new(host)
}

/// Converter that always fails
#[allow(dead_code)]
pub struct FailingConverter;

impl TypeConverter for FailingConverter {
    fn convert_to_string(&self, _value: &PropertyValue<'_>) -> Result<String, ConvertError> {
        Err(ConvertError::new("value is out of range"))
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    Stock,
    Missing,
    NonString,
    Failing,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum TestValue {
    Null,
    Text(String),
    Structured(Box<TestControl>),
    Collection(Vec<TestControl>),
}

#[derive(Debug, Clone)]
pub struct TestProp {
    pub name: String,
    pub declared_type: ComponentType,
    pub visibility: Visibility,
    pub mode: PersistenceMode,
    pub read_only: bool,
    pub design_time_only: bool,
    pub non_default: bool,
    pub converter: ConverterKind,
    pub value: TestValue,
}

#[allow(dead_code)]
impl TestProp {
    fn with_value(name: &str, value: TestValue) -> Self {
        Self {
            name: name.to_string(),
            declared_type: asp("Object"),
            visibility: Visibility::Visible,
            mode: PersistenceMode::Attribute,
            read_only: false,
            design_time_only: false,
            non_default: true,
            converter: ConverterKind::Stock,
            value,
        }
    }

    pub fn text(name: &str, value: &str) -> Self {
        Self::with_value(name, TestValue::Text(value.to_string()))
    }

    pub fn null(name: &str) -> Self {
        Self::with_value(name, TestValue::Null)
    }

    pub fn structured(name: &str, value: TestControl) -> Self {
        Self::with_value(name, TestValue::Structured(Box::new(value)))
    }

    pub fn collection(name: &str, items: Vec<TestControl>) -> Self {
        Self::with_value(name, TestValue::Collection(items))
    }

    pub fn declared(mut self, declared_type: ComponentType) -> Self {
        self.declared_type = declared_type;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn mode(mut self, mode: PersistenceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn design_time_only(mut self) -> Self {
        self.design_time_only = true;
        self
    }

    pub fn default_valued(mut self) -> Self {
        self.non_default = false;
        self
    }

    pub fn converter(mut self, converter: ConverterKind) -> Self {
        self.converter = converter;
        self
    }

    fn describe(&self) -> PropertyDescriptor<'_> {
        let value = match &self.value {
            TestValue::Null => PropertyValue::Null,
            TestValue::Text(text) => PropertyValue::text(text.as_str()),
            TestValue::Structured(component) => PropertyValue::Structured(&**component),
            TestValue::Collection(items) => PropertyValue::Collection(
                items.iter().map(|item| item as &dyn Component).collect(),
            ),
        };
        let descriptor = PropertyDescriptor::new(&self.name, self.declared_type, value)
            .visibility(self.visibility)
            .mode(self.mode)
            .read_only(self.read_only)
            .design_time_only(self.design_time_only)
            .non_default(self.non_default);
        match self.converter {
            ConverterKind::Stock => descriptor,
            ConverterKind::Missing => descriptor.without_converter(),
            ConverterKind::NonString => descriptor.converter(&NonStringConverter),
            ConverterKind::Failing => descriptor.converter(&FailingConverter),
        }
    }
}

#[derive(Clone)]
pub struct TestControl {
    pub ty: ComponentType,
    pub control: bool,
    pub persist_children: bool,
    pub props: Vec<TestProp>,
    pub events: Vec<String>,
    pub children: Vec<TestControl>,
    pub site: Option<Arc<dyn Site>>,
}

impl std::fmt::Debug for TestControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestControl")
            .field("ty", &self.ty)
            .field("control", &self.control)
            .field("persist_children", &self.persist_children)
            .field("props", &self.props)
            .field("events", &self.events)
            .field("children", &self.children)
            .field("site", &self.site.as_ref().map(|_| "<site>"))
            .finish()
    }
}

#[allow(dead_code)]
impl TestControl {
    /// A control in the `asp` namespace
    pub fn new(name: &'static str) -> Self {
        Self::of_type(asp(name))
    }

    pub fn of_type(ty: ComponentType) -> Self {
        Self {
            ty,
            control: true,
            persist_children: false,
            props: Vec::new(),
            events: Vec::new(),
            children: Vec::new(),
            site: None,
        }
    }

    /// A non-control component, such as a style or list item
    pub fn value_object(name: &'static str) -> Self {
        Self {
            control: false,
            ..Self::new(name)
        }
    }

    pub fn prop(mut self, prop: TestProp) -> Self {
        self.props.push(prop);
        self
    }

    pub fn event(mut self, name: &str) -> Self {
        self.events.push(name.to_string());
        self
    }

    pub fn persisting_children(mut self) -> Self {
        self.persist_children = true;
        self
    }

    pub fn child(mut self, child: TestControl) -> Self {
        self.children.push(child);
        self
    }

    pub fn sited(mut self, site: impl Site + 'static) -> Self {
        self.site = Some(Arc::new(site));
        self
    }
}

impl Component for TestControl {
    fn component_type(&self) -> ComponentType {
        self.ty
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        self.props.iter().map(TestProp::describe).collect()
    }

    fn describe_events(&self) -> Vec<EventDescriptor> {
        self.events.iter().map(EventDescriptor::new).collect()
    }

    fn is_control(&self) -> bool {
        self.control
    }

    fn persists_children(&self) -> bool {
        self.persist_children
    }

    fn children(&self) -> Vec<&dyn Component> {
        self.children
            .iter()
            .map(|child| child as &dyn Component)
            .collect()
    }

    fn site(&self) -> Option<&dyn Site> {
        self.site.as_deref()
    }
}

/// `<asp:ListItem>` value with text and value attributes
#[allow(dead_code)]
pub fn list_item(text: &str, value: &str) -> TestControl {
    TestControl::value_object("ListItem")
        .prop(TestProp::text("Text", text))
        .prop(TestProp::text("Value", value))
}

/// Binding service whose handler descriptors carry fixed metadata flags
///
/// Every event resolves to the handler `Save_Click`; the flags decide
/// whether the handler may be written.
#[allow(dead_code)]
#[derive(Clone)]
pub struct FlaggedBindings {
    pub visibility: Visibility,
    pub design_time_only: bool,
    pub read_only: bool,
    pub non_default: bool,
}

#[allow(dead_code)]
impl FlaggedBindings {
    pub fn writable() -> Self {
        Self {
            visibility: Visibility::Visible,
            design_time_only: false,
            read_only: false,
            non_default: true,
        }
    }
}

impl EventBindingService for FlaggedBindings {
    fn event_property<'a>(
        &'a self,
        _component: &'a dyn Component,
        event: &'a EventDescriptor,
    ) -> Option<PropertyDescriptor<'a>> {
        Some(
            PropertyDescriptor::new(
                event.name(),
                ComponentType::new("System", "String"),
                PropertyValue::text("Save_Click"),
            )
            .visibility(self.visibility)
            .design_time_only(self.design_time_only)
            .read_only(self.read_only)
            .non_default(self.non_default),
        )
    }
}

/// Site pairing the `asp` host with [`FlaggedBindings`]
#[allow(dead_code)]
pub struct FlaggedSite {
    host: HostServices,
    bindings: FlaggedBindings,
}

#[allow(dead_code)]
impl FlaggedSite {
    pub fn new(bindings: FlaggedBindings) -> Self {
        Self {
            host: asp_host(),
            bindings,
        }
    }
}

impl Site for FlaggedSite {
    fn host(&self) -> Option<&dyn DesignerHost> {
        Some(&self.host)
    }

    fn event_binding(&self) -> Option<&dyn EventBindingService> {
        Some(&self.bindings)
    }
}
