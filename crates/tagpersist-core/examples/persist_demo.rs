//! Persistence Demo
//!
//! Builds a small page fragment from hand-written components and persists it.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shows:
//! 1. Describing properties statically through `Component`
//! 2. Attribute, content-visibility and inner-default properties
//! 3. Event handlers bound through a component site
//! 4. Explicit child controls

use std::sync::Arc;

use tagpersist_core::logging_facility::{init, Profile};
use tagpersist_core::{
    Component, ComponentSite, ComponentType, ControlPersister, DesignerHost, EventBindings,
    EventDescriptor, HostServices, PersistenceMode, PropertyDescriptor, PropertyValue, Site,
    StaticTagPrefixResolver, Visibility,
};

const WEB: &str = "System.Web.UI.WebControls";

struct FontInfo {
    bold: bool,
    size: Option<String>,
}

impl Component for FontInfo {
    fn component_type(&self) -> ComponentType {
        ComponentType::new(WEB, "FontInfo")
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        let bold = if self.bold { "True" } else { "False" };
        vec![
            PropertyDescriptor::new(
                "Bold",
                ComponentType::new("System", "Boolean"),
                PropertyValue::text(bold),
            )
            .non_default(self.bold),
            PropertyDescriptor::new(
                "Size",
                ComponentType::new(WEB, "FontUnit"),
                PropertyValue::optional_text(self.size.as_deref()),
            )
            .non_default(self.size.is_some()),
        ]
    }
}

struct ListItem {
    text: String,
    value: String,
}

impl Component for ListItem {
    fn component_type(&self) -> ComponentType {
        ComponentType::new(WEB, "ListItem")
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        let string = ComponentType::new("System", "String");
        vec![
            PropertyDescriptor::new("Text", string, PropertyValue::text(self.text.as_str())),
            PropertyDescriptor::new("Value", string, PropertyValue::text(self.value.as_str())),
        ]
    }
}

struct DropDownList {
    id: String,
    font: FontInfo,
    items: Vec<ListItem>,
}

impl Component for DropDownList {
    fn component_type(&self) -> ComponentType {
        ComponentType::new(WEB, "DropDownList")
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        vec![
            PropertyDescriptor::new(
                "ID",
                ComponentType::new("System", "String"),
                PropertyValue::text(self.id.as_str()),
            ),
            PropertyDescriptor::new(
                "Font",
                ComponentType::new(WEB, "FontInfo"),
                PropertyValue::Structured(&self.font),
            )
            .visibility(Visibility::Content),
            PropertyDescriptor::new(
                "Items",
                ComponentType::new(WEB, "ListItemCollection"),
                PropertyValue::Collection(self.items.iter().map(|i| i as &dyn Component).collect()),
            )
            .mode(PersistenceMode::InnerDefaultProperty),
        ]
    }

    fn is_control(&self) -> bool {
        true
    }
}

struct Button {
    text: String,
    site: ComponentSite,
}

impl Component for Button {
    fn component_type(&self) -> ComponentType {
        ComponentType::new(WEB, "Button")
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        vec![PropertyDescriptor::new(
            "Text",
            ComponentType::new("System", "String"),
            PropertyValue::text(self.text.as_str()),
        )]
    }

    fn describe_events(&self) -> Vec<EventDescriptor> {
        vec![EventDescriptor::new("Click"), EventDescriptor::new("Command")]
    }

    fn is_control(&self) -> bool {
        true
    }

    fn site(&self) -> Option<&dyn Site> {
        Some(&self.site)
    }
}

struct Panel {
    children: Vec<Box<dyn Component>>,
}

impl Component for Panel {
    fn component_type(&self) -> ComponentType {
        ComponentType::new(WEB, "Panel")
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        Vec::new()
    }

    fn is_control(&self) -> bool {
        true
    }

    fn persists_children(&self) -> bool {
        true
    }

    fn children(&self) -> Vec<&dyn Component> {
        self.children.iter().map(|c| &**c).collect()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== tagpersist Demo ===\n");

    let host: Arc<dyn DesignerHost> = Arc::new(HostServices::with_resolver(
        StaticTagPrefixResolver::new().register(WEB, "asp"),
    ));
    let site = ComponentSite::new(Arc::clone(&host))
        .with_event_bindings(EventBindings::new().bind("Click", "Save_Click"));

    let page = Panel {
        children: vec![
            Box::new(DropDownList {
                id: "Country".to_string(),
                font: FontInfo {
                    bold: true,
                    size: Some("10pt".to_string()),
                },
                items: vec![
                    ListItem {
                        text: "Norway".to_string(),
                        value: "NO".to_string(),
                    },
                    ListItem {
                        text: "Peru".to_string(),
                        value: "PE".to_string(),
                    },
                ],
            }),
            Box::new(Button {
                text: "Save".to_string(),
                site,
            }),
        ],
    };

    let persister = ControlPersister::new(host.as_ref());
    let markup = persister.persist_control_to_string(&page)?;
    println!("{}", markup);

    Ok(())
}
