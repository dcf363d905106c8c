mod common;

use common::{asp, asp_host, list_item, ConverterKind, TestControl, TestProp};
use tagpersist_core::{
    persist_control_to_string, Component, ComponentType, ControlPersister, HtmlTextWriter,
    PersistError, PersistOptions, PersistenceMode, PropertyDescriptor, PropertyValue, Visibility,
};

fn bound_column(field: &str) -> TestControl {
    TestControl::value_object("BoundColumn").prop(TestProp::text("DataField", field))
}

fn header_style(color: &str) -> TestControl {
    TestControl::value_object("TableItemStyle").prop(TestProp::text("BackColor", color))
}

#[test]
fn test_encoded_default_written_as_escaped_text() {
    let host = asp_host();
    let label = TestControl::new("Label").prop(
        TestProp::text("Text", "<b>hi</b>").mode(PersistenceMode::EncodedInnerDefaultProperty),
    );

    let markup = persist_control_to_string(&label, &host).unwrap();

    assert_eq!(
        markup,
        "<asp:Label runat=\"server\">&lt;b&gt;hi&lt;/b&gt;</asp:Label>\n"
    );
}

#[test]
fn test_default_collection_items_written_directly() {
    let host = asp_host();
    let list = TestControl::new("DropDownList").prop(
        TestProp::collection("Items", vec![list_item("One", "1"), list_item("Two", "2")])
            .declared(asp("ListItemCollection"))
            .mode(PersistenceMode::InnerDefaultProperty),
    );

    let markup = persist_control_to_string(&list, &host).unwrap();

    assert_eq!(
        markup,
        "<asp:DropDownList runat=\"server\">\n\
         \t<asp:ListItem Text=\"One\" Value=\"1\" />\n\
         \t<asp:ListItem Text=\"Two\" Value=\"2\" />\n\
         </asp:DropDownList>\n"
    );
}

#[test]
fn test_inner_collection_wrapped_in_property_tag() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::collection("Columns", vec![bound_column("Id"), bound_column("Name")])
            .declared(asp("DataGridColumnCollection"))
            .mode(PersistenceMode::InnerProperty),
    );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert_eq!(
        markup,
        "<asp:DataGrid runat=\"server\">\n\
         \t<asp:Columns>\n\
         \t\t<asp:BoundColumn DataField=\"Id\" />\n\
         \t\t<asp:BoundColumn DataField=\"Name\" />\n\
         \t</asp:Columns>\n\
         </asp:DataGrid>\n"
    );
}

#[test]
fn test_structured_inner_property_self_closes_with_attributes() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::structured("HeaderStyle", header_style("Red"))
            .declared(asp("TableItemStyle"))
            .mode(PersistenceMode::InnerProperty),
    );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert_eq!(
        markup,
        "<asp:DataGrid runat=\"server\">\n\
         \t<asp:HeaderStyle BackColor=\"Red\" />\n\
         </asp:DataGrid>\n"
    );
}

#[test]
fn test_inner_properties_follow_declaring_order() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid")
        .prop(TestProp::text("ID", "grid1"))
        .prop(
            TestProp::collection("Columns", vec![bound_column("Id")])
                .mode(PersistenceMode::InnerProperty),
        )
        .prop(
            TestProp::structured("HeaderStyle", header_style("Blue"))
                .mode(PersistenceMode::InnerProperty),
        );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    let columns = markup.find("<asp:Columns>").unwrap();
    let header = markup.find("<asp:HeaderStyle").unwrap();
    assert!(markup.starts_with("<asp:DataGrid ID=\"grid1\" runat=\"server\">"));
    assert!(columns < header);
}

#[test]
fn test_empty_inner_collection_writes_no_wrapper() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::collection("Columns", Vec::new()).mode(PersistenceMode::InnerProperty),
    );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert!(!markup.contains("Columns"));
    assert_eq!(markup, "<asp:DataGrid runat=\"server\">\n\n</asp:DataGrid>\n");
}

#[test]
fn test_null_inner_property_writes_empty_tag() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid")
        .prop(TestProp::null("PagerStyle").mode(PersistenceMode::InnerProperty));

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert!(markup.contains("\t<asp:PagerStyle />"));
}

#[test]
fn test_null_default_property_writes_nothing() {
    let host = asp_host();
    let list = TestControl::new("BulletedList")
        .prop(TestProp::null("Items").mode(PersistenceMode::InnerDefaultProperty));

    let markup = persist_control_to_string(&list, &host).unwrap();

    assert_eq!(markup, "<asp:BulletedList runat=\"server\">\n</asp:BulletedList>\n");
}

#[test]
fn test_default_property_ends_inner_content() {
    let host = asp_host();
    let list = TestControl::new("ListBox")
        .prop(
            TestProp::collection("Items", vec![list_item("A", "a")])
                .mode(PersistenceMode::InnerDefaultProperty),
        )
        .prop(
            TestProp::structured("ItemStyle", header_style("Gray"))
                .mode(PersistenceMode::InnerProperty),
        );

    let markup = persist_control_to_string(&list, &host).unwrap();

    assert!(markup.contains("<asp:ListItem Text=\"A\" Value=\"a\" />"));
    assert!(!markup.contains("ItemStyle"));
}

#[test]
fn test_two_default_properties_conflict() {
    let host = asp_host();
    let twin = TestControl::new("Twin")
        .prop(TestProp::text("Body", "a").mode(PersistenceMode::EncodedInnerDefaultProperty))
        .prop(
            TestProp::collection("Items", vec![list_item("A", "a")])
                .mode(PersistenceMode::InnerDefaultProperty),
        );
    let persister = ControlPersister::new(&host);
    let mut writer = HtmlTextWriter::new(Vec::new());

    let err = persister.persist_control(&mut writer, &twin).unwrap_err();

    assert_eq!(
        err,
        PersistError::MultipleDefaultInnerProperties {
            component_type: asp("Twin").full_name(),
            property: "Items".to_string(),
        }
    );
    assert_eq!(
        String::from_utf8(writer.into_inner()).unwrap(),
        "<asp:Twin runat=\"server\">"
    );
}

#[test]
fn test_default_after_inner_property_conflicts() {
    let host = asp_host();
    let grid = TestControl::new("Repeater")
        .prop(
            TestProp::structured("HeaderStyle", header_style("Red"))
                .mode(PersistenceMode::InnerProperty),
        )
        .prop(TestProp::text("Text", "body").mode(PersistenceMode::EncodedInnerDefaultProperty));

    let err = persist_control_to_string(&grid, &host).unwrap_err();

    assert!(matches!(
        err,
        PersistError::MultipleDefaultInnerProperties { ref property, .. } if property == "Text"
    ));
}

#[test]
fn test_encoded_default_without_string_form_skipped() {
    let host = asp_host();
    let label = TestControl::new("Label").prop(
        TestProp::text("Text", "opaque")
            .mode(PersistenceMode::EncodedInnerDefaultProperty)
            .converter(ConverterKind::NonString),
    );

    let markup = persist_control_to_string(&label, &host).unwrap();

    assert_eq!(markup, "<asp:Label runat=\"server\">\n</asp:Label>\n");
}

#[test]
fn test_encoded_default_conversion_failure() {
    let host = asp_host();
    let label = TestControl::new("Label").prop(
        TestProp::text("Text", "x")
            .mode(PersistenceMode::EncodedInnerDefaultProperty)
            .converter(ConverterKind::Failing),
    );

    let err = persist_control_to_string(&label, &host).unwrap_err();

    assert!(matches!(err, PersistError::Conversion { .. }));
}

#[test]
fn test_hidden_and_unconvertible_inner_properties_ignored() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid")
        .prop(
            TestProp::structured("HeaderStyle", header_style("Red"))
                .mode(PersistenceMode::InnerProperty)
                .visibility(Visibility::Hidden),
        )
        .prop(
            TestProp::structured("FooterStyle", header_style("Red"))
                .mode(PersistenceMode::InnerProperty)
                .design_time_only(),
        )
        .prop(
            TestProp::structured("PagerStyle", header_style("Red"))
                .mode(PersistenceMode::InnerProperty)
                .converter(ConverterKind::Missing),
        );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert_eq!(markup, "<asp:DataGrid runat=\"server\" />\n");
}

#[test]
fn test_inner_property_type_needs_tag_prefix() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::structured("HeaderStyle", header_style("Red"))
            .declared(ComponentType::new(common::UNREGISTERED, "Style"))
            .mode(PersistenceMode::InnerProperty),
    );

    let err = persist_control_to_string(&grid, &host).unwrap_err();

    assert!(matches!(err, PersistError::TagPrefixNotFound { .. }));
}

#[test]
fn test_inner_properties_only() {
    let host = asp_host();
    let persister = ControlPersister::new(&host);
    let grid = TestControl::new("DataGrid").prop(
        TestProp::collection("Columns", vec![bound_column("Id")])
            .mode(PersistenceMode::InnerProperty),
    );

    let inner = persister.persist_inner_properties_to_string(&grid).unwrap();

    assert_eq!(
        inner,
        "\n<asp:Columns>\n\t<asp:BoundColumn DataField=\"Id\" />\n</asp:Columns>\n"
    );
}

#[test]
fn test_inner_properties_of_children() {
    let host = asp_host();
    let persister = ControlPersister::new(&host);
    let panel = TestControl::new("Panel")
        .persisting_children()
        .child(TestControl::new("Label"));

    let inner = persister.persist_inner_properties_to_string(&panel).unwrap();

    assert_eq!(inner, "\n\t<asp:Label />\n");
}

#[test]
fn test_inner_properties_of_non_control_rejected() {
    let host = asp_host();
    let persister = ControlPersister::new(&host);

    let err = persister
        .persist_inner_properties_to_string(&header_style("Red"))
        .unwrap_err();

    assert!(matches!(err, PersistError::InvalidInput { .. }));
}

#[test]
fn test_content_property_never_becomes_inner_tag() {
    let host = asp_host();
    let font = TestControl::value_object("FontInfo").prop(TestProp::text("Bold", "true"));
    let label = TestControl::new("Label").prop(
        TestProp::structured("Font", font)
            .visibility(Visibility::Content)
            .mode(PersistenceMode::InnerProperty),
    );

    let markup = persist_control_to_string(&label, &host).unwrap();

    assert_eq!(markup, "<asp:Label Font-Bold=\"true\" runat=\"server\" />\n");
}

#[test]
fn test_read_only_inner_property_still_forces_full_tag() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::collection("Columns", Vec::new())
            .mode(PersistenceMode::InnerProperty)
            .read_only(),
    );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert_eq!(markup, "<asp:DataGrid runat=\"server\">\n\n</asp:DataGrid>\n");
}

#[test]
fn test_default_valued_inner_property_still_forces_full_tag() {
    let host = asp_host();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::collection("Columns", Vec::new())
            .mode(PersistenceMode::InnerProperty)
            .default_valued(),
    );

    let markup = persist_control_to_string(&grid, &host).unwrap();

    assert!(markup.starts_with("<asp:DataGrid runat=\"server\">"));
    assert!(markup.ends_with("</asp:DataGrid>\n"));
}

/// Control whose font refers back to the control itself
struct SelfStyled;

impl Component for SelfStyled {
    fn component_type(&self) -> ComponentType {
        asp("SelfStyled")
    }

    fn describe_properties(&self) -> Vec<PropertyDescriptor<'_>> {
        vec![PropertyDescriptor::new(
            "Font",
            asp("SelfStyled"),
            PropertyValue::Structured(self),
        )
        .visibility(Visibility::Content)]
    }

    fn is_control(&self) -> bool {
        true
    }
}

#[test]
fn test_cyclic_content_property_exceeds_depth() {
    let host = asp_host();
    let persister =
        ControlPersister::with_options(&host, PersistOptions::default().with_max_depth(4)).unwrap();

    let err = persister.persist_control_to_string(&SelfStyled).unwrap_err();

    assert_eq!(
        err,
        PersistError::DepthExceeded {
            max_depth: 4,
            component_type: asp("SelfStyled").full_name(),
        }
    );
}

#[test]
fn test_structured_inner_value_counts_toward_depth() {
    let host = asp_host();
    let persister =
        ControlPersister::with_options(&host, PersistOptions::default().with_max_depth(1)).unwrap();
    let grid = TestControl::new("DataGrid").prop(
        TestProp::structured("HeaderStyle", header_style("Red"))
            .mode(PersistenceMode::InnerProperty),
    );

    let err = persister.persist_control_to_string(&grid).unwrap_err();

    assert_eq!(
        err,
        PersistError::DepthExceeded {
            max_depth: 1,
            component_type: asp("TableItemStyle").full_name(),
        }
    );
}
