use pam_ui::builtin::layout;
use pam_ui::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_builtin_tree() {
    let root = load_markup(concat!(
        r#"<BoxPanel data-direction="left-to-right">"#,
        r#"<Label BoxLayout.Stretch="1" id="title">Hi &amp; bye</Label>"#,
        r#"<TabPanel><Panel data-role="a"/><Image src="x.png"/></TabPanel>"#,
        r#"</BoxPanel>"#,
    ))
    .unwrap();

    assert_eq!(
        root.outer_html(),
        concat!(
            r#"<div class="pam-Widget pam-BoxPanel" data-direction="left-to-right">"#,
            r#"<label class="pam-Widget pam-BoxPanel-child" id="title">Hi &amp; bye</label>"#,
            r#"<div class="pam-Widget pam-TabPanel pam-BoxPanel-child">"#,
            r#"<div class="pam-Widget pam-Panel pam-TabPanel-child" data-role="a"></div>"#,
            r#"<img class="pam-Widget pam-mod-hidden pam-TabPanel-child" src="x.png">"#,
            r#"</div>"#,
            r#"</div>"#,
        )
    );
    assert_eq!(layout::box_stretch(root.children()[0].widget()), 1);
}

#[test]
fn whitespace_and_comments_are_kept_on_host_nodes() {
    let root = load_markup("<Panel>\n  <!-- note -->\n  <Label>x</Label>\n</Panel>").unwrap();
    assert_eq!(root.node().inner_html(), "\n  <!-- note -->\n  \n");
    assert_eq!(
        root.outer_html(),
        "<div class=\"pam-Widget pam-Panel\">\n  <!-- note -->\n  \n<label class=\"pam-Widget\">x</label></div>"
    );
}

#[test]
fn custom_widget_registered_globally() {
    struct Banner {
        base: WidgetBase,
    }

    impl Default for Banner {
        fn default() -> Self {
            Self { base: WidgetBase::new("header").with_class("test-Banner") }
        }
    }

    impl Widget for Banner {
        fn base(&self) -> &WidgetBase { &self.base }
        fn base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
    }

    {
        let mut global = WidgetFactory::global_mut();
        global.register_widget_type::<Banner>("IntegrationBanner").unwrap();
        global
            .register_property("Integration.Title", StoredProperty::new("integration.title"))
            .unwrap();
    }

    let root = load_markup(r#"<Panel><IntegrationBanner Integration.Title="Hey"/></Panel>"#).unwrap();
    let banner = &root.children()[0];
    assert!(banner.is::<Banner>());
    let title = WidgetFactory::global()
        .get_property("Integration.Title")
        .unwrap()
        .get(banner.widget());
    assert_eq!(title.as_deref(), Some("Hey"));
}

#[test]
fn partial_tree_survives_child_failures() {
    let factory = WidgetFactory::with_defaults();
    let report = MarkupLoader::new(&factory)
        .load_with_report(concat!(
            "<SplitPanel>",
            r#"<Panel SplitLayout.Stretch="wide"/>"#,
            "<Missing><Label/></Missing>",
            "<Label>ok</Label>",
            "<Image><Label/></Image>",
            "</SplitPanel>",
        ))
        .unwrap();

    let kids: Vec<_> = report.root.children().iter().map(|c| c.node().tag().to_string()).collect();
    assert_eq!(kids, ["label", "img"]);

    let rendered: Vec<String> = report.diagnostics.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "failed to create child <Panel> of <SplitPanel>: failed to set property 'SplitLayout.Stretch': invalid value 'wide': expected a number",
            "failed to create child <Missing> of <SplitPanel>: widget 'Missing' not recognized",
            "<Image> does not accept children; skipped <Label>",
        ]
    );
    assert_eq!(report.warnings().count(), 2);
}

#[test]
fn recover_mode_still_rejects_broken_markup() {
    let factory = WidgetFactory::with_defaults();
    let config = LoaderConfig::default().with_parse_mode(ParseMode::Recover);
    let err = MarkupLoader::with_config(&factory, config)
        .load("<Panel><Label></Panel>")
        .unwrap_err();
    match err {
        LoadError::Parse(e) => assert!(e.line >= 1),
        other => panic!("expected parse error, got {other:?}"),
    }
}
