//! Compile-time and smoke coverage of the exported surface.

use trellis_tui::{
    truncate_to_width, visible_width, Breadcrumbs, BreadcrumbsTheme, Column, Component, EnvConfig,
    Focusable, InputEvent, KeyList, KeyListOptions, KeyListTheme, Row, Table, TableKeymap,
    TableOptions, TableStyles,
};

#[test]
fn widgets_are_usable_through_reexports() {
    let mut crumbs = Breadcrumbs::new(["Home", "Settings"], BreadcrumbsTheme::plain());
    assert_eq!(crumbs.render(40), vec!["Home Settings"]);

    let mut list = KeyList::new(
        vec![("Host".to_string(), "example.com".to_string())],
        KeyListTheme::plain(),
        KeyListOptions {
            separator: ":".to_string(),
            ..KeyListOptions::default()
        },
    );
    assert_eq!(list.render(40), vec!["Host: example.com"]);

    let mut table = Table::new(TableOptions {
        columns: vec![Column::fixed("Name", 10), Column::flex("Role")],
        rows: vec![Row::new(["ada", "admin"]), Row::new(["grace", "ops"])],
        styles: TableStyles::plain(),
        ..TableOptions::default()
    })
    .expect("arity matches");
    table.resize(20, 3);
    assert_eq!(table.view().len(), 3);
    assert_eq!(table.selected_row().and_then(|row| row.get(0)), Some("ada"));
}

#[test]
fn components_compose_behind_the_trait() {
    let mut table = Table::new(TableOptions {
        columns: vec![Column::flex("only")],
        rows: vec![Row::new(["x"])],
        styles: TableStyles::plain(),
        ..TableOptions::default()
    })
    .expect("arity matches");
    table.set_viewport_size(10, 4);

    let mut components: Vec<Box<dyn Component>> = vec![
        Box::new(Breadcrumbs::new(["a"], BreadcrumbsTheme::plain())),
        Box::new(table),
    ];
    for component in &mut components {
        component.handle_event(&InputEvent::key("down"));
        for line in component.render(10) {
            assert!(visible_width(&line) <= 10);
        }
        component.invalidate();
    }

    let focusables: Vec<bool> = components
        .iter_mut()
        .map(|component| component.as_focusable().is_some())
        .collect();
    assert_eq!(focusables, vec![false, true]);
}

#[test]
fn focusable_round_trips_through_trait_object() {
    let mut table = Table::new(TableOptions::default()).expect("empty table is valid");
    let focusable: &mut dyn Focusable = table.as_focusable().expect("table tracks focus");
    focusable.set_focused(true);
    assert!(focusable.is_focused());
}

#[test]
fn helpers_and_config_are_exported() {
    assert_eq!(visible_width("\x1b[1mab\x1b[0m"), 2);
    assert_eq!(truncate_to_width("abcdef", 4, "\u{2026}", false), "abc\u{2026}");

    let keymap = TableKeymap::default();
    assert!(keymap.direction_for("j").is_some());
    assert!(keymap.direction_for("enter").is_none());

    // Just exercising the constructor; values depend on the environment.
    let _ = EnvConfig::from_env();
}
