use waveview::config::DemoConfig;
use waveview::ui::components::control_strip::ControlStripOutput;
use waveview::ui::screens::demo::{DemoApp, VisibleView};

fn demo_app() -> DemoApp {
    DemoApp::new(&DemoConfig::default())
}

#[test]
fn starts_on_normal_view() {
    let app = demo_app();
    assert_eq!(app.visible(), VisibleView::Normal);
    assert!(!app.rise_up().model().is_show_percent_text());
}

#[test]
fn selecting_rise_up_resets_its_level() {
    let mut app = demo_app();
    app.select(VisibleView::RiseUp);
    assert_eq!(app.visible(), VisibleView::RiseUp);
    assert_eq!(app.rise_up().model().wave_line_height(), 300.0);
    assert!(!app.normal().is_animating());
}

#[test]
fn reselecting_visible_view_is_a_no_op() {
    let mut app = demo_app();
    app.select(VisibleView::RiseUp);
    app.apply(ControlStripOutput {
        select: Some(VisibleView::RiseUp),
        toggle_percent_text: false,
    });
    assert_eq!(app.visible(), VisibleView::RiseUp);
    assert_eq!(app.rise_up().model().wave_line_height(), 300.0);

    app.select(VisibleView::Normal);
    assert_eq!(app.visible(), VisibleView::Normal);
    assert!(!app.rise_up().is_animating());
}

#[test]
fn percent_toggle_targets_rise_up_view() {
    let mut app = demo_app();
    app.apply(ControlStripOutput {
        select: None,
        toggle_percent_text: true,
    });
    assert!(app.rise_up().model().is_show_percent_text());
    assert!(!app.normal().model().is_show_percent_text());

    assert!(!app.toggle_percent_text());
    assert!(!app.rise_up().model().is_show_percent_text());
}

#[test]
fn reset_level_is_a_depth_before_layout_and_top_relative_after() {
    let mut app = demo_app();
    app.select(VisibleView::RiseUp);
    let height = DemoConfig::default().view_height;
    assert!(app.rise_up_mut().model_mut().initialize(1000.0, height));
    assert_eq!(app.rise_up().model().wave_line_height(), height - 300.0);

    app.select(VisibleView::Normal);
    app.select(VisibleView::RiseUp);
    assert_eq!(app.rise_up().model().wave_line_height(), 300.0);
}
