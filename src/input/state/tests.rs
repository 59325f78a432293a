use super::*;
use crate::config::{Config, ThemeTogglePolicy};
use crate::draw::{CapStyle, NamedColor, PenColor, Point};
use crate::input::{PointerSample, SketchEvent, Theme, ThemeColors, ToolAction, ToolMode, ToolState};
use std::path::PathBuf;

fn create_test_session() -> SketchSession {
    create_session_with_policy(ThemeTogglePolicy::KeepStrokes)
}

fn create_session_with_policy(policy: ThemeTogglePolicy) -> SketchSession {
    let tool = ToolState::new(
        PenColor::Named(NamedColor::Black), // pen color
        3,                                  // pen width
        Theme::Light,                       // theme
        ThemeColors::default(),             // light #FFFFFF, dark #2B2B2B
    );
    SketchSession::new(tool, policy)
}

fn press(x: f64, y: f64, t: u64) -> SketchEvent {
    SketchEvent::Press(PointerSample::new(x, y, t))
}

fn move_to(x: f64, y: f64, t: u64) -> SketchEvent {
    SketchEvent::Move(PointerSample::new(x, y, t))
}

fn release(x: f64, y: f64, t: u64) -> SketchEvent {
    SketchEvent::Release(PointerSample::new(x, y, t))
}

#[test]
fn test_press_then_move_commits_one_segment_at_fifty_px_per_sec() {
    let mut session = create_test_session();

    assert!(session.handle(press(0.0, 0.0, 0)).is_none());
    let segment = session.handle(move_to(3.0, 4.0, 100)).unwrap();

    assert_eq!(session.frame().len(), 1);
    assert_eq!(segment.from, Point::new(0.0, 0.0));
    assert_eq!(segment.to, Point::new(3.0, 4.0));
    assert_eq!(segment.width, 3);
    assert_eq!(segment.cap, CapStyle::Round);
    assert!((session.speed() - 50.0).abs() < 1e-9);
}

#[test]
fn test_segment_count_matches_moves_after_anchor() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    for i in 1..=10u64 {
        session.handle(move_to(i as f64 * 5.0, 0.0, i * 16));
    }
    assert_eq!(session.frame().len(), 10);
    assert_eq!(
        session.stroke_state(),
        StrokeState::Drawing {
            origin: Point::new(0.0, 0.0),
            segments: 10
        }
    );
}

#[test]
fn test_segments_chain_end_to_start() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(10.0, 0.0, 10));
    session.handle(move_to(10.0, 10.0, 20));

    let segments = session.frame().segments();
    assert_eq!(segments[0].to, segments[1].from);
}

#[test]
fn test_move_without_anchor_only_anchors() {
    let mut session = create_test_session();

    assert!(session.handle(move_to(5.0, 5.0, 0)).is_none());
    assert!(session.is_drawing());
    assert!(session.frame().is_empty());

    assert!(session.handle(move_to(6.0, 5.0, 10)).is_some());
    assert_eq!(session.frame().len(), 1);
}

#[test]
fn test_speed_is_zero_after_press_and_release() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    assert_eq!(session.speed(), 0.0);

    session.handle(move_to(100.0, 0.0, 50));
    assert!(session.speed() > 0.0);

    session.handle(release(100.0, 0.0, 60));
    assert_eq!(session.speed(), 0.0);

    session.handle(press(0.0, 0.0, 100));
    assert_eq!(session.speed(), 0.0);
}

#[test]
fn test_repeated_press_resets_speed() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(100.0, 0.0, 50));
    session.handle(press(0.0, 0.0, 60));
    assert_eq!(session.speed(), 0.0);
    assert!(session.preview().is_none());
}

#[test]
fn test_speed_is_never_negative() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 100));
    session.handle(move_to(10.0, 0.0, 50));
    session.handle(move_to(20.0, 0.0, 50));
    session.handle(move_to(25.0, 0.0, 40));
    assert!(session.speed() >= 0.0);
    // Segments are still committed when timing is invalid
    assert_eq!(session.frame().len(), 3);
}

#[test]
fn test_release_then_press_commits_nothing_until_next_move() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(10.0, 10.0, 10));
    session.handle(release(10.0, 10.0, 20));
    assert_eq!(session.frame().len(), 1);

    session.handle(press(200.0, 200.0, 30));
    assert_eq!(session.frame().len(), 1);

    let segment = session.handle(move_to(210.0, 200.0, 40)).unwrap();
    assert_eq!(segment.from, Point::new(200.0, 200.0));
    assert_eq!(session.frame().len(), 2);
}

#[test]
fn test_release_ends_stroke_and_clears_preview() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(10.0, 0.0, 10));
    assert!(session.preview().is_some());

    session.handle(release(10.0, 0.0, 20));
    assert!(session.preview().is_none());
    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert!(session.kinematics().last_position().is_none());
}

#[test]
fn test_preview_uses_pen_color_while_erasing() {
    let mut session = create_test_session();
    session.handle(ToolAction::SetColor(PenColor::Named(NamedColor::Red)).into());
    session.handle(ToolAction::ToggleEraser.into());

    session.handle(press(0.0, 0.0, 0));
    let segment = session.handle(move_to(10.0, 0.0, 10)).unwrap();

    let preview = session.preview().unwrap();
    assert_eq!(preview.color, NamedColor::Red.color());
    assert_eq!(segment.color, session.tool().background_color());
    assert_eq!(preview.to, Point::new(10.0, 0.0));
}

#[test]
fn test_preview_is_replaced_on_every_move() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(10.0, 0.0, 10));
    session.handle(move_to(20.0, 0.0, 20));

    let preview = session.preview().unwrap();
    assert_eq!(preview.from, Point::new(10.0, 0.0));
    assert_eq!(preview.to, Point::new(20.0, 0.0));
}

#[test]
fn test_double_toggle_eraser_restores_mode() {
    let mut session = create_test_session();
    let before = session.tool().mode();
    session.handle(ToolAction::ToggleEraser.into());
    session.handle(ToolAction::ToggleEraser.into());
    assert_eq!(session.tool().mode(), before);
}

#[test]
fn test_set_color_exits_erase_mode_and_next_segment_uses_it() {
    let mut session = create_test_session();
    session.handle(ToolAction::ToggleEraser.into());
    assert_eq!(session.tool().mode(), ToolMode::Erase);

    let red = PenColor::from_hex("#FF0000").unwrap();
    session.handle(ToolAction::SetColor(red).into());
    assert_eq!(session.tool().mode(), ToolMode::Draw);

    session.handle(press(0.0, 0.0, 0));
    let segment = session.handle(move_to(1.0, 1.0, 5)).unwrap();
    assert_eq!(segment.color, NamedColor::Red.color());
}

#[test]
fn test_eraser_in_dark_theme_paints_dark_neutral() {
    let mut session = create_test_session();
    session.handle(ToolAction::SetColor(PenColor::Named(NamedColor::Lime)).into());
    session.handle(ToolAction::ToggleTheme.into());
    session.handle(ToolAction::ToggleEraser.into());

    session.handle(press(0.0, 0.0, 0));
    let segment = session.handle(move_to(4.0, 0.0, 10)).unwrap();

    assert_eq!(segment.color.to_hex(), "#2B2B2B");
    assert_ne!(segment.color, NamedColor::Lime.color());
}

#[test]
fn test_theme_toggle_keeps_pen_color() {
    let mut session = create_test_session();
    let pen = session.tool().pen_color();
    let background = session.tool().background_color();

    session.handle(ToolAction::ToggleTheme.into());

    assert_eq!(session.tool().pen_color(), pen);
    assert_ne!(session.tool().background_color(), background);
    assert_eq!(session.tool().theme(), Theme::Dark);
}

#[test]
fn test_keep_strokes_policy_preserves_old_eraser_color() {
    let mut session = create_session_with_policy(ThemeTogglePolicy::KeepStrokes);
    session.handle(ToolAction::ToggleEraser.into());
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(5.0, 0.0, 10));
    session.handle(release(5.0, 0.0, 20));

    session.handle(ToolAction::ToggleTheme.into());

    assert_eq!(session.frame().len(), 1);
    assert_eq!(session.frame().segments()[0].color.to_hex(), "#FFFFFF");
}

#[test]
fn test_clear_canvas_policy_empties_frame_on_theme_toggle() {
    let mut session = create_session_with_policy(ThemeTogglePolicy::ClearCanvas);
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(5.0, 0.0, 10));

    session.handle(ToolAction::ToggleTheme.into());

    assert!(session.frame().is_empty());
    assert_eq!(session.tool().theme(), Theme::Dark);
}

#[test]
fn test_clear_canvas_policy_removes_preview_mid_stroke() {
    let mut session = create_session_with_policy(ThemeTogglePolicy::ClearCanvas);
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(30.0, 0.0, 10));
    assert!(session.preview().is_some());

    session.needs_redraw = false;
    session.handle(ToolAction::ToggleTheme.into());

    assert!(session.frame().is_empty());
    assert!(session.preview().is_none());
    assert!(session.needs_redraw);
}

#[test]
fn test_keep_strokes_policy_keeps_preview_on_theme_toggle() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(30.0, 0.0, 10));

    session.handle(ToolAction::ToggleTheme.into());

    assert_eq!(session.frame().len(), 1);
    assert!(session.preview().is_some());
}

#[test]
fn test_width_change_applies_mid_stroke() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    let first = session.handle(move_to(1.0, 0.0, 10)).unwrap();
    session.handle(ToolAction::SetPenWidth(12).into());
    let second = session.handle(move_to(2.0, 0.0, 20)).unwrap();

    assert_eq!(first.width, 3);
    assert_eq!(second.width, 12);
}

#[test]
fn test_clear_keeps_tool_state() {
    let mut session = create_test_session();
    session.handle(ToolAction::SetPenWidth(9).into());
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(1.0, 0.0, 10));

    session.handle(ToolAction::Clear.into());

    assert!(session.frame().is_empty());
    assert_eq!(session.tool().pen_width(), 9);
    assert!(session.needs_redraw);
}

#[test]
fn test_clear_mid_stroke_removes_preview() {
    let mut session = create_test_session();
    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(30.0, 0.0, 10));
    assert!(session.preview().is_some());

    session.handle(ToolAction::Clear.into());

    assert!(session.frame().is_empty());
    assert!(session.preview().is_none());

    // The stroke is still held, so the next move commits from the last sample
    let segment = session.handle(move_to(40.0, 0.0, 20)).unwrap();
    assert_eq!(segment.from, Point::new(30.0, 0.0));
    assert_eq!(session.frame().len(), 1);
}

#[test]
fn test_save_action_is_pending_until_taken() {
    let mut session = create_test_session();
    session.handle(ToolAction::Save(Some(PathBuf::from("/tmp/out.png"))).into());

    let request = session.take_pending_export().unwrap();
    assert_eq!(request.path, Some(PathBuf::from("/tmp/out.png")));
    assert!(session.take_pending_export().is_none());

    session.handle(ToolAction::Save(None).into());
    assert_eq!(session.take_pending_export().unwrap().path, None);
}

#[test]
fn test_status_line_reflects_state() {
    let mut session = create_test_session();
    assert_eq!(
        session.status_line(),
        "Draw Mode | Color: Black (#000000) | Width: 3 | Speed: 0.00 px/s | Pointer: 0, 0"
    );

    session.handle(press(0.0, 0.0, 0));
    session.handle(move_to(3.0, 4.0, 100));
    assert_eq!(
        session.status_line(),
        "Draw Mode | Color: Black (#000000) | Width: 3 | Speed: 50.00 px/s | Pointer: 3, 4"
    );

    session.handle(ToolAction::ToggleEraser.into());
    assert!(session.status_line().starts_with("Erase Mode"));

    session.handle(ToolAction::SetColor(PenColor::from_hex("#abcdef").unwrap()).into());
    assert!(session
        .status_line()
        .contains("Color: Custom (#ABCDEF)"));
}

#[test]
fn test_hover_tracks_pointer_without_drawing() {
    let mut session = create_test_session();
    session.handle(SketchEvent::Hover(PointerSample::new(42.0, 7.0, 0)));

    assert!(!session.is_drawing());
    assert!(session.frame().is_empty());
    assert_eq!(session.pointer(), Point::new(42.0, 7.0));
    assert!(session.status_line().ends_with("Pointer: 42, 7"));
}

#[test]
fn test_from_config_uses_configured_defaults() {
    let config = Config::from_toml_str(
        r#"
        [drawing]
        default_color = "crimson"
        default_width = 8

        [theme]
        default_theme = "dark"

        [canvas]
        on_theme_toggle = "clear-canvas"
        "#,
    )
    .unwrap();

    let session = SketchSession::from_config(&config);
    assert_eq!(
        session.tool().pen_color(),
        PenColor::Named(NamedColor::Crimson)
    );
    assert_eq!(session.tool().pen_width(), 8);
    assert_eq!(session.tool().theme(), Theme::Dark);
    assert_eq!(session.theme_policy(), ThemeTogglePolicy::ClearCanvas);
}

#[test]
fn test_stroke_segment_without_previous_point_is_none() {
    let session = create_test_session();
    assert!(stroke_segment(None, Point::new(1.0, 1.0), session.tool()).is_none());
    let segment =
        stroke_segment(Some(Point::new(0.0, 0.0)), Point::new(1.0, 1.0), session.tool()).unwrap();
    assert_eq!(segment.color, NamedColor::Black.color());
}
