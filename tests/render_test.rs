//! Rendering tests: game state -> view -> framebuffer (no terminal needed).

use tui_blocks::core::{Board, GameState, Piece, PieceId};
use tui_blocks::engine::Controller;
use tui_blocks::term::{encode_full_into, FrameBuffer, GameView, ThemeConfig, Viewport};
use tui_blocks::types::{BlockColor, ShapeKind};

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_live_game() {
    let state = GameState::new(12345, 90);
    let ctl = Controller::new();
    let preview = ctl.preview(&state);
    assert!(preview.is_some());

    let view = GameView::default();
    let fb = view.render(&state.snapshot(), preview.as_ref(), &ThemeConfig::neon(), Viewport::new(80, 24));
    let text = screen(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("BEST"));
    assert!(text.contains("90"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn test_render_into_reuses_buffer() {
    let state = GameState::new(1, 0);
    let view = GameView::default();
    let theme = ThemeConfig::simple();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&state.snapshot(), None, &theme, Viewport::new(60, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 20));
    let first = fb.clone();

    view.render_into(&state.snapshot(), None, &theme, Viewport::new(60, 20), &mut fb);
    assert_eq!(fb, first);
}

#[test]
fn test_render_game_over() {
    let mut board = Board::new();
    for r in 0..7 {
        for c in 0..7 {
            board.fill(r, c, BlockColor::Cyan);
        }
    }
    let pieces = [Piece::new(PieceId(1), ShapeKind::Dot, BlockColor::Pink)];
    let state = GameState::from_parts(board, &pieces, 40, 40, 1);
    assert!(state.game_over());

    let ctl = Controller::new();
    assert!(ctl.preview(&state).is_none());

    let fb = GameView::default().render(&state.snapshot(), None, &ThemeConfig::neon(), Viewport::new(80, 24));
    let text = screen(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("r: restart"));
}

#[test]
fn test_full_encode_is_nonempty() {
    let state = GameState::new(8, 0);
    let fb = GameView::default().render(&state.snapshot(), None, &ThemeConfig::neon(), Viewport::new(40, 16));
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    assert!(out.len() > 40 * 16);
}

#[test]
fn test_theme_file_round_trip() {
    let path = std::env::temp_dir().join(format!("tui-blocks-theme-{}.json", std::process::id()));
    let json = r##"{
        "name": "Mono",
        "icons": { "pink": "P", "cyan": "C", "lime": "L", "orange": "O",
                   "purple": "U", "yellow": "Y", "none": " " },
        "gradients": {
            "pink": ["#ffffff", "#000000"], "cyan": ["#ffffff", "#000000"],
            "lime": ["#ffffff", "#000000"], "orange": ["#ffffff", "#000000"],
            "purple": ["#ffffff", "#000000"], "yellow": ["#ffffff", "#000000"],
            "none": ["#111111", "#111111"]
        }
    }"##;
    std::fs::write(&path, json).unwrap();
    let theme = ThemeConfig::load(&path).unwrap();
    assert_eq!(theme.name, "Mono");
    assert_eq!(theme.icon(Some(BlockColor::Orange)), 'O');
    let _ = std::fs::remove_file(&path);

    assert!(ThemeConfig::load(std::env::temp_dir().join("tui-blocks-no-such-theme.json")).is_err());
}
