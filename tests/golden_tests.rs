//! Golden tests for the terminal screen
//!
//! These tests feed known byte sequences, including captures shaped like
//! real curses output, and check the resulting screen state.

use ansiterm::core::{Cell, Snapshot, Style};
use ansiterm::{Error, Terminal};

/// Helper to run a golden test
fn run_golden_test(input: &[u8], rows: usize, cols: usize) -> (Terminal, Snapshot) {
    let mut term = Terminal::new(rows, cols);
    term.feed(input).expect("feed failed");
    let snapshot = term.snapshot();
    (term, snapshot)
}

/// Helper to run a golden test with one feed per chunk
fn run_golden_test_chunked(chunks: &[&[u8]], rows: usize, cols: usize) -> Terminal {
    let mut term = Terminal::new(rows, cols);
    for chunk in chunks {
        term.feed(chunk).expect("feed failed");
    }
    term
}

fn row(snapshot: &Snapshot, n: usize) -> &str {
    snapshot.lines[n].trim_end()
}

// ============================================================================
// Basic printing tests
// ============================================================================

#[test]
fn test_fresh_grid_is_blank() {
    let term = Terminal::new(25, 80);
    let cells = term.read_cells(0, 25 * 80);
    assert_eq!(cells.len(), 2000);
    assert!(cells.iter().all(|c| *c == Cell::default()));
    assert!(cells.iter().all(|c| c.glyph == ' ' && c.style == Style::DEFAULT));
}

#[test]
fn test_simple_text() {
    let (_, snapshot) = run_golden_test(b"Hello, World!", 24, 80);

    assert_eq!(snapshot.cursor.row, 0);
    assert_eq!(snapshot.cursor.col, 13);
    assert_eq!(row(&snapshot, 0), "Hello, World!");
}

#[test]
fn test_multiline_text() {
    // LF alone doesn't reset the column
    let (_, snapshot) = run_golden_test(b"Line 1\r\nLine 2\r\nLine 3", 24, 80);

    assert_eq!(row(&snapshot, 0), "Line 1");
    assert_eq!(row(&snapshot, 1), "Line 2");
    assert_eq!(row(&snapshot, 2), "Line 3");
    assert_eq!(snapshot.cursor.row, 2);
}

#[test]
fn test_linefeed_keeps_column() {
    let (_, snapshot) = run_golden_test(b"ab\ncd", 24, 80);

    assert_eq!(row(&snapshot, 0), "ab");
    assert_eq!(row(&snapshot, 1), "  cd");
}

#[test]
fn test_carriage_return() {
    let (_, snapshot) = run_golden_test(b"AAAA\rBB", 24, 80);

    assert_eq!(row(&snapshot, 0), "BBAA");
    assert_eq!(snapshot.cursor.col, 2);
}

#[test]
fn test_backspace() {
    let (_, snapshot) = run_golden_test(b"ABC\x08X", 24, 80);

    assert_eq!(row(&snapshot, 0), "ABX");
    assert_eq!(snapshot.cursor.col, 3);
}

#[test]
fn test_full_row_roundtrip() {
    let line: Vec<u8> = (0..80).map(|i| b'!' + (i % 90) as u8).collect();
    let mut input = b"\x1b[3;1H".to_vec();
    input.extend_from_slice(&line);
    let (term, _) = run_golden_test(&input, 24, 80);

    assert_eq!(term.read_text(2 * 80, 3 * 80).as_bytes(), &line[..]);
    assert_eq!(term.row_text(2).as_bytes(), &line[..]);
}

// ============================================================================
// Deferred wrapping
// ============================================================================

#[test]
fn test_line_wrap() {
    let input: Vec<u8> = (0..81).map(|i| b'A' + (i % 26) as u8).collect();
    let (term, snapshot) = run_golden_test(&input, 24, 80);

    assert_eq!((snapshot.cursor.row, snapshot.cursor.col), (1, 0));
    assert_eq!(term.read_text(80, 81), "C"); // 81st character, (80 % 26) = 2
    assert_eq!(row(&snapshot, 1), "C");
}

#[test]
fn test_wrap_only_applies_at_end_of_feed() {
    // Cursor movement relative to an overflowed column still sees the
    // raw column
    let mut input = vec![b'x'; 82];
    input.extend_from_slice(b"\x1b[5D!");
    let (term, snapshot) = run_golden_test(&input, 24, 80);

    assert_eq!(term.read_text(77, 78), "!");
    assert_eq!((snapshot.cursor.row, snapshot.cursor.col), (0, 78));
}

#[test]
fn test_wrap_across_feeds() {
    let term = run_golden_test_chunked(&[&[b'a'; 80][..], &b"b"[..]], 24, 80);

    // The first feed wrapped the cursor to (1, 0)
    assert_eq!(term.read_text(80, 81), "b");
    assert_eq!(term.cursor(), (1, 1));
}

#[test]
fn test_bottom_line_overwritten_in_place() {
    let term = run_golden_test_chunked(&[&b"\x1b[3;1Hfirst\r\n"[..], &b"second"[..]], 3, 10);

    // No scrolling: the cursor is pinned on the last row and the next
    // line overwrites it
    assert_eq!(term.row_text(1), "          ");
    assert_eq!(term.row_text(2), "second    ");
    assert_eq!(term.cursor(), (2, 6));
}

#[test]
fn test_split_point_changes_where_writes_land() {
    // In one feed the cursor is still below the grid when z is written
    let (term, _) = run_golden_test(b"\n\n\n\nz", 3, 4);
    assert_eq!(term.screen_text(), "    \n    \n    ");
    assert_eq!(term.cursor(), (2, 1));

    // Split after the line feeds, the first feed pins the cursor to the
    // last row before z arrives
    let term = run_golden_test_chunked(&[&b"\n\n\n\n"[..], &b"z"[..]], 3, 4);
    assert_eq!(term.screen_text(), "    \n    \nz   ");
    assert_eq!(term.cursor(), (2, 1));
}

#[test]
fn test_split_with_cursor_on_screen_matches_single_feed() {
    let input = b"\x1b[1;33mab\r\ncd\x1b[0m\x1b[2;1Hxy";
    let (_, whole) = run_golden_test(input, 3, 4);
    let split = run_golden_test_chunked(&[&input[..12], &input[12..]], 3, 4);

    assert_eq!(split.snapshot(), whole);
}

// ============================================================================
// SGR tests
// ============================================================================

#[test]
fn test_sgr_bold_then_reset() {
    let (term, _) = run_golden_test(b"\x1b[1;37;40mA\x1b[0mB", 24, 80);
    let cells = term.read_cells(0, 2);

    assert!(cells[0].style.bold);
    assert_eq!(cells[0].style.fg, 37);
    assert_eq!(cells[0].style.bg, 40);
    assert_eq!(cells[1].style, Style::DEFAULT);
}

#[test]
fn test_sgr_colors_and_reverse() {
    let (term, snapshot) = run_golden_test(b"\x1b[32m@\x1b[7;44md\x1b[39m.", 24, 80);
    let cells = term.read_cells(0, 3);

    assert_eq!(cells[0].style.fg, 32);
    assert!(!cells[0].style.reverse);
    assert!(cells[1].style.reverse);
    assert_eq!(cells[1].style.bg, 44);
    // 39 is not understood, the pen keeps fg 32
    assert_eq!(cells[2].style.fg, 32);
    assert!(snapshot.grid[0][1].reverse);
}

#[test]
fn test_pen_survives_feeds() {
    let term = run_golden_test_chunked(&[&b"\x1b[1m"[..], &b"x"[..]], 24, 80);
    assert!(term.read_cells(0, 1)[0].style.bold);
}

// ============================================================================
// Erase tests
// ============================================================================

#[test]
fn test_erase_whole_display() {
    let mut input = Vec::new();
    for r in 1..=24 {
        input.extend_from_slice(format!("\x1b[{};1H\x1b[7m", r).as_bytes());
        input.extend_from_slice(&[b'#'; 80]);
    }
    input.extend_from_slice(b"\x1b[2J");
    let (term, _) = run_golden_test(&input, 24, 80);

    assert!(term.read_cells(0, 24 * 80).iter().all(|c| *c == Cell::default()));
}

#[test]
fn test_erase_to_start_of_display() {
    let (_, snapshot) = run_golden_test(b"Line1\r\nLine2\r\nLine3\x1b[2;3H\x1b[1J", 24, 80);

    assert_eq!(row(&snapshot, 0), "");
    assert_eq!(row(&snapshot, 1), "  ne2");
    assert_eq!(row(&snapshot, 2), "Line3");
}

#[test]
fn test_erase_to_end_of_line() {
    let (_, snapshot) = run_golden_test(b"ABCDEFGH\x1b[1;4H\x1b[K", 24, 80);

    assert_eq!(row(&snapshot, 0), "ABC");
}

#[test]
fn test_erase_entire_first_line() {
    let (_, snapshot) = run_golden_test(b"ABCDEFGH\x1b[1;1H\x1b[2K", 24, 80);

    assert_eq!(row(&snapshot, 0), "");
}

#[test]
fn test_erase_unknown_argument() {
    let mut term = Terminal::new(24, 80);
    let err = term.feed(b"\x1b[3J").unwrap_err();
    assert!(matches!(err, Error::Escape { command: 'J', .. }));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_strict_unknown_command() {
    let mut term = Terminal::new(24, 80);
    let err = term.feed(b"\x1b[5Z").unwrap_err();
    assert_eq!(
        err,
        Error::UnknownCommand {
            final_byte: 'Z',
            params: vec![5]
        }
    );
}

#[test]
fn test_strict_state_kept_up_to_failure() {
    let mut term = Terminal::new(24, 80);
    assert!(term.feed(b"\x1b[1mab\x1b[5Zcd").is_err());

    assert_eq!(term.read_text(0, 4), "ab  ");
    assert!(term.pen().bold);
    assert_eq!(term.cursor(), (0, 2));

    // The terminal is still usable afterwards
    term.feed(b"cd").unwrap();
    assert_eq!(term.read_text(0, 4), "abcd");
}

#[test]
fn test_lenient_skips_escape_byte() {
    let mut term = Terminal::lenient(24, 80);
    term.feed(b"\x1b=ok").unwrap();

    assert_eq!(term.read_text(0, 3), "=ok");
    assert_eq!(term.cursor(), (0, 3));
}

#[test]
fn test_strict_rejects_unrecognized_escape() {
    let mut term = Terminal::new(24, 80);
    assert!(matches!(term.feed(b"\x1b=ok"), Err(Error::Parse { .. })));
}

// ============================================================================
// Realistic screens
// ============================================================================

#[test]
fn test_status_lines() {
    let input = b"\x1b[H\x1b[2J\
\x1b[1;1HHello Agent, welcome to NetHack!  You are a neutral male gnomish Wizard.\
\x1b[23;1HAgent the Evoker         St:10 Dx:14 Co:16 In:19 Wi:11 Ch:8 Neutral\
\x1b[24;1HDlvl:1 $:0 HP:12(12) Pw:7(7) AC:9 Xp:1/0 T:1\
\x1b[12;40H\x1b[1m\x1b[37m@\x1b[0m\x1b[12;40H";
    let mut term = Terminal::lenient(24, 80);
    term.feed(input).unwrap();

    assert!(term.row_text(0).starts_with("Hello Agent, welcome to NetHack!"));
    assert!(term.row_text(22).contains("St:10 Dx:14 Co:16 In:19 Wi:11 Ch:8"));
    assert!(term.row_text(23).starts_with("Dlvl:1 $:0 HP:12(12)"));

    let player = term.row_cells(11)[39];
    assert_eq!(player.glyph, '@');
    assert!(player.style.bold);
    assert_eq!(term.cursor(), (11, 39));
}

#[test]
fn test_menu_with_charset_and_modes() {
    let input = b"\x1b[?1049h\x1b(B\x1b[m\x1b[H\x1b[2J\
\x1b[7mWeapons\x1b[m\r\n a - a +1 long sword (weapon in hand)\r\n\
\x1b[7mArmor\x1b[m\r\n b - an uncursed +0 leather armor (being worn)\r\n\
\x1b[7m(end)\x1b[m \x1b)0";
    let (term, snapshot) = run_golden_test(input, 24, 80);

    assert_eq!(row(&snapshot, 0), "Weapons");
    assert!(term.row_cells(0)[0].style.reverse);
    assert_eq!(row(&snapshot, 1), " a - a +1 long sword (weapon in hand)");
    assert_eq!(row(&snapshot, 3), " b - an uncursed +0 leather armor (being worn)");
    assert!(!term.row_cells(1)[1].style.reverse);
    assert_eq!(row(&snapshot, 4), "(end)");
}

#[test]
fn test_snapshot_is_deterministic() {
    let input = b"\x1b[2J\x1b[5;5H\x1b[1;33mgold\x1b[0m\r\n\x1b[Cnext";
    let (_, a) = run_golden_test(input, 24, 80);
    let (_, b) = run_golden_test(input, 24, 80);

    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}
