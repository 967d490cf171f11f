use super::*;
use pretty_assertions::assert_eq;

fn feed_str(p: &mut Parser, s: &str) -> Vec<Command> {
    p.feed(s.chars())
}

#[test]
fn ground_prints_and_controls() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "A\nB");
    assert_eq!(cmds, vec![Command::Print('A'), Command::Control(b'\n'), Command::Print('B')]);
}

#[test]
fn del_is_dropped_silently() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "A\x7FB");
    assert_eq!(cmds, vec![Command::Print('A'), Command::Print('B')]);
}

#[test]
fn csi_with_params_and_final() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b[31m");
    assert_eq!(
        cmds,
        vec![Command::Csi {
            final_byte: 'm',
            params: vec![31],
            intermediates: String::new(),
        }]
    );
}

#[test]
fn csi_empty_params_defaults_dont_push() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b[m");
    assert_eq!(
        cmds,
        vec![Command::Csi {
            final_byte: 'm',
            params: vec![],
            intermediates: String::new(),
        }]
    );
}

#[test]
fn csi_empty_param_between_semicolons_defaults_to_zero() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b[5;;7m");
    assert_eq!(
        cmds,
        vec![Command::Csi {
            final_byte: 'm',
            params: vec![5, 0, 7],
            intermediates: String::new(),
        }]
    );
}

#[test]
fn csi_private_marker_kept_in_intermediates() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b[?25h");
    assert_eq!(
        cmds,
        vec![Command::Csi {
            final_byte: 'h',
            params: vec![25],
            intermediates: "?".to_string(),
        }]
    );
}

#[test]
fn csi_leading_semicolon_pushes_zero() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b[;5m");
    assert_eq!(
        cmds,
        vec![Command::Csi {
            final_byte: 'm',
            params: vec![0, 5],
            intermediates: String::new(),
        }]
    );
}

#[test]
fn osc_with_separator() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b]2;Hello\x07");
    assert_eq!(
        cmds,
        vec![Command::Osc {
            command: 2,
            data: "Hello".to_string(),
        }]
    );
}

#[test]
fn osc_data_retains_later_semicolons() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b]4;0;#112233\x07");
    assert_eq!(
        cmds,
        vec![Command::Osc {
            command: 4,
            data: "0;#112233".to_string(),
        }]
    );
}

#[test]
fn osc_terminated_by_esc_backslash() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b]0;Title\x1b\\");
    assert_eq!(
        cmds,
        vec![Command::Osc {
            command: 0,
            data: "Title".to_string(),
        }]
    );
    // the trailing '\' was consumed as part of the ST, state returns to Ground
    assert_eq!(p.state(), ParserState::Ground);
}

#[test]
fn osc_without_separator_uses_command_zero() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1b]just text\x07");
    assert_eq!(
        cmds,
        vec![Command::Osc {
            command: 0,
            data: "just text".to_string(),
        }]
    );
}

#[test]
fn dcs_is_parsed_and_discarded() {
    let mut p = Parser::new();
    let cmds = feed_str(&mut p, "\x1bPq#0;2;0;0;0\x07Z");
    assert_eq!(cmds, vec![Command::Print('Z')]);
}

#[test]
fn split_feed_matches_single_feed() {
    let whole = "\x1b[31mZ";
    let mut combined = Parser::new();
    let one_shot = feed_str(&mut combined, whole);

    let mut split = Parser::new();
    let mut two_part = feed_str(&mut split, "\x1b");
    two_part.extend(feed_str(&mut split, "[31mZ"));

    assert_eq!(one_shot, two_part);
}

#[test]
fn split_feed_mid_param_digits() {
    let whole = "\x1b[123m";
    let mut combined = Parser::new();
    let one_shot = feed_str(&mut combined, whole);

    let mut split = Parser::new();
    let mut parts = feed_str(&mut split, "\x1b[1");
    parts.extend(feed_str(&mut split, "2"));
    parts.extend(feed_str(&mut split, "3m"));

    assert_eq!(one_shot, parts);
}

#[test]
fn reset_clears_mid_sequence_state() {
    let mut p = Parser::new();
    let _ = feed_str(&mut p, "\x1b[31");
    assert_ne!(p.state(), ParserState::Ground);
    p.reset();
    assert_eq!(p.state(), ParserState::Ground);
    let cmds = feed_str(&mut p, "A");
    assert_eq!(cmds, vec![Command::Print('A')]);
}

#[test]
fn unknown_escape_intermediate_sequence_ends_quietly() {
    let mut p = Parser::new();
    // ESC ' ' 'F' is an intermediate-terminated escape with no CSI/OSC
    let cmds = feed_str(&mut p, "\x1b FA");
    assert_eq!(cmds, vec![Command::Print('A')]);
}
