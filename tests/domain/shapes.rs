//! Integration tests for shape recoloring

use streamline_domain::shapes::{
    change_color_and_make_string_of_old_colors, color_all, make_string_of_all_colors,
};
use streamline_domain::{Color, Shape};

#[test]
fn recolor_then_describe() {
    let mut shapes = vec![Shape::new(Color::Blue), Shape::new(Color::Black)];
    color_all(&mut shapes, Color::Red).unwrap();

    let mut out = String::new();
    make_string_of_all_colors(&shapes, &mut out).unwrap();
    assert_eq!(out, "[a RED shape][a RED shape]");
}

#[test]
fn old_colors_logged_while_recoloring() {
    let mut shapes = vec![
        Shape::new(Color::Blue),
        Shape::new(Color::Black),
        Shape::new(Color::Yellow),
    ];
    let mut out = String::new();
    change_color_and_make_string_of_old_colors(&mut shapes, Color::Green, &mut out).unwrap();

    assert_eq!(out, "[a BLUE shape][a BLACK shape][a YELLOW shape]");
    assert!(shapes.iter().all(|s| s.color() == Color::Green));
}

#[test]
fn red_black_yellow_turn_green() {
    let mut shapes = vec![
        Shape::new(Color::Red),
        Shape::new(Color::Black),
        Shape::new(Color::Yellow),
    ];
    let mut out = String::new();
    change_color_and_make_string_of_old_colors(&mut shapes, Color::Green, &mut out).unwrap();

    assert_eq!(out, "[a RED shape][a BLACK shape][a YELLOW shape]");
    assert_eq!(shapes, vec![Shape::new(Color::Green); 3]);
}

#[test]
fn log_appends_to_existing_content() {
    let mut shapes = vec![Shape::new(Color::Red)];
    let mut out = String::from("before:");
    change_color_and_make_string_of_old_colors(&mut shapes, Color::Blue, &mut out).unwrap();
    assert_eq!(out, "before:[a RED shape]");
}

#[test]
fn empty_sequence_is_a_no_op() {
    let mut shapes: Vec<Shape> = Vec::new();
    let mut out = String::new();
    change_color_and_make_string_of_old_colors(&mut shapes, Color::Green, &mut out).unwrap();
    assert!(out.is_empty());
}
